//! Root application component wiring URL routes to page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route table is static: no guards, no data loading. Which page mounts
//! is decided entirely by the path.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::home::HomePage;
use crate::pages::sign_in::SignInPage;
use crate::pages::sign_up::SignUpPage;

/// Application shell: head metadata plus the three-route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Photogram"/>
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="app-shell__missing">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/sign-in") view=SignInPage/>
                    <Route path=path!("/sign-up") view=SignUpPage/>
                </Routes>
            </main>
        </Router>
    }
}
