//! Home landing page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Static landing view linking to the auth routes.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <img class="home-page__logo" src="/assets/images/logo.svg" alt="logo"/>
            <h1 class="home-page__title">"Photogram"</h1>
            <p class="home-page__tagline">"Share the moments that matter."</p>
            <nav class="home-page__nav">
                <A href="/sign-in">"Sign in"</A>
                <A href="/sign-up">"Create account"</A>
            </nav>
        </div>
    }
}
