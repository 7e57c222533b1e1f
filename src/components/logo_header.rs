//! Logo and heading block shown above the auth forms.

use leptos::prelude::*;

/// Application logo with the page heading beneath it.
#[component]
pub fn LogoHeader(title: &'static str) -> impl IntoView {
    view! {
        <header class="logo-header">
            <img class="logo-header__logo" src="/assets/images/logo.svg" alt="logo"/>
            <h2 class="logo-header__title">{title}</h2>
        </header>
    }
}
