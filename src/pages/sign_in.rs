//! Sign-in page with the schema-validated credentials form.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::logo_header::LogoHeader;
use crate::components::text_field::TextField;
use crate::form::binder::FormHandle;
use crate::validation::sign_in::SignInValues;

/// One line describing a validated submission for the console log.
fn submit_log_line(values: &SignInValues) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| format!("{values:?}"))
}

/// Credentials form. Like sign-up, submission only logs the validated values;
/// there is no session to establish.
#[component]
pub fn SignInPage() -> impl IntoView {
    let form = FormHandle::new(SignInValues::default());

    let email = form.field("email", |v: &SignInValues| v.email.as_str(), |v, s| v.email = s);
    let password = form.field(
        "password",
        |v: &SignInValues| v.password.as_str(),
        |v, s| v.password = s,
    );

    let on_submit = form.on_submit(|values: SignInValues| {
        log::info!("sign-in submitted: {}", submit_log_line(&values));
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <LogoHeader title="Sign in to your account"/>
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <TextField
                        binding=email
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <TextField binding=password label="Password" input_type="password"/>
                    <button class="btn btn--primary auth-form__submit" type="submit">
                        "Sign in"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href="/sign-up">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
