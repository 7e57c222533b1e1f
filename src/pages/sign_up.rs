//! Sign-up page with the schema-validated account form.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::logo_header::LogoHeader;
use crate::components::text_field::TextField;
use crate::form::binder::FormHandle;
use crate::validation::sign_up::SignUpValues;

/// One line describing a validated submission for the console log.
fn submit_log_line(values: &SignUpValues) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| format!("{values:?}"))
}

/// Account creation form. Submission is fire-and-forget: validated values are
/// logged and nothing is sent anywhere.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let form = FormHandle::new(SignUpValues::default());

    let username = form.field(
        "username",
        |v: &SignUpValues| v.username.as_str(),
        |v, s| v.username = s,
    );
    let name = form.field("name", |v: &SignUpValues| v.name.as_str(), |v, s| v.name = s);
    let email = form.field("email", |v: &SignUpValues| v.email.as_str(), |v, s| v.email = s);
    let password = form.field(
        "password",
        |v: &SignUpValues| v.password.as_str(),
        |v, s| v.password = s,
    );

    let on_submit = form.on_submit(|values: SignUpValues| {
        log::info!("sign-up submitted: {}", submit_log_line(&values));
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <LogoHeader title="Create new account"/>
                // Native constraint validation would otherwise intercept the
                // submit before the schema check runs.
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <TextField
                        binding=username
                        label="Username"
                        placeholder="shadcn"
                        description="This is your public display name."
                    />
                    <TextField binding=name label="Name" placeholder="Jane Doe"/>
                    <TextField
                        binding=email
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <TextField binding=password label="Password" input_type="password"/>
                    <button class="btn btn--primary auth-form__submit" type="submit">
                        "Submit"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/sign-in">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
