//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in stores the session, looks up the user's role and
//! leaves for that role's landing route with a full page load, so every
//! header on the next page starts from the stored session.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::net::error::BackendError;

/// Trim the email and require both credentials. The password is sent exactly
/// as typed.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Landing route for a profile role.
#[must_use]
pub fn home_route_for_role(role: Option<&str>) -> &'static str {
    match role {
        Some("Company") => "/company-home-page",
        Some("Student") => "/student/dashboard",
        Some("Academic Advisor") => "/advisorHomePage",
        Some("Admin") => "/admin/users",
        _ => "/home",
    }
}

/// Inline message for a failed sign-in. Backend rejections show the
/// backend's own wording.
#[must_use]
pub fn sign_in_failure_message(err: &BackendError) -> String {
    match err {
        BackendError::Status { message, .. } => format!("Sign-in failed: {message}"),
        other => format!("Sign-in failed: {other}"),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::backend::ProfileRepository;

            let client = match crate::net::supabase::shared_client() {
                Ok(client) => client,
                Err(e) => {
                    info.set(format!("Sign-in unavailable: {e}"));
                    busy.set(false);
                    return;
                }
            };
            match client.sign_in_with_password(&email_value, &password_value).await {
                Ok(session) => {
                    let role = match client.profile(&session.user.id).await {
                        Ok(row) => row.and_then(|row| row.role().map(str::to_owned)),
                        Err(e) => {
                            log::warn!("role lookup failed after sign-in: {e}");
                            None
                        }
                    };
                    crate::util::browser::redirect(home_route_for_role(role.as_deref()));
                }
                Err(e) => {
                    info.set(sign_in_failure_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Career Compass"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
