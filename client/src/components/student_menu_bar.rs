//! Student sidebar navigation.

#[cfg(test)]
#[path = "student_menu_bar_test.rs"]
mod student_menu_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const STUDENT_NAV_ITEMS: [(&str, &str); 4] = [
    ("/student/dashboard", "Dashboard"),
    ("/student/appointments", "Book Appointment"),
    ("/student/my-appointments", "My Appointments"),
    ("/student/profile", "My Profile"),
];

pub const SIGN_IN_HREF: &str = "/sign-in";

/// Only an exact path match is active; `/student/profile/edit` does not
/// highlight "My Profile".
#[must_use]
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

#[component]
pub fn StudentMenuBar() -> impl IntoView {
    let pathname = use_location().pathname;

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::supabase::shared_client() {
                Ok(client) => {
                    let _ = crate::state::identity_model::sign_out(&*client).await;
                }
                Err(e) => log::error!("sign-out unavailable: {e}"),
            }
            crate::util::browser::redirect(SIGN_IN_HREF);
        });
    };

    view! {
        <aside class="student-menu">
            <div class="student-menu__title">"Career Compass"</div>
            <nav class="student-menu__items">
                {STUDENT_NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        view! {
                            <a
                                href=href
                                class="student-menu__item"
                                class:student-menu__item--active=move || pathname.with(|current| is_active(current, href))
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="btn student-menu__sign-out" on:click=on_sign_out>
                "Sign Out"
            </button>
        </aside>
    }
}
