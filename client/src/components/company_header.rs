//! Company-side header with navigation links, auth control, and profile popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header owns the page's identity view-model: it mounts the model when it
//! is created and releases it on cleanup, so session notifications stop
//! mutating the header once it leaves the tree.

#[cfg(test)]
#[path = "company_header_test.rs"]
mod company_header_test;

use leptos::prelude::*;

use crate::state::identity::Identity;
use crate::state::menu::MenuState;

/// Desktop and mobile navigation links, in display order. Labels wrap onto two lines.
pub const COMPANY_NAV_LINKS: [(&str, &str, &str); 4] = [
    ("/post-competition", "Post", "Competition"),
    ("/edit-delete-competition", "Edit/Delete", "Competition"),
    ("/post-job", "Post", "Job"),
    ("/edit-delete-job", "Edit/Delete", "Job"),
];

pub const BRAND_HREF: &str = "/company-home-page";
pub const SIGN_IN_HREF: &str = "/sign-in";
pub const PROFILE_HREF: &str = "/view-user-profile";

/// What the header shows for a given identity and menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderLayout {
    pub sign_in_link: bool,
    pub avatar_button: bool,
    pub profile_popup: bool,
    pub mobile_menu: bool,
    pub mobile_sign_out: bool,
}

#[must_use]
pub fn header_layout(identity: &Identity, menu: MenuState) -> HeaderLayout {
    let signed_in = identity.is_signed_in();
    HeaderLayout {
        sign_in_link: !signed_in,
        avatar_button: signed_in,
        profile_popup: signed_in && menu.profile_open,
        mobile_menu: menu.navigation_open,
        mobile_sign_out: signed_in,
    }
}

#[component]
pub fn CompanyHeader() -> impl IntoView {
    let identity = RwSignal::new(Identity::loading());
    let menu = RwSignal::new(MenuState::default());

    #[cfg(feature = "hydrate")]
    mount_identity(identity);

    let layout = move || header_layout(&identity.get(), menu.get());
    let close_all = move |_| menu.update(MenuState::close_all);

    let sign_out = move || {
        menu.update(MenuState::close_profile);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = match crate::net::supabase::shared_client() {
                Ok(client) => client,
                Err(e) => {
                    log::error!("sign-out unavailable: {e}");
                    return;
                }
            };
            if crate::state::identity_model::sign_out(&*client).await {
                crate::util::browser::redirect(BRAND_HREF);
            }
        });
    };

    view! {
        <header class="company-header">
            <a href=BRAND_HREF class="company-header__brand" on:click=close_all>
                "Career Compass"
            </a>

            <nav class="company-header__links">
                {COMPANY_NAV_LINKS
                    .iter()
                    .map(|(href, first, second)| {
                        view! {
                            <a href=*href class="company-header__link" on:click=close_all>
                                <span>{*first}</span>
                                <span>{*second}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <span class="company-header__spacer"></span>

            <Show when=move || layout().sign_in_link>
                <a href=SIGN_IN_HREF class="btn company-header__sign-in" on:click=close_all>
                    "Sign In"
                </a>
            </Show>

            <Show when=move || layout().avatar_button>
                <button
                    class="company-header__avatar"
                    title="Profile"
                    on:click=move |_| menu.update(MenuState::toggle_profile)
                >
                    <img src=move || identity.get().avatar_src().to_owned() alt="Avatar" />
                </button>
            </Show>

            <Show when=move || layout().profile_popup>
                <ProfileMenu
                    identity=identity
                    on_navigate=Callback::new(move |()| menu.update(MenuState::close_all))
                    on_sign_out=Callback::new(move |()| sign_out())
                />
            </Show>

            <button
                class="company-header__menu-toggle"
                title="Menu"
                on:click=move |_| menu.update(MenuState::toggle_navigation)
            >
                {move || if menu.get().navigation_open { "✕" } else { "☰" }}
            </button>

            <Show when=move || layout().mobile_menu>
                <nav class="company-header__mobile">
                    {COMPANY_NAV_LINKS
                        .iter()
                        .map(|(href, first, second)| {
                            view! {
                                <a href=*href class="company-header__mobile-link" on:click=close_all>
                                    {format!("{first} {second}")}
                                </a>
                            }
                        })
                        .collect_view()}
                    <Show
                        when=move || layout().mobile_sign_out
                        fallback=move || {
                            view! {
                                <a href=SIGN_IN_HREF class="company-header__mobile-link" on:click=close_all>
                                    "Sign In"
                                </a>
                            }
                        }
                    >
                        <button class="company-header__mobile-link" on:click=move |_| sign_out()>
                            "Sign Out"
                        </button>
                    </Show>
                </nav>
            </Show>
        </header>
    }
}

/// Popup listing the signed-in user's details.
#[component]
fn ProfileMenu(identity: RwSignal<Identity>, on_navigate: Callback<()>, on_sign_out: Callback<()>) -> impl IntoView {
    view! {
        <div class="profile-menu">
            <img class="profile-menu__avatar" src=move || identity.get().avatar_src().to_owned() alt="Avatar" />
            <div class="profile-menu__row profile-menu__username">{move || identity.get().username}</div>
            <div class="profile-menu__row">{move || identity.get().email}</div>
            <div class="profile-menu__row profile-menu__role">{move || identity.get().role}</div>
            <a href=PROFILE_HREF class="profile-menu__link" on:click=move |_| on_navigate.run(())>
                "View Full Profile"
            </a>
            <button class="btn profile-menu__sign-out" on:click=move |_| on_sign_out.run(())>
                "Sign Out"
            </button>
        </div>
    }
}

/// Bind an identity view-model to `identity` for the lifetime of the owner.
#[cfg(feature = "hydrate")]
fn mount_identity(identity: RwSignal<Identity>) {
    use crate::state::identity_model::IdentityViewModel;

    let client = match crate::net::supabase::shared_client() {
        Ok(client) => client,
        Err(e) => {
            log::error!("backend not configured: {e}");
            identity.set(Identity::guest());
            return;
        }
    };

    let model = IdentityViewModel::new(client.clone(), client, move |next| identity.set(next));
    model.mount(|task| leptos::task::spawn_local(task));

    let model = StoredValue::new_local(model);
    on_cleanup(move || {
        model.try_with_value(|model| model.release());
    });
}
