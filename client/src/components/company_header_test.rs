use super::*;

fn signed_in() -> Identity {
    Identity {
        id: Some("u1".to_owned()),
        username: "acme".to_owned(),
        email: "hr@acme.io".to_owned(),
        role: "Company".to_owned(),
        avatar_url: "https://cdn/a.png".to_owned(),
    }
}

#[test]
fn guest_sees_sign_in_link_only() {
    let layout = header_layout(&Identity::guest(), MenuState::default());
    assert!(layout.sign_in_link);
    assert!(!layout.avatar_button);
    assert!(!layout.profile_popup);
    assert!(!layout.mobile_sign_out);
}

#[test]
fn loading_placeholder_is_treated_as_signed_out() {
    let layout = header_layout(&Identity::loading(), MenuState::default());
    assert!(layout.sign_in_link);
    assert!(!layout.avatar_button);
}

#[test]
fn signed_in_user_sees_avatar_and_popup_when_open() {
    let closed = header_layout(&signed_in(), MenuState::default());
    assert!(closed.avatar_button);
    assert!(!closed.sign_in_link);
    assert!(!closed.profile_popup);

    let open = header_layout(&signed_in(), MenuState { navigation_open: false, profile_open: true });
    assert!(open.profile_popup);
}

#[test]
fn popup_is_hidden_for_guest_even_if_flag_is_set() {
    let layout = header_layout(&Identity::guest(), MenuState { navigation_open: false, profile_open: true });
    assert!(!layout.profile_popup);
}

#[test]
fn mobile_menu_shows_sign_out_when_signed_in() {
    let menu = MenuState { navigation_open: true, profile_open: false };
    let layout = header_layout(&signed_in(), menu);
    assert!(layout.mobile_menu);
    assert!(layout.mobile_sign_out);

    let guest = header_layout(&Identity::guest(), menu);
    assert!(guest.mobile_menu);
    assert!(!guest.mobile_sign_out);
}

#[test]
fn nav_links_cover_company_routes() {
    let hrefs: Vec<&str> = COMPANY_NAV_LINKS.iter().map(|(href, _, _)| *href).collect();
    assert_eq!(
        hrefs,
        ["/post-competition", "/edit-delete-competition", "/post-job", "/edit-delete-job"]
    );
}
