//! Full-page browser navigation.

/// Send the browser to `path`, reloading the app there.
///
/// Used after auth transitions so every mounted component starts from the new
/// session. No-op outside the browser.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("redirect to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
