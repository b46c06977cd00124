//! Header menu visibility.
//!
//! DESIGN
//! ======
//! The mobile navigation menu and the profile popup never show together:
//! opening one closes the other. Any navigation click closes both.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub navigation_open: bool,
    pub profile_open: bool,
}

impl MenuState {
    /// Flip the navigation menu and close the profile popup.
    pub fn toggle_navigation(&mut self) {
        self.navigation_open = !self.navigation_open;
        self.profile_open = false;
    }

    /// Flip the profile popup and close the navigation menu.
    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
        self.navigation_open = false;
    }

    pub fn close_profile(&mut self) {
        self.profile_open = false;
    }

    /// Reset after a navigation click.
    pub fn close_all(&mut self) {
        *self = Self::default();
    }
}
