use crate::view::ViewId;

/// Which view is current and whether the contact panel is open.
///
/// One instance per session, owned by the shell and lent read-only to
/// anything that reflects it (nav bar highlight, contact overlay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_view: ViewId,
    contact_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_view: ViewId::Home,
            contact_open: false,
        }
    }
}

impl NavigationState {
    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn contact_open(&self) -> bool {
        self.contact_open
    }

    /// Returns the view that was current before the call. Navigating to the
    /// current view is allowed and changes nothing.
    pub fn navigate(&mut self, view: ViewId) -> ViewId {
        std::mem::replace(&mut self.current_view, view)
    }

    /// Flips the contact panel. Never touches the current view.
    pub fn toggle_contact(&mut self) -> bool {
        self.contact_open = !self.contact_open;
        self.contact_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_home_with_contact_closed() {
        let nav = NavigationState::default();
        assert_eq!(nav.current_view(), ViewId::Home);
        assert!(!nav.contact_open());
    }

    #[test]
    fn navigate_returns_previous_view() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.navigate(ViewId::Skills), ViewId::Home);
        assert_eq!(nav.navigate(ViewId::Skills), ViewId::Skills);
        assert_eq!(nav.current_view(), ViewId::Skills);
    }

    #[test]
    fn toggle_contact_leaves_view_alone() {
        let mut nav = NavigationState::default();
        assert!(nav.toggle_contact());
        assert_eq!(nav.current_view(), ViewId::Home);
        assert!(!nav.toggle_contact());
    }

    #[test]
    fn navigate_keeps_contact_open() {
        let mut nav = NavigationState::default();
        nav.toggle_contact();
        nav.navigate(ViewId::About);
        assert!(nav.contact_open());
    }
}
