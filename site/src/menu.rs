use tracing::trace;

// mobile navigation overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.set(true);
    }

    pub fn close(&mut self) {
        self.set(false);
    }

    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    // a link jumps to an anchor on the same page, so the overlay has to get out of the way
    pub fn follow_link(&mut self) {
        self.close();
    }

    fn set(&mut self, open: bool) {
        trace!(open, "mobile menu");
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn open_close_toggle() {
        let mut menu = MenuState::default();

        menu.open();
        assert!(menu.is_open());

        menu.open();
        assert!(menu.is_open());

        menu.toggle_open();
        assert!(!menu.is_open());

        menu.toggle_open();
        assert!(menu.is_open());

        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_agrees_with_open_and_close() {
        let mut toggled = MenuState::default();
        let mut opened = MenuState::default();

        toggled.toggle_open();
        opened.open();
        assert_eq!(toggled, opened);

        toggled.toggle_open();
        opened.close();
        assert_eq!(toggled, opened);
        assert!(!toggled.is_open());
    }

    #[test]
    fn link_always_closes() {
        let mut open = MenuState::default();
        open.open();
        open.follow_link();
        assert!(!open.is_open());

        let mut closed = MenuState::default();
        closed.follow_link();
        assert!(!closed.is_open());
    }
}
