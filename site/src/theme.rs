use tracing::debug;

// light/dark display mode
//
// there is exactly one of these per page, owned by the root component and handed down to every
// section as a plain value.  nothing persists it, so a reload always starts in light mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    pub fn light() -> Self {
        ThemeState { dark: false }
    }

    pub fn dark() -> Self {
        ThemeState { dark: true }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;

        debug!(dark = self.dark, "theme toggled");
    }

    // pick between the light and dark flavor of a style
    pub fn pick<T>(&self, light: T, dark: T) -> T {
        if self.dark { dark } else { light }
    }

    // marker class placed on section roots so the stylesheet can key transitions off it
    pub fn class(&self) -> &'static str {
        self.pick("theme-light", "theme-dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert!(!ThemeState::default().is_dark());
        assert_eq!(ThemeState::default(), ThemeState::light());
    }

    #[test]
    fn toggle_parity() {
        for initial in [ThemeState::light(), ThemeState::dark()] {
            let mut theme = initial;

            for n in 1..=9 {
                theme.toggle();
                assert_eq!(theme.is_dark(), initial.is_dark() ^ (n % 2 == 1), "after {n} toggles");
            }
        }
    }

    #[test]
    fn pick_follows_flag() {
        assert_eq!(ThemeState::light().pick(1, 2), 1);
        assert_eq!(ThemeState::dark().pick(1, 2), 2);
        assert_eq!(ThemeState::dark().class(), "theme-dark");
    }
}
