use crate::{menu::MenuState, scroll::ScrollState, theme::ThemeState};

// background treatment of the fixed header
//
// scrolling and dark mode both push the header into its "solid" look; only the untouched light
// page at the very top shows the transparent overlay on top of the hero image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTreatment {
    // transparent, white text
    Transparent,
    // solid dark, themed text
    SolidDark,
    // translucent light, dark text
    TranslucentLight,
    // translucent dark, themed text
    TranslucentDark,
}

impl NavTreatment {
    pub fn resolve(scroll: ScrollState, theme: ThemeState) -> Self {
        match (scroll.is_scrolled(), theme.is_dark()) {
            (false, false) => NavTreatment::Transparent,
            (false, true) => NavTreatment::SolidDark,
            (true, false) => NavTreatment::TranslucentLight,
            (true, true) => NavTreatment::TranslucentDark,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavTreatment::Transparent => "nav-transparent",
            NavTreatment::SolidDark => "nav-solid-dark",
            NavTreatment::TranslucentLight => "nav-translucent-light",
            NavTreatment::TranslucentDark => "nav-translucent-dark",
        }
    }

    // anything but the hero overlay uses themed text instead of plain white
    pub fn is_solid(&self) -> bool {
        *self != NavTreatment::Transparent
    }
}

// every class the navigation bar needs, resolved in one place
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavStyle {
    pub treatment: NavTreatment,
    pub bar: &'static str,
    pub logo_badge: &'static str,
    pub logo_glyph: &'static str,
    pub brand: &'static str,
    pub link: &'static str,
    pub theme_toggle: &'static str,
    pub book: &'static str,
    pub mobile_theme_toggle: &'static str,
    pub menu_icon: &'static str,
    pub mobile_panel: &'static str,
    pub mobile_link: &'static str,
    pub mobile_book: &'static str,
}

impl NavStyle {
    pub fn resolve(scroll: ScrollState, theme: ThemeState) -> Self {
        let treatment = NavTreatment::resolve(scroll, theme);

        // solid look: themed by the dark flag; overlay look: fixed white-on-image
        let solid = |light: &'static str, dark: &'static str, overlay: &'static str| {
            if treatment.is_solid() {
                theme.pick(light, dark)
            } else {
                overlay
            }
        };

        NavStyle {
            treatment,
            bar: treatment.class(),
            logo_badge: theme.pick("bg-stone-800", "bg-stone-100"),
            logo_glyph: theme.pick("text-stone-100", "text-stone-900"),
            brand: solid("text-stone-900", "text-white", "text-white"),
            link: solid("text-stone-800", "text-stone-300", "text-white"),
            theme_toggle: solid(
                "text-stone-800 hover-bg-stone-100",
                "text-yellow hover-bg-stone-800",
                "text-white hover-bg-white-10",
            ),
            book: solid(
                "bg-stone-900 text-white hover-bg-stone-700",
                "bg-white text-stone-900 hover-bg-stone-200",
                "bg-white text-stone-900 hover-bg-stone-100",
            ),
            mobile_theme_toggle: solid("text-stone-900", "text-yellow", "text-white"),
            menu_icon: solid("text-stone-900", "text-white", "text-white"),
            mobile_panel: theme.pick("bg-white", "bg-stone-900 border-b border-stone-800"),
            mobile_link: theme.pick(
                "text-stone-800 border-stone-100",
                "text-white border-stone-800",
            ),
            mobile_book: theme.pick("bg-stone-900 text-white", "bg-white text-stone-900"),
        }
    }
}

// composite view state of the header, as seen by the navigation component
//
// the theme is only ever copied in from the root; scroll and menu are local to the header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub theme: ThemeState,
    pub scroll: ScrollState,
    pub menu: MenuState,
}

impl NavState {
    pub fn style(&self) -> NavStyle {
        NavStyle::resolve(self.scroll, self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(scrolled: bool, dark: bool) -> (ScrollState, ThemeState) {
        let scroll = ScrollState::from_offset(if scrolled { 120.0 } else { 0.0 });
        let theme = if dark { ThemeState::dark() } else { ThemeState::light() };
        (scroll, theme)
    }

    #[test]
    fn treatment_table() {
        let table = [
            (false, false, NavTreatment::Transparent),
            (false, true, NavTreatment::SolidDark),
            (true, false, NavTreatment::TranslucentLight),
            (true, true, NavTreatment::TranslucentDark),
        ];

        for (scrolled, dark, expected) in table {
            let (scroll, theme) = state(scrolled, dark);
            assert_eq!(NavTreatment::resolve(scroll, theme), expected, "{scrolled} {dark}");
        }
    }

    #[test]
    fn resolution_is_pure() {
        for scrolled in [false, true] {
            for dark in [false, true] {
                let (scroll, theme) = state(scrolled, dark);
                assert_eq!(NavStyle::resolve(scroll, theme), NavStyle::resolve(scroll, theme));
            }
        }
    }

    #[test]
    fn initial_load_is_transparent() {
        let style = NavState::default().style();

        assert_eq!(style.treatment, NavTreatment::Transparent);
        assert_eq!(style.bar, "nav-transparent");
        assert_eq!(style.brand, "text-white");
        assert_eq!(style.link, "text-white");
        assert_eq!(style.menu_icon, "text-white");
    }

    #[test]
    fn dark_at_top_uses_themed_text() {
        let (scroll, theme) = state(false, true);
        let style = NavStyle::resolve(scroll, theme);

        assert_eq!(style.bar, "nav-solid-dark");
        assert_eq!(style.brand, "text-white");
        assert_eq!(style.link, "text-stone-300");
        assert_eq!(style.theme_toggle, "text-yellow hover-bg-stone-800");
    }

    #[test]
    fn scrolled_light_uses_dark_text() {
        let (scroll, theme) = state(true, false);
        let style = NavStyle::resolve(scroll, theme);

        assert_eq!(style.bar, "nav-translucent-light");
        assert_eq!(style.brand, "text-stone-900");
        assert_eq!(style.link, "text-stone-800");
        assert_eq!(style.book, "bg-stone-900 text-white hover-bg-stone-700");
    }

    #[test]
    fn scroll_then_dark_then_back_to_top() {
        let mut nav = NavState::default();

        nav.scroll = ScrollState::from_offset(80.0);
        assert_eq!(nav.style().treatment, NavTreatment::TranslucentLight);

        nav.theme.toggle();
        assert_eq!(nav.style().treatment, NavTreatment::TranslucentDark);

        nav.scroll = ScrollState::from_offset(12.0);
        assert!(!nav.scroll.is_scrolled());
        assert!(nav.theme.is_dark());
        assert_eq!(nav.style().treatment, NavTreatment::SolidDark);
    }

    #[test]
    fn theme_toggle_leaves_scroll_and_menu() {
        let mut nav = NavState::default();
        nav.scroll = ScrollState::from_offset(200.0);
        nav.menu.open();

        nav.theme.toggle();

        assert!(nav.theme.is_dark());
        assert!(nav.scroll.is_scrolled());
        assert!(nav.menu.is_open());
    }
}
