use crate::theme::ThemeState;

// per-section style descriptors
//
// each content section gets exactly one resolve() taking the theme, so the light/dark choice for
// a given element lives in one spot instead of being repeated at every call site.  the values
// are class names from the webapp stylesheet (see webapp/src/common/style/palette.rs)

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageStyle {
    pub root: &'static str,
}

impl PageStyle {
    pub fn resolve(theme: ThemeState) -> Self {
        PageStyle {
            root: theme.pick("bg-white text-stone-900", "bg-stone-950 text-white"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServicesStyle {
    pub root: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub card: &'static str,
    pub icon: &'static str,
    pub divider: &'static str,
    pub book: &'static str,
}

impl ServicesStyle {
    pub fn resolve(theme: ThemeState) -> Self {
        ServicesStyle {
            root: theme.pick("bg-stone-50", "bg-stone-950"),
            heading: theme.pick("text-stone-900", "text-white"),
            body: theme.pick("text-stone-500", "text-stone-400"),
            card: theme.pick("bg-white", "bg-stone-900"),
            icon: theme.pick("text-stone-400", "text-stone-500"),
            divider: theme.pick("border-stone-100", "border-stone-800"),
            book: theme.pick(
                "text-stone-400 group-hover-text-stone-900",
                "text-stone-500 group-hover-text-white",
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceStyle {
    pub root: &'static str,
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub badge: &'static str,
    pub bullet: &'static str,
    pub bullet_glyph: &'static str,
    pub item_title: &'static str,
    pub item_body: &'static str,
}

impl ExperienceStyle {
    pub fn resolve(theme: ThemeState) -> Self {
        ExperienceStyle {
            root: theme.pick("bg-white", "bg-stone-900"),
            eyebrow: theme.pick("text-stone-400", "text-stone-500"),
            heading: theme.pick("text-stone-900", "text-white"),
            body: theme.pick("text-stone-600", "text-stone-400"),
            badge: theme.pick("bg-stone-900 text-white", "bg-white text-stone-900"),
            bullet: theme.pick("bg-stone-100", "bg-stone-800"),
            bullet_glyph: theme.pick("text-stone-600", "text-stone-400"),
            item_title: theme.pick("text-stone-900", "text-white"),
            item_body: "text-stone-500",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToActionStyle {
    pub root: &'static str,
    pub heading: &'static str,
    pub button: &'static str,
}

impl CallToActionStyle {
    pub fn resolve(theme: ThemeState) -> Self {
        CallToActionStyle {
            root: theme.pick("bg-stone-100", "bg-stone-900"),
            heading: theme.pick("text-stone-900", "text-white"),
            button: theme.pick(
                "bg-stone-900 text-white hover-bg-stone-800",
                "bg-white text-stone-900 hover-bg-stone-200",
            ),
        }
    }
}

// testimonials sit on a dark band in both modes, dark mode only deepens it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialsStyle {
    pub root: &'static str,
    pub card: &'static str,
}

impl TestimonialsStyle {
    pub fn resolve(theme: ThemeState) -> Self {
        TestimonialsStyle {
            root: theme.pick("bg-stone-900 text-white", "bg-stone-950 text-white"),
            card: theme.pick(
                "border-white-10 hover-border-white-30",
                "border-stone-800 hover-border-stone-700",
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterStyle {
    pub root: &'static str,
    pub logo_badge: &'static str,
    pub logo_glyph: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub link: &'static str,
    pub social: &'static str,
    pub input: &'static str,
    pub join: &'static str,
    pub divider: &'static str,
}

impl FooterStyle {
    pub fn resolve(theme: ThemeState) -> Self {
        FooterStyle {
            root: theme.pick("bg-stone-50 border-stone-200", "bg-stone-950 border-stone-900"),
            logo_badge: theme.pick("bg-stone-800", "bg-white"),
            logo_glyph: theme.pick("text-stone-100", "text-stone-900"),
            heading: theme.pick("text-stone-900", "text-white"),
            body: "text-stone-500",
            link: theme.pick("hover-text-stone-900", "hover-text-white"),
            social: theme.pick(
                "text-stone-400 hover-text-stone-900",
                "text-stone-600 hover-text-white",
            ),
            input: theme.pick(
                "bg-white border-stone-200 focus-border-stone-400",
                "bg-stone-900 border-stone-800 text-white focus-border-stone-600",
            ),
            join: theme.pick("bg-stone-900 text-white", "bg-white text-stone-900"),
            divider: theme.pick("border-stone-200", "border-stone-900"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_theme() {
        let light = ThemeState::light();
        let dark = ThemeState::dark();

        assert_eq!(ServicesStyle::resolve(light).root, "bg-stone-50");
        assert_eq!(ServicesStyle::resolve(dark).root, "bg-stone-950");
        assert_eq!(ExperienceStyle::resolve(dark).heading, "text-white");
        assert_eq!(CallToActionStyle::resolve(light).root, "bg-stone-100");
        assert_eq!(FooterStyle::resolve(dark).join, "bg-white text-stone-900");
        assert_eq!(PageStyle::resolve(dark).root, "bg-stone-950 text-white");
    }

    #[test]
    fn every_section_changes_with_theme() {
        let light = ThemeState::light();
        let dark = ThemeState::dark();

        assert_ne!(PageStyle::resolve(light), PageStyle::resolve(dark));
        assert_ne!(ServicesStyle::resolve(light), ServicesStyle::resolve(dark));
        assert_ne!(ExperienceStyle::resolve(light), ExperienceStyle::resolve(dark));
        assert_ne!(CallToActionStyle::resolve(light), CallToActionStyle::resolve(dark));
        assert_ne!(TestimonialsStyle::resolve(light), TestimonialsStyle::resolve(dark));
        assert_ne!(FooterStyle::resolve(light), FooterStyle::resolve(dark));
    }

    #[test]
    fn testimonials_stay_on_dark_band() {
        for theme in [ThemeState::light(), ThemeState::dark()] {
            assert!(TestimonialsStyle::resolve(theme).root.contains("text-white"));
        }
    }
}
