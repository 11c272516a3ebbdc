use constcat::concat;

mod components;
mod home;
mod palette;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use palette::PALETTE;
pub use variables::CSS_VARIABLES;

// everything the page needs, injected once by the root component
//
// the palette goes last: its color classes share specificity with the component rules and
// must win the cascade
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  line-height: 1.5;
}

button, input {
  font: inherit;
}

::selection {
  background-color: var(--stone-200);
}

.theme-dark ::selection {
  background-color: var(--stone-800);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES,
    PALETTE,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(rule: &str) -> usize {
        SITE_STYLES
            .find(rule)
            .unwrap_or_else(|| panic!("missing rule {rule:?}"))
    }

    #[test]
    fn palette_wins_over_components() {
        assert!(SITE_STYLES.ends_with(PALETTE));

        for color in [
            ".border-white-10 {",
            ".border-stone-100 {",
            ".border-stone-200 {",
            ".border-stone-800 {",
            ".border-stone-900 {",
        ] {
            for rule in [
                ".testimonial {",
                ".service-footer {",
                ".footer {",
                ".footer-legal {",
                ".mobile-link {",
                ".newsletter input {",
            ] {
                assert!(offset(color) > offset(rule), "{color} precedes {rule}");
            }
        }
    }

    #[test]
    fn bordered_rules_leave_color_to_palette() {
        for rule in [
            ".testimonial {",
            ".service-footer {",
            ".footer {",
            ".footer-legal {",
            ".mobile-link {",
            ".newsletter input {",
        ] {
            let start = offset(rule);
            let end = start + SITE_STYLES[start..].find('}').unwrap();
            let body = &SITE_STYLES[start..end];

            assert!(!body.contains("1px solid"), "{rule} resets border-color");
        }
    }

    #[test]
    fn service_icon_has_its_own_block() {
        let start = offset(".service-icon {");
        assert!(SITE_STYLES[start..].starts_with(".service-icon { margin-bottom"));
    }
}
