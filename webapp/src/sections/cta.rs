use dioxus::prelude::*;

use site::{ThemeState, style::CallToActionStyle};

#[component]
pub fn CallToAction(theme: ThemeState) -> Element {
    let style = CallToActionStyle::resolve(theme);
    let theme_class = theme.class();

    rsx! {
        section { class: "cta {theme_class} {style.root}",
            div { class: "container",
                h2 { class: style.heading,
                    "\"The time to relax is when you don't have time for it.\""
                }
                button { class: "pill pill-xl {style.button}", "Reserve Your Escape" }
            }
        }
    }
}
