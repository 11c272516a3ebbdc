use chrono::{Datelike, Local};
use dioxus::prelude::*;
use tracing::info;

use crate::components::navigation::NavBar;
use crate::sections::{CallToAction, Experience, Footer, Hero, Services, Testimonials};
use site::{ThemeState, style::PageStyle};

// root composition
//
// the theme lives here and nowhere else; every section gets a copy of it as a prop, so a toggle
// rerenders the page top to bottom while the header keeps its own scroll and menu state
#[component]
pub fn Home() -> Element {
    let mut theme = use_signal(ThemeState::default);
    let year = use_hook(|| Local::now().year());

    let current = theme();
    let style = PageStyle::resolve(current);
    let theme_class = current.class();

    rsx! {
        div { class: "page {theme_class} {style.root}",
            NavBar {
                theme: current,
                on_toggle_theme: move |_| {
                    theme.write().toggle();
                    info!(dark = theme.peek().is_dark(), "display mode changed");
                },
            }
            main {
                Hero {}
                Services { theme: current }
                Experience { theme: current }
                CallToAction { theme: current }
                Testimonials { theme: current }
            }
            Footer { theme: current, year: year }
        }
    }
}
