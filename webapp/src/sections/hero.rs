use dioxus::prelude::*;

use site::content::HERO_IMAGE;

// the hero is photographic in both themes, so it takes no theme at all
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero", id: "about",
            div { class: "hero-backdrop",
                img { src: HERO_IMAGE, alt: "Spa background" }
                div { class: "hero-shade" }
            }

            div { class: "hero-content",
                span { class: "hero-eyebrow fade-up", "The Art of Serenity" }
                h1 { class: "hero-title fade-up delay-200",
                    "Aromi Fashion "
                    br {}
                    "& Wellness Spa"
                }
                div { class: "hero-actions fade-up delay-400",
                    button { class: "pill pill-lg bg-white text-stone-900 hover-bg-stone-100",
                        "Explore Services"
                    }
                    button { class: "pill pill-lg pill-outline", "Our Story" }
                }
            }

            div { class: "hero-cue" }
        }
    }
}
