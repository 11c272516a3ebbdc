use dioxus::prelude::*;

use crate::components::icon::Icon;
use site::{
    ThemeState,
    content::{BRAND, EXPERIENCE_IMAGES, HIGHLIGHTS},
    icon::IconName,
    style::ExperienceStyle,
};

#[component]
pub fn Experience(theme: ThemeState) -> Element {
    let style = ExperienceStyle::resolve(theme);
    let theme_class = theme.class();

    rsx! {
        section { class: "section {theme_class} {style.root}", id: "experience",
            div { class: "container experience-grid",
                div { class: "experience-gallery",
                    div { class: "experience-photos",
                        for (url , alt) in EXPERIENCE_IMAGES {
                            img { key: "{url}", src: url, alt: alt }
                        }
                    }
                    div { class: "experience-badge {style.badge}",
                        p { class: "figure", "15+" }
                        p { class: "caption", "Years of Excellence" }
                    }
                }

                div {
                    span { class: "eyebrow {style.eyebrow}", "The {BRAND} Way" }
                    h2 { class: "section-title {style.heading}", "A Sanctuary for the Modern Soul" }
                    p { class: "experience-copy {style.body}",
                        "At Aromi, we believe that true beauty radiates from within. Our fashion-forward approach to wellness combines aesthetic excellence with deep-rooted therapeutic practices."
                    }

                    div { class: "highlights",
                        for item in HIGHLIGHTS {
                            div { key: "{item.title}", class: "highlight",
                                div { class: "bullet {style.bullet}",
                                    Icon {
                                        name: IconName::Leaf,
                                        size: 12,
                                        class: style.bullet_glyph,
                                    }
                                }
                                div {
                                    h4 { class: style.item_title, "{item.title}" }
                                    p { class: style.item_body, "{item.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
