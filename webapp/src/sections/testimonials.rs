use dioxus::prelude::*;

use crate::components::icon::Icon;
use site::{
    ThemeState,
    content::{REVIEW_STARS, TESTIMONIALS},
    icon::IconName,
    style::TestimonialsStyle,
};

#[component]
pub fn Testimonials(theme: ThemeState) -> Element {
    let style = TestimonialsStyle::resolve(theme);
    let theme_class = theme.class();

    rsx! {
        section { class: "section {theme_class} {style.root}", id: "reviews",
            div { class: "container",
                div { class: "section-header",
                    div { class: "stars",
                        for i in 0..REVIEW_STARS {
                            Icon {
                                key: "{i}",
                                name: IconName::Star,
                                size: 16,
                                filled: true,
                            }
                        }
                    }
                    h2 { class: "section-title", "Voices of Serenity" }
                }

                div { class: "testimonial-grid",
                    for testimonial in TESTIMONIALS {
                        div { key: "{testimonial.name}", class: "testimonial {style.card}",
                            p { class: "quote", "\"{testimonial.quote}\"" }
                            div {
                                p { class: "name", "{testimonial.name}" }
                                p { class: "role", "{testimonial.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
