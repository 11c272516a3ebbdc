use dioxus::prelude::*;

use crate::components::icon::Icon;
use site::{ThemeState, content::SERVICES, icon::IconName, style::ServicesStyle};

#[component]
pub fn Services(theme: ThemeState) -> Element {
    let style = ServicesStyle::resolve(theme);
    let theme_class = theme.class();

    rsx! {
        section { class: "section {theme_class} {style.root}", id: "services",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title {style.heading}", "Curated Treatments" }
                    p { class: "section-lede {style.body}",
                        "Experience the perfect harmony of traditional healing and modern luxury."
                    }
                }

                div { class: "service-grid",
                    for service in SERVICES {
                        div { key: "{service.title}", class: "service-card group {style.card}",
                            div { class: "service-image",
                                img { src: service.image_url, alt: service.title }
                            }
                            div { class: "service-body",
                                div { class: "service-icon {style.icon}",
                                    Icon { name: service.icon }
                                }
                                h3 { class: style.heading, "{service.title}" }
                                p { class: style.body, "{service.description}" }
                                div { class: "service-footer {style.divider}",
                                    span { class: style.heading, "{service.price_label}" }
                                    button { class: "service-book {style.book}",
                                        "Book"
                                        Icon { name: IconName::ChevronRight, size: 16 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
