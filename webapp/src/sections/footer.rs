use dioxus::prelude::*;

use crate::components::icon::Icon;
use site::{
    ThemeState,
    content::{BRAND, CONTACT, FOOTER_LINKS, FOUNDED, SOCIAL, copyright},
    icon::IconName,
    style::FooterStyle,
};

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    theme: ThemeState,
    year: i32,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let theme = props.theme;
    let style = FooterStyle::resolve(theme);
    let theme_class = theme.class();
    let legal = copyright(props.year);

    rsx! {
        footer { class: "footer {theme_class} {style.root}",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        div { class: "logo",
                            div { class: "logo-badge logo-badge-sm {style.logo_badge}",
                                Icon {
                                    name: IconName::Sparkles,
                                    size: 16,
                                    class: style.logo_glyph,
                                }
                            }
                            span { class: "logo-text {style.heading}", "{BRAND}" }
                        }
                        p { class: "footer-blurb {style.body}",
                            "Redefining the intersection of fashion, wellness, and tranquility since {FOUNDED}."
                        }
                        div { class: "footer-social",
                            for social in SOCIAL {
                                Icon {
                                    key: "{social.label}",
                                    name: social.icon,
                                    size: 20,
                                    class: style.social,
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: style.heading, "Quick Links" }
                        ul { class: style.body,
                            for link in FOOTER_LINKS {
                                li { key: "{link.label}",
                                    a { class: style.link, href: link.href, "{link.label}" }
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: style.heading, "Contact" }
                        ul { class: style.body,
                            for line in CONTACT {
                                li { key: "{line.text}", class: "contact-line",
                                    Icon { name: line.icon, size: 16 }
                                    "{line.text}"
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: style.heading, "Newsletter" }
                        p { class: "footer-blurb {style.body}", "Join our circle for exclusive offers." }
                        div { class: "newsletter",
                            input {
                                r#type: "email",
                                placeholder: "Email address",
                                class: style.input,
                            }
                            button { class: style.join, "Join" }
                        }
                    }
                }

                div { class: "footer-legal {style.divider}", "{legal}" }
            }
        }
    }
}
