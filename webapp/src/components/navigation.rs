use dioxus::prelude::*;

use crate::components::{icon::Icon, scroll::use_scroll_state};
use site::{
    MenuState, NavState, NavStyle, ThemeState,
    content::{BRAND, NAV_LINKS},
    icon::IconName,
};

#[derive(Clone, PartialEq, Props)]
struct ThemeToggleProps {
    theme: ThemeState,
    class: &'static str,
    on_toggle: EventHandler<()>,
}

#[component]
fn ThemeToggle(props: ThemeToggleProps) -> Element {
    // the button shows where you would go, not where you are
    let icon = props.theme.pick(IconName::Moon, IconName::Sun);
    let label = props.theme.pick("Switch to dark mode", "Switch to light mode");
    let class = props.class;
    let on_toggle = props.on_toggle;

    rsx! {
        button {
            class: "nav-icon-button {class}",
            aria_label: label,
            onclick: move |_| on_toggle.call(()),
            Icon { name: icon, size: 20 }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MobilePanelProps {
    style: NavStyle,
    menu: Signal<MenuState>,
}

#[component]
fn MobilePanel(props: MobilePanelProps) -> Element {
    let style = props.style;
    let mut menu = props.menu;

    rsx! {
        div { class: "mobile-panel {style.mobile_panel}",
            for link in NAV_LINKS {
                a {
                    key: "{link.label}",
                    class: "mobile-link {style.mobile_link}",
                    href: link.href(),
                    onclick: move |_| menu.write().follow_link(),
                    "{link.label}"
                }
            }
            button { class: "mobile-book {style.mobile_book}", "Book Appointment" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    theme: ThemeState,
    on_toggle_theme: EventHandler<()>,
}

// fixed header
//
// the theme comes in from the root; scroll and menu state belong to the header alone
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let scroll = use_scroll_state();
    let mut menu = use_signal(MenuState::default);

    let state = NavState {
        theme: props.theme,
        scroll: scroll(),
        menu: menu(),
    };
    let style = state.style();

    let on_toggle_theme = props.on_toggle_theme;

    rsx! {
        nav { class: "nav-bar {style.bar}",
            div { class: "container nav-inner",
                a { class: "logo", href: "#",
                    div { class: "logo-badge {style.logo_badge}",
                        Icon {
                            name: IconName::Sparkles,
                            size: 20,
                            class: style.logo_glyph,
                        }
                    }
                    span { class: "logo-text {style.brand}", "{BRAND}" }
                }

                div { class: "nav-desktop",
                    for link in NAV_LINKS {
                        a {
                            key: "{link.label}",
                            class: "nav-link {style.link}",
                            href: link.href(),
                            "{link.label}"
                        }
                    }
                    ThemeToggle {
                        theme: state.theme,
                        class: style.theme_toggle,
                        on_toggle: on_toggle_theme,
                    }
                    button { class: "pill pill-sm {style.book}", "Book Now" }
                }

                div { class: "nav-mobile",
                    ThemeToggle {
                        theme: state.theme,
                        class: style.mobile_theme_toggle,
                        on_toggle: on_toggle_theme,
                    }
                    button {
                        aria_label: if state.menu.is_open() { "Close menu" } else { "Open menu" },
                        onclick: move |_| menu.write().toggle_open(),
                        if state.menu.is_open() {
                            Icon { name: IconName::X, class: style.menu_icon }
                        } else {
                            Icon { name: IconName::Menu, class: style.menu_icon }
                        }
                    }
                }
            }

            if state.menu.is_open() {
                MobilePanel { style: style.clone(), menu: menu }
            }
        }
    }
}
