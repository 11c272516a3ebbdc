use dioxus::prelude::*;

use site::icon::IconName;

// stroke paths on a 24x24 grid, drawn with round caps and joins
fn glyph(name: IconName) -> &'static [&'static str] {
    match name {
        IconName::ChevronRight => &["m9 18 6-6-6-6"],
        IconName::Clock => &["M22 12a10 10 0 1 1-20 0 10 10 0 1 1 20 0", "M12 6v6l4 2"],
        IconName::Droplets => &[
            "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z",
            "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97",
        ],
        IconName::Facebook => &[
            "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
        ],
        IconName::Instagram => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        IconName::Leaf => &[
            "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
            "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
        ],
        IconName::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M15 10a3 3 0 1 1-6 0 3 3 0 1 1 6 0",
        ],
        IconName::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        IconName::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        IconName::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        IconName::Sparkles => &[
            "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
            "M5 3v4",
            "M19 17v4",
            "M3 5h4",
            "M17 19h4",
        ],
        IconName::Star => &[
            "M12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2z",
        ],
        IconName::Sun => &[
            "M16 12a4 4 0 1 1-8 0 4 4 0 1 1 8 0",
            "M12 2v2",
            "M12 20v2",
            "m4.93 4.93 1.41 1.41",
            "m17.66 17.66 1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "m6.34 17.66-1.41 1.41",
            "m19.07 4.93-1.41 1.41",
        ],
        IconName::Twitter => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
        IconName::Wind => &[
            "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2",
            "M9.6 4.6A2 2 0 1 1 11 8H2",
            "M12.6 19.4A2 2 0 1 0 14 16H2",
        ],
        IconName::X => &["M18 6 6 18", "m6 6 12 12"],
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    name: IconName,
    #[props(default = 24)]
    size: u32,
    #[props(default, into)]
    class: String,
    // solid glyphs (review stars) fill with the text color
    #[props(default)]
    filled: bool,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let fill = if props.filled { "currentColor" } else { "none" };

    rsx! {
        svg {
            class: "icon {props.class}",
            "data-icon": props.name.label(),
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: fill,
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in glyph(props.name) {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_has_paths() {
        for name in [
            IconName::ChevronRight,
            IconName::Clock,
            IconName::Droplets,
            IconName::Facebook,
            IconName::Instagram,
            IconName::Leaf,
            IconName::MapPin,
            IconName::Menu,
            IconName::Moon,
            IconName::Phone,
            IconName::Sparkles,
            IconName::Star,
            IconName::Sun,
            IconName::Twitter,
            IconName::Wind,
            IconName::X,
        ] {
            let paths = glyph(name);
            assert!(!paths.is_empty(), "{} has no paths", name.label());
            assert!(paths.iter().all(|d| !d.is_empty()));
        }
    }
}
