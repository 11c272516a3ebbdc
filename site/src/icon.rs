// named glyphs the page asks for
//
// the webapp owns the actual vector data, content tables only refer to icons by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    ChevronRight,
    Clock,
    Droplets,
    Facebook,
    Instagram,
    Leaf,
    MapPin,
    Menu,
    Moon,
    Phone,
    Sparkles,
    Star,
    Sun,
    Twitter,
    Wind,
    X,
}

impl IconName {
    pub fn label(&self) -> &'static str {
        match self {
            IconName::ChevronRight => "chevron-right",
            IconName::Clock => "clock",
            IconName::Droplets => "droplets",
            IconName::Facebook => "facebook",
            IconName::Instagram => "instagram",
            IconName::Leaf => "leaf",
            IconName::MapPin => "map-pin",
            IconName::Menu => "menu",
            IconName::Moon => "moon",
            IconName::Phone => "phone",
            IconName::Sparkles => "sparkles",
            IconName::Star => "star",
            IconName::Sun => "sun",
            IconName::Twitter => "twitter",
            IconName::Wind => "wind",
            IconName::X => "x",
        }
    }
}
