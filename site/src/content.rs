use crate::icon::IconName;

// static page content
//
// everything here is fixed at compile time; the sections just walk these tables

pub const BRAND: &str = "Aromi";
pub const BRAND_FULL: &str = "Aromi Fashion Spa";
pub const FOUNDED: i32 = 2008;

const UNSPLASH: &str = "https://images.unsplash.com";

// the image host takes sizing hints as query parameters
macro_rules! unsplash {
    ($id:literal, $width:literal) => {
        constcat::concat!(
            UNSPLASH,
            "/photo-",
            $id,
            "?auto=format&fit=crop&q=80&w=",
            $width
        )
    };
}

pub const HERO_IMAGE: &str = unsplash!("1540555700478-4be289fbecef", "2000");
pub const EXPERIENCE_IMAGES: [(&str, &str); 2] = [
    (unsplash!("1600334129128-685c5582fd35", "600"), "Spa interior"),
    (unsplash!("1519823551278-64ac92734fb1", "600"), "Spa treatment"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target_anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target_anchor)
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Services",
        target_anchor: "services",
    },
    NavLink {
        label: "Experience",
        target_anchor: "experience",
    },
    NavLink {
        label: "About",
        target_anchor: "about",
    },
    NavLink {
        label: "Reviews",
        target_anchor: "reviews",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub price_label: &'static str,
    pub icon: IconName,
    pub image_url: &'static str,
}

pub const SERVICES: [ServiceItem; 3] = [
    ServiceItem {
        title: "Signature Massage",
        description: "A bespoke blend of aromatherapy and deep tissue techniques.",
        price_label: "From $120",
        icon: IconName::Wind,
        image_url: unsplash!("1544161515-4ab6ce6db874", "800"),
    },
    ServiceItem {
        title: "Radiance Facial",
        description: "Advanced skincare using organic botanical extracts.",
        price_label: "From $95",
        icon: IconName::Sparkles,
        image_url: unsplash!("1570172619644-dfd03ed5d881", "800"),
    },
    ServiceItem {
        title: "Hydrotherapy",
        description: "Mineral-rich thermal baths for ultimate detoxification.",
        price_label: "From $80",
        icon: IconName::Droplets,
        image_url: unsplash!("1515377905703-c4788e51af15", "800"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightItem {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: [HighlightItem; 3] = [
    HighlightItem {
        title: "Organic Elements",
        description: "We use only the finest sustainably sourced botanical oils.",
    },
    HighlightItem {
        title: "Expert Therapists",
        description: "Our team consists of world-class certified practitioners.",
    },
    HighlightItem {
        title: "Tailored Experience",
        description: "Every treatment is customized to your unique needs.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestimonialItem {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: [TestimonialItem; 3] = [
    TestimonialItem {
        name: "Elena Rossi",
        role: "Fashion Designer",
        quote: "The most tranquil space in the city. Their signature massage is transformative.",
    },
    TestimonialItem {
        name: "Marcus Thorne",
        role: "Creative Director",
        quote: "Aromi isn't just a spa; it's a lifestyle. The attention to detail is unmatched.",
    },
    TestimonialItem {
        name: "Sophia Chen",
        role: "Wellness Blogger",
        quote: "I've visited spas globally, and Aromi's facial treatments are truly world-class.",
    },
];

pub const REVIEW_STARS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: [FooterLink; 4] = [
    FooterLink {
        label: "Gift Cards",
        href: "#",
    },
    FooterLink {
        label: "Memberships",
        href: "#",
    },
    FooterLink {
        label: "Careers",
        href: "#",
    },
    FooterLink {
        label: "Privacy Policy",
        href: "#",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLine {
    pub icon: IconName,
    pub text: &'static str,
}

pub const CONTACT: [ContactLine; 3] = [
    ContactLine {
        icon: IconName::MapPin,
        text: "124 Serenity Blvd, Milan",
    },
    ContactLine {
        icon: IconName::Phone,
        text: "+39 02 123 4567",
    },
    ContactLine {
        icon: IconName::Clock,
        text: "Mon - Sun: 9am - 9pm",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconName,
    pub label: &'static str,
}

pub const SOCIAL: [SocialLink; 3] = [
    SocialLink {
        icon: IconName::Instagram,
        label: "Instagram",
    },
    SocialLink {
        icon: IconName::Facebook,
        label: "Facebook",
    },
    SocialLink {
        icon: IconName::Twitter,
        label: "Twitter",
    },
];

pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND_FULL}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_sections() {
        let hrefs: Vec<String> = NAV_LINKS.iter().map(NavLink::href).collect();
        assert_eq!(hrefs, ["#services", "#experience", "#about", "#reviews"]);
    }

    #[test]
    fn image_urls_carry_sizing() {
        assert_eq!(
            SERVICES[0].image_url,
            "https://images.unsplash.com/photo-1544161515-4ab6ce6db874?auto=format&fit=crop&q=80&w=800"
        );
        assert!(HERO_IMAGE.ends_with("&w=2000"));
        assert!(EXPERIENCE_IMAGES.iter().all(|(url, _)| url.ends_with("&w=600")));
    }

    #[test]
    fn prices_are_labelled() {
        assert!(SERVICES.iter().all(|s| s.price_label.starts_with("From $")));
    }

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Aromi Fashion Spa. All rights reserved.");
    }
}
