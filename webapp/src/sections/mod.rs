mod cta;
mod experience;
mod footer;
mod hero;
mod services;
mod testimonials;

pub use cta::CallToAction;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use services::Services;
pub use testimonials::Testimonials;
