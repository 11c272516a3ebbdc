// view-state model and static content for the aromi site
//
// nothing in here touches the browser, so the whole crate builds (and tests) natively; the
// webapp wires these types to signals and dom events

pub mod content;
pub mod icon;
pub mod menu;
pub mod nav;
pub mod scroll;
pub mod style;
pub mod theme;

pub use menu::MenuState;
pub use nav::{NavState, NavStyle, NavTreatment};
pub use scroll::{SCROLL_THRESHOLD, ScrollState};
pub use theme::ThemeState;
