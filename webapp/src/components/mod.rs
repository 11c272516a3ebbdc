pub mod icon;
pub mod navigation;
pub mod scroll;
