#![allow(non_snake_case)]
use dioxus::prelude::*;
use gloo_console::error as console_error;

use tracing::Level;

mod common;

mod components;

mod home;
use home::Home;

mod sections;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // the page is still usable without logs, so report the failure and carry on
    if let Err(err) = dioxus_logger::init(level) {
        console_error!(format!("failed to init logger: {err}"));
    }

    launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Home {}
    }
}
