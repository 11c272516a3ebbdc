use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, error, warn};
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{AddEventListenerOptions, Window};

use site::ScrollState;

// a passive "scroll" listener on the window
//
// the browser keeps a reference to the callback for as long as it is registered, so the closure
// lives here and the listener is removed again when this is dropped
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(mut on_offset: impl FnMut(f64) + 'static) -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no window"))?;

        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || match reader.scroll_y() {
            Ok(offset) => on_offset(offset),
            Err(err) => warn!("failed to read scroll offset: {err:?}"),
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| anyhow::Error::msg(format!("failed to add scroll listener: {err:?}")))?;

        debug!("scroll listener attached");
        Ok(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => debug!("scroll listener detached"),
            Err(err) => error!("failed to remove scroll listener: {err:?}"),
        }
    }
}

fn viewport_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

// scroll state of the viewport, for the lifetime of the calling component
//
// the listener is registered on first render and released when the component unmounts; if it
// cannot be registered, the returned state simply stays where it started
pub fn use_scroll_state() -> Signal<ScrollState> {
    let mut scroll = use_signal(|| ScrollState::from_offset(viewport_offset()));

    let listener = use_hook(move || {
        let attached = ScrollListener::attach(move |offset| {
            let next = ScrollState::from_offset(offset);

            // only write when the derived flag flips, otherwise every scroll event rerenders
            if *scroll.peek() != next {
                scroll.set(next);
            }
        });

        let listener = match attached {
            Ok(listener) => Some(listener),
            Err(err) => {
                error!("scroll tracking disabled: {err}");
                None
            }
        };

        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    scroll
}
