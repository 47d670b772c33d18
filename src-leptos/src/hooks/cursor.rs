//! Cursor position tracking
//!
//! Publishes the pointer position as the `--cursor-x` / `--cursor-y` custom
//! properties on the document element while the owning view is mounted.

use crate::formatters::format_px;
use leptos::prelude::*;
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const CURSOR_X_PROPERTY: &str = "--cursor-x";
pub const CURSOR_Y_PROPERTY: &str = "--cursor-y";

/// Destination for style property writes.
pub trait StyleSink {
    fn set_property(&self, name: &str, value: &str);
}

/// Inline style of `document.documentElement`.
pub struct DocumentStyle;

impl StyleSink for DocumentStyle {
    fn set_property(&self, name: &str, value: &str) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let Ok(element) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        if let Err(e) = element.style().set_property(name, value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }
}

/// Writes cursor coordinates to a [`StyleSink`] until detached.
pub struct CursorTracker<S> {
    sink: S,
    active: Cell<bool>,
}

impl<S: StyleSink> CursorTracker<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            active: Cell::new(true),
        }
    }

    pub fn on_move(&self, x: i32, y: i32) {
        if !self.active.get() {
            return;
        }
        self.sink.set_property(CURSOR_X_PROPERTY, &format_px(x));
        self.sink.set_property(CURSOR_Y_PROPERTY, &format_px(y));
    }

    pub fn detach(&self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Track the cursor for the lifetime of the calling component.
///
/// Subscribes to window `mousemove` on call and unsubscribes on cleanup.
pub fn use_cursor_tracker() {
    let Some(window) = web_sys::window() else {
        log::warn!("No window; cursor tracking disabled");
        return;
    };

    let tracker = std::rc::Rc::new(CursorTracker::new(DocumentStyle));
    let on_move = {
        let tracker = tracker.clone();
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            tracker.on_move(ev.client_x(), ev.client_y());
        })
    };

    if let Err(e) =
        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
    {
        log::warn!("Failed to subscribe to mousemove: {:?}", e);
        return;
    }

    let subscription = StoredValue::new_local(Some((tracker, on_move)));
    on_cleanup(move || {
        let Some((tracker, on_move)) = subscription.try_update_value(Option::take).flatten() else {
            return;
        };
        tracker.detach();
        if let Some(window) = web_sys::window() {
            drop(window.remove_event_listener_with_callback(
                "mousemove",
                on_move.as_ref().unchecked_ref(),
            ));
        }
    });
}
