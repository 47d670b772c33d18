//! Animated count-up number that starts when scrolled into view

use crate::animation::{
    latest_visibility, AnimationHandle, CountUp, CountUpTicker, RunSlot, FRAME_INTERVAL_MS,
};
use crate::formatters::format_counter_label;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Fire this far before the element reaches the viewport.
const VIEW_MARGIN: &str = "50px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[component]
pub fn AnimatedCounter(
    /// Value the counter climbs to
    #[prop(into)]
    value: Signal<u64>,
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Span>::new();
    let in_view = RwSignal::new(false);
    let display = RwSignal::new(format_counter_label(0));
    let runs = StoredValue::new(RunSlot::new());

    // Visibility: one observer per mounted element.
    let observer = StoredValue::new_local(None::<(web_sys::IntersectionObserver, ObserverCallback)>);
    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if observer.with_value(Option::is_some) {
            return;
        }
        match observe_visibility(&element, in_view) {
            Ok(pair) => observer.set_value(Some(pair)),
            Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
        }
    });

    Effect::new(move |_| {
        let visible = in_view.get();
        let target = value.get();
        let started = runs.try_update_value(|slot| slot.retrigger(visible, target));
        if let Some(handle) = started.flatten() {
            spawn_local(run_count_up(target, handle, display));
        }
    });

    on_cleanup(move || {
        drop(runs.try_update_value(RunSlot::cancel));
        if let Some((obs, _callback)) = observer.try_update_value(Option::take).flatten() {
            obs.disconnect();
        }
    });

    view! {
        <span node_ref=node_ref class=format!("animated-counter {}", class)>
            {move || display.get()}
        </span>
    }
}

fn observe_visibility(
    element: &web_sys::Element,
    in_view: RwSignal<bool>,
) -> Result<(web_sys::IntersectionObserver, ObserverCallback), JsValue> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let batch = entries.iter().filter_map(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .ok()
                    .map(|e| e.is_intersecting())
            });
            let Some(visible) = latest_visibility(batch) else {
                return;
            };
            // Signal is gone once the component unmounts.
            if in_view.try_get_untracked() != Some(visible) {
                drop(in_view.try_set(visible));
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_root_margin(VIEW_MARGIN);
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )?;
    observer.observe(element);
    Ok((observer, callback))
}

async fn run_count_up(target: u64, handle: AnimationHandle, display: RwSignal<String>) {
    let started = js_sys::Date::now();
    // Liveness is checked by the ticker; try_set covers a disposed signal.
    let sink = move |text: String| drop(display.try_set(text));
    let mut ticker = CountUpTicker::new(CountUp::new(target), handle, sink);

    loop {
        let elapsed_ms = (js_sys::Date::now() - started).max(0.0);
        if !ticker.tick(Duration::from_secs_f64(elapsed_ms / 1000.0)) {
            break;
        }
        gloo_timers::future::TimeoutFuture::new(FRAME_INTERVAL_MS).await;
    }
}
