//! Reveal-on-scroll support built on `IntersectionObserver`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// How much of an element must be visible before it counts as revealed.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Observe a node and report once it has entered the viewport.
///
/// Returns the [`NodeRef`] to attach to the element and a flag that flips to
/// `true` the first time the element intersects. The flag never goes back to
/// `false`: sections reveal once and stay put while the user scrolls around.
#[hook]
pub fn use_in_viewport() -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<web_sys::Element>() {
                    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::wrap(
                        Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    visible.set(true);
                                }
                            }
                        }),
                    );

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from(REVEAL_THRESHOLD));

                    if let Ok(obs) = IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        obs.observe(&element);
                        observer = Some(obs);
                    }
                    callback = Some(on_intersect);
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    (node, *visible)
}

/// Class pair for the fade-up reveal used by all three sections.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal reveal-shown"
    } else {
        "reveal"
    }
}
