//! Window-scroll helpers: a hook that reports whether the page has scrolled
//! past a threshold, and smooth scrolling to a section by id.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// True once the window has scrolled more than `threshold` pixels down.
///
/// The listener is attached on mount and removed on unmount. State updates
/// are deduplicated, so continuous scrolling only re-renders the caller when
/// the answer actually flips.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                    let past = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .map(|y| y > threshold)
                        .unwrap_or(false);
                    scrolled.set(past);
                }));

                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scrolled
}

/// Smooth-scroll the viewport to the element with the given id.
///
/// Unknown ids are logged and ignored, so a stale anchor never panics the
/// page.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        match document.get_element_by_id(id) {
            Some(element) => {
                let mut options = web_sys::ScrollIntoViewOptions::new();
                options.behavior(web_sys::ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => log::warn!("scroll target #{id} not found"),
        }
    }
}
