use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{PARALLAX_RATE, PARALLAX_SELECTOR, PARALLAX_THROTTLE_MS};
use crate::error::SiteError;
use crate::reveal::{BrowserDom, Dom};
use crate::utils::scroll::current_scroll_y;
use crate::utils::throttle::{throttle, BrowserClock};

pub fn parallax_transform(scroll_y: f64, rate: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0 so the top of the page renders "0px".
    let offset = scroll_y * rate + 0.0;
    format!("translateY({}px)", offset)
}

pub fn apply_parallax<D: Dom>(dom: &D, elements: &[D::Element], scroll_y: f64) {
    let transform = parallax_transform(scroll_y, PARALLAX_RATE);
    for element in elements {
        if let Err(err) = dom.set_style(element, "transform", &transform) {
            warn!("Parallax update failed: {}", err);
        }
    }
}

/// Drifts the decorative hero orbs against the scroll direction.
#[hook]
pub fn use_parallax() {
    use_effect_with_deps(
        move |_| {
            let listener = BrowserDom::from_window().ok().and_then(|dom| {
                let elements = dom.query_document(PARALLAX_SELECTOR);
                if elements.is_empty() {
                    debug!("No parallax elements on this page");
                    return None;
                }
                let window = web_sys::window()?;

                let mut on_scroll = throttle(
                    move |scroll_y: f64| apply_parallax(&dom, &elements, scroll_y),
                    PARALLAX_THROTTLE_MS,
                    BrowserClock,
                );
                let scroll_callback = Closure::wrap(Box::new(move || {
                    on_scroll(current_scroll_y());
                }) as Box<dyn FnMut()>);

                if let Err(err) =
                    window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                {
                    warn!("Could not listen for scroll: {}", SiteError::from(err));
                }
                Some((window, scroll_callback))
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );
}
