use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::error::SiteError;
use crate::utils::scroll::current_scroll_y;

/// Tracks `derive(window.scrollY)`; only re-renders when the derived value
/// changes, so components can depend on scroll thresholds cheaply.
#[hook]
pub fn use_scroll_derived<T: Clone + PartialEq + 'static>(derive: fn(f64) -> T) -> T {
    let state = use_state_eq(|| derive(current_scroll_y()));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        state.set(derive(current_scroll_y()));
                    }) as Box<dyn FnMut()>);

                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    {
                        warn!("Could not listen for scroll: {}", SiteError::from(err));
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    (*state).clone()
}
