use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::error::{self, SiteError};

pub fn play_state(hidden: bool) -> &'static str {
    if hidden {
        "paused"
    } else {
        "running"
    }
}

fn sync_play_state(document: &web_sys::Document) -> Result<(), SiteError> {
    if let Some(body) = document.body() {
        body.style()
            .set_property("animation-play-state", play_state(document.hidden()))?;
    }
    Ok(())
}

/// Pauses CSS animations while the tab is in the background.
#[hook]
pub fn use_pause_when_hidden() {
    use_effect_with_deps(
        move |_| {
            let listener = error::document().ok().map(|document| {
                let handler_document = document.clone();
                let visibility_callback = Closure::wrap(Box::new(move || {
                    if let Err(err) = sync_play_state(&handler_document) {
                        warn!("Could not update animation play state: {}", err);
                    }
                }) as Box<dyn FnMut()>);

                if let Err(err) = document.add_event_listener_with_callback(
                    "visibilitychange",
                    visibility_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Could not listen for visibilitychange: {}", SiteError::from(err));
                }
                (document, visibility_callback)
            });

            move || {
                if let Some((document, visibility_callback)) = listener {
                    let _ = document.remove_event_listener_with_callback(
                        "visibilitychange",
                        visibility_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_state() {
        assert_eq!(play_state(true), "paused");
        assert_eq!(play_state(false), "running");
    }
}
