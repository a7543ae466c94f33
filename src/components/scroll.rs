use log::warn;
use yew::prelude::*;

use crate::hooks::use_scroll_derived;
use crate::utils::scroll::{back_to_top_visible, scroll_indicator_visible, scroll_into_view, smooth_scroll_to};

fn fade_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; pointer-events: auto;"
    } else {
        "opacity: 0; pointer-events: none;"
    }
}

#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let visible = use_scroll_derived(scroll_indicator_visible);

    let onclick = Callback::from(|_: MouseEvent| {
        if let Err(err) = scroll_into_view("about") {
            warn!("Could not scroll to #about: {}", err);
        }
    });

    html! {
        <div id="scroll-indicator" class="scroll-indicator" style={fade_style(visible)} {onclick}>
            <span>{"Scroll"}</span>
            <i class="fas fa-chevron-down"></i>
        </div>
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_scroll_derived(back_to_top_visible);

    let onclick = Callback::from(|_: MouseEvent| {
        if let Err(err) = smooth_scroll_to(0.0) {
            warn!("Could not scroll to top: {}", err);
        }
    });

    html! {
        <button id="back-to-top" class="back-to-top" style={fade_style(visible)} {onclick}
            aria-label="Back to top">
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
