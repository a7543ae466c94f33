use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};
use yew::prelude::*;

use crate::error::SiteError;
use crate::hooks::use_scroll_derived;
use crate::utils::scroll::{header_is_scrolled, scroll_to_anchor, HEADER_ID};

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#contact", "Contact"),
];

/// Smooth-scrolls to an in-page anchor instead of jumping.
pub fn anchor_click(href: &'static str, after: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match scroll_to_anchor(href) {
            Ok(true) => {}
            Ok(false) => warn!("No section matches {}", href),
            Err(err) => warn!("Could not scroll to {}: {}", href, err),
        }
        after.emit(());
    })
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scroll_derived(header_is_scrolled);
    let header_ref = use_node_ref();

    // Close the mobile menu on any click outside the header.
    {
        let menu_open = menu_open.clone();
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| window.document()).map(|document| {
                    let click_callback = Closure::wrap(Box::new(move |e: Event| {
                        let Some(header) = header_ref.cast::<Element>() else {
                            return;
                        };
                        let target = e.target().and_then(|target| target.dyn_into::<Node>().ok());
                        if !header.contains(target.as_ref()) {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(Event)>);

                    if let Err(err) = document
                        .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                    {
                        warn!("Could not listen for clicks: {}", SiteError::from(err));
                    }
                    (document, click_callback)
                });

                move || {
                    if let Some((document, click_callback)) = listener {
                        let _ = document
                            .remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let active = (*menu_open).then_some("active");

    html! {
        <header id={HEADER_ID} ref={header_ref} class={classes!("header", is_scrolled.then_some("scrolled"))}>
            <nav class="nav-container">
                <a href="#home" class="logo" onclick={anchor_click("#home", close_menu.clone())}>
                    {"TELVEX"}
                </a>
                <ul id="nav-menu" class={classes!("nav-menu", active)}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <a href={*href} class="nav-link" onclick={anchor_click(*href, close_menu.clone())}>
                                { *label }
                            </a>
                        </li>
                    }) }
                </ul>
                <button id="mobile-toggle" class={classes!("mobile-toggle", active)} onclick={toggle_menu}
                    aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
