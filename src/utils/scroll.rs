use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::config::{BACK_TO_TOP_VISIBLE_AFTER, HEADER_SCROLLED_AFTER, SCROLL_INDICATOR_HIDDEN_AFTER};
use crate::error::{self, SiteError};

pub const HEADER_ID: &str = "header";

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER
}

pub fn scroll_indicator_visible(scroll_y: f64) -> bool {
    scroll_y <= SCROLL_INDICATOR_HIDDEN_AFTER
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_VISIBLE_AFTER
}

/// Where to scroll so the target's top lands just under the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    (target_offset_top - header_height).max(0.0)
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) -> Result<(), SiteError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    error::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scrolls to the element named by an in-page `#anchor`. Returns
/// false when nothing on the page matches.
pub fn scroll_to_anchor(href: &str) -> Result<bool, SiteError> {
    let document = error::document()?;
    let Some(target) = document
        .query_selector(href)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };

    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);

    smooth_scroll_to(anchor_scroll_top(f64::from(target.offset_top()), header_height))?;
    Ok(true)
}

pub fn scroll_into_view(id: &str) -> Result<bool, SiteError> {
    let Some(section) = error::document()?.get_element_by_id(id) else {
        return Ok(false);
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_threshold() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(50.5));
    }

    #[test]
    fn test_scroll_indicator_hides_after_100() {
        assert!(scroll_indicator_visible(0.0));
        assert!(scroll_indicator_visible(100.0));
        assert!(!scroll_indicator_visible(101.0));
    }

    #[test]
    fn test_back_to_top_shows_after_500() {
        assert!(!back_to_top_visible(499.0));
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(501.0));
    }

    #[test]
    fn test_anchor_offset_subtracts_header() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_scroll_top(40.0, 80.0), 0.0);
    }
}
