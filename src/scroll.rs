use log::warn;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::NAV_HEIGHT;

/// Document y to scroll to so an element sits just under the fixed header.
pub fn anchor_offset(rect_top: f64, page_y: f64, nav_height: f64) -> f64 {
    rect_top + page_y - nav_height
}

/// Whether the page has scrolled far enough that the header overlaps content below the hero.
pub fn past_hero(scroll_y: f64, hero_height: f64, nav_height: f64) -> bool {
    scroll_y > hero_height - nav_height
}

/// Header state for the current scroll. Without a hero to measure the header keeps its resting look.
pub fn header_over_content(scroll_y: f64, hero_height: Option<f64>, nav_height: f64) -> bool {
    hero_height.map_or(false, |hero| past_hero(scroll_y, hero, nav_height))
}

/// Smooth-scrolls to the element with `id`. Unknown ids do nothing.
pub fn scroll_to_id(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        warn!("no section with id {}", id);
        return;
    };
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = anchor_offset(element.get_bounding_client_rect().top(), page_y, NAV_HEIGHT);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_lands_below_header() {
        assert_eq!(anchor_offset(400.0, 1200.0, 88.0), 1512.0);
        assert_eq!(anchor_offset(-200.0, 1200.0, 88.0), 912.0);
    }

    #[test]
    fn hero_threshold_accounts_for_header() {
        assert!(!past_hero(500.0, 900.0, 88.0));
        assert!(!past_hero(812.0, 900.0, 88.0));
        assert!(past_hero(813.0, 900.0, 88.0));
    }

    #[test]
    fn missing_hero_keeps_header_at_rest() {
        assert!(!header_over_content(5000.0, None, 88.0));
        assert!(header_over_content(813.0, Some(900.0), 88.0));
        assert!(!header_over_content(812.0, Some(900.0), 88.0));
    }
}
