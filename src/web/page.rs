use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::NodeRef;

use super::dom;
use crate::config;

pub const TILT_RESTING: &str = "perspective(1000px) rotateY(0deg) rotateX(0deg) scale3d(1, 1, 1)";

/// Degrees of rotation at the container's edge.
const TILT_MAX_DEG: f64 = 2.5;

/// Client-space box of the element the pointer moves over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Below the breakpoint the hero drops parallax and tilt.
pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < config::MOBILE_BREAKPOINT
}

/// Strictly past `threshold`; sitting exactly on it does not count.
pub fn is_scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Space left above an in-page anchor target so the fixed navbar does not cover it.
pub fn anchor_offset(viewport_width: f64) -> f64 {
    if is_mobile(viewport_width) {
        config::ANCHOR_OFFSET_MOBILE
    } else {
        config::ANCHOR_OFFSET_DESKTOP
    }
}

pub fn parallax_offset(scroll_y: f64, speed: Option<&str>) -> f64 {
    let speed = speed
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite())
        .unwrap_or(config::PARALLAX_DEFAULT_SPEED);
    -scroll_y * speed
}

/// `#features` -> `Some("features")`. Bare `#` and non-anchor hrefs give `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// CSS transform tilting the image toward the pointer at (`client_x`, `client_y`).
pub fn tilt_transform(client_x: f64, client_y: f64, bounds: Bounds) -> String {
    if !(bounds.width > 0.0 && bounds.height > 0.0) {
        return TILT_RESTING.to_string();
    }
    let rotate_y = ((client_x - bounds.left) / bounds.width - 0.5) * TILT_MAX_DEG;
    // pointer above center tips the top edge away
    let rotate_x = (0.5 - (client_y - bounds.top) / bounds.height) * TILT_MAX_DEG;
    format!(
        "perspective(1000px) rotateY({}deg) rotateX({}deg) scale3d(1.02, 1.02, 1.02)",
        rotate_y, rotate_x
    )
}

pub fn set_transform(node: &NodeRef, transform: &str) {
    let Some(element) = node.cast::<HtmlElement>() else {
        return;
    };
    if let Err(err) = element.style().set_property("transform", transform) {
        warn!("Failed to set transform: {:?}", err);
    }
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn smooth_scroll_to_top() {
    match dom::window() {
        Ok(window) => smooth_scroll_to(&window, 0.0),
        Err(err) => warn!("Cannot scroll to top: {}", err),
    }
}

/// Scrolls to the element with `id`, leaving room for the navbar.
pub fn scroll_to_anchor(id: &str) {
    let Ok(window) = dom::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let width = dom::inner_width(&window).unwrap_or(config::MOBILE_BREAKPOINT);
    smooth_scroll_to(&window, f64::from(target.offset_top()) - anchor_offset(width));
}

/// Stops the page behind an open mobile menu from scrolling.
pub fn lock_body_scroll(locked: bool) {
    let body = dom::document().ok().and_then(|doc| doc.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        if let Err(err) = body.style().set_property("overflow", value) {
            warn!("Failed to set body overflow: {:?}", err);
        }
    }
}

pub fn apply_parallax(scroll_y: f64) {
    let Ok(document) = dom::document() else {
        return;
    };
    for element in dom::select_all_in_document(&document, ".parallax") {
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let speed = element.dataset().get("speed");
        let offset = parallax_offset(scroll_y, speed.as_deref());
        if let Err(err) = element.style().set_property("--parallax-y", &format!("{}px", offset)) {
            warn!("Failed to apply parallax: {:?}", err);
        }
    }
}
