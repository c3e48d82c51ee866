
#[cfg(debug_assertions)]
pub fn get_app_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running the app locally
}

#[cfg(not(debug_assertions))]
pub fn get_app_url() -> &'static str {
    "https://app.stepgenie.app"  // Production URL
}

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const FADE_IN_CLASS: &str = "animate-fade-in";
pub const FADE_IN_CHILD_SELECTOR: &str = ".fade-in-element";
pub const SCROLL_REVEAL_SELECTOR: &str = ".animate-on-scroll";

/// Navbar switches to its solid look past this many pixels.
pub const NAV_SCROLLED_THRESHOLD: f64 = 10.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const ANCHOR_OFFSET_MOBILE: f64 = 100.0;
pub const ANCHOR_OFFSET_DESKTOP: f64 = 80.0;
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.1;
