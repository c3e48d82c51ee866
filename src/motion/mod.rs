//! Scroll and visibility driven animation state, independent of the DOM.

pub mod host;
pub mod reveal;
pub mod stack;
pub mod throttle;

#[cfg(test)]
pub(crate) mod testing;

pub use host::{FrameScheduler, HostError, Rect, RevealHost, ScrollHost};
pub use reveal::{RevealMode, ViewportRevealTracker};
pub use stack::{card_visual_state, CardVisualState, ScrollStack, StackState, CARD_COUNT, SECTION_HEIGHT_VIEWPORTS};
pub use throttle::FrameThrottle;
