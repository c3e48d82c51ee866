//! Capabilities the motion core borrows from its host environment.
//!
//! The core never talks to the DOM directly. A browser build plugs in the
//! adapters from `crate::web::dom`; the unit tests plug in fakes that let
//! frames and timers be flushed by hand.

use thiserror::Error;

/// Viewport-relative box of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("could not read {0} from window")]
    Measure(&'static str),
    #[error("visibility watcher unavailable: {0}")]
    Watch(String),
}

/// Scroll position and layout reads for a pinned section.
pub trait ScrollHost {
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// `None` while the section is not mounted.
    fn section_rect(&self) -> Option<Rect>;
}

/// Runs a callback once, on the next rendered frame.
pub trait FrameScheduler {
    /// Dropping the handle cancels the frame if it has not run yet.
    type Frame;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Frame;
}

/// Everything the reveal tracker needs from the page.
pub trait RevealHost {
    type Target: Clone + PartialEq;
    /// Dropping the handle cancels the timer if it has not fired yet.
    type Timer;

    fn watch(&self, target: &Self::Target) -> Result<(), HostError>;
    /// Must tolerate targets that are not (or no longer) watched.
    fn unwatch(&self, target: &Self::Target);
    /// Batch-mode children of a container, in document order.
    fn children(&self, target: &Self::Target) -> Vec<Self::Target>;
    fn reveal(&self, target: &Self::Target);
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
}
