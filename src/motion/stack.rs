//! Scroll-driven card stack.
//!
//! A tall section is pinned while the user scrolls through it. Scroll travel
//! inside the section is turned into a progress ratio, the ratio into a stage
//! index, and the stage into per-card transforms.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::host::{FrameScheduler, Rect, ScrollHost};
use super::throttle::FrameThrottle;

pub const CARD_COUNT: usize = 3;
/// Height of the pinned section, in viewport heights.
pub const SECTION_HEIGHT_VIEWPORTS: usize = 3;
/// Lower bound of `progress` for stages 1 and 2. Both bounds are inclusive.
pub const STAGE_BOUNDARIES: [f64; CARD_COUNT - 1] = [0.33, 0.66];

// Each transition needs a full viewport height of travel.
const _: () = assert!(SECTION_HEIGHT_VIEWPORTS >= CARD_COUNT);

/// The inner content is one viewport tall, so the rest of the section is travel.
const TRAVEL_VIEWPORTS: f64 = (SECTION_HEIGHT_VIEWPORTS - 1) as f64;

const HIDDEN_OFFSET_PX: f64 = 200.0;

struct CardLayout {
    active_offset: f64,
    passed_offset: f64,
    scale: f64,
    opacity: f64,
    z_index: i32,
}

const CARD_LAYOUTS: [CardLayout; CARD_COUNT] = [
    CardLayout { active_offset: 90.0, passed_offset: 90.0, scale: 0.9, opacity: 0.9, z_index: 10 },
    CardLayout { active_offset: 55.0, passed_offset: 45.0, scale: 0.95, opacity: 1.0, z_index: 20 },
    CardLayout { active_offset: 15.0, passed_offset: 0.0, scale: 1.0, opacity: 1.0, z_index: 30 },
];

/// Normalized position inside the pinned section, in `[0, 1]`.
pub fn scroll_progress(section_top: f64, viewport_height: f64) -> f64 {
    if section_top >= 0.0 || viewport_height.is_nan() || viewport_height <= 0.0 {
        return 0.0;
    }
    (section_top.abs() / (TRAVEL_VIEWPORTS * viewport_height)).clamp(0.0, 1.0)
}

/// Step function from progress to stage. The highest eligible stage wins.
pub fn active_stage(progress: f64) -> usize {
    STAGE_BOUNDARIES
        .iter()
        .rposition(|&boundary| progress >= boundary)
        .map_or(0, |index| index + 1)
}

/// What the rendering layer needs to lay the cards out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StackState {
    pub active_index: usize,
    /// Highest stage reached since the section last entered the viewport.
    pub revealed_through: usize,
    pub intersecting: bool,
}

impl StackState {
    /// Every card laid out at its final stage. Used when the stack cannot be
    /// driven by scroll, so the content stays readable.
    pub const fn fully_shown() -> Self {
        Self { active_index: CARD_COUNT - 1, revealed_through: CARD_COUNT - 1, intersecting: true }
    }

    fn with_active(self, active_index: usize) -> Self {
        let revealed_through = if self.intersecting {
            self.revealed_through.max(active_index)
        } else {
            0
        };
        Self { active_index, revealed_through, ..self }
    }

    fn with_intersecting(self, intersecting: bool) -> Self {
        let revealed_through = if intersecting { self.revealed_through.max(self.active_index) } else { 0 };
        Self { intersecting, revealed_through, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisualState {
    pub visible: bool,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
}

pub fn card_visual_state(card: usize, state: &StackState) -> CardVisualState {
    let layout = &CARD_LAYOUTS[card.min(CARD_COUNT - 1)];
    let visible = state.intersecting && state.revealed_through >= card;
    let translate_y = match (visible, state.active_index == card) {
        (false, _) => HIDDEN_OFFSET_PX,
        (true, true) => layout.active_offset,
        (true, false) => layout.passed_offset,
    };
    CardVisualState {
        visible,
        translate_y,
        scale: layout.scale,
        opacity: if visible { layout.opacity } else { 0.0 },
        z_index: layout.z_index,
    }
}

/// Per-section bookkeeping: the frame throttle and the last published state.
#[derive(Debug, Default)]
pub struct ScrollStackController {
    throttle: FrameThrottle<f64>,
    state: StackState,
    last_offset: Option<f64>,
    detached: bool,
}

impl ScrollStackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StackState {
        self.state
    }

    /// Window offset sampled by the scroll event that triggered the most
    /// recent recomputation. The stage itself comes from the section rect read
    /// inside the frame, which already reflects that offset.
    pub fn last_offset(&self) -> Option<f64> {
        self.last_offset
    }

    /// Returns `true` when a frame has to be scheduled.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        if self.detached {
            return false;
        }
        self.throttle.record(offset)
    }

    /// Runs inside the scheduled frame. Yields the new state only if it changed.
    ///
    /// `section` is read in the same frame, so its `top` stands in for the
    /// coalesced scroll offset.
    pub fn on_frame(&mut self, section: Option<Rect>, viewport_height: f64) -> Option<StackState> {
        let offset = self.throttle.take();
        if self.detached {
            return None;
        }
        let rect = section?;
        self.last_offset = offset.or(self.last_offset);

        let progress = scroll_progress(rect.top, viewport_height);
        let active = active_stage(progress);
        if active != self.state.active_index {
            debug!(
                "stack stage {} -> {} (progress {:.3}, section {:.0}px)",
                self.state.active_index, active, progress, rect.height
            );
        }
        self.publish(self.state.with_active(active))
    }

    pub fn set_intersecting(&mut self, intersecting: bool) -> Option<StackState> {
        if self.detached {
            return None;
        }
        self.publish(self.state.with_intersecting(intersecting))
    }

    pub fn detach(&mut self) {
        self.detached = true;
        self.throttle.cancel();
    }

    fn publish(&mut self, next: StackState) -> Option<StackState> {
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

struct StackInner<H, S: FrameScheduler> {
    host: H,
    scheduler: S,
    controller: RefCell<ScrollStackController>,
    frame: RefCell<Option<S::Frame>>,
    on_change: Box<dyn Fn(StackState)>,
}

impl<H: ScrollHost, S: FrameScheduler> StackInner<H, S> {
    fn run_frame(&self) {
        self.frame.borrow_mut().take();
        let rect = self.host.section_rect();
        let viewport_height = self.host.viewport_height();
        let change = self.controller.borrow_mut().on_frame(rect, viewport_height);
        if let Some(state) = change {
            (self.on_change)(state);
        }
    }
}

/// A [`ScrollStackController`] wired to a host and a frame scheduler.
///
/// Scroll events go through [`ScrollStack::handle_scroll`], intersection
/// changes through [`ScrollStack::set_intersecting`]. `on_change` is called
/// only when the published [`StackState`] changes.
pub struct ScrollStack<H: ScrollHost + 'static, S: FrameScheduler + 'static> {
    inner: Rc<StackInner<H, S>>,
}

impl<H: ScrollHost + 'static, S: FrameScheduler + 'static> ScrollStack<H, S> {
    pub fn new(host: H, scheduler: S, on_change: impl Fn(StackState) + 'static) -> Self {
        Self {
            inner: Rc::new(StackInner {
                host,
                scheduler,
                controller: RefCell::new(ScrollStackController::new()),
                frame: RefCell::new(None),
                on_change: Box::new(on_change),
            }),
        }
    }

    pub fn state(&self) -> StackState {
        self.inner.controller.borrow().state()
    }

    pub fn last_offset(&self) -> Option<f64> {
        self.inner.controller.borrow().last_offset()
    }

    pub fn handle_scroll(&self) {
        let offset = self.inner.host.scroll_offset();
        if !self.inner.controller.borrow_mut().on_scroll(offset) {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let frame = self.inner.scheduler.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.run_frame();
            }
        }));
        *self.inner.frame.borrow_mut() = Some(frame);
    }

    pub fn set_intersecting(&self, intersecting: bool) {
        let change = self.inner.controller.borrow_mut().set_intersecting(intersecting);
        if let Some(state) = change {
            (self.inner.on_change)(state);
        }
    }

    /// Cancels any in-flight frame and stops publishing. Safe to call twice.
    pub fn teardown(&self) {
        self.inner.controller.borrow_mut().detach();
        let frame = self.inner.frame.borrow_mut().take();
        drop(frame);
    }
}
