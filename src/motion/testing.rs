//! Hand-driven stand-ins for the browser used by the motion tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::host::{FrameScheduler, HostError, Rect, RevealHost, ScrollHost};

type Queued = (Rc<Cell<bool>>, Box<dyn FnOnce()>);

pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

/// Frames only run when the test calls [`ManualFrames::flush`].
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<Vec<Queued>>>,
    requested: Rc<Cell<usize>>,
}

impl ManualFrames {
    pub fn requested(&self) -> usize {
        self.requested.get()
    }

    /// Runs every queued frame that was not cancelled, returns how many ran.
    pub fn flush(&self) -> usize {
        let due: Vec<Queued> = self.queue.borrow_mut().drain(..).collect();
        let mut ran = 0;
        for (cancelled, callback) in due {
            if !cancelled.get() {
                callback();
                ran += 1;
            }
        }
        ran
    }
}

impl FrameScheduler for ManualFrames {
    type Frame = ManualHandle;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> ManualHandle {
        self.requested.set(self.requested.get() + 1);
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push((cancelled.clone(), callback));
        ManualHandle { cancelled }
    }
}

/// A clock that only moves when the test advances it.
#[derive(Clone, Default)]
pub struct ManualTimers {
    now: Rc<Cell<u32>>,
    queue: Rc<RefCell<Vec<(u32, Queued)>>>,
}

impl ManualTimers {
    pub fn now(&self) -> u32 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|(_, (cancelled, _))| !cancelled.get())
            .count()
    }

    pub fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let due = self.now.get() + delay_ms;
        self.queue.borrow_mut().push((due, (cancelled.clone(), callback)));
        ManualHandle { cancelled }
    }

    pub fn advance(&self, by_ms: u32) {
        let target = self.now.get() + by_ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let earliest = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= target)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(index, _)| index);
                earliest.map(|index| queue.remove(index))
            };
            let Some((due, (cancelled, callback))) = next else {
                break;
            };
            self.now.set(due);
            if !cancelled.get() {
                callback();
            }
        }
        self.now.set(target);
    }
}

/// A page whose scroll position and section box the test sets directly.
#[derive(Clone)]
pub struct FakePage {
    scroll: Rc<Cell<f64>>,
    viewport: Rc<Cell<f64>>,
    section: Rc<Cell<Option<Rect>>>,
    rect_reads: Rc<Cell<usize>>,
}

impl FakePage {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            scroll: Rc::new(Cell::new(0.0)),
            viewport: Rc::new(Cell::new(viewport_height)),
            section: Rc::new(Cell::new(None)),
            rect_reads: Rc::new(Cell::new(0)),
        }
    }

    /// Scrolls so that the section top sits at `top`.
    pub fn scroll_section_to(&self, top: f64) {
        let height = self.viewport.get() * 3.0;
        self.section.set(Some(Rect { top, height }));
        self.scroll.set(-top);
    }

    pub fn unmount_section(&self) {
        self.section.set(None);
    }

    pub fn rect_reads(&self) -> usize {
        self.rect_reads.get()
    }
}

impl ScrollHost for FakePage {
    fn scroll_offset(&self) -> f64 {
        self.scroll.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.get()
    }

    fn section_rect(&self) -> Option<Rect> {
        self.rect_reads.set(self.rect_reads.get() + 1);
        self.section.get()
    }
}

/// Records watch/unwatch/reveal calls against string ids.
#[derive(Clone, Default)]
pub struct FakeReveals {
    pub timers: ManualTimers,
    watched: Rc<RefCell<Vec<&'static str>>>,
    unwatch_calls: Rc<RefCell<Vec<&'static str>>>,
    revealed: Rc<RefCell<Vec<(&'static str, u32)>>>,
    children: Rc<RefCell<HashMap<&'static str, Vec<&'static str>>>>,
    detached: Rc<RefCell<Vec<&'static str>>>,
}

impl FakeReveals {
    pub fn with_children(self, container: &'static str, kids: &[&'static str]) -> Self {
        self.children.borrow_mut().insert(container, kids.to_vec());
        self
    }

    pub fn detach(&self, target: &'static str) {
        self.detached.borrow_mut().push(target);
    }

    pub fn is_watched(&self, target: &'static str) -> bool {
        self.watched.borrow().contains(&target)
    }

    pub fn unwatch_calls(&self) -> Vec<&'static str> {
        self.unwatch_calls.borrow().clone()
    }

    /// `(target, time in ms)` for every reveal, in the order they happened.
    pub fn revealed(&self) -> Vec<(&'static str, u32)> {
        self.revealed.borrow().clone()
    }
}

impl RevealHost for FakeReveals {
    type Target = &'static str;
    type Timer = ManualHandle;

    fn watch(&self, target: &&'static str) -> Result<(), HostError> {
        if self.detached.borrow().contains(target) {
            return Err(HostError::Watch(format!("{target} is detached")));
        }
        self.watched.borrow_mut().push(*target);
        Ok(())
    }

    fn unwatch(&self, target: &&'static str) {
        self.unwatch_calls.borrow_mut().push(*target);
        self.watched.borrow_mut().retain(|t| t != target);
    }

    fn children(&self, target: &&'static str) -> Vec<&'static str> {
        self.children.borrow().get(target).cloned().unwrap_or_default()
    }

    fn reveal(&self, target: &&'static str) {
        self.revealed.borrow_mut().push((*target, self.timers.now()));
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        self.timers.schedule(delay_ms, callback)
    }
}
