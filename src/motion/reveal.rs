//! One-shot "fade in when scrolled into view".

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};

use super::host::RevealHost;
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal the observed element itself.
    Single,
    /// Reveal the container's fade-in children one after another.
    Staggered,
}

/// Delay before child `index` of a staggered container is revealed.
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config::REVEAL_STAGGER_MS)
}

struct RevealTarget<T> {
    target: T,
    mode: RevealMode,
    has_fired: bool,
    watching: bool,
}

struct TrackerInner<H: RevealHost> {
    host: H,
    targets: RefCell<Vec<RevealTarget<H::Target>>>,
    timers: RefCell<Vec<H::Timer>>,
    torn_down: Cell<bool>,
}

/// Watches any number of targets and reveals each exactly once.
///
/// The host forwards visibility changes to [`ViewportRevealTracker::on_visibility`].
/// A target that fired is unwatched immediately and never fires again.
pub struct ViewportRevealTracker<H: RevealHost + 'static> {
    inner: Rc<TrackerInner<H>>,
}

impl<H: RevealHost + 'static> ViewportRevealTracker<H> {
    pub fn new(host: H) -> Self {
        Self {
            inner: Rc::new(TrackerInner {
                host,
                targets: RefCell::new(Vec::new()),
                timers: RefCell::new(Vec::new()),
                torn_down: Cell::new(false),
            }),
        }
    }

    /// Starts watching `target`. A watcher that cannot be registered leaves the
    /// target hidden; that is logged, not returned.
    pub fn observe(&self, target: H::Target, mode: RevealMode) {
        if self.inner.torn_down.get() {
            return;
        }
        if self.inner.targets.borrow().iter().any(|t| t.target == target) {
            return;
        }
        let watching = match self.inner.host.watch(&target) {
            Ok(()) => true,
            Err(err) => {
                warn!("Reveal target left hidden: {}", err);
                false
            }
        };
        self.inner.targets.borrow_mut().push(RevealTarget { target, mode, has_fired: false, watching });
    }

    /// Feeds one visibility notification. Returns `true` if this call fired.
    pub fn on_visibility(&self, target: &H::Target, visible: bool) -> bool {
        if !visible || self.inner.torn_down.get() {
            return false;
        }
        let mode = {
            let mut targets = self.inner.targets.borrow_mut();
            let Some(entry) = targets.iter_mut().find(|t| &t.target == target) else {
                return false;
            };
            if entry.has_fired || !entry.watching {
                return false;
            }
            entry.has_fired = true;
            entry.watching = false;
            entry.mode
        };
        self.inner.host.unwatch(target);
        match mode {
            RevealMode::Single => self.inner.host.reveal(target),
            RevealMode::Staggered => self.reveal_children(target),
        }
        true
    }

    fn reveal_children(&self, container: &H::Target) {
        let children = self.inner.host.children(container);
        debug!("Revealing {} staggered children", children.len());
        for (index, child) in children.into_iter().enumerate() {
            let delay = stagger_delay(index);
            if delay == 0 {
                self.inner.host.reveal(&child);
                continue;
            }
            let weak = Rc::downgrade(&self.inner);
            let timer = self.inner.host.after(
                delay,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        if !inner.torn_down.get() {
                            inner.host.reveal(&child);
                        }
                    }
                }),
            );
            self.inner.timers.borrow_mut().push(timer);
        }
    }

    /// Unwatches every target, fired or not, and cancels pending staggers.
    /// Calling it again does nothing.
    pub fn teardown(&self) {
        if self.inner.torn_down.replace(true) {
            return;
        }
        let targets = std::mem::take(&mut *self.inner.targets.borrow_mut());
        for entry in &targets {
            self.inner.host.unwatch(&entry.target);
        }
        let timers = std::mem::take(&mut *self.inner.timers.borrow_mut());
        drop(timers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::FakeReveals;

    #[test]
    fn fires_once_then_stops_watching() {
        let host = FakeReveals::default();
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.observe("badge", RevealMode::Single);
        assert!(host.is_watched("badge"));

        assert!(tracker.on_visibility(&"badge", true));
        assert!(!host.is_watched("badge"));
        assert_eq!(host.revealed(), vec![("badge", 0)]);
    }

    #[test]
    fn crossing_out_and_back_in_does_not_refire() {
        let host = FakeReveals::default();
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.observe("card", RevealMode::Single);
        tracker.on_visibility(&"card", true);
        assert!(!tracker.on_visibility(&"card", false));
        assert!(!tracker.on_visibility(&"card", true));
        assert_eq!(host.revealed().len(), 1);
    }

    #[test]
    fn invisible_notification_is_ignored() {
        let host = FakeReveals::default();
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.observe("card", RevealMode::Single);
        assert!(!tracker.on_visibility(&"card", false));
        assert!(host.is_watched("card"));
        assert!(host.revealed().is_empty());
    }

    #[test]
    fn unknown_target_is_ignored() {
        let tracker = ViewportRevealTracker::new(FakeReveals::default());
        assert!(!tracker.on_visibility(&"ghost", true));
    }

    #[test]
    fn staggered_children_reveal_100ms_apart() {
        let host = FakeReveals::default().with_children("features", &["chip", "title", "subtitle"]);
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.observe("features", RevealMode::Staggered);

        assert!(tracker.on_visibility(&"features", true));
        assert_eq!(host.revealed(), vec![("chip", 0)]);
        host.timers.advance(250);
        assert_eq!(host.revealed(), vec![("chip", 0), ("title", 100), ("subtitle", 200)]);
        assert!(!host.is_watched("features"));
    }

    #[test]
    fn stagger_delays_grow_linearly() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(7), 700);
        assert_eq!(stagger_delay(usize::MAX), u32::MAX);
    }

    #[test_log::test]
    fn registration_failure_leaves_target_hidden() {
        let host = FakeReveals::default();
        host.detach("orphan");
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.observe("orphan", RevealMode::Single);
        assert!(!tracker.on_visibility(&"orphan", true));
        assert!(host.revealed().is_empty());
    }

    #[test]
    fn observing_twice_registers_once() {
        let host = FakeReveals::default();
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.observe("hero", RevealMode::Single);
        tracker.observe("hero", RevealMode::Single);
        tracker.teardown();
        assert_eq!(host.unwatch_calls(), vec!["hero"]);
    }

    #[test]
    fn teardown_unwatches_everything_once() {
        let host = FakeReveals::default();
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.observe("a", RevealMode::Single);
        tracker.observe("b", RevealMode::Single);
        tracker.on_visibility(&"a", true);

        tracker.teardown();
        tracker.teardown();
        assert!(!host.is_watched("b"));
        // "a" once when it fired, once more on teardown
        assert_eq!(host.unwatch_calls(), vec!["a", "a", "b"]);
        assert!(!tracker.on_visibility(&"b", true));
    }

    #[test]
    fn teardown_mid_stagger_cancels_remaining_children() {
        let host = FakeReveals::default().with_children("grid", &["one", "two", "three"]);
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.observe("grid", RevealMode::Staggered);
        tracker.on_visibility(&"grid", true);
        host.timers.advance(120);

        tracker.teardown();
        assert_eq!(host.timers.pending(), 0);
        host.timers.advance(500);
        assert_eq!(host.revealed(), vec![("one", 0), ("two", 100)]);
    }

    #[test]
    fn observe_after_teardown_is_ignored() {
        let host = FakeReveals::default();
        let tracker = ViewportRevealTracker::new(host.clone());
        tracker.teardown();
        tracker.observe("late", RevealMode::Single);
        assert!(!host.is_watched("late"));
    }
}
