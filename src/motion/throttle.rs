/// Coalesces bursts of events into at most one unit of work per frame.
///
/// Every event is recorded, but only the first one after a frame has been
/// processed asks the caller to schedule a new frame. When that frame runs,
/// [`FrameThrottle::take`] hands back the most recent value.
#[derive(Debug)]
pub struct FrameThrottle<T> {
    pending: bool,
    latest: Option<T>,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self { pending: false, latest: None }
    }
}

impl<T> FrameThrottle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` as the latest sample. Returns `true` when the caller
    /// has to schedule a frame.
    pub fn record(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from inside the frame. Clears the pending flag.
    pub fn take(&mut self) -> Option<T> {
        self.pending = false;
        self.latest.take()
    }

    pub fn cancel(&mut self) {
        self.pending = false;
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_requests_a_frame() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.record(1.0));
        assert!(!throttle.record(2.0));
    }

    #[test]
    fn burst_requests_one_frame_and_keeps_last_value() {
        let mut throttle = FrameThrottle::new();
        let requested = (0..50).filter(|i| throttle.record(*i as f64)).count();
        assert_eq!(requested, 1);
        assert_eq!(throttle.take(), Some(49.0));
        assert_eq!(throttle.take(), None);
    }

    #[test]
    fn next_event_after_frame_schedules_again() {
        let mut throttle = FrameThrottle::new();
        throttle.record(10);
        throttle.take();
        assert!(throttle.record(20));
        assert_eq!(throttle.take(), Some(20));
    }

    #[test]
    fn cancel_drops_pending_sample() {
        let mut throttle = FrameThrottle::new();
        throttle.record("a");
        throttle.cancel();
        assert_eq!(throttle.take(), None);
        assert!(throttle.record("b"));
    }
}
