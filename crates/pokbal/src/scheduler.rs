//! Frame scheduling on top of the crossterm event poll.

use std::time::{Duration, Instant};

use pokbal_field::{FrameHandle, FrameScheduler};

/// How long to wait for input when no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Single-slot scheduler firing one frame per interval.
#[derive(Debug)]
pub struct TickScheduler {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    /// Consume the pending frame if its deadline has passed.
    pub fn take_due(&mut self) -> bool {
        self.take_due_at(Instant::now())
    }

    fn take_due_at(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((_, deadline)) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Time until the pending frame is due, for the event poll timeout.
    pub fn timeout(&self) -> Duration {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
    }
}

impl FrameScheduler for TickScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);
        self.pending = Some((handle, Instant::now() + self.interval));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(self.pending, Some((h, _)) if h == handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_cancel() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(16));
        let first = scheduler.request_frame();
        assert!(scheduler.pending.is_some());

        scheduler.cancel_frame(FrameHandle(first.0 + 100));
        assert!(scheduler.pending.is_some());

        scheduler.cancel_frame(first);
        assert!(!scheduler.pending.is_some());
        assert_eq!(scheduler.timeout(), IDLE_POLL);
    }

    #[test]
    fn test_frame_fires_once_after_deadline() {
        let mut scheduler = TickScheduler::new(Duration::from_secs(60));
        scheduler.request_frame();
        let now = Instant::now();
        assert!(!scheduler.take_due_at(now));
        assert!(scheduler.take_due_at(now + Duration::from_secs(61)));
        assert!(!scheduler.take_due_at(now + Duration::from_secs(62)));
    }

    #[test]
    fn test_handles_are_unique() {
        let mut scheduler = TickScheduler::new(Duration::ZERO);
        let a = scheduler.request_frame();
        let b = scheduler.request_frame();
        assert_ne!(a, b);
        assert!(scheduler.take_due());
    }
}
