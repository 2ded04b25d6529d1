use crate::animator::host::{FrameRequest, FrameScheduler};
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ClockState {
    pending: Option<FrameRequest>,
    requested: u64,
    cancelled: u64,
}

/// Frame scheduler for hosts that drive ticks from their own loop.
///
/// Tracks the single outstanding request; the driving loop observes it
/// through a [`FrameClockHandle`].
#[derive(Debug, Default)]
pub struct FrameClock {
    next_id: u64,
    state: Arc<ParkingMutex<ClockState>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> FrameClockHandle {
        FrameClockHandle {
            state: self.state.clone(),
        }
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);

        let mut state = self.state.lock();
        state.pending = Some(request);
        state.requested += 1;
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let mut state = self.state.lock();
        if state.pending == Some(request) {
            state.pending = None;
            state.cancelled += 1;
        }
    }
}

/// Read-only view of a [`FrameClock`]
#[derive(Debug, Clone)]
pub struct FrameClockHandle {
    state: Arc<ParkingMutex<ClockState>>,
}

impl FrameClockHandle {
    /// The outstanding frame request, if any
    pub fn pending(&self) -> Option<FrameRequest> {
        self.state.lock().pending
    }

    /// Total number of frames requested
    pub fn requested(&self) -> u64 {
        self.state.lock().requested
    }

    /// Total number of requests cancelled before they ran
    pub fn cancelled(&self) -> u64 {
        self.state.lock().cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_replaces_pending() {
        let mut clock = FrameClock::new();
        let handle = clock.handle();

        let first = clock.request_frame();
        let second = clock.request_frame();
        assert_ne!(first, second);
        assert_eq!(handle.pending(), Some(second));
        assert_eq!(handle.requested(), 2);
    }

    #[test]
    fn test_cancel_only_matches_pending() {
        let mut clock = FrameClock::new();
        let handle = clock.handle();

        let stale = clock.request_frame();
        let current = clock.request_frame();
        clock.cancel_frame(stale);
        assert_eq!(handle.pending(), Some(current));
        assert_eq!(handle.cancelled(), 0);

        clock.cancel_frame(current);
        clock.cancel_frame(current);
        assert_eq!(handle.pending(), None);
        assert_eq!(handle.cancelled(), 1);
    }
}
