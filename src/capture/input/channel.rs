use crate::animator::host::PointerSource;
use crate::capture::input::types::PointerPosition;
use parking_lot::Mutex as ParkingMutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct PointerShared {
    subscribed: AtomicBool,
    latest: ParkingMutex<Option<PointerPosition>>,
    received: AtomicU64,
}

/// Pointer-event source backed by a single latest-sample slot.
///
/// The animator owns the channel and toggles the subscription; the host's
/// input path (possibly another thread) writes through a [`PointerFeed`].
/// Samples written between two frames overwrite each other.
#[derive(Debug, Default)]
pub struct PointerChannel {
    shared: Arc<PointerShared>,
}

impl PointerChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&self) -> PointerFeed {
        PointerFeed {
            shared: self.shared.clone(),
        }
    }
}

impl PointerSource for PointerChannel {
    fn subscribe(&mut self) {
        self.shared.subscribed.store(true, Ordering::SeqCst);
        tracing::debug!("Pointer channel subscribed");
    }

    fn unsubscribe(&mut self) {
        self.shared.subscribed.store(false, Ordering::SeqCst);
        self.shared.latest.lock().take();
        tracing::debug!(
            "Pointer channel unsubscribed (received={})",
            self.shared.received.load(Ordering::Relaxed)
        );
    }
}

/// Writer and drain handle for a [`PointerChannel`]
#[derive(Debug, Clone)]
pub struct PointerFeed {
    shared: Arc<PointerShared>,
}

impl PointerFeed {
    /// Record a pointer move.
    ///
    /// Returns `false` when nobody is subscribed and the sample was dropped.
    pub fn move_to(&self, x: f64, y: f64) -> bool {
        if !self.shared.subscribed.load(Ordering::SeqCst) {
            return false;
        }
        *self.shared.latest.lock() = Some(PointerPosition::new(x, y));
        self.shared.received.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Take the most recent sample, if one arrived since the last call
    pub fn take_latest(&self) -> Option<PointerPosition> {
        self.shared.latest.lock().take()
    }

    pub fn is_subscribed(&self) -> bool {
        self.shared.subscribed.load(Ordering::SeqCst)
    }

    /// Total samples accepted while subscribed
    pub fn received(&self) -> u64 {
        self.shared.received.load(Ordering::Relaxed)
    }
}
