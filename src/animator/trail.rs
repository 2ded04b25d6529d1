//! Pointer-following trail animator
//!
//! Moves a fixed number of markers so they trail the pointer with a springy
//! lag. Marker 0 follows the pointer; every later marker follows the one
//! ahead of it, using that marker's position as already updated in the
//! same tick.

use crate::animator::host::{
    FrameRequest, FrameScheduler, MarkerLayer, MarkerSample, PointerSource, TrailError, TrailHost,
    TrailResult,
};
use crate::capture::input::types::PointerPosition;
use crate::config::TrailConfig;
use crate::processing::smoothing::Smoother2D;

/// Ordered marker positions, head first
#[derive(Debug, Clone, PartialEq)]
pub struct TrailState {
    markers: Vec<Smoother2D>,
}

impl TrailState {
    /// Create `count` markers at the sentinel position
    pub fn new(count: usize, sentinel: PointerPosition) -> Self {
        Self {
            markers: vec![Smoother2D::new(sentinel.x, sentinel.y); count],
        }
    }

    /// Advance every marker one frame toward its target
    pub fn advance(&mut self, pointer: PointerPosition, factor: f64) {
        let (mut target_x, mut target_y) = (pointer.x, pointer.y);
        for marker in &mut self.markers {
            marker.step(target_x, target_y, factor);
            (target_x, target_y) = marker.position();
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Position of the marker at `index`
    pub fn position(&self, index: usize) -> Option<(f64, f64)> {
        self.markers.get(index).map(Smoother2D::position)
    }

    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.markers.iter().map(Smoother2D::position)
    }

    /// Check if every marker is within `threshold` of the pointer
    pub fn is_settled(&self, pointer: PointerPosition, threshold: f64) -> bool {
        self.markers
            .iter()
            .all(|m| m.is_settled(pointer.x, pointer.y, threshold))
    }

    /// Samples to push to the sinks for the current positions
    pub fn samples<'a>(&'a self, config: &'a TrailConfig) -> impl Iterator<Item = MarkerSample> + 'a {
        self.positions().enumerate().map(|(index, (x, y))| MarkerSample {
            index,
            x,
            y,
            scale: config.scale_at(index),
            opacity: config.opacity_at(index),
        })
    }
}

pub struct TrailAnimator {
    config: TrailConfig,
    pointer: PointerPosition,
    state: Option<TrailState>,
    pending_frame: Option<FrameRequest>,

    pointer_source: Box<dyn PointerSource>,
    scheduler: Box<dyn FrameScheduler>,
    layer: Box<dyn MarkerLayer>,
}

impl TrailAnimator {
    /// Validate the configuration and bind the host collaborators.
    ///
    /// Nothing is attached or scheduled until [`start`](Self::start).
    pub fn new(config: TrailConfig, host: TrailHost) -> TrailResult<Self> {
        config.validate()?;

        Ok(Self {
            pointer: config.sentinel,
            config,
            state: None,
            pending_frame: None,
            pointer_source: host.pointer,
            scheduler: host.frames,
            layer: host.markers,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Last recorded pointer position
    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Marker positions while running
    pub fn state(&self) -> Option<&TrailState> {
        self.state.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    /// Record the latest pointer position.
    ///
    /// Samples arriving while stopped are dropped, as are samples that are
    /// non-finite or beyond
    /// [`COORDINATE_LIMIT`](crate::capture::input::types::COORDINATE_LIMIT).
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.state.is_none() {
            return;
        }
        let pointer = PointerPosition::new(x, y);
        if !pointer.is_in_range() {
            tracing::trace!("Dropping out-of-range pointer sample ({}, {})", x, y);
            return;
        }
        self.pointer = pointer;
    }

    /// Advance one display frame and push the result to the marker sinks.
    ///
    /// Does nothing unless a frame request is pending, so no tick runs
    /// after [`stop`](Self::stop).
    pub fn tick(&mut self) {
        if self.pending_frame.take().is_none() {
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.advance(self.pointer, self.config.smoothing_factor);

        for sample in state.samples(&self.config) {
            if !self.layer.render(sample.index, &sample) {
                tracing::trace!("No sink for marker {}, skipping", sample.index);
            }
        }

        self.pending_frame = Some(self.scheduler.request_frame());
    }

    /// Attach the marker sinks, subscribe to pointer events and schedule
    /// the first tick.
    pub fn start(&mut self) -> TrailResult<()> {
        if self.is_running() {
            return Err(TrailError::AlreadyRunning);
        }

        let count = self.config.trail_count;
        self.layer.attach(count);
        self.pointer_source.subscribe();

        self.pointer = self.config.sentinel;
        self.state = Some(TrailState::new(count, self.config.sentinel));
        self.pending_frame = Some(self.scheduler.request_frame());

        tracing::debug!(
            "Trail animator started (markers={}, smoothing={})",
            count,
            self.config.smoothing_factor
        );
        Ok(())
    }

    /// Cancel the pending tick, unsubscribe and release the marker sinks.
    ///
    /// Safe to call when never started, and more than once.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }

        if let Some(request) = self.pending_frame.take() {
            self.scheduler.cancel_frame(request);
        }
        self.pointer_source.unsubscribe();
        self.layer.detach();
        self.state = None;

        tracing::debug!("Trail animator stopped");
    }
}

impl Drop for TrailAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for TrailAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrailAnimator")
            .field("config", &self.config)
            .field("pointer", &self.pointer)
            .field("state", &self.state)
            .field("pending_frame", &self.pending_frame)
            .finish_non_exhaustive()
    }
}
