//! Host collaborator traits
//!
//! Defines the interfaces the trail animator consumes from its host
//! (pointer events, frame scheduling, marker rendering) and the error
//! taxonomy for animator operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when configuring or starting an animator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrailError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Already running")]
    AlreadyRunning,
}

/// Result type for animator operations
pub type TrailResult<T> = Result<T, TrailError>;

/// Computed visual state of one marker for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerSample {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Token identifying one pending frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Source of pointer-move events.
///
/// While subscribed the host forwards samples to
/// [`TrailAnimator::on_pointer_move`](super::TrailAnimator::on_pointer_move).
pub trait PointerSource: Send {
    /// Begin delivering pointer samples
    fn subscribe(&mut self);

    /// Stop delivering pointer samples
    fn unsubscribe(&mut self);
}

/// "Run this before the next repaint" primitive.
///
/// The host calls [`TrailAnimator::tick`](super::TrailAnimator::tick) once for
/// every request that was not cancelled.
pub trait FrameScheduler: Send {
    /// Request one callback before the next repaint
    fn request_frame(&mut self) -> FrameRequest;

    /// Cancel a pending request
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Receiver of one marker's computed position, scale and opacity
pub trait MarkerSink: Send {
    fn apply(&mut self, sample: &MarkerSample);
}

/// The set of per-marker sinks
pub trait MarkerLayer: Send {
    /// Create or attach `count` marker sinks
    fn attach(&mut self, count: usize);

    /// Push a sample to the sink at `index`.
    ///
    /// Returns `false` when no sink exists for that index.
    fn render(&mut self, index: usize, sample: &MarkerSample) -> bool;

    /// Release every attached sink
    fn detach(&mut self);
}

/// Collaborators handed to an animator at construction
pub struct TrailHost {
    pub pointer: Box<dyn PointerSource>,
    pub frames: Box<dyn FrameScheduler>,
    pub markers: Box<dyn MarkerLayer>,
}

impl TrailHost {
    pub fn new(
        pointer: impl PointerSource + 'static,
        frames: impl FrameScheduler + 'static,
        markers: impl MarkerLayer + 'static,
    ) -> Self {
        Self {
            pointer: Box::new(pointer),
            frames: Box::new(frames),
            markers: Box::new(markers),
        }
    }
}

impl std::fmt::Debug for TrailHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrailHost").finish_non_exhaustive()
    }
}
