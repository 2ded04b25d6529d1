//! Trail animation
//!
//! The animator and the host interfaces it consumes.

pub mod host;
pub mod trail;

pub use host::{
    FrameRequest, FrameScheduler, MarkerLayer, MarkerSample, MarkerSink, PointerSource, TrailError,
    TrailHost, TrailResult,
};
pub use trail::{TrailAnimator, TrailState};
