//! In-process host collaborators
//!
//! Concrete frame scheduling, marker layers and a tokio frame loop for
//! hosts that do not bring their own.

pub mod frame_clock;
pub mod markers;
pub mod runtime;

pub use frame_clock::{FrameClock, FrameClockHandle};
pub use markers::{MarkerBuffer, MarkerSnapshot, SinkLayer};
pub use runtime::run_trail;
