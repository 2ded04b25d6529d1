//! Motion processing
//!
//! Smoothing primitives and the page motion effects built on them: trail
//! replay, card tilt, section scrolling and background drift.

pub mod drift;
pub mod scroll;
pub mod smoothing;
pub mod tilt;
pub mod trail_replay;

pub use drift::{DriftAnimation, DriftTransform};
pub use scroll::{scroll_target, SmoothScroll};
pub use smoothing::{Smoother2D, SmoothingState};
pub use tilt::{tilt_transform, CardTransform, Rect};
pub use trail_replay::{replay_trail, TrailFrame};
