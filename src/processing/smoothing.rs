//! Exponential smoothing for pointer-following motion
//!
//! Each step closes a fixed fraction of the remaining distance to the
//! target. This is a discrete-time low-pass filter whose time constant is
//! `-1 / ln(1 - factor)` frames.

/// 1D smoothing state tracking a single coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingState {
    pub position: f64,
}

impl SmoothingState {
    /// Create a new state at the given position
    pub fn new(initial: f64) -> Self {
        Self { position: initial }
    }

    /// Advance one frame toward the target
    ///
    /// `position += (target - position) * factor`
    pub fn step(&mut self, target: f64, factor: f64) {
        self.position += (target - self.position) * factor;
    }

    /// Check if the position is within `threshold` of the target
    pub fn is_settled(&self, target: f64, threshold: f64) -> bool {
        (self.position - target).abs() < threshold
    }
}

/// 2D smoothing state for a point (X and Y axes)
#[derive(Debug, Clone, PartialEq)]
pub struct Smoother2D {
    pub x: SmoothingState,
    pub y: SmoothingState,
}

impl Smoother2D {
    /// Create a new 2D smoother at the given position
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: SmoothingState::new(x),
            y: SmoothingState::new(y),
        }
    }

    /// Advance both axes toward the target position
    pub fn step(&mut self, target_x: f64, target_y: f64, factor: f64) {
        self.x.step(target_x, factor);
        self.y.step(target_y, factor);
    }

    /// Get the current smoothed position
    pub fn position(&self) -> (f64, f64) {
        (self.x.position, self.y.position)
    }

    /// Jump to a new position
    pub fn reset(&mut self, x: f64, y: f64) {
        self.x = SmoothingState::new(x);
        self.y = SmoothingState::new(y);
    }

    /// Check if both axes have settled
    pub fn is_settled(&self, target_x: f64, target_y: f64, threshold: f64) -> bool {
        self.x.is_settled(target_x, threshold) && self.y.is_settled(target_y, threshold)
    }
}

/// Time constant, in frames, of smoothing with the given factor.
///
/// A factor of 1 snaps immediately and has a time constant of 0.
pub fn time_constant_frames(factor: f64) -> f64 {
    if factor >= 1.0 {
        return 0.0;
    }
    -1.0 / (1.0 - factor).ln()
}
