use serde::{Deserialize, Serialize};

/// Largest coordinate magnitude accepted for the pointer and the sentinel.
///
/// Marker positions stay between these values, so the distance between
/// any two of them never overflows.
pub const COORDINATE_LIMIT: f64 = 1.0e9;

/// Pointer coordinate in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Finite and within [`COORDINATE_LIMIT`] on both axes
    pub fn is_in_range(&self) -> bool {
        self.x.abs() <= COORDINATE_LIMIT && self.y.abs() <= COORDINATE_LIMIT
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &PointerPosition) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for PointerPosition {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A recorded pointer sample, as stored in mouse-move capture files.
///
/// Unknown fields (cursor ids, modifiers, wall-clock time) are ignored
/// on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    /// Time in milliseconds from recording start
    pub process_time_ms: f64,
}

impl PointerSample {
    pub fn position(&self) -> PointerPosition {
        PointerPosition::new(self.x, self.y)
    }
}
