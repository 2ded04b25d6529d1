//! Background drift
//!
//! Two blurred background blobs drift out and back forever. Each loop has
//! three keyframes (rest, offset, rest) with CSS `ease-in-out` timing
//! between them.

use serde::{Deserialize, Serialize};

/// Translation and scale of a drifting element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl DriftTransform {
    pub const REST: DriftTransform = DriftTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    fn lerp(&self, other: &DriftTransform, t: f64) -> DriftTransform {
        DriftTransform {
            translate_x: self.translate_x + (other.translate_x - self.translate_x) * t,
            translate_y: self.translate_y + (other.translate_y - self.translate_y) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translateY({}px) translateX({}px) scale({})",
            self.translate_y, self.translate_x, self.scale
        )
    }
}

/// Looping rest → peak → rest animation
#[derive(Debug, Clone, PartialEq)]
pub struct DriftAnimation {
    pub period_secs: f64,
    pub peak: DriftTransform,
}

impl DriftAnimation {
    /// The upper-left blob: 14s loop
    pub fn primary() -> Self {
        Self {
            period_secs: 14.0,
            peak: DriftTransform {
                translate_x: 10.0,
                translate_y: -18.0,
                scale: 1.02,
            },
        }
    }

    /// The lower-right blob: 18s loop
    pub fn secondary() -> Self {
        Self {
            period_secs: 18.0,
            peak: DriftTransform {
                translate_x: -10.0,
                translate_y: 16.0,
                scale: 1.01,
            },
        }
    }

    /// Transform at `elapsed_secs` since the animation began
    pub fn sample(&self, elapsed_secs: f64) -> DriftTransform {
        if !(self.period_secs > 0.0) || !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return DriftTransform::REST;
        }

        let progress = (elapsed_secs % self.period_secs) / self.period_secs;
        if progress < 0.5 {
            DriftTransform::REST.lerp(&self.peak, ease_in_out(progress * 2.0))
        } else {
            self.peak.lerp(&DriftTransform::REST, ease_in_out((progress - 0.5) * 2.0))
        }
    }
}

/// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`
pub fn ease_in_out(t: f64) -> f64 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, t)
}

/// Evaluate a CSS cubic-bezier timing function at input progress `t`
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    let curve = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    // x(s) is monotonic for control x values in [0, 1]
    let (mut lo, mut hi) = (0.0, 1.0);
    let mut s = t;
    for _ in 0..40 {
        let x = curve(x1, x2, s);
        if (x - t).abs() < 1e-9 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }

    curve(y1, y2, s)
}
