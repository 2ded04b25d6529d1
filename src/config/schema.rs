//! Configuration schema
//!
//! Every field has a default so partial JSON files are accepted.

use crate::animator::host::{TrailError, TrailResult};
use crate::capture::input::types::{PointerPosition, COORDINATE_LIMIT};
use crate::processing::scroll::DEFAULT_HEADER_OFFSET;
use serde::{Deserialize, Serialize};

/// Slowest frame rate accepted for the live loop and replay
pub const MIN_FRAME_RATE: f64 = 1.0;
/// Fastest frame rate accepted for the live loop and replay
pub const MAX_FRAME_RATE: f64 = 1000.0;

/// Trail animator parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailConfig {
    /// Number of markers
    pub trail_count: usize,
    /// Fraction of the remaining distance closed each frame, in (0, 1]
    pub smoothing_factor: f64,
    /// Scale reduction per trailing index
    pub scale_falloff: f64,
    /// Opacity reduction per trailing index
    pub opacity_falloff: f64,
    /// Opacity of the head marker
    pub base_opacity: f64,
    /// Off-screen position used before the first pointer sample
    pub sentinel: PointerPosition,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            trail_count: 8,
            smoothing_factor: 0.35,
            scale_falloff: 0.08,
            opacity_falloff: 0.1,
            base_opacity: 0.95,
            sentinel: PointerPosition::new(-100.0, -100.0),
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> TrailResult<()> {
        if self.trail_count < 1 {
            return Err(TrailError::InvalidConfiguration(
                "trailCount must be at least 1".to_string(),
            ));
        }
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(TrailError::InvalidConfiguration(format!(
                "smoothingFactor must be in (0, 1], got {}",
                self.smoothing_factor
            )));
        }
        for (name, value) in [
            ("scaleFalloff", self.scale_falloff),
            ("opacityFalloff", self.opacity_falloff),
            ("baseOpacity", self.base_opacity),
        ] {
            if !value.is_finite() {
                return Err(TrailError::InvalidConfiguration(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if !self.sentinel.is_in_range() {
            return Err(TrailError::InvalidConfiguration(format!(
                "sentinel must be finite and within {} on both axes",
                COORDINATE_LIMIT
            )));
        }
        Ok(())
    }

    /// Scale of the marker at `index`, never negative
    pub fn scale_at(&self, index: usize) -> f64 {
        (1.0 - index as f64 * self.scale_falloff).max(0.0)
    }

    /// Opacity of the marker at `index`, within [0, 1]
    pub fn opacity_at(&self, index: usize) -> f64 {
        (self.base_opacity - index as f64 * self.opacity_falloff).clamp(0.0, 1.0)
    }
}

/// Card hover tilt parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TiltConfig {
    /// Horizontal lean at the card edge, in pixels
    pub shift_x: f64,
    /// Vertical lean at the card edge, in pixels
    pub shift_y: f64,
    /// Scale applied while hovered
    pub hover_scale: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            shift_x: 6.0,
            shift_y: 4.0,
            hover_scale: 1.02,
        }
    }
}

/// Section scrolling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollConfig {
    /// Height of the fixed header kept clear above a section
    pub header_offset: f64,
    /// Smoothing factor for smooth scrolling
    pub speed: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
            speed: 0.2,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub trail: TrailConfig,
    pub tilt: TiltConfig,
    pub scroll: ScrollConfig,
    /// Frames per second for the live frame loop and replay
    pub frame_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            trail: TrailConfig::default(),
            tilt: TiltConfig::default(),
            scroll: ScrollConfig::default(),
            frame_rate: 60.0,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> TrailResult<()> {
        self.trail.validate()?;
        if !(MIN_FRAME_RATE..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(TrailError::InvalidConfiguration(format!(
                "frameRate must be within {}..={}, got {}",
                MIN_FRAME_RATE, MAX_FRAME_RATE, self.frame_rate
            )));
        }
        if !(self.scroll.speed > 0.0 && self.scroll.speed <= 1.0) {
            return Err(TrailError::InvalidConfiguration(format!(
                "scroll.speed must be in (0, 1], got {}",
                self.scroll.speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_trail_count_rejected() {
        let config = TrailConfig {
            trail_count: 0,
            ..TrailConfig::default()
        };
        assert!(matches!(config.validate(), Err(TrailError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_smoothing_factor_bounds() {
        for factor in [0.0, -0.5, 1.5, f64::NAN] {
            let config = TrailConfig {
                smoothing_factor: factor,
                ..TrailConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(TrailError::InvalidConfiguration(_))),
                "factor {} should be rejected",
                factor
            );
        }

        let snap = TrailConfig {
            smoothing_factor: 1.0,
            ..TrailConfig::default()
        };
        assert!(snap.validate().is_ok());
    }

    #[test]
    fn test_non_finite_sentinel_rejected() {
        let config = TrailConfig {
            sentinel: PointerPosition::new(f64::INFINITY, 0.0),
            ..TrailConfig::default()
        };
        assert!(config.validate().is_err());

        let far = TrailConfig {
            sentinel: PointerPosition::new(-f64::MAX, 0.0),
            ..TrailConfig::default()
        };
        assert!(matches!(far.validate(), Err(TrailError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_frame_rate_bounds() {
        for json in [
            r#"{"frameRate": 1e300}"#,
            r#"{"frameRate": 1e-300}"#,
            r#"{"frameRate": 0}"#,
            r#"{"frameRate": 1000.5}"#,
        ] {
            let config: AppConfig = serde_json::from_str(json).unwrap();
            assert!(
                matches!(config.validate(), Err(TrailError::InvalidConfiguration(_))),
                "{} should be rejected",
                json
            );
        }

        for rate in [MIN_FRAME_RATE, 144.0, MAX_FRAME_RATE] {
            let config = AppConfig {
                frame_rate: rate,
                ..AppConfig::default()
            };
            assert!(config.validate().is_ok(), "{} should be accepted", rate);
        }
    }

    #[test]
    fn test_falloff_is_monotonic() {
        let config = TrailConfig::default();
        for i in 0..config.trail_count - 1 {
            assert!(config.scale_at(i) > config.scale_at(i + 1));
            assert!(config.opacity_at(i) > config.opacity_at(i + 1));
        }
        assert_eq!(config.scale_at(0), 1.0);
        assert_eq!(config.opacity_at(0), 0.95);
    }

    #[test]
    fn test_falloff_is_clamped() {
        let config = TrailConfig {
            trail_count: 30,
            ..TrailConfig::default()
        };
        assert_eq!(config.scale_at(20), 0.0);
        assert_eq!(config.opacity_at(20), 0.0);

        let bright = TrailConfig {
            base_opacity: 1.5,
            ..TrailConfig::default()
        };
        assert_eq!(bright.opacity_at(0), 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"trail": {"trailCount": 3, "smoothingFactor": 0.5}}"#).unwrap();
        assert_eq!(config.trail.trail_count, 3);
        assert_eq!(config.trail.smoothing_factor, 0.5);
        assert_eq!(config.trail.scale_falloff, 0.08);
        assert_eq!(config.tilt, TiltConfig::default());
        assert_eq!(config.frame_rate, 60.0);
    }
}
