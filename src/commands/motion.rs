//! Page motion commands
//!
//! Card tilt, section scrolling and background drift, rendered as the
//! values a page would apply.

use crate::capture::input::types::PointerPosition;
use crate::config::{ScrollConfig, TiltConfig};
use crate::processing::drift::{DriftAnimation, DriftTransform};
use crate::processing::scroll::{scroll_target, SmoothScroll};
use crate::processing::tilt::{tilt_transform, CardTransform, Rect};
use serde::Serialize;

/// Upper bound on frames produced by a scroll plan
const MAX_SCROLL_FRAMES: usize = 600;

/// Upper bound on frames produced by a drift sampling run
pub const MAX_DRIFT_FRAMES: usize = 100_000;

/// Which background blob to sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DriftLayer {
    Primary,
    Secondary,
}

impl DriftLayer {
    fn animation(self) -> DriftAnimation {
        match self {
            DriftLayer::Primary => DriftAnimation::primary(),
            DriftLayer::Secondary => DriftAnimation::secondary(),
        }
    }
}

/// Tilt for a pointer over a card, or the reset transform when the
/// pointer is absent (pointer-leave)
pub fn card_tilt(pointer: Option<PointerPosition>, rect: &Rect, config: &TiltConfig) -> CardTransform {
    match pointer {
        Some(pointer) => tilt_transform(pointer, rect, config),
        None => CardTransform::IDENTITY,
    }
}

/// Per-frame scroll positions from `scroll_y` to a section
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollPlan {
    pub target: f64,
    pub positions: Vec<f64>,
}

pub fn scroll_plan(element_top: Option<f64>, scroll_y: f64, config: &ScrollConfig) -> Option<ScrollPlan> {
    let target = scroll_target(element_top, scroll_y, config.header_offset)?;

    let mut scroll = SmoothScroll::new(scroll_y, config.speed);
    scroll.scroll_to(target);

    let mut positions = Vec::new();
    while scroll.is_animating() && positions.len() < MAX_SCROLL_FRAMES {
        positions.push(scroll.tick());
    }

    tracing::info!("Scroll to {} takes {} frames", target, positions.len());
    Some(ScrollPlan { target, positions })
}

/// Drift transforms sampled at `fps` over `duration_secs`
pub fn drift_frames(layer: DriftLayer, fps: f64, duration_secs: f64) -> anyhow::Result<Vec<DriftTransform>> {
    anyhow::ensure!(fps.is_finite() && fps > 0.0, "fps must be positive, got {}", fps);
    anyhow::ensure!(
        duration_secs.is_finite() && duration_secs >= 0.0,
        "duration must be non-negative, got {}",
        duration_secs
    );

    let count = (duration_secs * fps).floor() + 1.0;
    anyhow::ensure!(
        count <= MAX_DRIFT_FRAMES as f64,
        "{}s at {}fps exceeds {} drift frames",
        duration_secs,
        fps,
        MAX_DRIFT_FRAMES
    );

    let animation = layer.animation();
    let count = count as usize;
    Ok((0..count).map(|i| animation.sample(i as f64 / fps)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_tilt_leave_resets() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let hovered = card_tilt(Some(PointerPosition::new(100.0, 0.0)), &rect, &TiltConfig::default());
        assert_eq!((hovered.translate_x, hovered.translate_y), (6.0, -4.0));

        let left = card_tilt(None, &rect, &TiltConfig::default());
        assert!(left.is_identity());
    }

    #[test]
    fn test_scroll_plan_ends_on_target() {
        let plan = scroll_plan(Some(800.0), 0.0, &ScrollConfig::default()).unwrap();
        assert_eq!(plan.target, 704.0);
        assert_eq!(plan.positions.last(), Some(&704.0));
        assert!(plan.positions.len() < MAX_SCROLL_FRAMES);
    }

    #[test]
    fn test_scroll_plan_missing_section() {
        assert!(scroll_plan(None, 0.0, &ScrollConfig::default()).is_none());
    }

    #[test]
    fn test_drift_frames() {
        let frames = drift_frames(DriftLayer::Primary, 2.0, 7.0).unwrap();
        assert_eq!(frames.len(), 15);
        assert_eq!(frames[0], DriftTransform::REST);
        assert!((frames[14].translate_y + 18.0).abs() < 1e-6);

        assert!(drift_frames(DriftLayer::Secondary, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_drift_frames_are_bounded() {
        let err = drift_frames(DriftLayer::Primary, 60.0, 1e300).unwrap_err();
        assert!(err.to_string().contains("drift frames"));
        assert!(drift_frames(DriftLayer::Primary, 1e300, 1.0).is_err());

        let at_cap = drift_frames(DriftLayer::Primary, 1.0, (MAX_DRIFT_FRAMES - 1) as f64).unwrap();
        assert_eq!(at_cap.len(), MAX_DRIFT_FRAMES);
    }
}
