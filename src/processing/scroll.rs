//! Section scrolling
//!
//! Computes where the page should scroll to bring a section just below the
//! fixed header, and eases the scroll position there frame by frame.

use crate::processing::smoothing::SmoothingState;

/// Default height kept clear for the fixed header, in pixels
pub const DEFAULT_HEADER_OFFSET: f64 = 96.0;

/// Distance at which smooth scrolling snaps to its target, in pixels
const SNAP_DISTANCE: f64 = 0.5;

/// Document scroll position that puts a section `offset` pixels below the
/// top of the viewport.
///
/// `element_top` is the section's top relative to the viewport and
/// `scroll_y` the current scroll position. `None` (no such section) means
/// no scroll.
pub fn scroll_target(element_top: Option<f64>, scroll_y: f64, offset: f64) -> Option<f64> {
    let top = element_top?;
    let target = top + scroll_y - offset;
    target.is_finite().then(|| target.max(0.0))
}

/// Exponential ease toward a scroll target
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    state: SmoothingState,
    target: f64,
    speed: f64,
}

impl SmoothScroll {
    /// `speed` is the fraction of the remaining distance covered per frame
    pub fn new(position: f64, speed: f64) -> Self {
        Self {
            state: SmoothingState::new(position),
            target: position,
            speed: speed.clamp(0.01, 1.0),
        }
    }

    pub fn scroll_to(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Advance one frame and return the new scroll position
    pub fn tick(&mut self) -> f64 {
        self.state.step(self.target, self.speed);
        if self.state.is_settled(self.target, SNAP_DISTANCE) {
            self.state.position = self.target;
        }
        self.state.position
    }

    pub fn position(&self) -> f64 {
        self.state.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.state.position != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_accounts_for_header() {
        assert_eq!(scroll_target(Some(500.0), 1000.0, DEFAULT_HEADER_OFFSET), Some(1404.0));
    }

    #[test]
    fn test_target_never_negative() {
        assert_eq!(scroll_target(Some(20.0), 0.0, DEFAULT_HEADER_OFFSET), Some(0.0));
    }

    #[test]
    fn test_missing_section_does_not_scroll() {
        assert_eq!(scroll_target(None, 300.0, DEFAULT_HEADER_OFFSET), None);
        assert_eq!(scroll_target(Some(f64::NAN), 300.0, DEFAULT_HEADER_OFFSET), None);
    }

    #[test]
    fn test_smooth_scroll_settles_on_target() {
        let mut scroll = SmoothScroll::new(0.0, 0.2);
        assert!(!scroll.is_animating());

        scroll.scroll_to(1404.0);
        assert!(scroll.is_animating());

        let mut last = 0.0;
        for _ in 0..200 {
            let pos = scroll.tick();
            assert!(pos >= last && pos <= 1404.0);
            last = pos;
        }
        assert_eq!(scroll.position(), 1404.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_retarget_mid_scroll() {
        let mut scroll = SmoothScroll::new(0.0, 0.5);
        scroll.scroll_to(1000.0);
        assert_eq!(scroll.tick(), 500.0);

        scroll.scroll_to(0.0);
        assert_eq!(scroll.tick(), 250.0);
        assert_eq!(scroll.target(), 0.0);
    }
}
