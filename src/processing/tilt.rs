//! Card hover tilt
//!
//! Leans a card toward the pointer while it hovers. Purely a function of the
//! current pointer position and the card's bounding box.

use crate::capture::input::types::PointerPosition;
use crate::config::TiltConfig;
use serde::{Deserialize, Serialize};

/// Element bounding box in viewport space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// 2D transform applied to a card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// CSS `transform` value; empty for the identity
    pub fn to_css(&self) -> String {
        if self.is_identity() {
            return String::new();
        }
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Transform for a pointer hovering over `rect`
pub fn tilt_transform(pointer: PointerPosition, rect: &Rect, config: &TiltConfig) -> CardTransform {
    if !(rect.width > 0.0 && rect.height > 0.0) || !pointer.is_finite() {
        return CardTransform::IDENTITY;
    }

    let rx = ((pointer.x - rect.left) / rect.width).clamp(0.0, 1.0);
    let ry = ((pointer.y - rect.top) / rect.height).clamp(0.0, 1.0);

    CardTransform {
        translate_x: (rx - 0.5) * 2.0 * config.shift_x,
        translate_y: (ry - 0.5) * 2.0 * config.shift_y,
        scale: config.hover_scale,
    }
}

/// Transform once the pointer leaves the card
pub fn reset_transform() -> CardTransform {
    CardTransform::IDENTITY
}
