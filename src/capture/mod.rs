//! Host input capture
//!
//! This module provides the pointer-event source consumed by the trail animator.

pub mod input;

pub use input::{PointerChannel, PointerFeed, PointerPosition, PointerSample};
