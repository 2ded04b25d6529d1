//! Pointer input
//!
//! Pointer coordinate types plus a thread-safe, last-sample-wins channel
//! that hosts feed from their input-event path.

pub mod channel;
pub mod types;

pub use channel::{PointerChannel, PointerFeed};
pub use types::{PointerPosition, PointerSample};
