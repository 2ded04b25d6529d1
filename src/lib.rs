//! Cursor Trail - decorative pointer motion, made simple.
//!
//! A pointer-following cursor trail plus the small motion effects that
//! accompany it on a page: card hover tilt, section scrolling and
//! background drift. Rendering is left to the host through the traits in
//! [`animator::host`].

pub mod animator;
pub mod capture;
pub mod commands;
pub mod config;
pub mod host;
pub mod processing;

pub use animator::{TrailAnimator, TrailError, TrailHost, TrailResult};
pub use config::TrailConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging
///
/// Reads the filter from `RUST_LOG`, defaulting to `cursor_trail=info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cursor_trail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
