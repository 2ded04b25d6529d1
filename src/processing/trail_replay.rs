//! Offline trail replay
//!
//! Runs the trail animator over recorded pointer samples at a fixed output
//! framerate, producing the marker state of every frame for preview and
//! export.

use crate::animator::host::{MarkerSample, TrailError, TrailHost, TrailResult};
use crate::animator::TrailAnimator;
use crate::capture::input::types::{PointerPosition, PointerSample};
use crate::capture::input::PointerChannel;
use crate::config::TrailConfig;
use crate::host::{FrameClock, MarkerBuffer};
use serde::{Deserialize, Serialize};

/// Most frames a single replay may produce (over four hours at 60fps)
pub const MAX_REPLAY_FRAMES: usize = 1_000_000;

/// Trail state for one output frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailFrame {
    /// Output frame index
    pub frame: usize,
    /// Time in milliseconds from recording start
    pub process_time_ms: f64,
    /// Pointer position delivered before this frame's tick
    pub pointer: PointerPosition,
    /// Marker samples, head first
    pub markers: Vec<MarkerSample>,
}

/// Replay recorded pointer samples through the trail animator
///
/// # Arguments
/// * `samples` - Recorded pointer samples, in any order
/// * `config` - Trail configuration
/// * `output_fps` - Target output framerate (e.g., 30.0 or 60.0)
///
/// # Returns
/// One frame per output tick; empty when there are no samples
pub fn replay_trail(
    samples: &[PointerSample],
    config: &TrailConfig,
    output_fps: f64,
) -> TrailResult<Vec<TrailFrame>> {
    if !(output_fps.is_finite() && output_fps > 0.0) {
        return Err(TrailError::InvalidConfiguration(format!(
            "output fps must be positive, got {}",
            output_fps
        )));
    }

    let buffer = MarkerBuffer::new();
    let snapshot = buffer.snapshot();
    let mut animator = TrailAnimator::new(
        config.clone(),
        TrailHost::new(PointerChannel::new(), FrameClock::new(), buffer),
    )?;

    if samples.is_empty() {
        return Ok(vec![]);
    }
    if let Some(bad) = samples.iter().find(|s| !s.process_time_ms.is_finite()) {
        return Err(TrailError::InvalidConfiguration(format!(
            "sample timestamp must be finite, got {}",
            bad.process_time_ms
        )));
    }

    let mut samples: Vec<&PointerSample> = samples.iter().collect();
    samples.sort_by(|a, b| a.process_time_ms.total_cmp(&b.process_time_ms));

    let frame_duration_ms = 1000.0 / output_fps;
    let total_duration_ms = samples.last().map_or(0.0, |s| s.process_time_ms);

    // Always have at least 1 frame for non-empty input
    let frames = (total_duration_ms / frame_duration_ms).ceil().max(1.0);
    if frames > MAX_REPLAY_FRAMES as f64 {
        return Err(TrailError::InvalidConfiguration(format!(
            "replay of {}ms at {}fps exceeds {} frames",
            total_duration_ms, output_fps, MAX_REPLAY_FRAMES
        )));
    }
    let frame_count = frames as usize;

    animator.start()?;

    let mut result = Vec::with_capacity(frame_count);
    let mut sample_index: Option<usize> = None;

    for frame in 0..frame_count {
        let frame_time_ms = frame as f64 * frame_duration_ms;

        // Advance to the latest sample at or before this frame
        let mut next = sample_index.map_or(0, |i| i + 1);
        while next < samples.len() && samples[next].process_time_ms <= frame_time_ms {
            sample_index = Some(next);
            next += 1;
        }

        if let Some(sample) = sample_index.map(|i| samples[i]) {
            animator.on_pointer_move(sample.x, sample.y);
        }
        animator.tick();

        result.push(TrailFrame {
            frame,
            process_time_ms: frame_time_ms,
            pointer: animator.pointer(),
            markers: snapshot.samples(),
        });
    }

    animator.stop();
    Ok(result)
}
