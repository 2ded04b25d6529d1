//! Trail replay commands
//!
//! These commands run the trail animator over recorded pointer files for
//! preview and export.

use crate::capture::input::types::PointerSample;
use crate::config::TrailConfig;
use crate::processing::trail_replay::{replay_trail, TrailFrame};
use anyhow::Context;
use std::path::Path;

/// Read a JSON array of recorded pointer samples
pub fn load_pointer_samples(input_file: &Path) -> anyhow::Result<Vec<PointerSample>> {
    let content = std::fs::read_to_string(input_file)
        .with_context(|| format!("Failed to read input file {}", input_file.display()))?;
    let samples: Vec<PointerSample> =
        serde_json::from_str(&content).context("Failed to parse pointer samples")?;
    Ok(samples)
}

/// Replay a recorded pointer file and return the trail frames
///
/// This is used for previewing a configuration.
pub fn preview_trail(
    input_file: &Path,
    config: &TrailConfig,
    output_fps: f64,
) -> anyhow::Result<Vec<TrailFrame>> {
    let samples = load_pointer_samples(input_file)?;

    tracing::info!(
        "Replaying {} pointer samples at {}fps with config: markers={}, smoothing={}",
        samples.len(),
        output_fps,
        config.trail_count,
        config.smoothing_factor
    );

    let frames = replay_trail(&samples, config, output_fps)?;

    tracing::info!("Generated {} trail frames", frames.len());

    Ok(frames)
}

/// Replay a recorded pointer file and write the trail frames to disk
///
/// Returns the number of frames written.
pub fn process_trail_replay(
    input_file: &Path,
    output_file: &Path,
    config: &TrailConfig,
    output_fps: f64,
) -> anyhow::Result<usize> {
    let frames = preview_trail(input_file, config, output_fps)?;
    let output = serde_json::to_vec_pretty(&frames).context("Failed to serialize trail frames")?;

    std::fs::write(output_file, output)
        .with_context(|| format!("Failed to write output file {}", output_file.display()))?;

    tracing::info!("Wrote {} trail frames to {}", frames.len(), output_file.display());

    Ok(frames.len())
}
