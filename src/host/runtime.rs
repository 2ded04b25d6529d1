//! Tokio frame loop
//!
//! Drives a [`TrailAnimator`] at a fixed frame rate: each frame drains the
//! latest pointer sample from a [`PointerFeed`] and ticks the animator once.

use crate::animator::host::{TrailError, TrailResult};
use crate::animator::TrailAnimator;
use crate::capture::input::PointerFeed;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;

/// Run the animator until `shutdown` fires (or its sender is dropped).
///
/// The animator is started if needed and is always stopped before it is
/// handed back.
pub async fn run_trail(
    mut animator: TrailAnimator,
    feed: PointerFeed,
    frame_rate: f64,
    mut shutdown: oneshot::Receiver<()>,
) -> TrailResult<TrailAnimator> {
    let period = frame_period(frame_rate)?;

    if !animator.is_running() {
        animator.start()?;
    }

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!("Frame loop started at {}fps", frame_rate);
    let mut frames: u64 = 0;

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => break,
            _ = interval.tick() => {
                if let Some(pointer) = feed.take_latest() {
                    animator.on_pointer_move(pointer.x, pointer.y);
                }
                animator.tick();
                frames += 1;
            }
        }
    }

    animator.stop();
    tracing::info!("Frame loop stopped after {} frames", frames);

    Ok(animator)
}

/// Interval between frames, rejecting rates with no representable non-zero
/// period
fn frame_period(frame_rate: f64) -> TrailResult<Duration> {
    if !(frame_rate.is_finite() && frame_rate > 0.0) {
        return Err(TrailError::InvalidConfiguration(format!(
            "frame rate must be positive, got {}",
            frame_rate
        )));
    }

    match Duration::try_from_secs_f64(1.0 / frame_rate) {
        Ok(period) if !period.is_zero() => Ok(period),
        _ => Err(TrailError::InvalidConfiguration(format!(
            "frame rate {} has no usable frame period",
            frame_rate
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::host::TrailHost;
    use crate::capture::input::{PointerChannel, PointerPosition};
    use crate::config::TrailConfig;
    use crate::host::{FrameClock, MarkerBuffer};

    fn animator() -> (TrailAnimator, PointerFeed, crate::host::FrameClockHandle) {
        let channel = PointerChannel::new();
        let feed = channel.feed();
        let clock = FrameClock::new();
        let handle = clock.handle();
        let animator = TrailAnimator::new(
            TrailConfig::default(),
            TrailHost::new(channel, clock, MarkerBuffer::new()),
        )
        .unwrap();
        (animator, feed, handle)
    }

    #[tokio::test]
    async fn test_loop_ticks_and_stops() {
        let (mut animator, feed, clock) = animator();
        animator.start().unwrap();
        assert!(feed.move_to(50.0, 60.0));

        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(run_trail(animator, feed.clone(), 500.0, rx));

        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send(()).unwrap();

        let animator = task.await.unwrap().unwrap();
        assert!(!animator.is_running());
        assert_eq!(animator.pointer(), PointerPosition::new(50.0, 60.0));
        assert!(clock.requested() > 1, "expected several frames, got {}", clock.requested());
        assert!(clock.pending().is_none());
        assert!(!feed.is_subscribed());
    }

    #[tokio::test]
    async fn test_loop_starts_stopped_animator() {
        let (animator, feed, clock) = animator();
        let (tx, rx) = oneshot::channel();
        drop(tx);

        let animator = run_trail(animator, feed, 60.0, rx).await.unwrap();
        assert!(!animator.is_running());
        assert_eq!(clock.requested(), 1);
        assert_eq!(clock.cancelled(), 1);
    }

    #[tokio::test]
    async fn test_rejects_bad_frame_rate() {
        let (animator, feed, _clock) = animator();
        let (_tx, rx) = oneshot::channel();
        let result = run_trail(animator, feed, 0.0, rx).await;
        assert!(matches!(result, Err(TrailError::InvalidConfiguration(_))));
    }

    #[tokio::test]
    async fn test_rejects_frame_rate_without_period() {
        for rate in [1e300, 1e-300] {
            let (animator, feed, clock) = animator();
            let (_tx, rx) = oneshot::channel();
            let result = run_trail(animator, feed, rate, rx).await;
            assert!(
                matches!(result, Err(TrailError::InvalidConfiguration(_))),
                "rate {} should be rejected",
                rate
            );
            assert_eq!(clock.requested(), 0);
        }
    }

    #[test]
    fn test_frame_period() {
        assert_eq!(frame_period(4.0).unwrap(), Duration::from_millis(250));
        assert!(frame_period(f64::NAN).is_err());
    }
}
