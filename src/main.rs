use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cursor_trail::capture::input::{PointerChannel, PointerFeed, PointerPosition};
use cursor_trail::commands::motion::{self, DriftLayer};
use cursor_trail::commands::processing;
use cursor_trail::config::{self, AppConfig};
use cursor_trail::host::{run_trail, FrameClock, MarkerBuffer};
use cursor_trail::processing::tilt::Rect;
use cursor_trail::{TrailAnimator, TrailHost};
use serde::Serialize;
use tokio::sync::oneshot;

/// Pointer polling interval for the demo input thread (120Hz)
const DEMO_POLL_INTERVAL: Duration = Duration::from_micros(8_333);

/// Longest demo run accepted on the command line
const MAX_DEMO_SECONDS: f64 = 3600.0;

#[derive(Parser, Debug)]
#[command(name = "cursor-trail", about = "Cursor trail and page motion tool")]
struct Cli {
    /// JSON configuration file
    #[arg(long, env = "CURSOR_TRAIL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay recorded pointer samples through the trail
    Replay {
        input: PathBuf,
        /// Write frames here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Output framerate (defaults to the configured frame rate)
        #[arg(long)]
        fps: Option<f64>,
    },
    /// Run the live frame loop against a synthetic circling pointer
    Demo {
        #[arg(long, default_value_t = 2.0)]
        seconds: f64,
    },
    /// Card tilt transform for a pointer over a card
    Tilt {
        #[arg(allow_negative_numbers = true)]
        left: f64,
        #[arg(allow_negative_numbers = true)]
        top: f64,
        width: f64,
        height: f64,
        /// Pointer X; omit both coordinates for pointer-leave
        #[arg(long, requires = "y", allow_negative_numbers = true)]
        x: Option<f64>,
        #[arg(long, requires = "x", allow_negative_numbers = true)]
        y: Option<f64>,
    },
    /// Smooth scroll positions toward a section
    Scroll {
        /// Section top relative to the viewport
        #[arg(allow_negative_numbers = true)]
        element_top: f64,
        #[arg(long, default_value_t = 0.0)]
        scroll_y: f64,
    },
    /// Background drift transforms
    Drift {
        #[arg(value_enum)]
        layer: DriftLayer,
        #[arg(long, default_value_t = 10.0)]
        fps: f64,
        #[arg(long, default_value_t = 14.0)]
        seconds: f64,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cursor_trail::init_tracing();

    let cli = Cli::parse();
    let app_config = config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Replay { input, output, fps } => {
            let fps = fps.unwrap_or(app_config.frame_rate);
            match output {
                Some(output) => {
                    processing::process_trail_replay(&input, &output, &app_config.trail, fps)?;
                }
                None => print_json(&processing::preview_trail(&input, &app_config.trail, fps)?)?,
            }
        }
        Command::Demo { seconds } => run_demo(&app_config, seconds).await?,
        Command::Tilt {
            left,
            top,
            width,
            height,
            x,
            y,
        } => {
            let pointer = x.zip(y).map(|(x, y)| PointerPosition::new(x, y));
            let transform = motion::card_tilt(pointer, &Rect::new(left, top, width, height), &app_config.tilt);
            println!("{}", transform.to_css());
        }
        Command::Scroll { element_top, scroll_y } => {
            let plan = motion::scroll_plan(Some(element_top), scroll_y, &app_config.scroll)
                .context("Scroll target is not a finite position")?;
            print_json(&plan)?;
        }
        Command::Drift { layer, fps, seconds } => {
            let frames = motion::drift_frames(layer, fps, seconds)?;
            for frame in frames {
                println!("{}", frame.to_css());
            }
        }
        Command::Config => print_json(&app_config)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn demo_duration(seconds: f64) -> anyhow::Result<Duration> {
    anyhow::ensure!(
        seconds > 0.0 && seconds <= MAX_DEMO_SECONDS,
        "seconds must be within (0, {}], got {}",
        MAX_DEMO_SECONDS,
        seconds
    );
    Ok(Duration::from_secs_f64(seconds))
}

async fn run_demo(app_config: &AppConfig, seconds: f64) -> anyhow::Result<()> {
    let duration = demo_duration(seconds)?;

    let channel = PointerChannel::new();
    let feed = channel.feed();
    let buffer = MarkerBuffer::new();
    let markers = buffer.snapshot();

    let mut animator = TrailAnimator::new(
        app_config.trail.clone(),
        TrailHost::new(channel, FrameClock::new(), buffer),
    )?;
    animator.start()?;

    let polling = Arc::new(AtomicBool::new(true));
    let input_thread = spawn_circling_pointer(feed.clone(), polling.clone());

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let frame_loop = tokio::spawn(run_trail(animator, feed, app_config.frame_rate, shutdown_rx));

    tokio::time::sleep(duration).await;
    let last_frame = markers.samples();

    let _ = shutdown_tx.send(());
    frame_loop.await.context("Frame loop panicked")??;

    polling.store(false, Ordering::SeqCst);
    let _ = input_thread.join();

    print_json(&last_frame)
}

/// Input thread moving the pointer around a circle
fn spawn_circling_pointer(feed: PointerFeed, polling: Arc<AtomicBool>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let start = Instant::now();
        while polling.load(Ordering::Relaxed) {
            let angle = start.elapsed().as_secs_f64() * std::f64::consts::TAU / 2.0;
            feed.move_to(400.0 + 150.0 * angle.cos(), 300.0 + 150.0 * angle.sin());
            std::thread::sleep(DEMO_POLL_INTERVAL);
        }
    })
}
