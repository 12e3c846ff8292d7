//! Headless host for the gridhud overlay.
//!
//! Drives an [`Overlay`] against the recording backend for a fixed number of
//! frames, optionally simulating a device loss, and can dump the last frame's
//! draw commands as JSON.
//!
//! ```text
//! gridhud-studio [--config studio.json] [--frames N] [--dump last-frame.json]
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use gridhud_engine::backend::RecordingBackend;
use gridhud_engine::coords::Viewport;
use gridhud_engine::logging::{LoggingConfig, init_logging};
use gridhud_engine::scene::DrawCmd;
use gridhud_engine::time::{FrameClock, FrameInfo};
use gridhud_overlay::{FrameReport, Overlay, OverlayConfig};
use serde::{Deserialize, Serialize};

/// Simulated frame rate when no `target_fps` is configured.
const SIMULATED_FPS: u32 = 60;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct StudioConfig {
    frames: u64,
    viewport: Viewport,
    /// Frame number after which the device is lost and brushes recreated.
    lose_device_at: Option<u64>,
    /// Pace frames in real time. `None` runs on a simulated 60 fps clock.
    target_fps: Option<u32>,
    logging: LoggingConfig,
    overlay: OverlayConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            frames: 300,
            viewport: Viewport::new(1280.0, 720.0),
            lose_device_at: None,
            target_fps: None,
            logging: LoggingConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    frames: Option<u64>,
    dump: Option<PathBuf>,
}

impl Args {
    fn parse(mut it: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut args = Args::default();
        while let Some(flag) = it.next() {
            let mut value = || it.next().with_context(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--config" => args.config = Some(value()?.into()),
                "--frames" => {
                    let v = value()?;
                    args.frames = Some(v.parse().with_context(|| format!("--frames: not a number: {v}"))?);
                }
                "--dump" => args.dump = Some(value()?.into()),
                other => bail!("unknown argument: {other}"),
            }
        }
        Ok(args)
    }
}

#[derive(Serialize)]
struct FrameDump<'a> {
    frame: FrameInfo,
    seed: u64,
    angle: f32,
    commands: &'a [DrawCmd],
}

fn load_config(path: Option<&Path>) -> anyhow::Result<StudioConfig> {
    let Some(path) = path else {
        return Ok(StudioConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Instant of simulated frame `n`, `n` intervals after `start`.
fn simulated_instant(start: Instant, interval: Duration, n: u64) -> anyhow::Result<Instant> {
    start
        .checked_add(interval.mul_f64(n as f64))
        .with_context(|| format!("simulated clock overflows at frame {n}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    let mut config = load_config(args.config.as_deref())?;
    if let Some(frames) = args.frames {
        config.frames = frames;
    }

    init_logging(&config.logging);

    if !config.viewport.is_valid() {
        bail!("invalid viewport {}", config.viewport);
    }

    let mut backend = RecordingBackend::new(config.viewport);
    let mut overlay = Overlay::new(config.overlay.clone()).context("creating overlay")?;
    overlay.setup(&mut backend, false).context("initial setup")?;

    let pace = config.target_fps.filter(|fps| *fps > 0);
    let interval = Duration::from_secs(1) / pace.unwrap_or(SIMULATED_FPS);
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);

    let mut last: Option<(FrameInfo, FrameReport)> = None;
    for n in 1..=config.frames {
        let frame = if pace.is_some() {
            std::thread::sleep(interval);
            clock.tick()
        } else {
            clock.tick_at(simulated_instant(start, interval, n)?)
        };

        backend.begin_frame();
        let report = overlay
            .draw(&mut backend, &frame)
            .with_context(|| format!("drawing frame {n}"))?;
        log::trace!("frame {n}: seed {}, {} figures", report.seed, report.figures.len());
        last = Some((frame, report));

        if config.lose_device_at == Some(n) {
            log::warn!("simulating device loss after frame {n}");
            backend.lose_device();
            overlay.setup(&mut backend, true).context("recreating brushes")?;
        }
    }

    log::debug!("last frame commands: {:?}", backend.draw_list().counts());

    if let (Some(path), Some((frame, report))) = (&args.dump, &last) {
        let dump = FrameDump {
            frame: *frame,
            seed: report.seed,
            angle: report.angle,
            commands: backend.draw_list().items(),
        };
        let json = serde_json::to_string_pretty(&dump).context("serializing draw list")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("last frame dumped to {}", path.display());
    }

    overlay.teardown(&mut backend).context("teardown")?;

    let stats = backend.stats();
    log::info!(
        "{} frame(s), final angle {:.2}, brushes {}/{}, fonts {}/{}, geometries {}/{}, device losses {}",
        config.frames,
        overlay.angle(),
        stats.brushes_released,
        stats.brushes_created,
        stats.fonts_released,
        stats.fonts_created,
        stats.geometries_released,
        stats.geometries_created,
        stats.device_losses,
    );
    if backend.live_handles() != 0 {
        log::warn!("{} handle(s) still live after teardown", backend.live_handles());
    }
    Ok(())
}
