// SPDX-License-Identifier: MPL-2.0
//! Headless lightbox driver.
//!
//! ```text
//! lightbox [--config-dir DIR] [--radius N] ITEM...
//! ```
//!
//! Builds a gallery from the given URLs (or local image paths, read when
//! needed) and reads one command per line from
//! stdin. Deferred work runs on a 50 ms tick. Every event is logged through
//! `tracing` (set `RUST_LOG=lightbox_core=debug` for page transitions).

use lightbox_core::application::port::{
    LightboxDelegate, MediaExporter, RenderSurface, SaveOutcome, VideoBackend,
};
use lightbox_core::config;
use lightbox_core::domain::gallery::{PageSpacing, PreloadRadius};
use lightbox_core::domain::media::{EncodedImage, ImageSource, LazyImage, MediaItem, MediaUrl};
use lightbox_core::domain::video::{PlaybackEvent, SessionId};
use lightbox_core::error::ExportError;
use lightbox_core::{Collaborators, Lightbox, LightboxSettings};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const TICK: Duration = Duration::from_millis(50);
const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".mov", ".m3u8", ".webm"];

const HELP: &str = "\
USAGE:
  lightbox [--config-dir DIR] [--radius N] ITEM...

COMMANDS (stdin):
  next | prev | goto N | drag | release N
  append URL | prepend URL | delete
  play | seek S | skip S | mute | unmute | ready S
  bg | fg | save | info | close";

struct Args {
    config_dir: Option<PathBuf>,
    radius: Option<usize>,
    items: Vec<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let radius = args.opt_value_from_str("--radius")?;
    let items = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();

    Ok(Some(Args {
        config_dir,
        radius,
        items,
    }))
}

fn media_item(url: &str) -> MediaItem {
    if !url.contains("://") {
        let path = PathBuf::from(url);
        return MediaItem::lazy_image(LazyImage::new(move || {
            std::fs::read(&path).ok().map(EncodedImage::new)
        }))
        .with_title(url);
    }

    let lower = url.to_ascii_lowercase();
    if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        MediaItem::remote_video(url)
    } else {
        MediaItem::remote_image(url)
    }
}

// =============================================================================
// Logging collaborators
// =============================================================================

struct LoggingDelegate;

impl LightboxDelegate for LoggingDelegate {
    fn on_page_changed(&mut self, index: usize) {
        tracing::info!(index, "page changed");
    }

    fn on_will_dismiss(&mut self) {
        tracing::info!("will dismiss");
    }

    fn on_item_touched(&mut self, item: &MediaItem, index: usize) {
        tracing::info!(index, caption = item.caption(), "item touched");
    }

    fn on_save_result(&mut self, _item: &MediaItem, outcome: &SaveOutcome) {
        tracing::info!(success = outcome.success, error = ?outcome.error, "save result");
    }

    fn on_near_right_end(&mut self) {
        tracing::info!("near right end");
    }

    fn on_near_left_end(&mut self) {
        tracing::info!("near left end");
    }

    fn on_sequence_updated(&mut self) {
        tracing::info!("sequence updated");
    }

    fn on_playback(&mut self, event: &PlaybackEvent) {
        if matches!(event, PlaybackEvent::Progress { .. }) {
            tracing::trace!(?event, "playback");
        } else {
            tracing::info!(?event, "playback");
        }
    }
}

struct LoggingSurface;

impl RenderSurface for LoggingSurface {
    fn present(&mut self, page_spacing: PageSpacing, hide_status_bar: bool) {
        tracing::debug!(page_spacing = page_spacing.value(), hide_status_bar, "present");
    }

    fn dismiss(&mut self) {
        tracing::debug!("dismiss");
    }

    fn materialize(&mut self, index: usize, _item: &MediaItem) {
        tracing::debug!(index, "materialize");
    }

    fn evict(&mut self, index: usize) {
        tracing::debug!(index, "evict");
    }

    fn relayout(&mut self, page_count: usize, current_page: usize) {
        tracing::debug!(page_count, current_page, "relayout");
    }

    fn show_background(&mut self, image: ImageSource<'_>) {
        tracing::debug!(?image, "background");
    }

    fn show_transient_message(&mut self, text: &str) {
        tracing::info!(text, "message");
    }
}

struct LoggingBackend;

impl VideoBackend for LoggingBackend {
    fn open(&mut self, session: SessionId, url: &MediaUrl, muted: bool) {
        tracing::info!(%session, %url, muted, "backend open");
    }

    fn play(&mut self, session: SessionId) {
        tracing::debug!(%session, "backend play");
    }

    fn pause(&mut self, session: SessionId) {
        tracing::debug!(%session, "backend pause");
    }

    fn seek(&mut self, session: SessionId, position_secs: f64) {
        tracing::debug!(%session, position_secs, "backend seek");
    }

    fn set_muted(&mut self, session: SessionId, muted: bool) {
        tracing::debug!(%session, muted, "backend mute");
    }

    fn close(&mut self, session: SessionId) {
        tracing::info!(%session, "backend close");
    }
}

/// Pretends every save succeeds.
struct LoggingExporter;

impl MediaExporter for LoggingExporter {
    fn save_image(&mut self, source: ImageSource<'_>) -> Result<(), ExportError> {
        if let ImageSource::Lazy(image) = source {
            let image = image
                .produce()
                .ok_or_else(|| ExportError::Failed("image file unreadable".into()))?;
            tracing::info!(bytes = image.len(), "export local image");
            return Ok(());
        }
        tracing::info!(?source, "export image");
        Ok(())
    }

    fn save_video(&mut self, url: &MediaUrl) -> Result<(), ExportError> {
        tracing::info!(%url, "export video");
        Ok(())
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Runs one stdin command. Returns false when the driver should stop.
fn execute(lightbox: &mut Lightbox, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return true;
    };
    let argument = words.next();

    let result = match (command, argument) {
        ("next", _) => {
            lightbox.next();
            Ok(())
        }
        ("prev", _) => {
            lightbox.previous();
            Ok(())
        }
        ("goto", Some(index)) => parse(index).map(|index| lightbox.go_to(index)),
        ("drag", _) => {
            lightbox.drag_began();
            Ok(())
        }
        ("release", Some(target)) => parse(target).map(|target| {
            lightbox.drag_settled(target);
            lightbox.drag_ended();
        }),
        ("append", Some(url)) => {
            lightbox.append(vec![media_item(url)]);
            Ok(())
        }
        ("prepend", Some(url)) => {
            lightbox.insert_at_head(vec![media_item(url)]);
            Ok(())
        }
        ("delete", _) => {
            lightbox.delete_current();
            Ok(())
        }
        ("play", _) => lightbox.toggle_play_pause().map_err(|err| err.to_string()),
        ("seek", Some(secs)) => {
            parse(secs).and_then(|secs| lightbox.seek(secs).map_err(|err| err.to_string()))
        }
        ("skip", Some(secs)) => {
            parse(secs).and_then(|secs| lightbox.skip(secs).map_err(|err| err.to_string()))
        }
        ("mute", _) => {
            lightbox.set_muted(true);
            Ok(())
        }
        ("unmute", _) => {
            lightbox.set_muted(false);
            Ok(())
        }
        ("ready", Some(secs)) => parse(secs).and_then(|secs| {
            let session = lightbox
                .player()
                .session_id()
                .ok_or_else(|| "no video loaded".to_string())?;
            lightbox
                .media_ready(session, secs)
                .map_err(|err| err.to_string())
        }),
        ("bg", _) => {
            lightbox.app_backgrounded();
            Ok(())
        }
        ("fg", _) => {
            lightbox.app_foregrounded();
            Ok(())
        }
        ("save", _) => {
            lightbox.save_current();
            Ok(())
        }
        ("info", _) => {
            let info = lightbox.page_info();
            println!(
                "{} | seen_last={} | materialized={:?} | player={:?} | {}",
                info.label,
                info.seen_last,
                lightbox.materialized_indices(),
                lightbox.player().status(),
                info.caption
            );
            Ok(())
        }
        ("close", _) => {
            lightbox.close();
            return false;
        }
        _ => Err(format!("unknown command: {line}")),
    };

    if let Err(message) = result {
        eprintln!("{message}");
    }
    lightbox.is_presented()
}

fn parse<T: std::str::FromStr>(value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid number: {value}"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lightbox_core=info,lightbox=info")),
        )
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{HELP}");
            return;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let (config, warning) = config::load_with_override(args.config_dir);
    if let Some(warning) = warning {
        tracing::warn!(%warning, "configuration not loaded");
    }
    let mut settings = LightboxSettings::from_config(&config);
    if let Some(radius) = args.radius {
        settings.gallery.preload_radius = PreloadRadius::new(radius);
    }

    let items = args.items.iter().map(|url| media_item(url)).collect();
    let mut lightbox = Lightbox::new(
        items,
        settings,
        Collaborators {
            delegate: Box::new(LoggingDelegate),
            surface: Box::new(LoggingSurface),
            video: Box::new(LoggingBackend),
            exporter: Box::new(LoggingExporter),
        },
    );
    if !lightbox.is_presented() {
        return;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK);
    let mut last_tick = tokio::time::Instant::now();

    loop {
        tokio::select! {
            now = ticker.tick() => {
                lightbox.advance(now.duration_since(last_tick));
                last_tick = now;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if !execute(&mut lightbox, &line) {
                        break;
                    }
                }
                Ok(None) => {
                    lightbox.close();
                    break;
                }
                Err(err) => {
                    tracing::warn!(%err, "stdin closed");
                    lightbox.close();
                    break;
                }
            },
        }
    }
}
