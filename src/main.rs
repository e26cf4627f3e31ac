// AdMapLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Diagnostic logging initialisation (debug mode support)
// 4. Dispatch through the console sink, or launch of the demo host window

mod gui;

// Re-export modules from the library crate so that `gui.rs` can keep using
// `crate::app::...`, `crate::core::...` etc.
pub use admap_log::app;
pub use admap_log::core;
pub use admap_log::platform;
pub use admap_log::ui;
pub use admap_log::util;

use crate::core::console::ConsoleSink;
use crate::core::logger::Logger;
use crate::core::model::{Severity, Verbosity};
use crate::platform::config::{LoggerConfig, SinkKind};
use crate::util::error::AdMapLogError;
use clap::Parser;
use std::path::PathBuf;

/// AdMapLog - severity-filtered logging for the autonomous driving map plugin.
///
/// Sends MESSAGE through the console sink, or opens a host window whose
/// message bar and log panel are driven by the GUI sink.
#[derive(Parser, Debug)]
#[command(name = "admap-log", version, about)]
struct Cli {
    /// Message to log.
    message: Option<String>,

    /// Severity of MESSAGE: error, warning, info, debug.
    #[arg(short = 'l', long = "level", default_value = "info")]
    level: String,

    /// Sink to use: console or gui (overrides config.toml).
    #[arg(short = 's', long = "sink")]
    sink: Option<String>,

    /// Reporting threshold: 0 errors, 1 +warnings, 2 +infos, 3+ +debug.
    #[arg(short = 'v', long = "verbosity")]
    verbosity: Option<u32>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug diagnostics (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Settings after merging CLI overrides onto config.toml.
struct Resolved {
    severity: Severity,
    sink: SinkKind,
    verbosity: Verbosity,
}

fn resolve(cli: &Cli, config: &LoggerConfig) -> util::error::Result<Resolved> {
    let severity: Severity = cli.level.parse()?;
    let sink = match cli.sink.as_deref() {
        Some(name) => name.parse()?,
        None => config.sink,
    };
    let verbosity = cli.verbosity.map(Verbosity).unwrap_or(config.verbosity);
    Ok(Resolved {
        severity,
        sink,
        verbosity,
    })
}

fn run_gui(resolved: &Resolved, message: Option<String>) -> util::error::Result<()> {
    let host = app::host::SharedHost::new(resolved.verbosity);
    let initial = message.map(|m| (resolved.severity, m));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::AdMapHostApp::new(host, initial)))),
    )
    .map_err(|e| AdMapLogError::Gui {
        reason: e.to_string(),
    })
}

fn run(cli: Cli) -> util::error::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());

    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let resolved = resolve(&cli, &config)?;

    tracing::info!(
        version = util::constants::APP_VERSION,
        sink = ?resolved.sink,
        verbosity = resolved.verbosity.value(),
        "AdMapLog starting"
    );

    match resolved.sink {
        SinkKind::Console => {
            let logger = ConsoleSink::stdout(resolved.verbosity);
            match cli.message {
                Some(ref message) => {
                    logger.emit(resolved.severity, message);
                }
                None => tracing::warn!("No message given; nothing to log"),
            }
            Ok(())
        }
        SinkKind::Gui => run_gui(&resolved, cli.message),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "AdMapLog failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
