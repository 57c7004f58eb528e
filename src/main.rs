//! Panchakarma Console - management console for the Panchakarma clinical scheduling system.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use panchakarma_console as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::ui::{self, ConsoleApp};

/// Management console for the Panchakarma clinical scheduling system.
#[derive(Parser)]
#[command(name = "panchakarma-console", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (cli.dev, cli.config) {
        (true, _) => PathBuf::from("config.toml"),
        (false, Some(path)) => path,
        (false, None) => AppConfig::default_path(),
    };

    let (config, startup_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, None),
        ConfigLoadResult::Missing => (AppConfig::default(), None),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(e.to_string())),
    };

    // Initialize logging (guard flushes the log file on exit)
    let _log_guard = app::logging::init(&config.logging);

    tracing::info!("Panchakarma Console starting...");
    if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
    }
    tracing::info!("Config path: {:?}", config_path);
    match &startup_error {
        Some(e) => tracing::warn!("Config invalid, using defaults: {}", e),
        None if config_path.exists() => tracing::info!("Config loaded successfully"),
        None => tracing::info!("Config missing, using defaults"),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Panchakarma Management System")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Panchakarma Management System",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            ui::install_fonts(&cc.egui_ctx);
            Ok(Box::new(ConsoleApp::new(config, startup_error)))
        }),
    )
}
