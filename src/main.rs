//! Cosmic Welcome - A minimal welcome screen with runtime language switching
//!
//! Entry point for the application. Handles CLI argument parsing,
//! logging initialization, localization bootstrap, and application launch.

mod app;
mod config;
mod error;
mod message;
mod ui;

// Internationalization
mod i18n;

use app::{Flags, WelcomeApp};
use config::Config;
use i18n::Localizer;

/// Application name for logging
const APP_NAME: &str = "cosmic-welcome";

fn main() -> cosmic::iced::Result {
    // Initialize logging
    init_logging();

    log::info!("Starting Cosmic Welcome");

    // Handle bootstrap-only arguments (--help / --version)
    parse_args();

    // Load configuration
    let config = Config::load().unwrap_or_default();

    // Build the localization context up front so catalog defects surface
    // as a startup diagnostic instead of a broken window.
    let localizer = match Localizer::from_config(&config.general) {
        Ok(localizer) => localizer,
        Err(e) => {
            log::error!("Localization bootstrap failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    // Initialize and run the Cosmic application
    // Note: Don't use .size() with cosmic apps - it can cause Wayland protocol errors
    // The window size is managed by the compositor
    cosmic::app::run::<WelcomeApp>(
        cosmic::app::Settings::default().size_limits(
            cosmic::iced::Limits::NONE
                .min_width(config::MIN_WINDOW_WIDTH as f32)
                .min_height(config::MIN_WINDOW_HEIGHT as f32),
        ),
        Flags { config, localizer },
    )
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,cosmic_welcome=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Parse command line arguments
///
/// The application has no functional CLI surface; only the standard
/// help/version flags are recognized.
fn parse_args() {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }
}

/// Print help message
fn print_help() {
    println!(
        r#"Cosmic Welcome - A minimal welcome screen with language switching

USAGE:
    cosmic-welcome [OPTIONS]

OPTIONS:
    -h, --help          Show this help message
    -v, --version       Show version information

The displayed language is switched from within the window; the
selection is not persisted across sessions."#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}
