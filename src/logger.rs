use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs;
use std::path::Path;

/// Initializes the global logger.
///
/// Call once at the start of `main`. The level is taken from `RUST_LOG`
/// (`RUST_LOG=debug berth-planner ...`) and defaults to `info`.
///
/// Console output goes to stderr so that the schedule printed on stdout stays
/// clean. When `log_file` is given, records are additionally written there
/// without color codes.
pub fn init(log_file: Option<&Path>) {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_level_filter = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console_config = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut base_config = Dispatch::new().level(log_level_filter).level_for("serde", LevelFilter::Warn).chain(console_config);

    if let Some(path) = log_file {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(dir) {
                eprintln!("Failed to create log directory at '{}': {}", dir.display(), e);
            }
        }

        match fern::log_file(path) {
            Ok(file) => {
                let file_config = Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), record.level(), record.target(), message))
                    })
                    .chain(file);
                base_config = base_config.chain(file_config);
            }
            Err(e) => eprintln!("Failed to open log file '{}': {}", path.display(), e),
        }
    }

    if let Err(e) = base_config.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    match log_file {
        Some(path) => log::info!("Logger initialized. Logging to console and '{}'.", path.display()),
        None => log::info!("Logger initialized. Logging to console."),
    }
}
