use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::fs;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "parking.log";

/// Picks the log level: `explicit` if given and valid, otherwise `RUST_LOG`
/// if valid, otherwise `info`.
pub fn resolve_level(explicit: Option<&str>) -> LevelFilter {
    explicit
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|level| level.parse::<LevelFilter>().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Initializes the global logger.
///
/// Call once at the start of `main`. Records at `level` and above go to
/// `logs/parking.log`. The console only gets warnings and errors, because
/// stdout is busy with the interactive menu.
pub fn init(level: LevelFilter) {
    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);

    let console_config = Dispatch::new()
        .level(LevelFilter::Warn)
        .format(|out, message, record| {
            let colors = fern::colors::ColoredLevelConfig::new()
                .error(fern::colors::Color::Red)
                .warn(fern::colors::Color::Yellow)
                .info(fern::colors::Color::Green)
                .debug(fern::colors::Color::Blue)
                .trace(fern::colors::Color::BrightBlack);

            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut base_config = Dispatch::new().level(level).chain(console_config);

    // Without a writable log directory we still want console output.
    match fs::create_dir_all(LOG_DIR).and_then(|_| fern::log_file(&log_file_path)) {
        Ok(file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), record.level(), record.target(), message))
                })
                .chain(file);
            base_config = base_config.chain(file_config);
        }
        Err(e) => eprintln!("Failed to open log file '{}': {}", log_file_path, e),
    }

    if let Err(e) = base_config.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    log::info!("Logger initialized at level {}. Logging to '{}'.", level, log_file_path);
}
