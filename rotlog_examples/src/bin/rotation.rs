//! example_rotation — ротация по размеру: app.log, app.log.0, app.log.1, ...

use rotlog::{debug, error, info, warning, Config, Level, Logger, Sink};
use std::fs;
use std::thread;
use std::time::Duration;

const APP_NAME: &str = "example_rotation";

// Маленький порог, чтобы ротация сработала быстро
const MAX_LOG_SIZE: u64 = 4096; // 4 КБ

fn main() {
    let mut console = Logger::stream(
        Some(APP_NAME),
        Level::Info,
        Some(Sink::Stdout),
        Config::from_env(),
    );

    if let Err(e) = fs::create_dir_all("logs") {
        let _ = error!(console, "Cannot create logs directory: {}", e);
        std::process::exit(1);
    }

    let mut file_logger = match Logger::rotating(
        Some(APP_NAME),
        Level::Debug,
        "logs/rotation.log",
        MAX_LOG_SIZE,
        Config::from_env(),
    ) {
        Ok(l) => l,
        Err(e) => {
            let _ = error!(console, "Failed to create log file: {}", e);
            std::process::exit(1);
        }
    };

    let _ = info!(console, "Writing to logs/rotation.log with threshold {} bytes", MAX_LOG_SIZE);

    for i in 0..200 {
        if let Err(e) = debug!(file_logger, "This is a debug message number {}", i) {
            let _ = error!(console, "Logging failed at iteration {}: {}", i, e);
            break;
        }
        if i % 30 == 0 {
            let _ = warning!(file_logger, "Warning message at iteration {}", i);
        }
        thread::sleep(Duration::from_millis(5));
    }

    if let Some(path) = file_logger.path() {
        let _ = info!(console, "Current log file: {}", path.display());
    }
    let _ = info!(console, "Bytes in current file: {}", file_logger.written_bytes());

    if let Err(e) = file_logger.destroy() {
        let _ = error!(console, "Failed to close log file: {}", e);
    }
    let _ = info!(console, "Done. Check the 'logs/' directory for rotated files.");
}
