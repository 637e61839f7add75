// example_simple — логгер в stderr: фильтрация по уровню и цвет в терминале

use rotlog::{debug, error, info, notice, warning, Config, Level, Logger};

const APP_NAME: &str = "example_simple";
const APP_VERSION: &str = "1.0.0";

fn main() -> rotlog::Result<()> {
    // ROTLOG_NDEBUG=1 отключает Debug, NO_COLOR=1 отключает цвет
    let config = Config::from_env();

    let mut log = Logger::stream(Some(APP_NAME), Level::Debug, None, config);
    info!(log, "Starting {} v{}", APP_NAME, APP_VERSION)?;
    let level = log.level();
    debug!(log, "Effective minimum level: {}", level)?;
    notice!(log, "Processing data block #1")?;
    warning!(log, "Non-critical issue detected")?;
    error!(log, "An error occurred, but we continue")?;

    // Второй логгер пропускает всё ниже Warning
    let mut quiet = Logger::stream(Some("quiet"), Level::Warning, None, config);
    info!(quiet, "This will not be printed")?;
    warning!(quiet, "Only warnings and above get through")?;

    info!(log, "Application finished successfully")?;
    quiet.destroy()?;
    log.destroy()
}
