// example_overwrite — файл фиксированного объёма: при превышении порога обрезается

use rotlog::{info, notice, Config, Level, Logger, OpenMode};

const APP_NAME: &str = "example_overwrite";
const MAX_LOG_SIZE: u64 = 1024;

fn main() -> rotlog::Result<()> {
    std::fs::create_dir_all("logs")?;

    let mut log = Logger::overwriting(
        Some(APP_NAME),
        Level::Info,
        "logs/overwrite.log",
        OpenMode::Append,
        MAX_LOG_SIZE,
        Config::from_env(),
    )?;

    for i in 0..50 {
        info!(log, "Heartbeat #{}", i)?;
    }
    notice!(log, "Only the lines since the last truncation remain in the file")?;

    log.destroy()
}
