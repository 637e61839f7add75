// example_tokio — общий логгер для асинхронных задач tokio
// Логгер не потокобезопасен сам по себе, поэтому оборачиваем его в Mutex

use rotlog::{debug, error, info, warning, Config, Level, Logger};
use std::sync::{Arc, Mutex};
use tokio::task;
use tokio::time::{sleep, Duration};

const APP_NAME: &str = "example_tokio";
const APP_VERSION: &str = "1.0.0";

type SharedLogger = Arc<Mutex<Logger>>;

// Асинхронный "воркер"
pub struct Worker {
    id: u32,
    log: SharedLogger,
}

impl Worker {
    pub fn new(id: u32, log: SharedLogger) -> Self {
        Self { id, log }
    }

    // Блокировка берётся только на время одной записи, не через await
    fn with_log<F>(&self, f: F)
    where
        F: FnOnce(&mut Logger) -> rotlog::Result<()>,
    {
        let mut log = self.log.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = f(&mut log) {
            eprintln!("[{}] worker {} failed to log: {}", APP_NAME, self.id, e);
        }
    }

    pub async fn run(&self) {
        self.with_log(|l| debug!(l, "Worker {} started (async)", self.id));

        sleep(Duration::from_millis(50 + (self.id as u64) * 100)).await;

        if self.id % 3 == 0 {
            self.with_log(|l| warning!(l, "Worker {} has high priority task", self.id));
        }

        if self.id == 2 {
            self.with_log(|l| error!(l, "Worker {} failed to process data", self.id));
        }

        self.with_log(|l| debug!(l, "Worker {} completed", self.id));
    }
}

#[tokio::main]
async fn main() -> rotlog::Result<()> {
    std::fs::create_dir_all("logs")?;

    let mut file_logger = Logger::rotating(
        Some(APP_NAME),
        Level::Debug,
        "logs/tokio.log",
        1024 * 1024,
        Config::from_env(),
    )?;
    info!(file_logger, "Starting {} v{}", APP_NAME, APP_VERSION)?;

    let shared_logger = Arc::new(Mutex::new(file_logger));

    let mut handles = vec![];
    for i in 0..5 {
        let logger_clone = Arc::clone(&shared_logger);
        handles.push(task::spawn(async move {
            let worker = Worker::new(i, logger_clone);
            worker.run().await;
        }));
    }

    for h in handles {
        let _ = h.await;
    }

    let mut logger = shared_logger.lock().unwrap_or_else(|e| e.into_inner());
    info!(logger, "All async tasks completed")?;
    Ok(())
}
