// example_global — глобальный логгер, доступный из любого места программы

use rotlog::{gdebug, gerror, ginfo, gwarning, Config, Level, OpenMode, Policy};
use std::thread;

fn worker(id: u32) {
    gdebug!("Worker {} started", id);
    if id % 2 == 1 {
        gwarning!("Worker {} detected odd workload", id);
    }
    gdebug!("Worker {} finished", id);
}

fn main() -> rotlog::Result<()> {
    std::fs::create_dir_all("logs")?;

    rotlog::init_global_file_logger(
        Some("example_global"),
        Level::Debug,
        "logs/global.log",
        OpenMode::Write,
        Policy::Rotate,
        64 * 1024,
        Config::from_env(),
    )?;

    ginfo!("Global logger initialized, spawning workers...");

    // Глобальный логгер защищён мьютексом, потоки могут писать одновременно
    let handles: Vec<_> = (0..4).map(|i| thread::spawn(move || worker(i))).collect();
    for h in handles {
        if h.join().is_err() {
            gerror!("A worker thread panicked");
        }
    }

    ginfo!("All workers have finished");
    rotlog::shutdown_global_logger()
}
