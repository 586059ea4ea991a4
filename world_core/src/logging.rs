// world_core/src/logging.rs
use std::io::*;
use flexi_logger::*;
use log::Record;
use crate::storage::config::app_dir;

/// Initializes the system logger.
pub fn init_file_logger() {
    let log_dir = app_dir().join("logs");

    let file_spec = FileSpec::default()
        .directory(&log_dir)
        .basename("world_core")
        .suffix("log");

    Logger::try_with_str("info")
        .unwrap()
        .log_to_file(file_spec)
        .format(my_formatter)
        .rotate(
            Criterion::Size(5_000_000),
            Naming::Numbers,
            Cleanup::KeepLogFiles(5),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .expect("Unable to init logger.");

    log::info!("Log dir: {}.", &log_dir.display());

    fn my_formatter(
        write: &mut dyn Write,
        now: &mut DeferredNow,
        record: &Record
    ) -> Result<()> {
        write!(
            write,
            "{} {:5} [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.module_path().unwrap_or("<unknown>"),
            &record.args()
        )
    }
}
