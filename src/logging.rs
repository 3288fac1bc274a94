//! Tracing setup. The TUI owns stdout, so logs go to a file under the
//! data directory. Filterable via the `BISHUN_LOG` env var.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber, writing to `bishun.log`
/// inside `data_dir`.
pub fn init(data_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let file = File::create(data_dir.join("bishun.log"))?;

    let filter = EnvFilter::try_from_env("BISHUN_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    Ok(())
}
