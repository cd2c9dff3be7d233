use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::Path;
use thiserror::Error;

/// Send log messages at `level` and above to the file at `path`, creating
/// its parent directories if needed.  The file is appended to, not
/// truncated.
pub(crate) fn init_logging(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file)?;
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file")]
    Open(#[from] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}
