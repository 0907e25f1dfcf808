//! log4rs setup. Logs go to stderr so stdout only carries the report.

use crate::error::{Result, SubnetError};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Build the default stderr config at the level for `verbosity`.
pub fn stderr_config(verbosity: u8) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {M} - {m}{n}")))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level_for(verbosity)))
        .map_err(|e| SubnetError::Logging(e.to_string()))
}

/// Install the global logger, from `log_config` if given (like a
/// `log4rs.yml`), otherwise from [`stderr_config`].
pub fn init_logging(verbosity: u8, log_config: Option<&Path>) -> Result<()> {
    if let Some(path) = log_config {
        log4rs::init_file(path, Default::default())
            .map_err(|e| SubnetError::Logging(format!("{}: {e}", path.display())))?;
        log::debug!("logging configured from {}", path.display());
        return Ok(());
    }

    log4rs::init_config(stderr_config(verbosity)?)
        .map_err(|e| SubnetError::Logging(e.to_string()))?;
    Ok(())
}
