use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

/// Modules whose records follow the verbosity flag.
///
/// Everything else is kept at warnings.
const MODULES: [&str; 2] = ["lowpan_cli", "netip"];

/// Installs the stderr logger.
///
/// Verbosity 0 logs informational records, 1 adds debug records (rejected
/// parser input) and 2 or more adds trace records (formatter truncation).
pub fn init(verbose: u8) -> Result<(), SetLoggerError> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    MODULES
        .iter()
        .fold(SimpleLogger::new().with_level(LevelFilter::Warn), |logger, module| {
            logger.with_module_level(module, level)
        })
        .with_utc_timestamps()
        .init()
}
