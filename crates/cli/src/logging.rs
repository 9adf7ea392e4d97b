use flexi_logger::{FlexiLoggerError, LogSpecification, Logger, LoggerHandle};
use log::LevelFilter;

/// Starts stderr logging. `RUST_LOG` takes precedence over `level`.
///
/// An unparsable spec is reported on stderr and skipped; when neither
/// parses, logging falls back to `warn`.
/// The returned handle must stay alive for as long as logging is needed.
pub fn init_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let spec = resolve_log_spec(rust_log.as_deref(), level, |warning| eprintln!("{}", warning));

    Logger::with(spec)
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}

fn resolve_log_spec(
    rust_log: Option<&str>,
    level: &str,
    mut warn: impl FnMut(String),
) -> LogSpecification {
    for candidate in rust_log.into_iter().chain(std::iter::once(level)) {
        match LogSpecification::parse(candidate) {
            Ok(spec) => return spec,
            Err(e) => warn(format!(
                "Warning: ignoring invalid log spec `{}`: {}",
                candidate, e
            )),
        }
    }
    LogSpecification::builder().default(LevelFilter::Warn).build()
}
