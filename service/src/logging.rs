use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Crates under the Avoma client whose records would drown out the request
/// log of the `avoma` crate itself.
const HTTP_STACK_MODULES: &[&str] = &["reqwest", "hyper", "rustls", "h2", "mio"];

pub struct Logger {}

impl Logger {
    /// Starts the terminal logger for the `avoma` binary.
    ///
    /// `DEBUG` shows every Avoma request and pagination step; `TRACE` adds
    /// the HTTP stack underneath it.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let level = config.log_level_filter;

        TermLogger::init(
            level,
            Self::log_config(level),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )
    }

    fn hidden_modules(level: LevelFilter) -> &'static [&'static str] {
        match level {
            LevelFilter::Trace => &[],
            _ => HTTP_STACK_MODULES,
        }
    }

    fn log_config(level: LevelFilter) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();
        for module in Self::hidden_modules(level) {
            builder.add_filter_ignore_str(module);
        }
        builder.build()
    }
}
