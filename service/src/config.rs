use avoma::types::{call, note};
use chrono::{DateTime, Utc};
use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Production Avoma API base URL used when `AVOMA_BASE_URL` is not set.
pub const DEFAULT_AVOMA_BASE_URL: &str = avoma::DEFAULT_BASE_URL;

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The API key issued by Avoma, sent as a bearer token on every request.
    #[arg(long, env = "AVOMA_API_KEY", hide_env_values = true)]
    api_key: String,

    /// The base URL of the Avoma API.
    /// Override in tests to point at a mock server.
    #[arg(long, env = "AVOMA_BASE_URL", default_value = DEFAULT_AVOMA_BASE_URL)]
    base_url: String,

    /// Timeout in seconds for a single request to the Avoma API
    #[arg(long, env = "AVOMA_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)),
        )]
    pub log_level_filter: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

/// The action to run against the Avoma API.
#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// List meetings in a date range
    Meetings {
        #[arg(long)]
        from: DateTime<Utc>,
        #[arg(long)]
        to: DateTime<Utc>,
        #[arg(long)]
        page_size: Option<u32>,
        /// Only meetings that were calls
        #[arg(long)]
        is_call: Option<bool>,
        /// Fetch every page instead of only the first one
        #[arg(long)]
        follow: bool,
    },
    /// Show the user that owns the API key
    Me,
    /// List workspace users
    Users {
        #[arg(long)]
        follow: bool,
    },
    /// List calls in a date range
    Calls {
        #[arg(long)]
        from: DateTime<Utc>,
        #[arg(long)]
        to: DateTime<Utc>,
        #[arg(long)]
        host: Option<email_address::EmailAddress>,
        #[arg(
            long,
            value_parser = clap::builder::PossibleValuesParser::new(["scheduled", "in_progress", "completed", "cancelled"])
                .map(|s| parse_call_state(&s)),
        )]
        status: Option<call::State>,
        #[arg(long)]
        follow: bool,
    },
    /// List meeting notes in a date range
    Notes {
        #[arg(long)]
        from: DateTime<Utc>,
        #[arg(long)]
        to: DateTime<Utc>,
        #[arg(long)]
        meeting: Option<Uuid>,
        #[arg(
            long,
            default_value = "json",
            value_parser = clap::builder::PossibleValuesParser::new(["json", "html", "markdown"])
                .map(|s| parse_output_format(&s)),
        )]
        format: note::OutputFormat,
        #[arg(long)]
        follow: bool,
    },
    /// Show the recording of a meeting
    Recording { meeting: Uuid },
    /// List transcriptions in a date range
    Transcriptions {
        #[arg(long)]
        from: DateTime<Utc>,
        #[arg(long)]
        to: DateTime<Utc>,
        #[arg(long)]
        meeting: Option<Uuid>,
    },
    /// List note templates
    Templates,
    /// List smart categories
    SmartCategories,
}

fn parse_call_state(value: &str) -> call::State {
    match value {
        "in_progress" => call::State::InProgress,
        "completed" => call::State::Completed,
        "cancelled" => call::State::Cancelled,
        _ => call::State::Scheduled,
    }
}

fn parse_output_format(value: &str) -> note::OutputFormat {
    match value {
        "html" => note::OutputFormat::Html,
        "markdown" => note::OutputFormat::Markdown,
        _ => note::OutputFormat::Json,
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the Avoma API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level_filter", &self.log_level_filter)
            .field("command", &self.command)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "AVOMA_API_KEY",
        "AVOMA_BASE_URL",
        "AVOMA_TIMEOUT_SECS",
        "LOG_LEVEL_FILTER",
    ];

    /// Restores the Avoma environment variables when dropped.
    struct EnvGuard {
        saved_vars: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let saved_vars = VARS
                .iter()
                .map(|var| {
                    let saved = (var.to_string(), env::var(var).ok());
                    env::remove_var(var);
                    saved
                })
                .collect();
            EnvGuard { saved_vars }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved_vars {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults_with_api_key_from_env() {
        let _guard = EnvGuard::new();
        env::set_var("AVOMA_API_KEY", "env_api_key");

        let config = Config::try_parse_from(["avoma", "me"]).unwrap();

        assert_eq!(config.api_key(), "env_api_key");
        assert_eq!(config.base_url(), DEFAULT_AVOMA_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level_filter, LevelFilter::Info);
        assert_eq!(config.command, Command::Me);
    }

    #[test]
    #[serial]
    fn test_flags_override_env() {
        let _guard = EnvGuard::new();
        env::set_var("AVOMA_API_KEY", "env_api_key");
        env::set_var("AVOMA_BASE_URL", "http://localhost:1234/");

        let config = Config::try_parse_from([
            "avoma",
            "--api-key",
            "flag_api_key",
            "--base-url",
            "http://localhost:5678/",
            "--timeout-secs",
            "5",
            "--log-level-filter",
            "DEBUG",
            "templates",
        ])
        .unwrap();

        assert_eq!(config.api_key(), "flag_api_key");
        assert_eq!(config.base_url(), "http://localhost:5678/");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_rejected() {
        let _guard = EnvGuard::new();

        assert!(Config::try_parse_from(["avoma", "me"]).is_err());
    }

    #[test]
    #[serial]
    fn test_notes_format_and_call_status_parse() {
        let _guard = EnvGuard::new();
        env::set_var("AVOMA_API_KEY", "env_api_key");

        let notes = Config::try_parse_from([
            "avoma",
            "notes",
            "--from",
            "2024-02-01T00:00:00Z",
            "--to",
            "2024-02-29T00:00:00Z",
            "--format",
            "markdown",
        ])
        .unwrap();
        match notes.command {
            Command::Notes { format, follow, .. } => {
                assert_eq!(format, note::OutputFormat::Markdown);
                assert!(!follow);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let calls = Config::try_parse_from([
            "avoma",
            "calls",
            "--from",
            "2024-02-01T00:00:00Z",
            "--to",
            "2024-02-29T00:00:00Z",
            "--status",
            "in_progress",
        ])
        .unwrap();
        match calls.command {
            Command::Calls { status, .. } => assert_eq!(status, Some(call::State::InProgress)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_debug_output_redacts_api_key() {
        let _guard = EnvGuard::new();
        env::set_var("AVOMA_API_KEY", "super_secret_key");

        let config = Config::try_parse_from(["avoma", "me"]).unwrap();

        assert!(!format!("{:?}", config).contains("super_secret_key"));
    }
}
