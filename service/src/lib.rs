use avoma::{AvomaClient, Error};
use config::Config;
use log::info;

pub mod config;
pub mod logging;

/// Builds the Avoma client from the process configuration.
pub fn init_client(config: &Config) -> Result<AvomaClient, Error> {
    info!(
        "Avoma client config: base_url={}, timeout={}s",
        config.base_url(),
        config.timeout_secs,
    );

    AvomaClient::builder(config.api_key())
        .with_base_url(config.base_url())
        .with_timeout(config.timeout())
        .build()
}
