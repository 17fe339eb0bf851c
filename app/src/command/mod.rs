//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use dsconf_client::{ClientOptions, ConfigApiClient, Credentials};
use dsconf_config::Config;
use dsconf_core::ExtensionListReader;
use std::time::Duration;
use tracing::info;

mod info;
mod init;
mod list;
mod show;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use list::{ListInput, ListStrategy};
pub use show::{ShowInput, ShowStrategy};
pub use version::VersionStrategy;

/// Build a reader over the configured server.
fn build_reader(config: &Config) -> anyhow::Result<ExtensionListReader<ConfigApiClient>> {
    let server = &config.server;
    info!(
        "Connecting to {} as {} (timeout={}s)",
        mask_url_userinfo(&server.base_url),
        server.username,
        server.timeout_secs
    );

    let options = ClientOptions {
        timeout: Duration::from_secs(server.timeout_secs),
        insecure_trust_all_tls: server.insecure_trust_all_tls,
    };
    let client = ConfigApiClient::new(
        &server.base_url,
        Credentials::new(server.username.clone(), server.password.clone()),
        &options,
    )?;

    Ok(ExtensionListReader::new(client))
}

/// Hide a password embedded in the URL's userinfo, if any.
fn mask_url_userinfo(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    let Some((credentials, after_at)) = rest.split_once('@') else {
        return url.to_string();
    };

    let Some((username, _password)) = credentials.split_once(':') else {
        return url.to_string();
    };

    format!("{scheme}://{username}:***@{after_at}")
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without boxing or runtime casting.
pub trait CommandStrategy: Send + Sync + 'static {
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
