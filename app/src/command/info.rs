use super::mask_url_userinfo;
use dsconf_config::Config;
use std::path::PathBuf;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// Outputs the server connection settings (password masked) and checks that
/// the configuration API answers a list call.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load(input.as_deref())?;
        let server = &config.server;

        println!("=== dsconf Configuration ===\n");

        println!("Server:");
        println!("  URL: {}", mask_url_userinfo(&server.base_url));
        println!("  Username: {}", server.username);
        println!("  Password: {}", server.masked_password());
        println!("  Timeout: {}s", server.timeout_secs);
        if server.insecure_trust_all_tls {
            println!("  TLS: trust all certificates (insecure)");
        } else {
            println!("  TLS: verify certificates");
        }
        println!();

        info!("Testing configuration API connection");
        let reader = super::build_reader(&config)?;
        match reader.list(None).await {
            Ok(state) => {
                println!("  Status: Connected");
                println!("  HTTP Servlet Extensions: {}", state.objects.len());
            }
            Err(e) => {
                println!("  Status: Connection failed");
                println!("  Error: {e}");
            }
        }

        Ok(())
    }
}
