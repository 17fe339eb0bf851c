use dsconf_config::Config;
use std::path::PathBuf;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/dsconf/config.json`, or at
/// the path passed with `--config`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config(input.as_deref())?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and set the server URL and credentials");
        println!("   2. Run 'dsconf info' to check the connection");
        println!("   3. Run 'dsconf list' to read the HTTP servlet extensions");
        println!();
        Ok(())
    }
}
