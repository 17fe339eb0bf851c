use dsconf_config::Config;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ShowInput {
    pub config_path: Option<PathBuf>,
    pub name: String,
}

/// Strategy for showing one HTTP servlet extension with all its attributes.
#[derive(Debug, Clone, Copy)]
pub struct ShowStrategy;

impl super::CommandStrategy for ShowStrategy {
    type Input = ShowInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load(input.config_path.as_deref())?;
        let reader = super::build_reader(&config)?;

        let extension = reader.get(&input.name).await?;
        println!("{}", serde_json::to_string_pretty(&extension)?);

        Ok(())
    }
}
