use dsconf_config::Config;
use std::path::PathBuf;

/// Input parameters for the List command strategy.
#[derive(Debug, Clone)]
pub struct ListInput {
    pub config_path: Option<PathBuf>,
    /// Optional SCIM filter; empty means unfiltered
    pub filter: Option<String>,
}

/// Strategy for listing HTTP servlet extensions.
///
/// Prints the `{id, filter, objects}` state as pretty JSON on stdout.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = ListInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load(input.config_path.as_deref())?;
        let reader = super::build_reader(&config)?;

        let state = reader.list(input.filter.as_deref()).await?;
        println!("{}", serde_json::to_string_pretty(&state)?);

        Ok(())
    }
}
