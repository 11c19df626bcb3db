//! `mdp serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdp_config::{CliSettings, Config};
use mdp_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Markdown document to serve (overrides config).
    document: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "MDP_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "MDP_PORT")]
    port: Option<u16>,

    /// Log every rendered request.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the document cannot be read,
    /// or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            document: self.document,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let server_config = server_config_from_config(&config, self.verbose)?;

        output.info(&format!(
            "Serving {} on http://{}:{}/",
            server_config.document.display(),
            server_config.host,
            server_config.port
        ));

        run_server(server_config).await?;
        Ok(())
    }
}
