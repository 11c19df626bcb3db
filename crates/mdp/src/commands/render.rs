//! `mdp render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::commands::read_document;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown document to convert.
    document: PathBuf,

    /// Output HTML file (defaults to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or the HTML cannot be
    /// written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let html = render_file(&self.document)?;

        if let Some(path) = &self.output {
            std::fs::write(path, html)?;
            Output::new().success(&format!("Created {}", path.display()));
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    }
}

/// Convert one markdown file to an HTML fragment.
fn render_file(path: &Path) -> Result<String, CliError> {
    let document = read_document(path)?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "Rendering document");
    Ok(mdp_parser::markdown_to_html(&document))
}
