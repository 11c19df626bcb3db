//! `mdp tokens` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use mdp_parser::Token;

use crate::commands::read_document;
use crate::error::CliError;

/// Arguments for the tokens command.
#[derive(Args)]
pub(crate) struct TokensArgs {
    /// Markdown document to tokenize.
    document: PathBuf,
}

impl TokensArgs {
    /// Execute the tokens command, one JSON object per line on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or stdout fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let tokens = mdp_parser::tokenize(&read_document(&self.document)?);
        let mut stdout = std::io::stdout().lock();
        write_json_lines(&tokens, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }
}

fn write_json_lines(tokens: &[Token], out: &mut impl Write) -> Result<(), CliError> {
    for token in tokens {
        serde_json::to_writer(&mut *out, token)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
