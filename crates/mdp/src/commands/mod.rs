//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod serve;
pub(crate) mod tokens;

pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use tokens::TokensArgs;

use std::path::Path;

use crate::error::CliError;

/// Read a markdown document from disk.
pub(crate) fn read_document(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
