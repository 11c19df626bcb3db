//! Application state.

/// State shared across all handlers.
///
/// Holds the raw document only. Parser state is created per request.
pub(crate) struct AppState {
    /// Markdown source, loaded once at startup.
    pub(crate) document: Vec<u8>,
    /// Log each render at info level.
    pub(crate) verbose: bool,
}
