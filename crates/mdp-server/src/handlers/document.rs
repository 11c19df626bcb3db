//! Document endpoint.
//!
//! Renders the loaded markdown document to HTML on every request.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use mdp_parser::Parser;

use crate::state::AppState;

/// Handle GET for `/` and any path below it.
pub(crate) async fn get_document(State(state): State<Arc<AppState>>) -> Html<String> {
    let parser = Parser::new(&state.document);
    let html = parser.render();

    if state.verbose {
        tracing::info!(
            tokens = parser.tokens().len(),
            bytes = html.len(),
            "Rendered document"
        );
    }

    Html(html)
}
