//! mdp CLI - Markdown to HTML converter.
//!
//! Provides commands for:
//! - `serve`: Serve a markdown document as HTML over HTTP
//! - `render`: Convert a markdown document to an HTML fragment
//! - `tokens`: Print the token stream of a document as JSON lines

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ServeArgs, TokensArgs};
use output::Output;

/// mdp - Markdown to HTML converter.
#[derive(Parser)]
#[command(name = "mdp", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve a markdown document as HTML.
    Serve(ServeArgs),
    /// Convert a markdown document to HTML.
    Render(RenderArgs),
    /// Print the tokens of a markdown document.
    Tokens(TokensArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(args.execute()),
            Err(e) => Err(e.into()),
        },
        Commands::Render(args) => args.execute(),
        Commands::Tokens(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
