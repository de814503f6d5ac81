//! Print the OpenAPI document as JSON.

use clap::Parser;
use user_registry::doc::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for the OpenAPI dump.
#[derive(Debug, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the user registry OpenAPI document"
)]
struct Cli {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), serde_json::Error> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let json = if cli.pretty {
        doc.to_pretty_json()?
    } else {
        doc.to_json()?
    };
    println!("{json}");
    Ok(())
}
