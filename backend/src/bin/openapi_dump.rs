//! Print the OpenAPI document as JSON.

use std::process::ExitCode;

use clap::Parser;
use user_ingest::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for `openapi-dump`.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the OpenAPI document for the user ingest API")]
struct Cli {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let rendered = if cli.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    };
    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialise OpenAPI document: {err}");
            ExitCode::FAILURE
        }
    }
}
