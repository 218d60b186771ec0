use std::env;
use std::path::PathBuf;

use clap::Parser;

use pdfpage::{generate, GenerationRequest};

#[derive(Parser)]
#[command(name = "pdfpage")]
#[command(about = "Generate a static HTML page that embeds a PDF")]
struct Cli {
    /// Output HTML path (e.g. dist/index.html)
    #[arg(long)]
    out: PathBuf,

    /// PDF href relative to the HTML (e.g. document.pdf)
    #[arg(long)]
    pdf: String,

    /// HTML title. If empty, uses the repo name when available.
    #[arg(long)]
    title: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let request = GenerationRequest {
        output_path: cli.out,
        pdf_href: cli.pdf,
        title_override: cli.title,
        repo_identifier: env::var("GITHUB_REPOSITORY").ok(),
    };

    if let Err(e) = generate(&request) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Created {}", request.output_path.display());
}
