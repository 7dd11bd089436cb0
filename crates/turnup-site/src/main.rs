mod assets;
mod generate;
mod template;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::template::Template;

#[derive(Parser)]
#[command(name = "turnup", version, about = "Markdown static site generator")]
struct Cli {
    /// Directory of Markdown content to compile
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Directory of static assets copied verbatim into the output
    #[arg(long = "static", default_value = "static")]
    static_dir: PathBuf,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Output directory, recreated on every run
    #[arg(long, default_value = "public")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        tracing::error!("{err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    assets::copy_directory(&cli.static_dir, &cli.output)?;

    let template = Template::load(&cli.template)
        .with_context(|| format!("reading template {}", cli.template.display()))?;

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating output directory {}", cli.output.display()))?;
    generate::generate_pages_recursive(&cli.content, &template, &cli.output)
}
