// Command-line entry point for callmap.

use anyhow::{bail, Context, Result};
use callmap::ports::{check_structure, JsonGraphCodec};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph JSON document to read
    #[arg(short, long)]
    input: PathBuf,

    /// Validate structure only, without parsing the document
    #[arg(long)]
    check: bool,

    /// Re-encode to canonical layout and write to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read input file: {}", cli.input.display()))?;

    if let Err(violation) = check_structure(&text) {
        bail!("{}: {}", cli.input.display(), violation);
    }
    if cli.check {
        println!("{}: structure OK", cli.input.display());
        return Ok(());
    }

    let graph = JsonGraphCodec::decode(&text)
        .with_context(|| format!("cannot parse {}", cli.input.display()))?;
    info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph document loaded"
    );

    match &cli.output {
        Some(path) => {
            JsonGraphCodec::export(&graph, path)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!(
                "Normalized graph written to {} ({} nodes, {} edges)",
                path.display(),
                graph.nodes.len(),
                graph.edges.len()
            );
        }
        None => {
            println!(
                "{}: {} nodes, {} edges",
                cli.input.display(),
                graph.nodes.len(),
                graph.edges.len()
            );
        }
    }
    Ok(())
}
