//! Maquette CLI
//!
//! Converts an HTML document (file, URL, or inline string) into a design
//! tree and prints it as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use maquette_common::warning::clear_warnings;
use maquette_convert::{
    DesignNode, Viewport, convert_document, convert_url, extract_palette,
};
use owo_colors::OwoColorize;

/// Maquette — HTML/CSS to positioned design-tree converter
#[derive(Parser, Debug)]
#[command(name = "maquette")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Convert a local file
    maquette ./index.html

    # Convert a document fetched over HTTP
    maquette https://example.com

    # Convert an inline HTML string
    maquette --html '<body><h1>Hi</h1></body>'

    # Custom viewport
    maquette --width 390 --height 844 ./index.html

    # Print the color palette instead of the tree
    maquette --palette ./index.html
"#)]
struct Cli {
    /// Path to an HTML file, or a URL to fetch
    #[arg(value_name = "FILE|URL")]
    path: Option<String>,

    /// Convert an HTML string directly instead of a file/URL
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Viewport width in pixels
    #[arg(long, default_value = "1200")]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value = "800")]
    height: f64,

    /// Print the unique color palette instead of the design tree
    #[arg(long)]
    palette: bool,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let viewport = Viewport {
        width: cli.width,
        height: cli.height,
    };

    clear_warnings();
    let tree = match (&cli.html, &cli.path) {
        (Some(html), _) => convert_document(html, viewport),
        (None, Some(path)) if is_url(path) => {
            convert_url(path, viewport).with_context(|| format!("fetching {path}"))?
        }
        (None, Some(path)) => {
            let file = PathBuf::from(path);
            let html = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            convert_document(&html, viewport)
        }
        (None, None) => bail!("provide a FILE|URL argument or --html (see --help)"),
    };

    if cli.palette {
        for color in extract_palette(&tree) {
            println!("{color}");
        }
    } else if cli.compact {
        println!("{}", serde_json::to_string(&tree)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    }

    eprintln!(
        "{} {} nodes, viewport {}x{}",
        "converted:".green().bold(),
        count_nodes(&tree),
        cli.width,
        cli.height
    );

    Ok(())
}

fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

fn count_nodes(node: &DesignNode) -> usize {
    1 + node
        .children
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(count_nodes)
        .sum::<usize>()
}
