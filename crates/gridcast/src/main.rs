//! gridcast command line: JSON table document in, text grid or PNG out.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gridcast::{
    render_image, render_text, write_png, FontProvider, StyleRegistry, TableDocument,
};

#[derive(Parser, Debug)]
#[command(
    name = "gridcast",
    version,
    about = "Render JSON table descriptions as box-drawing text grids or PNG images"
)]
struct Cli {
    /// Input JSON file describing the table
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output file path (defaults to stdout for text, output.png for images)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Generate PNG output instead of text
    #[arg(long, action)]
    png: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading input file {}", cli.input.display()))?;
    let document = TableDocument::from_json(&json)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    log::debug!(
        "loaded table '{}': {} columns, {} rows, style '{}'",
        document.name,
        document.headers.len(),
        document.rows.len(),
        document.style,
    );

    let registry = StyleRegistry::with_builtins();
    let spec = document.to_table_spec();

    let text = render_text(&spec, &registry)?;
    if text.is_empty() {
        anyhow::bail!("generated table is empty (no headers or no rows)");
    }

    if cli.png {
        let provider = FontProvider::new();
        let canvas = render_image(&spec, &registry, &provider, &document.font_selection())?;
        let path = cli.out.unwrap_or_else(|| PathBuf::from("output.png"));
        write_png(&canvas, &path)?;
        log::info!(
            "rendered {}x{} canvas to {}",
            canvas.width(),
            canvas.height(),
            path.display()
        );
        println!("PNG generated: {}", path.display());
        return Ok(());
    }

    match cli.out {
        Some(path) => {
            fs::write(&path, &text)
                .with_context(|| format!("writing output file {}", path.display()))?;
            println!("Output written to: {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}
