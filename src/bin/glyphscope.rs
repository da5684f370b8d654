//! glyphscope command line
//!
//! Reads a layout dump and either prints font statistics or renders the
//! annotated document as HTML.
//!
//! Usage:
//!   glyphscope fonts paper.json --top 10
//!   glyphscope html paper.json -o paper.html
//!
//! Set `RUST_LOG=debug` for progress output on stderr.

use clap::{Parser, Subcommand};
use glyphscope::config::{DEFAULT_TOP_FONTS, RenderConfig};
use glyphscope::converters::HtmlConverter;
use glyphscope::dump::{LayoutDump, LoadedDocument};
use glyphscope::fonts::FontSizeStats;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "glyphscope", version, about = "Font statistics and annotated HTML for PDF layout dumps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the most common font sizes
    Fonts {
        /// Layout dump (JSON)
        input: PathBuf,

        /// Number of font sizes to list
        #[arg(long, default_value_t = DEFAULT_TOP_FONTS)]
        top: usize,
    },
    /// Render the annotated document as HTML
    Html {
        /// Layout dump (JSON)
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the per-page separator comments
        #[arg(long)]
        no_page_comments: bool,
    },
}

fn load(path: &Path) -> glyphscope::Result<LoadedDocument> {
    let file = File::open(path)?;
    let mut loaded = LayoutDump::from_reader(BufReader::new(file))?.build()?;
    if loaded.document.filename.is_empty() {
        loaded.document.filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(loaded)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Fonts { input, top } => {
            let config = RenderConfig::new().with_top_fonts(top);
            let loaded = load(&input)?;
            let stats = FontSizeStats::collect(&loaded.arena, &loaded.layout);

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for line in stats.report(config.top_fonts) {
                writeln!(out, "{}", line)?;
            }
        },
        Command::Html {
            input,
            output,
            no_page_comments,
        } => {
            let config = RenderConfig::new().with_page_comments(!no_page_comments);
            let loaded = load(&input)?;
            let html =
                HtmlConverter::new().convert_document(&loaded.document, &loaded.arena, &config)?;

            match output {
                Some(path) => {
                    fs::write(&path, html)?;
                    log::info!("wrote {}", path.display());
                },
                None => std::io::stdout().lock().write_all(html.as_bytes())?,
            }
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
