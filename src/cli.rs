//! Command-line surface shared by the filter binaries.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Args;
use env_logger::Env;
use log::info;

use crate::pipeline::{run, Stats, Transducer};
use crate::reader::SamLines;

/// Custom styles for CLI help output
pub const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Input, output and logging options. Without any of them the tool reads SAM text
/// from stdin and writes to stdout.
#[derive(Args, Debug, Clone, Default)]
pub struct IoArgs {
    /// Input SAM text file, plain or gzip-compressed [default: stdin]
    #[arg(short = 'i', long = "input", value_name = "SAM")]
    pub input: Option<PathBuf>,

    /// Output SAM text file [default: stdout]
    #[arg(short = 'o', long = "output", value_name = "SAM")]
    pub output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

pub fn init_logging(quiet: bool) {
    let level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

impl IoArgs {
    fn open_input(&self) -> Result<SamLines<Box<dyn io::BufRead>>> {
        match &self.input {
            Some(path) => SamLines::from_path(path)
                .with_context(|| format!("failed to open input {}", path.display())),
            None => Ok(SamLines::stdin()),
        }
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create output {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }
}

/// Set up logging, then stream the configured input through `transducer`.
pub fn execute<T: Transducer + ?Sized>(args: &IoArgs, transducer: &T) -> Result<Stats> {
    init_logging(args.quiet);
    info!("Running {} version {}", transducer.name(), env!("CARGO_PKG_VERSION"));
    let start = Instant::now();

    let mut lines = args.open_input()?;
    let mut sink = args.open_output()?;
    let stats = run(&mut lines, &mut sink, transducer)?;

    info!(
        "{}: {} records and {} header lines read, {} modified, {} dropped, {} lines written in {:.1?}",
        transducer.name(),
        stats.records(),
        stats.headers(),
        stats.modified(),
        stats.dropped(),
        stats.written(),
        start.elapsed()
    );
    Ok(stats)
}
