use anyhow::Result;
use clap::Parser;

use sam_pipe_filters::cli::{self, IoArgs};
use sam_pipe_filters::IntronIndelFilter;

/// Drop records with an insertion or deletion directly next to an intron.
#[derive(Parser, Debug)]
#[command(
    name = "filter-intron-adjacent-indels",
    version,
    styles = cli::STYLES,
    long_about = r#"
Drop records with an insertion or deletion directly next to an intron.

A record is dropped when its CIGAR, or its first MC:Z (mate CIGAR) tag, has an
N operation immediately before or after an I or D operation, e.g. 10M50N5D10M.
Kept records and header lines are written unchanged and in input order.
"#
)]
struct Args {
    #[command(flatten)]
    io: IoArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::execute(&args.io, &IntronIndelFilter::new())?;
    Ok(())
}
