use anyhow::Result;
use clap::Parser;

use sam_pipe_filters::cli::{self, IoArgs};
use sam_pipe_filters::{ImputeMode, MateImputer};

/// Place unmapped reads at their mapped mate's position; mapped reads are left as is.
#[derive(Parser, Debug)]
#[command(name = "assign-unmapped-pos-one-way", version, styles = cli::STYLES)]
struct Args {
    #[command(flatten)]
    io: IoArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::execute(&args.io, &MateImputer::new(ImputeMode::UnmappedReadOnly))?;
    Ok(())
}
