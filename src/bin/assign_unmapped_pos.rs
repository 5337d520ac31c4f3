use anyhow::Result;
use clap::Parser;

use sam_pipe_filters::cli::{self, IoArgs};
use sam_pipe_filters::{ImputeMode, MateImputer};

/// Place unmapped reads at their mapped mate's position, and give mapped reads with
/// an unmapped mate their own position as the mate position.
#[derive(Parser, Debug)]
#[command(
    name = "assign-unmapped-pos",
    version,
    styles = cli::STYLES,
    long_about = r#"
Place unmapped reads at their mapped mate's position.

For a record whose read is unmapped (flag & 0xC == 4) and whose RNAME is '*',
RNAME and POS are copied from RNEXT and PNEXT. For a record whose mate is
unmapped (flag & 0xC == 8) and whose RNEXT is '*', RNEXT and PNEXT are copied
from RNAME and POS. All other lines, headers included, are written unchanged.

EXAMPLES:

  samtools view -h aligned.bam | assign-unmapped-pos | samtools sort -o sorted.bam -
"#
)]
struct Args {
    #[command(flatten)]
    io: IoArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::execute(&args.io, &MateImputer::new(ImputeMode::Both))?;
    Ok(())
}
