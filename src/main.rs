use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use gptdump::DumpConfig;
use tracing_subscriber::EnvFilter;

/// Dump the GPT headers and partition entries of a disk image
#[derive(Parser, Debug)]
#[command(name = "gptdump", version, about)]
struct Args {
    /// List unused (all-zero) entry slots too
    #[arg(long)]
    verbose: bool,

    /// Show known partition types and attribute bits by name
    #[arg(long)]
    symbol: bool,

    /// Skip the backup header and its entry array
    #[arg(long)]
    noalt: bool,

    /// Decode the protective MBR at LBA 0 as well
    #[arg(long)]
    mbr: bool,

    /// Disk image or block device to read
    image: PathBuf,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("gptdump: {e}");
        process::exit(1)
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", args.image.display())?;
    writeln!(out)?;

    DumpConfig::new()
        .verbose(args.verbose)
        .resolve_symbols(args.symbol)
        .skip_secondary(args.noalt)
        .show_mbr(args.mbr)
        .dump_path(&args.image, &mut out)?;

    Ok(())
}
