//! tsbak - Main entry point
//!
//! Keeps a bounded number of timestamped backup copies per source file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tsbak::{config::Config, utils, walk, RunContext};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Max number of backup files per source file to be kept
    #[arg(long)]
    max_num_backups: Option<usize>,

    /// Directory name where backup files will be stored
    #[arg(long)]
    dirname: Option<String>,

    /// Turn on debugging output
    #[arg(long)]
    debug: bool,

    /// Compute and log every decision without touching the filesystem
    #[arg(long)]
    dryrun: bool,

    /// Do not recurse into path arguments that are directories
    #[arg(long)]
    norecurse: bool,

    /// Do not remove superfluous backup files
    #[arg(long)]
    nounlink: bool,

    /// File or directory names to process
    file: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // CLI flags win over the config file
    if let Some(max_num_backups) = args.max_num_backups {
        config.max_num_backups = max_num_backups;
    }
    if let Some(dirname) = args.dirname {
        config.backup_dir_name = dirname;
    }
    if args.dryrun {
        config.dry_run = true;
    }
    if args.norecurse {
        config.recurse = false;
    }
    if args.nounlink {
        config.unlink = false;
    }

    let log_level = if args.debug { "debug" } else { "info" };
    utils::logger::init(log_level)?;

    let mut ctx = RunContext::new(config)?;

    for path in &args.file {
        walk::process_path(&mut ctx, path)?;
    }

    tracing::info!("Backed up {} file(s)", ctx.copied);

    Ok(())
}
