use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the `cdinv` binary.
#[derive(Debug, Parser)]
#[command(name = "cdinv", version, about = "Interactive inventory manager for a personal CD collection")]
pub struct Cli {
  /// Inventory file to load and save (overrides `[storage] inventory_file`)
  #[arg(short, long, value_name = "PATH")]
  pub file: Option<PathBuf>,

  /// Config file to use instead of the default cdinv.toml
  #[arg(short, long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Quiet mode (only errors are logged)
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Verbose mode (debug logging)
  #[arg(short, long)]
  pub verbose: bool,
}
