use std::io;

use anyhow::Context;
use clap::Parser;

use cdinv_config::{CdinvPaths, TomlConfigBackend};
use cdinv_core::services::InventoryService;
use cdinv_storage::{JsonSnapshotStore, StorageConfig};

mod args;
mod display;
mod logging;
mod shell;

use args::Cli;
use shell::Shell;

fn main() {
  if let Err(error) = run() {
    eprintln!("cdinv error: {error:#}");
    std::process::exit(1);
  }
}

fn run() -> anyhow::Result<()> {
  let cli = Cli::parse();
  logging::init_tracing(cli.quiet, cli.verbose)?;

  // --- Wiring ---

  // 1. Directories (CDINV_BASE_DIR or platform defaults).
  let paths = CdinvPaths::detect().context("failed to resolve application directories")?;

  // 2. Config file: --config wins over the default location.
  let backend = match &cli.config {
    Some(file) => TomlConfigBackend::at(file),
    None => TomlConfigBackend::new(&paths),
  };
  let storage = StorageConfig::load_from(&backend)
    .with_context(|| format!("failed to load [storage] from {}", backend.config_file().display()))?;

  // 3. Inventory file: --file wins over [storage] inventory_file.
  let inventory_file = cli.file.clone().unwrap_or_else(|| storage.inventory_path(&paths));
  tracing::debug!(path = %inventory_file.display(), "inventory file");

  // 4. Persistence adapter behind the core service; the shell owns the store.
  let service = InventoryService::new(JsonSnapshotStore::new(), inventory_file);

  let stdin = io::stdin();
  let stdout = io::stdout();
  Shell::new(service, stdin.lock(), stdout.lock()).run().context("terminal i/o failed")?;

  Ok(())
}
