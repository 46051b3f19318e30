use tracing_subscriber::EnvFilter;

pub fn default_level(quiet: bool, verbose: bool) -> &'static str {
  if quiet {
    "error"
  } else if verbose {
    "debug"
  } else {
    "warn"
  }
}

/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// `RUST_LOG`, when set, replaces the level chosen by the flags.
pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(quiet, verbose)));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

  Ok(())
}
