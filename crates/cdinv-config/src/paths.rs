use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BASE_DIR_ENV: &str = "CDINV_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios de la aplicación.
///
/// Por defecto salen de `directories` (XDG en Linux, etc.). Con
/// `CDINV_BASE_DIR` todo cuelga de un único directorio, útil para
/// instalaciones portables y tests.
#[derive(Debug, Clone)]
pub struct CdinvPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl CdinvPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      return Self::from_base(env_base);
    }

    let proj_dirs = ProjectDirs::from("com", "cdinv", "cdinv").ok_or(ConfigError::Directories)?;
    let paths = Self {
      base_dir: proj_dirs.config_dir().to_path_buf(),
      config_dir: proj_dirs.config_dir().to_path_buf(),
      data_dir: proj_dirs.data_dir().to_path_buf(),
    };
    paths.ensure_dirs()?;

    Ok(paths)
  }

  /// Layout portable: `<base>/config` y `<base>/data`.
  pub fn from_base(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base = base.as_ref();
    let paths = Self {
      base_dir: base.to_path_buf(),
      config_dir: base.join("config"),
      data_dir: base.join("data"),
    };
    paths.ensure_dirs()?;

    Ok(paths)
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  fn ensure_dirs(&self) -> Result<(), ConfigError> {
    std::fs::create_dir_all(&self.config_dir)?;
    std::fs::create_dir_all(&self.data_dir)?;
    Ok(())
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("cdinv.toml")
  }
}
