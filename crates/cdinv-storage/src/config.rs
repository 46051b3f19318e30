use cdinv_config::{CdinvPaths, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INVENTORY_FILE: &str = "CDInventory.dat";

/// Sección `[storage]` de cdinv.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
  /// Archivo del inventario. Si es relativo se resuelve contra el
  /// directorio de datos.
  #[serde(default = "default_inventory_file")]
  pub inventory_file: PathBuf,
}

fn default_inventory_file() -> PathBuf {
  PathBuf::from(DEFAULT_INVENTORY_FILE)
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig { inventory_file: default_inventory_file() }
  }
}

impl StorageConfig {
  /// Carga la sección (o sus defaults) y la vuelve a escribir, de modo que
  /// el usuario encuentre la clave en el archivo la primera vez.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: StorageConfig = backend.load_section_with_default("storage")?;
    backend.save_section("storage", &cfg)?;
    Ok(cfg)
  }

  pub fn inventory_path(&self, paths: &CdinvPaths) -> PathBuf {
    if self.inventory_file.is_absolute() {
      self.inventory_file.clone()
    } else {
      paths.data_dir.join(&self.inventory_file)
    }
  }
}
