use crate::paths::{CdinvPaths, ConfigError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Escritura con `toml_edit` para preservar comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;

  /// Como `load_section`, pero un archivo o sección ausente da `T::default()`.
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default;
}

pub struct TomlConfigBackend {
  config_file: PathBuf,
}

impl TomlConfigBackend {
  pub fn new(paths: &CdinvPaths) -> Self {
    Self::at(paths.config_file())
  }

  /// Backend sobre un archivo concreto (p. ej. `--config`).
  pub fn at(config_file: impl Into<PathBuf>) -> Self {
    Self { config_file: config_file.into() }
  }

  pub fn config_file(&self) -> &Path {
    &self.config_file
  }

  fn read_table(&self) -> Result<Option<toml::Value>, ConfigError> {
    let content = match fs::read_to_string(&self.config_file) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    Ok(Some(toml::from_str(&content)?))
  }
}

fn decode<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = &self.config_file;
    let toml_val = self
      .read_table()?
      .ok_or_else(|| ConfigError::Other(format!("missing config file {}", path.display())))?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode(section, table)
  }

  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(toml_val) = self.read_table()? else {
      return Ok(T::default());
    };

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = &self.config_file;

    // 1) Leer config actual como DocumentMut o crear doc vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(path) {
      Ok(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` (serde) y re-parsearla como tabla.
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 3) Reemplazar sólo esa sección; el resto del documento queda igual.
    doc[section] = section_item;

    cdinv_fs::atomic_write_str(path, &doc.to_string())?;

    Ok(())
  }
}
