use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use cdinv_core::domain::RecordStore;
use cdinv_core::ports::{PersistError, SnapshotStore};
use tracing::debug;

/// Snapshot del inventario como JSON.
///
/// El archivo entero es el snapshot: una lista de `{id, title, artist}` sin
/// cabecera ni versión. Se escribe con reemplazo atómico vía `cdinv-fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotStore;

impl JsonSnapshotStore {
  pub fn new() -> Self {
    Self
  }
}

impl SnapshotStore for JsonSnapshotStore {
  fn load(&self, path: &Path) -> Result<RecordStore, PersistError> {
    let bytes = match fs::read(path) {
      Ok(b) => b,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Err(PersistError::FileNotFound(path.to_path_buf()));
      }
      Err(source) => return Err(PersistError::ReadFailed { path: path.to_path_buf(), source }),
    };

    debug!(path = %path.display(), bytes = bytes.len(), "read snapshot");

    serde_json::from_slice(&bytes)
      .map_err(|e| PersistError::Corrupt { path: path.to_path_buf(), reason: e.to_string() })
  }

  fn save(&self, path: &Path, store: &RecordStore) -> Result<(), PersistError> {
    let write_failed = |source: std::io::Error| PersistError::WriteFailed { path: path.to_path_buf(), source };

    let bytes = serde_json::to_vec(store).map_err(|e| write_failed(std::io::Error::other(e)))?;
    cdinv_fs::atomic_write(path, &bytes).map_err(write_failed)?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote snapshot");
    Ok(())
  }
}
