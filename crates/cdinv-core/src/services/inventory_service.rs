use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::RecordStore;
use crate::ports::{PersistError, SnapshotStore};

/// Une un [`SnapshotStore`] con la ruta del inventario configurada.
///
/// No guarda ningún `RecordStore`: el inventario vive en quien lo llama y se
/// pasa explícitamente en cada operación.
pub struct InventoryService<S>
where
  S: SnapshotStore,
{
  snapshots: S,
  path: PathBuf,
}

impl<S> InventoryService<S>
where
  S: SnapshotStore,
{
  pub fn new(snapshots: S, path: impl Into<PathBuf>) -> Self {
    Self { snapshots, path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn load(&self) -> Result<RecordStore, PersistError> {
    debug!(path = %self.path.display(), "loading inventory");

    match self.snapshots.load(&self.path) {
      Ok(store) => {
        info!(path = %self.path.display(), records = store.len(), "inventory loaded");
        Ok(store)
      }
      Err(e) => {
        warn!(path = %self.path.display(), error = %e, "inventory not loaded");
        Err(e)
      }
    }
  }

  /// Recarga desde disco sobre `store`.
  ///
  /// Sólo reemplaza `store` si la carga tuvo éxito; ante cualquier error el
  /// inventario en memoria sobrevive intacto. Devuelve cuántos registros se
  /// cargaron.
  pub fn reload_into(&self, store: &mut RecordStore) -> Result<usize, PersistError> {
    let loaded = self.load()?;
    *store = loaded;
    Ok(store.len())
  }

  pub fn save(&self, store: &RecordStore) -> Result<(), PersistError> {
    debug!(path = %self.path.display(), records = store.len(), "saving inventory");

    match self.snapshots.save(&self.path, store) {
      Ok(()) => {
        info!(path = %self.path.display(), records = store.len(), "inventory saved");
        Ok(())
      }
      Err(e) => {
        warn!(path = %self.path.display(), error = %e, "inventory not saved");
        Err(e)
      }
    }
  }
}
