use std::path::{Path, PathBuf};

use crate::domain::RecordStore;

/// Fallos de persistencia. Todos son recuperables: la sesión sigue.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
  #[error("{} does not exist", .0.display())]
  FileNotFound(PathBuf),

  #[error("could not read {}: {source}", path.display())]
  ReadFailed {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{} is not a valid inventory snapshot: {reason}", path.display())]
  Corrupt { path: PathBuf, reason: String },

  #[error("could not write {}: {source}", path.display())]
  WriteFailed {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Port que abstrae cómo se guarda el inventario completo.
///
/// El snapshot es opaco: el formato sólo tiene que reproducir exactamente el
/// `RecordStore` que se guardó. `load` nunca toca el inventario de quien
/// llama; devuelve uno nuevo sólo si la lectura salió bien.
pub trait SnapshotStore {
  fn load(&self, path: &Path) -> Result<RecordStore, PersistError>;

  /// Reemplaza el archivo entero. Si falla, el archivo previo queda como estaba.
  fn save(&self, path: &Path, store: &RecordStore) -> Result<(), PersistError>;
}
