use serde::{Deserialize, Serialize};

use crate::domain::record::Record;
use crate::errors::InventoryError;

/// Resultado de [`RecordStore::delete`]. No encontrar el id no es un error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
  Removed,
  NotFound,
}

/// El inventario en memoria de la sesión actual.
///
/// Secuencia ordenada por inserción, sin índices ni ordenamiento implícito.
/// No se impone unicidad de `id`: pueden convivir dos registros con el mismo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
  records: Vec<Record>,
}

impl RecordStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Valida la entrada y agrega el registro al final.
  ///
  /// Si la validación falla el inventario no cambia.
  pub fn add(&mut self, id: &str, title: &str, artist: &str) -> Result<&Record, InventoryError> {
    let record = Record::parse(id, title, artist)?;
    Ok(self.push(record))
  }

  /// Agrega un registro ya validado al final.
  pub fn push(&mut self, record: Record) -> &Record {
    let idx = self.records.len();
    self.records.push(record);
    &self.records[idx]
  }

  /// Borra la **primera** coincidencia de `id` y deja el resto en su lugar.
  ///
  /// Acepta cualquier entero, no sólo ids válidos: un snapshot cargado tal
  /// cual puede traer un id 0, y un negativo simplemente no coincide con nada.
  pub fn delete(&mut self, id: i128) -> DeleteOutcome {
    match self.records.iter().position(|r| i128::from(r.id().get()) == id) {
      Some(idx) => {
        self.records.remove(idx);
        DeleteOutcome::Removed
      }
      None => DeleteOutcome::NotFound,
    }
  }

  pub fn records(&self) -> &[Record] {
    &self.records
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Record> {
    self.records.iter()
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}

impl From<Vec<Record>> for RecordStore {
  fn from(records: Vec<Record>) -> Self {
    Self { records }
  }
}

impl<'a> IntoIterator for &'a RecordStore {
  type Item = &'a Record;
  type IntoIter = std::slice::Iter<'a, Record>;

  fn into_iter(self) -> Self::IntoIter {
    self.records.iter()
  }
}
