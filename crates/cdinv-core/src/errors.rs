// crates/cdinv-core/src/errors.rs
use std::fmt;

use thiserror::Error;

/// Campo de texto obligatorio de un [`Record`](crate::domain::Record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Title,
  Artist,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Field::Title => write!(f, "CD title"),
      Field::Artist => write!(f, "artist name"),
    }
  }
}

/// Errores de validación al crear o agregar un registro.
///
/// Ninguno es fatal: la capa de interacción decide cómo mostrarlos y el
/// inventario en memoria queda intacto.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
  /// El id no es un entero o no es mayor que cero. Guarda el texto original.
  #[error("invalid inventory id `{0}`: expected a positive integer")]
  InvalidId(String),

  #[error("{0} cannot be empty")]
  InvalidField(Field),
}
