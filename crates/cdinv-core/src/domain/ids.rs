use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::InventoryError;

/// Identificador de un CD dentro del inventario.
///
/// Siempre es un entero positivo cuando se construye con [`CdId::new`] o se
/// parsea desde texto. Al deserializar un snapshot no se valida nada más que
/// la forma del número.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CdId(u64);

impl CdId {
  /// Crea un id, rechazando el cero.
  pub fn new(value: u64) -> Result<Self, InventoryError> {
    if value == 0 {
      return Err(InventoryError::InvalidId(value.to_string()));
    }
    Ok(CdId(value))
  }

  pub fn get(&self) -> u64 {
    self.0
  }
}

impl FromStr for CdId {
  type Err = InventoryError;

  /// Acepta cualquier entero positivo hasta `u64::MAX` (con espacios alrededor).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let raw = s.trim();
    let invalid = || InventoryError::InvalidId(raw.to_string());

    if raw.starts_with('-') {
      return Err(invalid());
    }

    match raw.parse::<u64>() {
      Ok(0) | Err(_) => Err(invalid()),
      Ok(n) => Ok(CdId(n)),
    }
  }
}

impl fmt::Display for CdId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
