use serde::{Deserialize, Serialize};

use crate::domain::ids::CdId;
use crate::errors::{Field, InventoryError};

/// Un CD del inventario.
///
/// Es inmutable una vez creado: para "editar" un registro se borra y se
/// vuelve a agregar. Título y artista se guardan ya recortados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  id: CdId,
  title: String,
  artist: String,
}

/// Recorta `value` y lo rechaza si queda vacío.
pub fn validate_field(value: &str, field: Field) -> Result<String, InventoryError> {
  let value = value.trim();
  if value.is_empty() {
    return Err(InventoryError::InvalidField(field));
  }
  Ok(value.to_string())
}

impl Record {
  pub fn new(id: CdId, title: &str, artist: &str) -> Result<Self, InventoryError> {
    let title = validate_field(title, Field::Title)?;
    let artist = validate_field(artist, Field::Artist)?;
    Ok(Self { id, title, artist })
  }

  /// Construye un registro desde la entrada cruda del usuario.
  ///
  /// Valida en el mismo orden en que se piden los datos: id, título, artista.
  pub fn parse(id: &str, title: &str, artist: &str) -> Result<Self, InventoryError> {
    let id: CdId = id.parse()?;
    Self::new(id, title, artist)
  }

  pub fn id(&self) -> CdId {
    self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn artist(&self) -> &str {
    &self.artist
  }
}
