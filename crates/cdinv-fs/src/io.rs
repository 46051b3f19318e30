use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Ruta del archivo temporal hermano de `path` (`foo.dat` -> `foo.dat.tmp`).
fn tmp_path_for(path: &Path) -> PathBuf {
  let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
  name.push(".tmp");
  path.with_file_name(name)
}

/// Reemplaza el contenido de `path` de forma atómica.
///
/// Se escribe primero a un archivo temporal en el mismo directorio, se hace
/// `sync_all` y luego `rename` sobre el destino. Quien lea `path` ve el
/// archivo viejo o el nuevo completo, nunca uno a medias.
///
/// Si algo falla después de crear el temporal, éste se borra.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
  let tmp_path = tmp_path_for(path);

  let result = (|| {
    {
      let mut tmp_file = fs::File::create(&tmp_path)?;
      tmp_file.write_all(contents)?;
      tmp_file.sync_all()?;
    }
    fs::rename(&tmp_path, path)
  })();

  if result.is_err() {
    let _ = fs::remove_file(&tmp_path);
  }

  result
}

pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  atomic_write(path, contents.as_bytes())
}
