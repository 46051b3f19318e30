use std::io::{self, Write};

use cdinv_core::domain::RecordStore;

const HEADER: &str = "======= The Current Inventory: =======";
const FOOTER: &str = "======================================";

/// Prints the inventory table, or a warning when it is empty.
pub fn show_inventory<W: Write>(out: &mut W, store: &RecordStore) -> io::Result<()> {
  writeln!(out)?;

  if store.is_empty() {
    writeln!(out, "[WARNING] The inventory is empty")?;
  } else {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "ID\tCD Title (by: Artist)")?;
    writeln!(out)?;
    for record in store {
      writeln!(out, "{}\t{} (by:{})", record.id(), record.title(), record.artist())?;
    }
    writeln!(out, "{FOOTER}")?;
  }

  writeln!(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use cdinv_core::domain::{CdId, Record};
  use pretty_assertions::assert_eq;

  fn render(store: &RecordStore) -> String {
    let mut out = Vec::new();
    show_inventory(&mut out, store).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn empty_store_warns() {
    assert_eq!(render(&RecordStore::new()), "\n[WARNING] The inventory is empty\n\n");
  }

  #[test]
  fn rows_in_insertion_order() {
    let store = RecordStore::from(vec![
      Record::new(CdId::new(2).unwrap(), "Blue", "Joni Mitchell").unwrap(),
      Record::new(CdId::new(1).unwrap(), "Abbey Road", "The Beatles").unwrap(),
    ]);

    let expected = format!(
      "\n{HEADER}\nID\tCD Title (by: Artist)\n\n2\tBlue (by:Joni Mitchell)\n1\tAbbey Road (by:The Beatles)\n{FOOTER}\n\n"
    );
    assert_eq!(render(&store), expected);
  }
}
