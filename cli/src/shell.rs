use std::io::{self, BufRead, Write};
use std::str::FromStr;

use cdinv_core::domain::record::validate_field;
use cdinv_core::domain::{CdId, DeleteOutcome, RecordStore};
use cdinv_core::ports::SnapshotStore;
use cdinv_core::services::InventoryService;
use cdinv_core::Field;
use tracing::debug;

use crate::display::show_inventory;

const MENU: &str = "Menu\n\n[l] load Inventory from file\n[a] Add CD\n[i] Display Current Inventory\n\
                    [d] delete CD from Inventory\n[s] Save Inventory to file\n[x] exit\n";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
  Load,
  Add,
  Inventory,
  Delete,
  Save,
  Exit,
}

impl FromStr for MenuChoice {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "l" => Ok(MenuChoice::Load),
      "a" => Ok(MenuChoice::Add),
      "i" => Ok(MenuChoice::Inventory),
      "d" => Ok(MenuChoice::Delete),
      "s" => Ok(MenuChoice::Save),
      "x" => Ok(MenuChoice::Exit),
      _ => Err(()),
    }
  }
}

enum Flow {
  Continue,
  Exit,
}

/// Menu-driven front end.
///
/// Owns the session's single [`RecordStore`]. Every outcome of the core is
/// printed and the loop goes on; only end of input or a broken terminal ends
/// the session.
pub struct Shell<S, R, W>
where
  S: SnapshotStore,
  R: BufRead,
  W: Write,
{
  service: InventoryService<S>,
  store: RecordStore,
  input: R,
  output: W,
}

impl<S, R, W> Shell<S, R, W>
where
  S: SnapshotStore,
  R: BufRead,
  W: Write,
{
  pub fn new(service: InventoryService<S>, input: R, output: W) -> Self {
    Self { service, store: RecordStore::new(), input, output }
  }

  /// Loads the saved inventory, then runs the menu loop until `x` or EOF.
  ///
  /// Returns the in-memory inventory as it was when the session ended.
  pub fn run(mut self) -> io::Result<RecordStore> {
    match self.service.load() {
      Ok(store) => self.store = store,
      Err(e) => self.error(&e)?,
    }

    loop {
      let Some(choice) = self.menu_choice()? else {
        break;
      };
      debug!(?choice, "menu choice");

      let flow = match choice {
        MenuChoice::Exit => Flow::Exit,
        MenuChoice::Load => self.reload()?,
        MenuChoice::Add => self.add()?,
        MenuChoice::Inventory => {
          self.show()?;
          Flow::Continue
        }
        MenuChoice::Delete => self.delete()?,
        MenuChoice::Save => self.save()?,
      };

      if let Flow::Exit = flow {
        break;
      }
    }

    self.output.flush()?;
    Ok(self.store)
  }

  /// Prints `message` and reads one trimmed line. `None` on EOF.
  fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
    write!(self.output, "{message}")?;
    self.output.flush()?;

    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
  }

  fn error(&mut self, err: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(self.output)?;
    writeln!(self.output, "[ERROR] {err}")?;
    writeln!(self.output)
  }

  fn show(&mut self) -> io::Result<()> {
    show_inventory(&mut self.output, &self.store)
  }

  fn menu_choice(&mut self) -> io::Result<Option<MenuChoice>> {
    writeln!(self.output, "{MENU}")?;

    loop {
      let Some(answer) = self.prompt("Which operation would you like to perform? [l, a, i, d, s or x]: ")? else {
        return Ok(None);
      };

      if let Ok(choice) = answer.parse() {
        writeln!(self.output)?;
        return Ok(Some(choice));
      }
    }
  }

  fn reload(&mut self) -> io::Result<Flow> {
    writeln!(self.output, "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.")?;

    let Some(answer) = self.prompt("type 'yes' to continue and reload from file. otherwise reload will be canceled: ")?
    else {
      return Ok(Flow::Exit);
    };

    if answer.eq_ignore_ascii_case("yes") {
      writeln!(self.output, "reloading...")?;
      if let Err(e) = self.service.reload_into(&mut self.store) {
        self.error(&e)?;
      }
    } else if self.prompt("canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.")?.is_none() {
      return Ok(Flow::Exit);
    }

    self.show()?;
    Ok(Flow::Continue)
  }

  /// Asks for id, title and artist, starting over after any invalid answer.
  ///
  /// Each answer is checked as soon as it is typed; the record itself is
  /// built and appended by [`RecordStore::add`].
  fn add(&mut self) -> io::Result<Flow> {
    loop {
      let Some(raw_id) = self.prompt("Enter ID: ")? else {
        return Ok(Flow::Exit);
      };
      if let Err(e) = raw_id.parse::<CdId>() {
        self.error(&e)?;
        continue;
      }

      let Some(title) = self.prompt("What is the CD's title? ")? else {
        return Ok(Flow::Exit);
      };
      if let Err(e) = validate_field(&title, Field::Title) {
        self.error(&e)?;
        continue;
      }

      let Some(artist) = self.prompt("What is the Artist's name? ")? else {
        return Ok(Flow::Exit);
      };

      match self.store.add(&raw_id, &title, &artist) {
        Ok(added) => {
          debug!(id = %added.id(), title = added.title(), "record added");
          break;
        }
        Err(e) => self.error(&e)?,
      }
    }

    writeln!(self.output)?;
    self.show()?;
    Ok(Flow::Continue)
  }

  fn delete(&mut self) -> io::Result<Flow> {
    self.show()?;

    let Some(raw_id) = self.prompt("Which ID would you like to delete? ")? else {
      return Ok(Flow::Exit);
    };

    // Any integer is a valid lookup; only a non-integer is an input error.
    let id: i128 = match raw_id.parse() {
      Ok(id) => id,
      Err(_) => {
        self.error(&format!("`{raw_id}` is not an integer"))?;
        return Ok(Flow::Continue);
      }
    };

    match self.store.delete(id) {
      DeleteOutcome::Removed => {
        debug!(%id, "record removed");
        writeln!(self.output, "The CD was removed")?;
      }
      DeleteOutcome::NotFound => {
        debug!(%id, "no record with that id");
        writeln!(self.output, "Could not find this CD!")?;
      }
    }

    self.show()?;
    Ok(Flow::Continue)
  }

  fn save(&mut self) -> io::Result<Flow> {
    self.show()?;

    let Some(answer) = self.prompt("Save this inventory to file? [y/n] ")? else {
      return Ok(Flow::Exit);
    };
    writeln!(self.output)?;

    if answer.eq_ignore_ascii_case("y") {
      match self.service.save(&self.store) {
        Ok(()) => writeln!(self.output, "Inventory saved to {}.", self.service.path().display())?,
        Err(e) => self.error(&e)?,
      }
    } else if self.prompt("The inventory was NOT saved to file. Press [ENTER] to return to the menu.")?.is_none() {
      return Ok(Flow::Exit);
    }

    Ok(Flow::Continue)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cdinv_core::domain::Record;
  use cdinv_storage::JsonSnapshotStore;
  use pretty_assertions::assert_eq;
  use std::io::Cursor;
  use std::path::Path;
  use tempfile::tempdir;

  fn rec(id: u64, title: &str, artist: &str) -> Record {
    Record::new(CdId::new(id).unwrap(), title, artist).unwrap()
  }

  fn run_script(path: &Path, script: &str) -> (RecordStore, String) {
    let service = InventoryService::new(JsonSnapshotStore::new(), path);
    let mut output = Vec::new();
    let store = Shell::new(service, Cursor::new(script.to_string()), &mut output).run().unwrap();
    (store, String::from_utf8(output).unwrap())
  }

  #[test]
  fn menu_choices_parse_case_insensitively() {
    assert_eq!(" L ".parse::<MenuChoice>(), Ok(MenuChoice::Load));
    assert_eq!("x".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    assert!("q".parse::<MenuChoice>().is_err());
  }

  #[test]
  fn missing_file_at_startup_starts_empty() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");

    let (store, out) = run_script(&path, "i\nx\n");

    assert!(store.is_empty());
    assert!(out.contains("does not exist"));
    assert!(out.contains("[WARNING] The inventory is empty"));
  }

  #[test]
  fn add_save_and_reload_in_a_new_session() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");

    let (store, out) = run_script(&path, "a\n1\nAbbey Road\nThe Beatles\ns\ny\nx\n");
    assert_eq!(store, RecordStore::from(vec![rec(1, "Abbey Road", "The Beatles")]));
    assert!(out.contains("1\tAbbey Road (by:The Beatles)"));
    assert!(out.contains("Inventory saved to"));

    let (store, _) = run_script(&path, "x\n");
    assert_eq!(store, RecordStore::from(vec![rec(1, "Abbey Road", "The Beatles")]));
  }

  #[test]
  fn invalid_add_input_starts_over() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");

    let script = "a\n0\nabc\n5\n\n5\nT\n   \n5\nT\nA\nx\n";
    let (store, out) = run_script(&path, script);

    assert_eq!(store, RecordStore::from(vec![rec(5, "T", "A")]));
    assert!(out.contains("invalid inventory id `0`"));
    assert!(out.contains("invalid inventory id `abc`"));
    assert!(out.contains("CD title cannot be empty"));
    assert!(out.contains("artist name cannot be empty"));
  }

  #[test]
  fn delete_reports_both_outcomes() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");
    JsonSnapshotStore.save(&path, &RecordStore::from(vec![rec(1, "A", "X"), rec(2, "B", "Y")])).unwrap();

    let (store, out) = run_script(&path, "d\n2\nd\n99\nd\nnope\nx\n");

    assert_eq!(store, RecordStore::from(vec![rec(1, "A", "X")]));
    assert!(out.contains("The CD was removed"));
    assert!(out.contains("Could not find this CD!"));
    assert!(out.contains("`nope` is not an integer"));
  }

  #[test]
  fn delete_accepts_any_integer() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");
    std::fs::write(&path, r#"[{"id":0,"title":"Z","artist":"Q"},{"id":10000000000000000000,"title":"B","artist":"Y"}]"#)
      .unwrap();

    let (store, out) = run_script(&path, "d\n-5\nd\n0\nd\n10000000000000000000\nx\n");

    assert!(store.is_empty());
    assert_eq!(out.matches("Could not find this CD!").count(), 1);
    assert_eq!(out.matches("The CD was removed").count(), 2);
    assert!(!out.contains("[ERROR]"));
  }

  #[test]
  fn add_accepts_large_ids() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");

    let (store, _) = run_script(&path, "a\n18446744073709551615\nT\nA\nx\n");

    assert_eq!(store, RecordStore::from(vec![rec(u64::MAX, "T", "A")]));
  }

  #[test]
  fn reload_needs_confirmation() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");
    JsonSnapshotStore.save(&path, &RecordStore::from(vec![rec(1, "A", "X")])).unwrap();

    // Unsaved add, reload cancelled: the add survives.
    let (store, out) = run_script(&path, "a\n2\nB\nY\nl\nno\n\nx\n");
    assert_eq!(store.len(), 2);
    assert!(out.contains("Inventory data NOT reloaded"));

    // Unsaved add, reload confirmed: back to what is on disk.
    let (store, _) = run_script(&path, "a\n2\nB\nY\nl\nYES\nx\n");
    assert_eq!(store, RecordStore::from(vec![rec(1, "A", "X")]));
  }

  #[test]
  fn failed_reload_keeps_session_inventory() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");

    let (store, out) = run_script(&path, "a\n3\nC\nZ\nl\nyes\nx\n");

    assert_eq!(store, RecordStore::from(vec![rec(3, "C", "Z")]));
    assert!(out.contains("reloading..."));
    assert!(out.contains("3\tC (by:Z)"));
  }

  #[test]
  fn declined_save_leaves_file_untouched() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");

    let (_, out) = run_script(&path, "a\n1\nA\nX\ns\nn\n\nx\n");

    assert!(out.contains("The inventory was NOT saved to file."));
    assert!(!path.exists());
  }

  #[test]
  fn save_failure_does_not_end_session() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("no-such-dir").join("CDInventory.dat");

    let (store, out) = run_script(&path, "a\n1\nA\nX\ns\ny\ni\nx\n");

    assert_eq!(store.len(), 1);
    assert!(out.contains("could not write"));
    assert!(out.contains("1\tA (by:X)"));
  }

  #[test]
  fn eof_ends_the_session() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");

    let (store, _) = run_script(&path, "a\n1\nHalf");

    assert!(store.is_empty());
  }

  #[test]
  fn unknown_choice_prompts_again() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("CDInventory.dat");

    let (_, out) = run_script(&path, "z\n\nX\n");

    assert_eq!(out.matches("Which operation would you like to perform?").count(), 3);
  }
}
