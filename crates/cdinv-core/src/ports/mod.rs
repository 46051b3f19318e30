pub mod snapshot;

pub use snapshot::{PersistError, SnapshotStore};
