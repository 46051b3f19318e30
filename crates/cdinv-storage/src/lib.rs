pub mod config;
pub mod snapshot;

pub use config::StorageConfig;
pub use snapshot::JsonSnapshotStore;
