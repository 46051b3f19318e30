pub mod ids;
pub mod record;
pub mod store;

pub use ids::CdId;
pub use record::Record;
pub use store::{DeleteOutcome, RecordStore};
