pub mod domain;
pub mod errors;
pub mod ports;
pub mod services;

pub use errors::{Field, InventoryError};
