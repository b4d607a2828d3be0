//! Geometry persistence
//!
//! Window geometry is mirrored into a key-value store (browser local storage
//! in production) as a JSON array of [`GeometryRecord`]s. Every failure here
//! is recoverable: the manager logs it and carries on with defaults.

mod record;
mod store;
#[cfg(feature = "wasm")]
mod local_storage;

pub use record::{decode_records, encode_records, GeometryRecord, RecordError};
pub use store::{GeometryStore, MemoryStore, StoreError};
#[cfg(feature = "wasm")]
pub use local_storage::LocalStorageStore;
