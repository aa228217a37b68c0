//! SQLite sink for partitioned listing frames.
//!
//! Each property-type partition becomes one table, written with full
//! replace semantics. A write failure is isolated to its partition: the
//! caller logs it and moves on to the next one.

pub mod error;
pub mod store;
pub mod table_name;

pub use error::{Result, StoreError};
pub use store::ListingStore;
pub use table_name::{DEFAULT_NAMESPACE, table_name};
