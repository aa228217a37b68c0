//! Listing transformation.
//!
//! This crate holds the only genuinely design-heavy part of the pipeline:
//!
//! - **normalize**: locale numeric coercion (space/period thousands
//!   separators, decimal comma) and strict year-month-day date parsing
//! - **transform**: column pruning, schema-width validation, positional
//!   renaming, typed frame construction, the derived `Totalarea`, and
//!   null-key row filtering
//! - **partition**: disjoint per-property-type subsets in first-occurrence
//!   order

pub mod normalize;
pub mod partition;
pub mod transform;

pub use normalize::{normalize_date, normalize_decimal, normalize_integer};
pub use partition::{TypePartition, partition_by_type};
pub use transform::{TransformOutcome, transform_listings};
