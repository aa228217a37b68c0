//! Raw listing extraction.
//!
//! The extractor turns a delimited text export into a [`RawTable`] of
//! strings. It never fails to the caller: a missing or unreadable source
//! yields an empty table, logged as an error, and the downstream stages
//! treat that as a defined no-op input.

pub mod extract;
pub mod polars_utils;

pub use extract::{RawTable, extract_listings, is_placeholder_name, parse_listings, sniff_delimiter};
pub use polars_utils::{any_to_f64, any_to_string, format_numeric, parse_f64};
