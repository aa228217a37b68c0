//! Canonical schema definitions and the shared error taxonomy for the
//! fastighet property-sales pipeline.

pub mod error;
pub mod schema;

pub use error::{EtlError, Result};
pub use schema::{
    ADRESS, BIAREA, BOAREA, BOSTADSTYP, CANONICAL_COLUMNS, DATUM, EXPECTED_SOURCE_WIDTH, NYCKEL,
    OMRADE, ORT, PRIS, RUM, TOMTAREA, TOTALAREA, VANING, numeric_columns,
};
