//! The canonical listing schema.
//!
//! Source exports carry twelve meaningful columns in a fixed order; header
//! text varies between exports, so columns are identified by position and
//! renamed to these canonical names. `Totalarea` is derived during the
//! transform and never appears in source files.

/// Listing identity. Rows without a key are dropped by the transform.
pub const NYCKEL: &str = "Nyckel";
/// Floor number (apartments), integer or null.
pub const VANING: &str = "Våning";
/// Lot area in square metres.
pub const TOMTAREA: &str = "Tomtarea";
/// Room count.
pub const RUM: &str = "Rum";
/// Living area in square metres.
pub const BOAREA: &str = "Boarea";
/// Auxiliary area in square metres.
pub const BIAREA: &str = "Biarea";
/// Sale date, ISO-8601 or null.
pub const DATUM: &str = "Datum";
/// Sale price in SEK.
pub const PRIS: &str = "Pris";
/// Street address.
pub const ADRESS: &str = "Adress";
/// Property type. Partition key, used verbatim (no case merging).
pub const BOSTADSTYP: &str = "Bostadstyp";
/// District within the locality.
pub const OMRADE: &str = "Område";
/// Locality.
pub const ORT: &str = "Ort";
/// Derived: living area plus auxiliary area, nulls counted as zero.
pub const TOTALAREA: &str = "Totalarea";

/// The twelve source columns in positional order. The transform renames the
/// surviving raw columns to these names regardless of source header text.
pub const CANONICAL_COLUMNS: [&str; 12] = [
    NYCKEL, VANING, TOMTAREA, RUM, BOAREA, BIAREA, DATUM, PRIS, ADRESS, BOSTADSTYP, OMRADE, ORT,
];

/// Number of columns that must survive pruning before the positional rename.
pub const EXPECTED_SOURCE_WIDTH: usize = CANONICAL_COLUMNS.len();

/// Columns subject to locale numeric coercion, in coercion order.
pub fn numeric_columns() -> [&'static str; 5] {
    [TOMTAREA, BOAREA, BIAREA, RUM, PRIS]
}
