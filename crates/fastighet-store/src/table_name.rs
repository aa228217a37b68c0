//! Storage identifier derivation for property-type partitions.

/// Namespace prefix shared by all partition tables.
pub const DEFAULT_NAMESPACE: &str = "fastighetstyp";

/// Derive the table name for a property-type value.
///
/// Lowercases the value and replaces spaces and forward slashes with
/// underscores, then prefixes the namespace. Double quotes are stripped
/// since identifiers are quote-escaped in SQL. Note this normalization
/// happens only here: partitioning itself keys on the verbatim value.
pub fn table_name(namespace: &str, property_type: &str) -> String {
    let normalized: String = property_type
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| match ch {
            ' ' | '\u{a0}' | '/' => '_',
            other => other,
        })
        .filter(|ch| *ch != '"')
        .collect();
    format!("{namespace}_{normalized}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_prefixes() {
        assert_eq!(table_name(DEFAULT_NAMESPACE, "Villa"), "fastighetstyp_villa");
        assert_eq!(
            table_name(DEFAULT_NAMESPACE, "Lägenhet"),
            "fastighetstyp_lägenhet"
        );
    }

    #[test]
    fn spaces_and_slashes_become_underscores() {
        assert_eq!(
            table_name(DEFAULT_NAMESPACE, "Par/Kedjehus"),
            "fastighetstyp_par_kedjehus"
        );
        assert_eq!(
            table_name(DEFAULT_NAMESPACE, "Gård med skog"),
            "fastighetstyp_gård_med_skog"
        );
    }

    #[test]
    fn custom_namespace() {
        assert_eq!(table_name("test", "Villa"), "test_villa");
    }
}
