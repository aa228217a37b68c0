//! Integration tests for the transform stage.

use fastighet_ingest::{RawTable, any_to_f64, any_to_string, parse_listings};
use fastighet_model::{EtlError, schema};
use fastighet_transform::transform_listings;
use polars::prelude::AnyValue;

fn source_headers() -> Vec<String> {
    vec![
        "nyckel", "vån", "tomt", "rum", "boarea", "biarea", "datum", "pris", "adress", "typ",
        "område", "ort",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn row(values: [&str; 12]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn basic_table() -> RawTable {
    RawTable {
        headers: source_headers(),
        rows: vec![row([
            "1",
            "2",
            "500",
            "4",
            "100",
            "20",
            "2024-01-01",
            "1 000 000",
            "Testgatan",
            "Villa",
            "Centrum",
            "Teststad",
        ])],
    }
}

fn cell(data: &polars::prelude::DataFrame, name: &str, idx: usize) -> String {
    any_to_string(data.column(name).unwrap().get(idx).unwrap_or(AnyValue::Null))
}

fn cell_f64(data: &polars::prelude::DataFrame, name: &str, idx: usize) -> Option<f64> {
    any_to_f64(data.column(name).unwrap().get(idx).unwrap_or(AnyValue::Null))
}

#[test]
fn renames_coerces_and_derives() {
    let outcome = transform_listings(&basic_table()).unwrap();
    let data = &outcome.data;
    assert_eq!(data.height(), 1);
    // canonical order, then the derived column
    let names: Vec<&str> = data
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    let mut expected: Vec<&str> = schema::CANONICAL_COLUMNS.to_vec();
    expected.push(schema::TOTALAREA);
    assert_eq!(names, expected);
    for name in schema::numeric_columns() {
        assert!(data.column(name).unwrap().dtype().is_float(), "{name}");
    }
    assert_eq!(cell(data, schema::NYCKEL, 0), "1");
    assert_eq!(cell_f64(data, schema::PRIS, 0), Some(1_000_000.0));
    assert_eq!(cell_f64(data, schema::TOTALAREA, 0), Some(120.0));
    assert_eq!(cell(data, schema::DATUM, 0), "2024-01-01");
    assert_eq!(cell(data, schema::BOSTADSTYP, 0), "Villa");
    assert_eq!(cell(data, schema::ORT, 0), "Teststad");
}

#[test]
fn decimal_comma_price_normalizes() {
    let mut table = basic_table();
    table.rows[0][7] = "1.234,56".to_string();
    let outcome = transform_listings(&table).unwrap();
    assert_eq!(cell_f64(&outcome.data, schema::PRIS, 0), Some(1234.56));
}

#[test]
fn bad_numeric_and_date_cells_become_null_but_row_survives() {
    let mut table = basic_table();
    table.rows[0][2] = "saknas".to_string();
    table.rows[0][6] = "igår".to_string();
    let outcome = transform_listings(&table).unwrap();
    assert_eq!(outcome.data.height(), 1);
    assert_eq!(cell_f64(&outcome.data, schema::TOMTAREA, 0), None);
    assert_eq!(cell(&outcome.data, schema::DATUM, 0), "");
}

#[test]
fn totalarea_treats_missing_area_as_zero() {
    let mut table = basic_table();
    table.rows[0][5] = String::new();
    let outcome = transform_listings(&table).unwrap();
    assert_eq!(cell_f64(&outcome.data, schema::TOTALAREA, 0), Some(100.0));
}

#[test]
fn rows_without_key_are_dropped_and_counted() {
    let mut table = basic_table();
    let mut keyless = table.rows[0].clone();
    keyless[0] = "  ".to_string();
    table.rows.push(keyless);
    let mut second = table.rows[0].clone();
    second[0] = "2".to_string();
    table.rows.push(second);
    let outcome = transform_listings(&table).unwrap();
    assert_eq!(outcome.data.height(), 2);
    assert_eq!(outcome.dropped_rows, 1);
    assert_eq!(cell(&outcome.data, schema::NYCKEL, 1), "2");
}

#[test]
fn empty_input_is_a_noop() {
    let outcome = transform_listings(&RawTable::empty()).unwrap();
    assert_eq!(outcome.data.height(), 0);
    assert_eq!(outcome.dropped_rows, 0);
    assert_eq!(outcome.pruned_columns, 0);
}

#[test]
fn phantom_and_all_empty_columns_are_pruned() {
    // Trailing delimiters on every line: placeholder headers, empty cells.
    let raw = parse_listings(
        "nyckel,vån,tomt,rum,boarea,biarea,datum,pris,adress,typ,område,ort,,\n\
         1,2,500,4,100,20,2024-01-01,500000,Testgatan,Villa,Centrum,Teststad,,\n",
    )
    .unwrap();
    assert_eq!(raw.width(), 14);
    let outcome = transform_listings(&raw).unwrap();
    assert_eq!(outcome.pruned_columns, 2);
    assert_eq!(outcome.data.width(), 13);
    assert_eq!(cell(&outcome.data, schema::ORT, 0), "Teststad");
}

#[test]
fn wrong_column_count_is_a_schema_mismatch() {
    let raw = parse_listings("nyckel,adress,typ\n1,Testgatan,Villa\n").unwrap();
    let error = transform_listings(&raw).unwrap_err();
    match error {
        EtlError::SchemaMismatch { expected, found } => {
            assert_eq!(expected, 12);
            assert_eq!(found, 3);
        }
        other => panic!("expected SchemaMismatch, got {other}"),
    }
}
