//! Integration tests for partitioning by property type.

use fastighet_ingest::any_to_string;
use fastighet_model::schema;
use fastighet_transform::partition_by_type;
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};

fn frame(types: &[&str]) -> DataFrame {
    let keys: Vec<String> = (1..=types.len()).map(|n| n.to_string()).collect();
    let typed: Vec<String> = types.iter().map(ToString::to_string).collect();
    let areas: Vec<f64> = (0..types.len()).map(|n| 50.0 + n as f64).collect();
    let columns: Vec<Column> = vec![
        Series::new(schema::NYCKEL.into(), keys).into(),
        Series::new(schema::BOSTADSTYP.into(), typed).into(),
        Series::new(schema::TOTALAREA.into(), areas).into(),
    ];
    DataFrame::new(columns).unwrap()
}

#[test]
fn partitions_are_complete_and_disjoint() {
    let data = frame(&["Villa", "Villa", "Lägenhet"]);
    let partitions = partition_by_type(&data).unwrap();
    assert_eq!(partitions.len(), 2);
    assert_eq!(partitions[0].property_type, "Villa");
    assert_eq!(partitions[0].data.height(), 2);
    assert_eq!(partitions[1].property_type, "Lägenhet");
    assert_eq!(partitions[1].data.height(), 1);
    let total: usize = partitions.iter().map(|p| p.data.height()).sum();
    assert_eq!(total, data.height());
}

#[test]
fn first_occurrence_order_and_row_order_kept() {
    let data = frame(&["Radhus", "Villa", "Radhus", "Fritidshus"]);
    let partitions = partition_by_type(&data).unwrap();
    let order: Vec<&str> = partitions.iter().map(|p| p.property_type.as_str()).collect();
    assert_eq!(order, ["Radhus", "Villa", "Fritidshus"]);
    let radhus = &partitions[0].data;
    let key = |idx| {
        any_to_string(
            radhus
                .column(schema::NYCKEL)
                .unwrap()
                .get(idx)
                .unwrap_or(AnyValue::Null),
        )
    };
    assert_eq!(key(0), "1");
    assert_eq!(key(1), "3");
}

#[test]
fn case_is_not_merged() {
    let data = frame(&["Villa", "villa"]);
    let partitions = partition_by_type(&data).unwrap();
    assert_eq!(partitions.len(), 2);
}

#[test]
fn empty_frame_yields_no_partitions() {
    let partitions = partition_by_type(&DataFrame::empty()).unwrap();
    assert!(partitions.is_empty());
}
