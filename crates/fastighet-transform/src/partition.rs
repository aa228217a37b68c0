//! Splitting the canonical frame into per-property-type subsets.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};
use tracing::info;

use fastighet_ingest::any_to_string;
use fastighet_model::{Result, schema};

/// One property-type subset of the canonical frame.
///
/// The data is an independent copy; mutating one partition never affects
/// another or the source frame.
#[derive(Debug, Clone)]
pub struct TypePartition {
    /// The `Bostadstyp` value, verbatim. "Villa" and "villa" stay distinct.
    pub property_type: String,
    pub data: DataFrame,
}

/// Partition the canonical frame by `Bostadstyp`.
///
/// Distinct values are emitted in first-occurrence order; within each
/// partition rows keep their original relative order. Every row lands in
/// exactly one partition. An empty frame yields no partitions.
pub fn partition_by_type(data: &DataFrame) -> Result<Vec<TypePartition>> {
    if data.height() == 0 {
        return Ok(Vec::new());
    }
    let column = data.column(schema::BOSTADSTYP)?;
    let values: Vec<String> = (0..data.height())
        .map(|idx| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect();

    let mut order: Vec<String> = Vec::new();
    for value in &values {
        if !order.contains(value) {
            order.push(value.clone());
        }
    }

    let mut partitions = Vec::with_capacity(order.len());
    for property_type in order {
        let keep: Vec<bool> = values.iter().map(|value| *value == property_type).collect();
        let mask = BooleanChunked::from_slice("partition".into(), &keep);
        let subset = data.filter(&mask)?;
        info!(
            property_type = %property_type,
            row_count = subset.height(),
            "partition built"
        );
        partitions.push(TypePartition {
            property_type,
            data: subset,
        });
    }
    Ok(partitions)
}
