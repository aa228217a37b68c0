//! From raw strings to the canonical typed frame.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::{info, warn};

use fastighet_ingest::{RawTable, is_placeholder_name};
use fastighet_model::{EtlError, Result, schema};

use crate::normalize::{normalize_date, normalize_decimal, normalize_integer};

/// Canonical frame plus the counters the diagnostics contract asks for.
#[derive(Debug)]
pub struct TransformOutcome {
    pub data: DataFrame,
    /// Columns removed by pruning (all-empty or placeholder-named).
    pub pruned_columns: usize,
    /// Rows removed for a missing key.
    pub dropped_rows: usize,
}

impl TransformOutcome {
    fn empty() -> Self {
        Self {
            data: DataFrame::empty(),
            pruned_columns: 0,
            dropped_rows: 0,
        }
    }
}

/// Clean and type a raw listing table.
///
/// Steps, in order: prune phantom columns, validate the surviving width,
/// rename positionally to the canonical schema, coerce locale-formatted
/// cells, derive `Totalarea`, and drop rows without a key. Row order is
/// preserved modulo the dropped rows. An empty input is a warned no-op,
/// never an error; a wrong column count after pruning is
/// [`EtlError::SchemaMismatch`].
pub fn transform_listings(raw: &RawTable) -> Result<TransformOutcome> {
    if raw.rows.is_empty() {
        warn!("no rows to transform");
        return Ok(TransformOutcome::empty());
    }

    // Prune: all-empty columns and phantom columns from trailing delimiters.
    let kept: Vec<usize> = (0..raw.width())
        .filter(|&idx| {
            !is_placeholder_name(&raw.headers[idx])
                && raw
                    .rows
                    .iter()
                    .any(|row| row.get(idx).is_some_and(|cell| !cell.trim().is_empty()))
        })
        .collect();
    let pruned_columns = raw.width() - kept.len();
    if pruned_columns > 0 {
        info!(pruned_columns, "removed empty columns");
    }

    if kept.len() != schema::EXPECTED_SOURCE_WIDTH {
        return Err(EtlError::SchemaMismatch {
            expected: schema::EXPECTED_SOURCE_WIDTH,
            found: kept.len(),
        });
    }

    let cell = |row: &Vec<String>, position: usize| -> String {
        row.get(kept[position])
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    // Rows without a key carry no identity and are dropped up front.
    let survivors: Vec<&Vec<String>> = raw
        .rows
        .iter()
        .filter(|row| !cell(row, 0).is_empty())
        .collect();
    let dropped_rows = raw.rows.len() - survivors.len();
    info!(dropped_rows, "removed rows without a key");

    let mut nyckel = Vec::with_capacity(survivors.len());
    let mut vaning: Vec<Option<i64>> = Vec::with_capacity(survivors.len());
    let mut tomtarea: Vec<Option<f64>> = Vec::with_capacity(survivors.len());
    let mut rum: Vec<Option<f64>> = Vec::with_capacity(survivors.len());
    let mut boarea: Vec<Option<f64>> = Vec::with_capacity(survivors.len());
    let mut biarea: Vec<Option<f64>> = Vec::with_capacity(survivors.len());
    let mut datum: Vec<Option<String>> = Vec::with_capacity(survivors.len());
    let mut pris: Vec<Option<f64>> = Vec::with_capacity(survivors.len());
    let mut adress = Vec::with_capacity(survivors.len());
    let mut bostadstyp = Vec::with_capacity(survivors.len());
    let mut omrade = Vec::with_capacity(survivors.len());
    let mut ort = Vec::with_capacity(survivors.len());
    let mut totalarea: Vec<f64> = Vec::with_capacity(survivors.len());

    for row in &survivors {
        nyckel.push(cell(row, 0));
        vaning.push(normalize_integer(&cell(row, 1)));
        tomtarea.push(normalize_decimal(&cell(row, 2)));
        rum.push(normalize_decimal(&cell(row, 3)));
        let living = normalize_decimal(&cell(row, 4));
        let auxiliary = normalize_decimal(&cell(row, 5));
        boarea.push(living);
        biarea.push(auxiliary);
        datum.push(normalize_date(&cell(row, 6)));
        pris.push(normalize_decimal(&cell(row, 7)));
        adress.push(cell(row, 8));
        bostadstyp.push(cell(row, 9));
        omrade.push(cell(row, 10));
        ort.push(cell(row, 11));
        totalarea.push(living.unwrap_or(0.0) + auxiliary.unwrap_or(0.0));
    }

    let columns: Vec<Column> = vec![
        Series::new(schema::NYCKEL.into(), nyckel).into(),
        Series::new(schema::VANING.into(), vaning).into(),
        Series::new(schema::TOMTAREA.into(), tomtarea).into(),
        Series::new(schema::RUM.into(), rum).into(),
        Series::new(schema::BOAREA.into(), boarea).into(),
        Series::new(schema::BIAREA.into(), biarea).into(),
        Series::new(schema::DATUM.into(), datum).into(),
        Series::new(schema::PRIS.into(), pris).into(),
        Series::new(schema::ADRESS.into(), adress).into(),
        Series::new(schema::BOSTADSTYP.into(), bostadstyp).into(),
        Series::new(schema::OMRADE.into(), omrade).into(),
        Series::new(schema::ORT.into(), ort).into(),
        Series::new(schema::TOTALAREA.into(), totalarea).into(),
    ];
    let data = DataFrame::new(columns)?;

    info!(
        row_count = data.height(),
        column_count = data.width(),
        "transform complete"
    );
    Ok(TransformOutcome {
        data,
        pruned_columns,
        dropped_rows,
    })
}
