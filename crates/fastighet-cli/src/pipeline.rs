//! Listing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Extract**: Read the source CSV into a raw table
//! 2. **Transform**: Prune, rename, coerce, and derive the canonical frame
//! 3. **Partition**: Split the frame by property type
//! 4. **Store**: Replace one SQLite table per partition
//!
//! A partition that fails to write is reported and skipped; the remaining
//! partitions still load.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use fastighet_ingest::extract_listings;
use fastighet_store::{ListingStore, table_name};
use fastighet_transform::{TransformOutcome, TypePartition, partition_by_type, transform_listings};

/// Outcome for one property-type partition.
#[derive(Debug)]
pub struct PartitionSummary {
    /// Property type exactly as it appears in the data.
    pub property_type: String,
    /// Destination table name.
    pub table: String,
    /// Rows in the partition.
    pub rows: usize,
    /// Whether the partition reached the database.
    pub written: bool,
}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct EtlRunResult {
    pub source: PathBuf,
    pub database: PathBuf,
    /// Data rows read from the source file.
    pub input_rows: usize,
    /// Source columns discarded during pruning.
    pub pruned_columns: usize,
    /// Rows dropped for lacking a listing key.
    pub dropped_rows: usize,
    pub partitions: Vec<PartitionSummary>,
    /// Per-partition write errors; the run still completes.
    pub errors: Vec<String>,
    pub dry_run: bool,
}

impl EtlRunResult {
    /// Rows that reached the database across all partitions.
    pub fn stored_rows(&self) -> usize {
        self.partitions
            .iter()
            .filter(|partition| partition.written)
            .map(|partition| partition.rows)
            .sum()
    }
}

/// Run the full extract, transform, partition, store pipeline.
pub fn run_etl(
    source: &Path,
    database: &Path,
    namespace: &str,
    dry_run: bool,
) -> Result<EtlRunResult> {
    let run_span = info_span!("etl", source = %source.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let raw = info_span!("extract").in_scope(|| extract_listings(source));
    let input_rows = raw.rows.len();

    let TransformOutcome {
        data,
        pruned_columns,
        dropped_rows,
    } = info_span!("transform").in_scope(|| {
        transform_listings(&raw).with_context(|| format!("transform {}", source.display()))
    })?;

    let partitions = info_span!("partition")
        .in_scope(|| partition_by_type(&data).context("partition by property type"))?;

    let mut summaries = Vec::with_capacity(partitions.len());
    let mut errors = Vec::new();

    if dry_run {
        for TypePartition {
            property_type,
            data,
        } in partitions
        {
            summaries.push(PartitionSummary {
                table: table_name(namespace, &property_type),
                property_type,
                rows: data.height(),
                written: false,
            });
        }
        info!(
            input_rows,
            partition_count = summaries.len(),
            duration_ms = run_start.elapsed().as_millis(),
            "store skipped (dry run)"
        );
    } else {
        let store_span = info_span!("store", database = %database.display());
        let _store_guard = store_span.enter();
        let store_start = Instant::now();
        let mut store = ListingStore::open(database)
            .with_context(|| format!("open database {}", database.display()))?;
        for TypePartition {
            property_type,
            data,
        } in partitions
        {
            let table = table_name(namespace, &property_type);
            let rows = data.height();
            let written = match store.replace_table(&table, &data) {
                Ok(_) => true,
                Err(error) => {
                    warn!(property_type = %property_type, table = %table, %error, "partition not written");
                    errors.push(format!("{table}: {error}"));
                    false
                }
            };
            summaries.push(PartitionSummary {
                property_type,
                table,
                rows,
                written,
            });
        }
        let written_count = summaries.iter().filter(|summary| summary.written).count();
        info!(
            partition_count = summaries.len(),
            written_count,
            duration_ms = store_start.elapsed().as_millis(),
            "store complete"
        );
    }

    info!(
        input_rows,
        pruned_columns,
        dropped_rows,
        partition_count = summaries.len(),
        error_count = errors.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(EtlRunResult {
        source: source.to_path_buf(),
        database: database.to_path_buf(),
        input_rows,
        pruned_columns,
        dropped_rows,
        partitions: summaries,
        errors,
        dry_run,
    })
}
