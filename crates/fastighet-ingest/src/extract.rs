use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{error, info};

/// An untyped tabular dataset straight from the source file.
///
/// Rows are padded or truncated to header width, so every row has exactly
/// `headers.len()` cells. No typing or uniqueness holds at this stage; that
/// is the transform's job.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// Guess the field delimiter from the first non-blank line.
///
/// Counts candidate delimiters outside double-quoted regions; the most
/// frequent wins, comma on a tie. Exports in this domain come both
/// comma- and semicolon-separated.
pub fn sniff_delimiter(sample: &str) -> u8 {
    let line = sample
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            ',' => counts[0] += 1,
            ';' => counts[1] += 1,
            '\t' => counts[2] += 1,
            _ => {}
        }
    }
    let mut best = 0usize;
    for idx in 1..CANDIDATE_DELIMITERS.len() {
        if counts[idx] > counts[best] {
            best = idx;
        }
    }
    CANDIDATE_DELIMITERS[best]
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn placeholder_name(index: usize) -> String {
    format!("unnamed_{index}")
}

/// True if a header was generated for a nameless column.
///
/// Trailing delimiters on the header line produce phantom columns; the
/// extractor names them `unnamed_<position>` so the transform's pruning
/// step can identify and drop them.
pub fn is_placeholder_name(name: &str) -> bool {
    name.to_lowercase()
        .strip_prefix("unnamed_")
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Extract a raw listing table from a delimited text file.
///
/// The delimiter is sniffed from the content, quoted fields may contain it,
/// and fully blank lines are skipped. On a missing source or any parse
/// failure this logs the problem and returns an empty table; no error
/// reaches the caller.
pub fn extract_listings(path: &Path) -> RawTable {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => {
            error!(
                path = %path.display(),
                %error,
                "source unavailable, continuing with empty table"
            );
            return RawTable::empty();
        }
    };
    match parse_listings(&contents) {
        Ok(table) => {
            info!(
                path = %path.display(),
                row_count = table.rows.len(),
                column_count = table.width(),
                "extraction complete"
            );
            table
        }
        Err(error) => {
            error!(
                path = %path.display(),
                %error,
                "source malformed, continuing with empty table"
            );
            RawTable::empty()
        }
    }
}

/// Parse delimited UTF-8 text into a raw table.
///
/// The first row is always treated as the header row. Empty header cells
/// get placeholder names; data rows are padded or truncated to header width.
pub fn parse_listings(contents: &str) -> Result<RawTable, csv::Error> {
    let delimiter = sniff_delimiter(contents);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    let Some(header_row) = raw_rows.first() else {
        return Ok(RawTable::empty());
    };
    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if value.is_empty() {
                placeholder_name(idx)
            } else {
                value.clone()
            }
        })
        .collect();
    let mut rows = Vec::with_capacity(raw_rows.len().saturating_sub(1));
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(RawTable { headers, rows })
}
