use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

use crate::CanonicalRow;

/// Reads all data rows from the spreadsheet. A missing file is an empty
/// table, not an error.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<CanonicalRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: CanonicalRow =
            record.with_context(|| format!("Malformed row in {}", path.display()))?;
        rows.push(row);
    }

    Ok(rows)
}

/// Removes exact-duplicate rows, keeping the last occurrence of each in its
/// original position.
pub fn dedupe_keep_last(rows: Vec<CanonicalRow>) -> Vec<CanonicalRow> {
    let mut seen: HashSet<CanonicalRow> = HashSet::with_capacity(rows.len());
    let mut out = Vec::with_capacity(rows.len());

    for row in rows.into_iter().rev() {
        if seen.insert(row.clone()) {
            out.push(row);
        }
    }

    out.reverse();
    out
}

/// Writes headers plus rows to a temp file in the target directory and
/// renames it over the destination, so a crash mid-write never leaves a
/// half-written table behind.
pub fn write_atomic<P: AsRef<Path>>(path: P, rows: &[CanonicalRow]) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    let tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new_in("."),
    }
    .context("Failed to create temp file for spreadsheet write")?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(&tmp);

    writer.write_record(CanonicalRow::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    drop(writer);

    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

/// Full read-modify-write cycle: existing rows plus new rows, exact
/// duplicates dropped keeping the last occurrence. Idempotent for an
/// unchanged input set.
pub fn merge_into_file<P: AsRef<Path>>(path: P, new_rows: Vec<CanonicalRow>) -> Result<usize> {
    let path = path.as_ref();

    let mut rows = read_rows(path)?;
    let existing = rows.len();
    rows.extend(new_rows);

    let merged = dedupe_keep_last(rows);
    write_atomic(path, &merged)?;

    info!(
        "Wrote {} rows to {} ({} existing before merge)",
        merged.len(),
        path.display(),
        existing
    );

    Ok(merged.len())
}
