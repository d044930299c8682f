use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::StringRecord;
use flate2::read::GzDecoder;

use crate::schema::v1::FamCorrV1;

pub mod json_writer;
pub mod structures;
pub mod summary;
pub mod tables;
pub mod trials;

pub fn write_json(path: &Path, report: &FamCorrV1) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}

pub(crate) fn csv_reader(path: &Path) -> Result<csv::Reader<Box<dyn Read>>> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(open_maybe_gz(path)?))
}

pub(crate) fn column_index(headers: &StringRecord, name: &str, source: &Path) -> Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => bail!(
            "{}: schema mismatch, missing column '{}' (found: {})",
            source.display(),
            name,
            headers.iter().collect::<Vec<_>>().join(",")
        ),
    }
}

/// Blank, non-numeric and non-finite cells are all absent.
pub(crate) fn parse_optional_f64(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub(crate) fn non_blank(field: &str) -> Option<&str> {
    if field.is_empty() { None } else { Some(field) }
}
