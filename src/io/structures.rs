use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::io::{column_index, csv_reader, non_blank, parse_optional_f64};
use crate::metrics::{StructureMeasurement, UNKNOWN_FAMILY};

pub const STRUCTURE_COLUMNS: [&str; 4] = ["pdb_id", "family", "sasa", "resolution"];

pub fn read_structures(path: &Path) -> Result<Vec<StructureMeasurement>> {
    let mut reader = csv_reader(path)?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    let id_col = column_index(&headers, "pdb_id", path)?;
    let family_col = column_index(&headers, "family", path)?;
    let sasa_col = column_index(&headers, "sasa", path)?;
    let resolution_col = column_index(&headers, "resolution", path)?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("{}: malformed row {}", path.display(), idx + 2))?;
        let pdb_id = record.get(id_col).unwrap_or_default();
        let family =
            non_blank(record.get(family_col).unwrap_or_default()).unwrap_or(UNKNOWN_FAMILY);
        // An area below zero or a resolution not above zero is not a measurement.
        let sasa =
            parse_optional_f64(record.get(sasa_col).unwrap_or_default()).filter(|v| *v >= 0.0);
        let resolution = parse_optional_f64(record.get(resolution_col).unwrap_or_default())
            .filter(|v| *v > 0.0);
        if sasa.is_none() {
            debug!(pdb_id, row = idx + 2, "structure without usable sasa");
        }
        rows.push(StructureMeasurement::new(pdb_id, family, sasa, resolution));
    }
    Ok(rows)
}

pub fn write_structures(path: &Path, rows: &[StructureMeasurement]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    w.write_record(STRUCTURE_COLUMNS)?;
    for row in rows {
        let sasa = row.sasa.map(|v| format!("{:.2}", v)).unwrap_or_default();
        let resolution = row.resolution.map(|v| v.to_string()).unwrap_or_default();
        w.write_record([
            row.pdb_id.as_str(),
            row.family.as_str(),
            sasa.as_str(),
            resolution.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
