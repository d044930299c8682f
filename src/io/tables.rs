use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::io::{column_index, csv_reader, parse_optional_f64};
use crate::metrics::{FamilyKeyed, FamilyStructuralAggregate, FamilySuccessRate, FinalRecord};

pub const STRUCTURAL_COLUMNS: [&str; 6] = [
    "family",
    "PDB_Entries",
    "Mean_SASA",
    "Geometric_CV",
    "Mean_Resolution",
    "Size_Range",
];
pub const SUCCESS_COLUMNS: [&str; 2] = ["family", "clinical_success_rate"];
pub const SUCCESS_RATE_COLUMN: &str = "clinical_success_rate";

pub fn write_structural_table(path: &Path, rows: &[FamilyStructuralAggregate]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    w.write_record(STRUCTURAL_COLUMNS)?;
    for row in rows {
        w.write_record(structural_fields(row))?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_success_table(path: &Path, rows: &[FamilySuccessRate]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    w.write_record(SUCCESS_COLUMNS)?;
    for row in rows {
        w.write_record([
            row.family.clone(),
            fmt_fixed(Some(row.clinical_success_rate), 2),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_final_table(path: &Path, table: &MergedTable) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut header = table.header.clone();
    header.push(SUCCESS_RATE_COLUMN.to_string());
    w.write_record(&header)?;
    for row in &table.rows {
        let mut fields = row.structural.cells.clone();
        fields.push(fmt_fixed(row.clinical_success_rate, 2));
        w.write_record(&fields)?;
    }
    w.flush()?;
    Ok(())
}

/// A structural summary kept as its rendered cells. Merging appends a rate
/// column to each row and leaves every other cell as read.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    pub header: Vec<String>,
    pub rows: Vec<MetricsRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRow {
    pub family: String,
    pub cells: Vec<String>,
}

impl FamilyKeyed for MetricsRow {
    fn family(&self) -> &str {
        &self.family
    }
}

impl MetricsTable {
    pub fn from_aggregates(rows: &[FamilyStructuralAggregate]) -> Self {
        Self {
            header: STRUCTURAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| MetricsRow {
                    family: row.family.clone(),
                    cells: structural_fields(row).to_vec(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergedTable {
    pub header: Vec<String>,
    pub rows: Vec<FinalRecord<MetricsRow>>,
}

/// Reads a structural summary for merging. Only the column layout is
/// validated; rows without a family are skipped and reported.
pub fn read_metrics_table(path: &Path) -> Result<(MetricsTable, Vec<String>)> {
    let mut reader = csv_reader(path)?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    for name in STRUCTURAL_COLUMNS {
        column_index(&headers, name, path)?;
    }
    let family_col = column_index(&headers, "family", path)?;

    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2;
        let record =
            record.with_context(|| format!("{}: malformed row {}", path.display(), line))?;
        let family = record.get(family_col).unwrap_or_default();
        if family.is_empty() {
            debug!(row = line, "metrics row without family");
            warnings.push(format!(
                "{}:{} empty family; row skipped",
                path.display(),
                line
            ));
            continue;
        }
        rows.push(MetricsRow {
            family: family.to_string(),
            cells: record.iter().map(|c| c.to_string()).collect(),
        });
    }

    let table = MetricsTable {
        header: headers.iter().map(|h| h.to_string()).collect(),
        rows,
    };
    Ok((table, warnings))
}

/// Rows with no family or no usable rate are skipped and reported; their
/// families end up as join misses.
pub fn read_success_table(path: &Path) -> Result<(Vec<FamilySuccessRate>, Vec<String>)> {
    let mut reader = csv_reader(path)?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    let family_col = column_index(&headers, "family", path)?;
    let rate_col = column_index(&headers, SUCCESS_RATE_COLUMN, path)?;

    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2;
        let record =
            record.with_context(|| format!("{}: malformed row {}", path.display(), line))?;
        let family = record.get(family_col).unwrap_or_default();
        if family.is_empty() {
            debug!(row = line, "success row without family");
            warnings.push(format!(
                "{}:{} empty family; row skipped",
                path.display(),
                line
            ));
            continue;
        }
        let raw = record.get(rate_col).unwrap_or_default();
        let Some(rate) = parse_optional_f64(raw) else {
            debug!(family, row = line, "success row without usable rate");
            warnings.push(format!(
                "{}:{} no usable clinical_success_rate for '{}'; row skipped",
                path.display(),
                line,
                family
            ));
            continue;
        };
        rows.push(FamilySuccessRate {
            family: family.to_string(),
            clinical_success_rate: rate,
        });
    }
    Ok((rows, warnings))
}

pub fn fmt_fixed(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_default()
}

fn structural_fields(row: &FamilyStructuralAggregate) -> [String; 6] {
    [
        row.family.clone(),
        row.entry_count.to_string(),
        fmt_fixed(Some(row.mean_sasa), 2),
        fmt_fixed(row.geometric_cv, 6),
        fmt_fixed(row.mean_resolution, 2),
        row.size_range(),
    ]
}
