use std::path::Path;

use anyhow::{Context, Result};

use crate::io::{column_index, csv_reader, non_blank};
use crate::metrics::{InterventionTrialRecord, UNKNOWN_FAMILY};

pub fn read_trials(path: &Path) -> Result<Vec<InterventionTrialRecord>> {
    let mut reader = csv_reader(path)?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    let intervention_col = column_index(&headers, "intervention", path)?;
    let family_col = column_index(&headers, "family", path)?;
    let phases_col = column_index(&headers, "phases", path)?;

    let mut records = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("{}: malformed row {}", path.display(), idx + 2))?;
        let family =
            non_blank(record.get(family_col).unwrap_or_default()).unwrap_or(UNKNOWN_FAMILY);
        records.push(InterventionTrialRecord::from_labels(
            record.get(intervention_col).unwrap_or_default(),
            family,
            record.get(phases_col).unwrap_or_default(),
        ));
    }
    Ok(records)
}
