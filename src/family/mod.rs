mod loader;

use std::collections::HashMap;

use crate::metrics::{StructureMeasurement, UNKNOWN_FAMILY};

pub use loader::{load_ids_json, parse_ids_json};

/// Structure identifier (lowercase) to family name.
#[derive(Debug, Clone, Default)]
pub struct FamilyLookup {
    by_id: HashMap<String, String>,
    pub conflicts: Vec<String>,
}

impl FamilyLookup {
    pub fn lookup(&self, pdb_id: &str) -> Option<&str> {
        self.by_id
            .get(&pdb_id.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Re-resolves the family of every row. Identifiers the lookup does not know
/// fall back to `UNKNOWN_FAMILY` and are returned.
pub fn annotate(rows: &mut [StructureMeasurement], lookup: &FamilyLookup) -> Vec<String> {
    let mut unmapped = Vec::new();
    for row in rows.iter_mut() {
        match lookup.lookup(&row.pdb_id) {
            Some(family) => row.family = family.to_string(),
            None => {
                row.family = UNKNOWN_FAMILY.to_string();
                unmapped.push(row.pdb_id.clone());
            }
        }
    }
    unmapped
}
