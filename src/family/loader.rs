use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::family::FamilyLookup;

pub fn load_ids_json(path: &Path) -> Result<FamilyLookup> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read family ids JSON {}", path.display()))?;
    parse_ids_json(&content, &path.display().to_string())
}

/// Parses `{"family": ["1ABC", ...], ...}`. Families are visited in sorted
/// order; an identifier listed under several families keeps the first.
pub fn parse_ids_json(content: &str, source: &str) -> Result<FamilyLookup> {
    let mapping: BTreeMap<String, Vec<String>> = serde_json::from_str(content)
        .with_context(|| format!("{} is not a family -> identifiers object", source))?;

    let mut by_id: HashMap<String, String> = HashMap::new();
    let mut conflicts = Vec::new();

    for (family, ids) in mapping {
        let family = family.trim();
        if family.is_empty() {
            bail!("{} contains an empty family name", source);
        }
        for id in ids {
            let id = id.trim().to_lowercase();
            if id.is_empty() {
                continue;
            }
            if let Some(first) = by_id.get(&id) {
                if first != family {
                    conflicts.push(format!(
                        "identifier '{}' listed under '{}' and '{}' (kept '{}')",
                        id, first, family, first
                    ));
                }
            } else {
                by_id.insert(id, family.to_string());
            }
        }
    }

    Ok(FamilyLookup { by_id, conflicts })
}
