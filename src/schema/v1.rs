use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub structures: Option<String>,
    pub trials: Option<String>,
    pub metrics: Option<String>,
    pub success: Option<String>,
    pub ids: Option<String>,
    pub structure_rows: Option<u64>,
    pub structure_rows_missing_sasa: Option<u64>,
    pub interventions: Option<u64>,
    pub unmapped_ids: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralSummary {
    pub families: u64,
    pub entries: u64,
    pub undefined_geometric_cv: Vec<String>,
    pub undefined_mean_resolution: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessSummary {
    pub families: u64,
    pub interventions: Option<u64>,
    pub successful_interventions: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSummary {
    pub rows: u64,
    pub join_misses: Vec<String>,
    pub duplicate_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outputs {
    pub files: Vec<String>,
    pub structural: Option<StructuralSummary>,
    pub success: Option<SuccessSummary>,
    pub merge: Option<MergeSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamCorrV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub command: String,
    pub input_meta: InputMeta,
    pub outputs: Outputs,
    pub warnings: Vec<String>,
}

impl FamCorrV1 {
    pub fn empty(tool_version: &str, command: &str) -> Self {
        Self {
            tool: "kira-famcorr".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            command: command.to_string(),
            input_meta: InputMeta {
                structures: None,
                trials: None,
                metrics: None,
                success: None,
                ids: None,
                structure_rows: None,
                structure_rows_missing_sasa: None,
                interventions: None,
                unmapped_ids: None,
            },
            outputs: Outputs {
                files: Vec::new(),
                structural: None,
                success: None,
                merge: None,
            },
            warnings: Vec::new(),
        }
    }
}
