use std::path::{Path, PathBuf};

use crate::family::FamilyLookup;
use crate::io::tables::{MergedTable, MetricsTable};
use crate::metrics::{
    FamilyStructuralAggregate, FamilySuccessRate, InterventionTrialRecord, StructureMeasurement,
};
use crate::schema::v1::FamCorrV1;

#[derive(Debug, Clone, Default)]
pub struct InputPaths {
    pub structures: Option<PathBuf>,
    pub trials: Option<PathBuf>,
    pub metrics: Option<PathBuf>,
    pub success: Option<PathBuf>,
    pub ids: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct InputMeta {
    pub structure_rows: Option<u64>,
    pub structure_rows_missing_sasa: Option<u64>,
    pub interventions: Option<u64>,
    pub unmapped_ids: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub annotated_path: PathBuf,
    pub structural_path: PathBuf,
    pub success_path: PathBuf,
    pub final_path: PathBuf,
    pub json_path: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            annotated_path: out_dir.join("structures_annotated.csv"),
            structural_path: out_dir.join("structural_summary.csv"),
            success_path: out_dir.join("success_rates.csv"),
            final_path: out_dir.join("final_table.csv"),
            json_path: out_dir.join("report.json"),
            out_dir,
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub command: String,
    pub inputs: InputPaths,
    pub write_json: bool,
    pub structures: Option<Vec<StructureMeasurement>>,
    pub trials: Option<Vec<InterventionTrialRecord>>,
    pub family_lookup: Option<FamilyLookup>,
    pub annotated: bool,
    pub structural: Option<Vec<FamilyStructuralAggregate>>,
    pub metrics_table: Option<MetricsTable>,
    pub success_rates: Option<Vec<FamilySuccessRate>>,
    pub final_table: Option<MergedTable>,
    pub join_misses: Vec<String>,
    pub duplicate_keys: Vec<String>,
    pub warnings: Vec<String>,
    pub written: Vec<PathBuf>,
    pub input_meta: InputMeta,
    pub output: OutputPaths,
    pub report: FamCorrV1,
}

impl Ctx {
    pub fn new(
        command: &str,
        inputs: InputPaths,
        out_dir: PathBuf,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        Self {
            command: command.to_string(),
            inputs,
            write_json,
            structures: None,
            trials: None,
            family_lookup: None,
            annotated: false,
            structural: None,
            metrics_table: None,
            success_rates: None,
            final_table: None,
            join_misses: Vec::new(),
            duplicate_keys: Vec::new(),
            warnings: Vec::new(),
            written: Vec::new(),
            input_meta: InputMeta::default(),
            output: OutputPaths::new(out_dir),
            report: FamCorrV1::empty(tool_version, command),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.output.out_dir
    }
}
