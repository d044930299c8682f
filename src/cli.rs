use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kira-famcorr",
    version,
    about = "Family-level structural metrics and clinical success rates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Aggregate structures, compute success rates and merge both tables
    Run(RunArgs),
    /// Aggregate per-structure measurements by family
    Summarize(SummarizeArgs),
    /// Compute per-family clinical success rates
    Success(SuccessArgs),
    /// Left-join a structural summary with a success-rate table
    Merge(MergeArgs),
    /// Reassign structure families from an identifier mapping
    Annotate(AnnotateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Per-structure CSV (pdb_id,family,sasa,resolution)")]
    pub structures: PathBuf,

    #[arg(long, help = "Per-intervention CSV (intervention,family,phases)")]
    pub trials: PathBuf,

    #[arg(long, help = "Optional family -> identifiers JSON applied before aggregation")]
    pub ids: Option<PathBuf>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    #[arg(long, help = "Per-structure CSV (pdb_id,family,sasa,resolution)")]
    pub structures: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SuccessArgs {
    #[arg(long, help = "Per-intervention CSV (intervention,family,phases)")]
    pub trials: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    #[arg(long, help = "Structural summary CSV")]
    pub metrics: PathBuf,

    #[arg(long, help = "Success-rate CSV")]
    pub success: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    #[arg(long, help = "Per-structure CSV (pdb_id,family,sasa,resolution)")]
    pub structures: PathBuf,

    #[arg(long, help = "Family -> identifiers JSON")]
    pub ids: PathBuf,

    #[arg(long)]
    pub out: PathBuf,
}
