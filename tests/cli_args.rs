use clap::Parser;
use kira_famcorr::cli::{Cli, Commands};

#[test]
fn run_requires_both_inputs() {
    let parsed = Cli::try_parse_from([
        "kira-famcorr",
        "run",
        "--structures",
        "raw.csv",
        "--out",
        "out",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn run_json_defaults_off() {
    let cli = Cli::parse_from([
        "kira-famcorr",
        "run",
        "--structures",
        "raw.csv",
        "--trials",
        "trials.csv",
        "--out",
        "out",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert!(!args.json);
            assert!(args.ids.is_none());
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn merge_accepts_tables() {
    let cli = Cli::parse_from([
        "kira-famcorr",
        "merge",
        "--metrics",
        "structural_summary.csv",
        "--success",
        "success_rates.csv",
        "--out",
        "out",
        "--json",
    ]);
    match cli.command {
        Commands::Merge(args) => {
            assert_eq!(args.metrics.to_str(), Some("structural_summary.csv"));
            assert!(args.json);
        }
        _ => panic!("expected merge command"),
    }
}
