use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_famcorr::cli::{Cli, Commands};
use kira_famcorr::ctx::{Ctx, InputPaths};
use kira_famcorr::io;
use kira_famcorr::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_famcorr::pipeline::stage1_input::Stage1Input;
use kira_famcorr::pipeline::stage2_annotate::Stage2Annotate;
use kira_famcorr::pipeline::stage3_structural::Stage3Structural;
use kira_famcorr::pipeline::stage4_success::Stage4Success;
use kira_famcorr::pipeline::stage5_merge::Stage5Merge;
use kira_famcorr::pipeline::stage6_output::Stage6Output;
use kira_famcorr::pipeline::{Pipeline, Stage};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (mut ctx, stages) = match cli.command {
        Commands::Run(args) => {
            let inputs = InputPaths {
                structures: Some(args.structures),
                trials: Some(args.trials),
                ids: args.ids,
                ..InputPaths::default()
            };
            let stages: Vec<Box<dyn Stage>> = vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage2Annotate::new()),
                Box::new(Stage3Structural::new()),
                Box::new(Stage4Success::new()),
                Box::new(Stage5Merge::new()),
                Box::new(Stage6Output::new()),
            ];
            (new_ctx("run", inputs, args.out, args.json), stages)
        }
        Commands::Summarize(args) => {
            let inputs = InputPaths {
                structures: Some(args.structures),
                ..InputPaths::default()
            };
            let stages: Vec<Box<dyn Stage>> = vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage3Structural::new()),
                Box::new(Stage6Output::new()),
            ];
            (new_ctx("summarize", inputs, args.out, args.json), stages)
        }
        Commands::Success(args) => {
            let inputs = InputPaths {
                trials: Some(args.trials),
                ..InputPaths::default()
            };
            let stages: Vec<Box<dyn Stage>> = vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage4Success::new()),
                Box::new(Stage6Output::new()),
            ];
            (new_ctx("success", inputs, args.out, args.json), stages)
        }
        Commands::Merge(args) => {
            let inputs = InputPaths {
                metrics: Some(args.metrics),
                success: Some(args.success),
                ..InputPaths::default()
            };
            let stages: Vec<Box<dyn Stage>> = vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage5Merge::new()),
                Box::new(Stage6Output::new()),
            ];
            (new_ctx("merge", inputs, args.out, args.json), stages)
        }
        Commands::Annotate(args) => {
            let inputs = InputPaths {
                structures: Some(args.structures),
                ids: Some(args.ids),
                ..InputPaths::default()
            };
            let stages: Vec<Box<dyn Stage>> = vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage2Annotate::new()),
                Box::new(Stage6Output::new()),
            ];
            (new_ctx("annotate", inputs, args.out, false), stages)
        }
    };

    Pipeline::new(stages).run(&mut ctx)?;
    print_summary(&ctx)?;
    Ok(())
}

fn new_ctx(command: &str, inputs: InputPaths, out: std::path::PathBuf, json: bool) -> Ctx {
    Ctx::new(command, inputs, out, json, env!("CARGO_PKG_VERSION"))
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}
