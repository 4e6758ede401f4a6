//! `recall-compile`: fold a week's daily notes into a draft weekly summary.

use clap::Parser;
use log::error;
use recall_cli::{print_json, CommonArgs};
use recall_core::{CompileOutcome, CompileService};
use std::process;

#[derive(Debug, Parser)]
#[command(
    name = "recall-compile",
    about = "Compile weekly release notes from daily notes",
    version
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(message) = cli.common.init_logging() {
        eprintln!("warning: logging disabled: {message}");
    }

    let service = CompileService::new(cli.common.config());
    let outcome = match service.compile_week(cli.common.target_date()) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("event=cli_exit module=cli status=error tool=compile error={err}");
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    if cli.common.json {
        if let Err(message) = print_json(&outcome) {
            eprintln!("Error: {message}");
            process::exit(1);
        }
        return;
    }

    match outcome {
        CompileOutcome::NoDailyNotes { week_dir } => {
            println!("No daily notes found for this week ({}).", week_dir.display());
        }
        CompileOutcome::Drafted(report) => {
            println!(
                "Draft weekly summary compiled to: {}",
                report.draft_path.display()
            );
            println!(
                "Read {} daily note(s); {} accomplishment(s), {} project(s).",
                report.daily_files.len(),
                report.digest.accomplishments.len(),
                report.digest.projects.len()
            );
            println!();
            println!("Note: This is a draft. Please review and edit before finalizing.");
            println!("To finalize, rename the file by removing '_draft' from the filename.");
        }
    }
}
