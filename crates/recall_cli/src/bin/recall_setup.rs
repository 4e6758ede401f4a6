//! `recall-setup`: scaffold the week's folders, templates and notes.

use clap::Parser;
use log::error;
use recall_cli::{print_json, CommonArgs};
use recall_core::ScaffoldService;
use std::process;

#[derive(Debug, Parser)]
#[command(
    name = "recall-setup",
    about = "Create this week's daily notes and weekly summary",
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

    let service = ScaffoldService::new(cli.common.config());
    let report = match service.scaffold_week(cli.common.target_date()) {
        Ok(report) => report,
        Err(err) => {
            error!("event=cli_exit module=cli status=error tool=setup error={err}");
            eprintln!("Error setting up week: {err}");
            process::exit(1);
        }
    };

    if cli.common.json {
        if let Err(message) = print_json(&report) {
            eprintln!("Error: {message}");
            process::exit(1);
        }
        return;
    }

    for dir in &report.created_dirs {
        println!("Created directory: {}", dir.display());
    }
    for file in &report.created_files {
        println!("Created {}: {}", file.kind.label(), file.path.display());
    }
    if report.is_noop() {
        println!("Week {} already set up: {}", report.week.iso_week, report.week_dir.display());
    }
    println!("Weekly setup complete!");
}
