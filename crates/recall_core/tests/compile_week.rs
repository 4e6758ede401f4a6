use chrono::NaiveDate;
use recall_core::{
    extract_section, CompileOutcome, CompileService, RecallConfig, RecallError, ScaffoldService,
    WeeklySection,
};
use std::fs;
use std::path::{Path, PathBuf};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Scaffolds the week of 2024-01-10 and returns its week directory.
fn scaffold(base: &Path) -> PathBuf {
    ScaffoldService::new(RecallConfig::new(base))
        .scaffold_week(date(2024, 1, 10))
        .unwrap()
        .week_dir
}

fn daily_note(sections: &[(&str, &str)]) -> String {
    let mut out = String::from("# Daily Notes\n\n");
    for (heading, body) in sections {
        out.push_str(&format!("## {heading}\n\n{body}\n\n"));
    }
    out
}

fn write_daily(week_dir: &Path, day: &str, contents: &str) {
    fs::write(week_dir.join("daily").join(format!("{day}.md")), contents).unwrap();
}

fn drafted(outcome: CompileOutcome) -> recall_core::CompileReport {
    match outcome {
        CompileOutcome::Drafted(report) => report,
        other => panic!("expected a draft, got {other:?}"),
    }
}

#[test]
fn accomplishments_follow_file_order_then_tasks_before_notes() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = scaffold(dir.path());
    write_daily(
        &week_dir,
        "2024-01-08",
        &daily_note(&[
            ("📝 Notes for Weekly Summary", "- note one"),
            ("🛠️ Tasks Completed", "- x"),
        ]),
    );
    write_daily(
        &week_dir,
        "2024-01-09",
        &daily_note(&[("🛠️ Tasks Completed", "- y\n- x")]),
    );

    let service = CompileService::new(RecallConfig::new(dir.path()));
    let report = drafted(service.compile_week(date(2024, 1, 10)).unwrap());

    let draft = fs::read_to_string(&report.draft_path).unwrap();
    assert_eq!(
        extract_section(&draft, WeeklySection::KeyAccomplishments.heading()),
        "- x\n- note one\n- y\n- x"
    );
}

#[test]
fn shared_project_yields_single_progress_block() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = scaffold(dir.path());
    write_daily(
        &week_dir,
        "2024-01-08",
        &daily_note(&[("🏗️ Projects Worked On", "- Alpha")]),
    );
    write_daily(
        &week_dir,
        "2024-01-10",
        &daily_note(&[("🏗️ Projects Worked On", "- Alpha\n- Beta")]),
    );

    let service = CompileService::new(RecallConfig::new(dir.path()));
    let report = drafted(service.compile_week(date(2024, 1, 8)).unwrap());

    let draft = fs::read_to_string(&report.draft_path).unwrap();
    let progress = extract_section(&draft, WeeklySection::ProjectProgress.heading());
    assert_eq!(progress.matches("### Alpha").count(), 1);
    assert_eq!(progress.matches("### Beta").count(), 1);
    assert!(!progress.contains("[Project Name]"));
    assert!(progress.contains("- Status: [On Track/At Risk/Blocked]"));
    assert_eq!(report.digest.projects.len(), 2);
}

#[test]
fn draft_leaves_summary_and_untracked_sections_intact() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = scaffold(dir.path());
    let summary_path = week_dir.join("week02-summary.md");
    let original = fs::read_to_string(&summary_path).unwrap();
    write_daily(
        &week_dir,
        "2024-01-11",
        &daily_note(&[
            ("🧠 Learnings", "- borrowck is strict"),
            ("🚧 Blockers & Challenges", "- flaky CI"),
            ("📌 Follow-ups Needed", "- ping ops"),
        ]),
    );

    let service = CompileService::new(RecallConfig::new(dir.path()));
    let report = drafted(service.compile_week(date(2024, 1, 11)).unwrap());

    assert_eq!(report.summary_path, summary_path);
    assert_eq!(
        report.draft_path,
        week_dir.join("week02-summary_draft.md")
    );
    assert_eq!(fs::read_to_string(&summary_path).unwrap(), original);

    let draft = fs::read_to_string(&report.draft_path).unwrap();
    assert_eq!(
        extract_section(&draft, WeeklySection::KeyLearnings.heading()),
        "- borrowck is strict"
    );
    assert_eq!(
        extract_section(&draft, WeeklySection::ChallengesAndBlockers.heading()),
        "- flaky CI"
    );
    for section in [
        WeeklySection::ProcessImprovements,
        WeeklySection::Collaborations,
        WeeklySection::LookingAhead,
        WeeklySection::PersonalGrowth,
        WeeklySection::ProjectProgress,
    ] {
        assert_eq!(
            extract_section(&draft, section.heading()),
            extract_section(&original, section.heading()),
            "{section:?} should be untouched"
        );
    }
    assert_eq!(report.digest.follow_ups, vec!["- ping ops"]);
}

#[test]
fn compiling_twice_produces_identical_draft() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = scaffold(dir.path());
    write_daily(
        &week_dir,
        "2024-01-08",
        &daily_note(&[("🛠️ Tasks Completed", "- a"), ("🏗️ Projects Worked On", "- P")]),
    );
    let service = CompileService::new(RecallConfig::new(dir.path()));

    let first = drafted(service.compile_week(date(2024, 1, 8)).unwrap());
    let first_draft = fs::read_to_string(&first.draft_path).unwrap();
    let second = drafted(service.compile_week(date(2024, 1, 8)).unwrap());

    assert_eq!(fs::read_to_string(&second.draft_path).unwrap(), first_draft);
}

#[test]
fn untouched_scaffold_compiles_to_unchanged_summary() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = scaffold(dir.path());
    let service = CompileService::new(RecallConfig::new(dir.path()));

    let report = drafted(service.compile_week(date(2024, 1, 10)).unwrap());

    assert_eq!(report.daily_files.len(), 5);
    assert_eq!(
        fs::read_to_string(&report.draft_path).unwrap(),
        fs::read_to_string(week_dir.join("week02-summary.md")).unwrap()
    );
}

#[test]
fn empty_daily_directory_is_a_soft_exit() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = scaffold(dir.path());
    for entry in fs::read_dir(week_dir.join("daily")).unwrap() {
        fs::remove_file(entry.unwrap().path()).unwrap();
    }

    let service = CompileService::new(RecallConfig::new(dir.path()));
    let outcome = service.compile_week(date(2024, 1, 10)).unwrap();

    assert_eq!(
        outcome,
        CompileOutcome::NoDailyNotes {
            week_dir: week_dir.clone()
        }
    );
    assert!(!week_dir.join("week02-summary_draft.md").exists());
}

#[test]
fn missing_week_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    let service = CompileService::new(RecallConfig::new(dir.path()));

    let err = service.compile_week(date(2024, 2, 14)).unwrap_err();

    match err {
        RecallError::WeekNotFound { week, year } => {
            assert_eq!(week, 7);
            assert_eq!(year, 2024);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_daily_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = scaffold(dir.path());
    fs::remove_dir_all(week_dir.join("daily")).unwrap();
    let service = CompileService::new(RecallConfig::new(dir.path()));

    let err = service.compile_week(date(2024, 1, 10)).unwrap_err();

    assert!(matches!(err, RecallError::DailyDirNotFound(path) if path == week_dir.join("daily")));
}

#[test]
fn missing_summary_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = scaffold(dir.path());
    fs::remove_file(week_dir.join("week02-summary.md")).unwrap();
    let service = CompileService::new(RecallConfig::new(dir.path()));

    let err = service.compile_week(date(2024, 1, 10)).unwrap_err();

    assert!(matches!(err, RecallError::SummaryNotFound(path) if path == week_dir));
}

#[test]
fn lookup_matches_any_directory_with_week_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let week_dir = dir.path().join("2024/Q1/Week02-renamed");
    fs::create_dir_all(week_dir.join("daily")).unwrap();
    fs::write(week_dir.join("week02-summary.md"), "## 🌟 Key Accomplishments\n\n- \n").unwrap();
    write_daily(&week_dir, "2024-01-09", &daily_note(&[("🛠️ Tasks Completed", "- z")]));

    let service = CompileService::new(RecallConfig::new(dir.path()));
    let report = drafted(service.compile_week(date(2024, 1, 14)).unwrap());

    assert_eq!(report.week_dir, week_dir);
    assert_eq!(
        fs::read_to_string(&report.draft_path).unwrap(),
        "## 🌟 Key Accomplishments\n\n- z\n"
    );
}

#[test]
fn outcome_serializes_with_status_tag() {
    let outcome = CompileOutcome::NoDailyNotes {
        week_dir: PathBuf::from("w"),
    };
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], "no_daily_notes");
    assert_eq!(value["week_dir"], "w");
}
