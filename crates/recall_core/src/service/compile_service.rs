//! Weekly compilation use-case.
//!
//! # Responsibility
//! - Fold a week's daily notes into per-category buckets (`WeeklyDigest`).
//! - Rewrite selected weekly summary sections and save a `_draft` copy.
//!
//! # Invariants
//! - Daily notes are read in file-name order, which is chronological.
//! - Accomplishments of file N (tasks, then notes) precede those of file N+1.
//! - Project names are deduplicated; every other bucket keeps duplicates.
//! - The weekly summary file itself is never written.
//! - Sections without accumulated content are left exactly as they were.

use crate::calendar::week::{locate_week_dir, DAILY_DIR_NAME};
use crate::config::RecallConfig;
use crate::error::{RecallError, RecallResult};
use crate::fsutil::{atomic_write, read_text};
use crate::markdown::document::MarkdownDocument;
use crate::model::section::{DailySection, WeeklySection};
use crate::template::project_progress_block;
use chrono::NaiveDate;
use log::{debug, error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

static BULLET_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*+](?:\s+|$)").expect("valid bullet regex"));

const DRAFT_SUFFIX: &str = "_draft";
const SUMMARY_PREFIX: &str = "week";
const SUMMARY_SUFFIX: &str = "-summary.md";

/// Content accumulated from a week's daily notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeeklyDigest {
    /// Tasks Completed + Notes for Weekly Summary bullets.
    pub accomplishments: Vec<String>,
    /// Distinct project names from Projects Worked On.
    pub projects: BTreeSet<String>,
    pub learnings: Vec<String>,
    pub challenges: Vec<String>,
    pub follow_ups: Vec<String>,
    pub decisions: Vec<String>,
}

impl WeeklyDigest {
    /// Accumulates one daily note. Call in chronological order.
    pub fn absorb(&mut self, daily_markdown: &str) {
        let doc = MarkdownDocument::parse(daily_markdown);
        let bullets = |section: DailySection| bullet_lines(doc.section_text(section.heading()));

        self.accomplishments
            .extend(bullets(DailySection::TasksCompleted));
        self.accomplishments
            .extend(bullets(DailySection::NotesForWeeklySummary));
        self.projects.extend(project_names(
            doc.section_text(DailySection::ProjectsWorkedOn.heading()),
        ));
        self.learnings.extend(bullets(DailySection::Learnings));
        self.challenges
            .extend(bullets(DailySection::BlockersAndChallenges));
        self.follow_ups.extend(bullets(DailySection::FollowUpsNeeded));
        self.decisions.extend(bullets(DailySection::DecisionsMade));
    }

    /// Returns `summary_markdown` with digest content written into the
    /// accomplishments, project progress, learnings and challenges sections.
    pub fn apply_to(&self, summary_markdown: &str) -> String {
        let mut doc = MarkdownDocument::parse(summary_markdown);

        let project_blocks = self
            .projects
            .iter()
            .map(|name| project_progress_block(name))
            .collect::<Vec<_>>();

        let updates = [
            (WeeklySection::KeyAccomplishments, self.accomplishments.join("\n")),
            (WeeklySection::ProjectProgress, project_blocks.join("\n")),
            (WeeklySection::KeyLearnings, self.learnings.join("\n")),
            (WeeklySection::ChallengesAndBlockers, self.challenges.join("\n")),
        ];
        for (section, content) in updates {
            if content.is_empty() {
                debug!(
                    "event=section_skip module=compile status=ok section={:?} reason=no_content",
                    section
                );
                continue;
            }
            if !doc.replace_section_body(section.heading(), &content) {
                debug!(
                    "event=section_skip module=compile status=ok section={:?} reason=heading_absent",
                    section
                );
            }
        }

        doc.to_markdown()
    }
}

/// Successful compile run that produced a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub week_dir: PathBuf,
    pub summary_path: PathBuf,
    pub draft_path: PathBuf,
    /// Daily notes read, in processing order.
    pub daily_files: Vec<PathBuf>,
    pub digest: WeeklyDigest,
}

/// Outcome of a compile run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompileOutcome {
    /// The daily directory exists but holds no notes; nothing was written.
    NoDailyNotes { week_dir: PathBuf },
    /// A draft was written.
    Drafted(CompileReport),
}

/// Compiler bound to one base directory.
pub struct CompileService {
    config: RecallConfig,
}

impl CompileService {
    pub fn new(config: RecallConfig) -> Self {
        Self { config }
    }

    /// Compiles the week enclosing `date`.
    ///
    /// # Errors
    /// - `WeekNotFound` when no week directory exists for the date.
    /// - Everything `compile_week_dir` returns.
    pub fn compile_week(&self, date: NaiveDate) -> RecallResult<CompileOutcome> {
        let week_dir = locate_week_dir(&self.config, date)?;
        self.compile_week_dir(&week_dir)
    }

    /// Compiles the daily notes inside an explicit week directory.
    ///
    /// # Errors
    /// - `DailyDirNotFound` when `<week_dir>/daily` is missing.
    /// - `SummaryNotFound` when no `week*-summary.md` file exists.
    /// - `Io` on read/write failures.
    pub fn compile_week_dir(&self, week_dir: &Path) -> RecallResult<CompileOutcome> {
        let started_at = Instant::now();
        info!(
            "event=compile_week module=compile status=start week_dir={}",
            week_dir.display()
        );

        match compile_in(week_dir) {
            Ok(outcome) => {
                let status = match &outcome {
                    CompileOutcome::NoDailyNotes { .. } => "empty",
                    CompileOutcome::Drafted(_) => "ok",
                };
                info!(
                    "event=compile_week module=compile status={} duration_ms={}",
                    status,
                    started_at.elapsed().as_millis()
                );
                Ok(outcome)
            }
            Err(err) => {
                error!(
                    "event=compile_week module=compile status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// `week02-summary.md` -> `week02-summary_draft.md`
pub fn draft_path_for(summary_path: &Path) -> PathBuf {
    let stem = summary_path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    let file_name = match summary_path.extension().and_then(OsStr::to_str) {
        Some(ext) => format!("{stem}{DRAFT_SUFFIX}.{ext}"),
        None => format!("{stem}{DRAFT_SUFFIX}"),
    };
    summary_path.with_file_name(file_name)
}

fn compile_in(week_dir: &Path) -> RecallResult<CompileOutcome> {
    let daily_dir = week_dir.join(DAILY_DIR_NAME);
    if !daily_dir.is_dir() {
        return Err(RecallError::DailyDirNotFound(daily_dir));
    }

    let daily_files = list_daily_files(&daily_dir)?;
    if daily_files.is_empty() {
        return Ok(CompileOutcome::NoDailyNotes {
            week_dir: week_dir.to_path_buf(),
        });
    }

    let summary_path = find_summary_file(week_dir)?
        .ok_or_else(|| RecallError::SummaryNotFound(week_dir.to_path_buf()))?;
    let summary = read_text(&summary_path)?;

    let mut digest = WeeklyDigest::default();
    for daily_file in &daily_files {
        digest.absorb(&read_text(daily_file)?);
    }

    let draft_path = draft_path_for(&summary_path);
    atomic_write(&draft_path, digest.apply_to(&summary).as_bytes())?;
    info!(
        "event=draft_write module=compile status=ok daily_files={} projects={} path={}",
        daily_files.len(),
        digest.projects.len(),
        draft_path.display()
    );

    Ok(CompileOutcome::Drafted(CompileReport {
        week_dir: week_dir.to_path_buf(),
        summary_path,
        draft_path,
        daily_files,
        digest,
    }))
}

fn list_daily_files(daily_dir: &Path) -> RecallResult<Vec<PathBuf>> {
    let entries = fs::read_dir(daily_dir).map_err(|err| RecallError::io(daily_dir, err))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| RecallError::io(daily_dir, err))?.path();
        if path.is_file() && path.extension() == Some(OsStr::new("md")) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn find_summary_file(week_dir: &Path) -> RecallResult<Option<PathBuf>> {
    let entries = fs::read_dir(week_dir).map_err(|err| RecallError::io(week_dir, err))?;
    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| RecallError::io(week_dir, err))?.path();
        let is_summary = path
            .file_name()
            .and_then(OsStr::to_str)
            .map(|name| name.starts_with(SUMMARY_PREFIX) && name.ends_with(SUMMARY_SUFFIX))
            .unwrap_or(false);
        if is_summary && path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates.into_iter().next())
}

/// Non-empty trimmed lines as bullets.
///
/// Lines that are only a marker (an untouched template `- `) are dropped, so
/// an unedited note contributes nothing instead of `- -` bullets.
fn bullet_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match BULLET_MARKER_RE.find(line) {
            Some(marker) if line[marker.end()..].trim().is_empty() => None,
            Some(_) => Some(line.to_string()),
            None => Some(format!("- {line}")),
        })
        .collect()
}

/// Project names with the bullet marker stripped.
///
/// Stripping is marker-aware: only a real `-`/`*`/`+` marker is removed, so
/// unmarked lines such as `Gamma` or `1. Foo` keep their full text.
fn project_names(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let name = match BULLET_MARKER_RE.find(line) {
                Some(marker) => line[marker.end()..].trim(),
                None => line,
            };
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{bullet_lines, draft_path_for, project_names, WeeklyDigest};
    use crate::template::DEFAULT_WEEKLY_TEMPLATE;
    use std::path::{Path, PathBuf};

    #[test]
    fn bullet_lines_normalizes_markers_and_skips_placeholders() {
        let body = "- shipped api\n\n  plain line  \n-\n* starred\n**bold** text";
        assert_eq!(
            bullet_lines(body),
            vec!["- shipped api", "- plain line", "* starred", "- **bold** text"]
        );
    }

    #[test]
    fn project_names_strip_marker() {
        assert_eq!(
            project_names("- Alpha\n-  Beta \n- \nGamma"),
            vec!["Alpha", "Beta", "Gamma"]
        );
    }

    #[test]
    fn project_names_keep_unmarked_lines_whole() {
        assert_eq!(project_names("1. Foo\nGamma"), vec!["1. Foo", "Gamma"]);
    }

    #[test]
    fn untouched_template_sections_contribute_nothing() {
        let mut digest = WeeklyDigest::default();
        digest.absorb(crate::template::DEFAULT_DAILY_TEMPLATE);
        assert_eq!(digest, WeeklyDigest::default());
        assert!(bullet_lines("-\n*\n+ ").is_empty());
        assert!(project_names("- \n-").is_empty());
    }

    #[test]
    fn draft_path_inserts_suffix_before_extension() {
        assert_eq!(
            draft_path_for(Path::new("/n/Week02-Jan08-Jan14/week02-summary.md")),
            PathBuf::from("/n/Week02-Jan08-Jan14/week02-summary_draft.md")
        );
    }

    #[test]
    fn absorb_orders_tasks_before_notes_per_file() {
        let mut digest = WeeklyDigest::default();
        digest.absorb("## 📝 Notes for Weekly Summary\n- n1\n## 🛠️ Tasks Completed\n- t1\n");
        digest.absorb("## 🛠️ Tasks Completed\n- t2\n## 📝 Notes for Weekly Summary\n- n2\n");
        assert_eq!(digest.accomplishments, vec!["- t1", "- n1", "- t2", "- n2"]);
    }

    #[test]
    fn apply_to_skips_empty_buckets() {
        let digest = WeeklyDigest::default();
        assert_eq!(
            digest.apply_to(DEFAULT_WEEKLY_TEMPLATE),
            DEFAULT_WEEKLY_TEMPLATE
        );
    }

    #[test]
    fn apply_to_replaces_project_progress_with_blocks() {
        let mut digest = WeeklyDigest::default();
        digest.absorb("## 🏗️ Projects Worked On\n- Beta\n- Alpha\n");
        let out = digest.apply_to(DEFAULT_WEEKLY_TEMPLATE);
        assert!(!out.contains("### [Project Name]"));
        let alpha = out.find("### Alpha").expect("alpha block");
        let beta = out.find("### Beta").expect("beta block");
        assert!(alpha < beta);
    }
}
