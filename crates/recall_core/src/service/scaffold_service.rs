//! Week scaffolding use-case.
//!
//! # Responsibility
//! - Ensure base, template, year, quarter, week and daily directories exist.
//! - Write default templates on first run.
//! - Instantiate the weekly summary and Monday..Friday daily notes.
//!
//! # Invariants
//! - Existing files are never modified; every write is create-new.
//! - Re-running for the same week creates nothing and reports nothing.
//! - A failure aborts the run; directories created earlier are kept.

use crate::calendar::week::{daily_file_name, WeekSpan, DAILY_DIR_NAME};
use crate::config::RecallConfig;
use crate::error::{RecallError, RecallResult};
use crate::fsutil::{ensure_dir, read_text, write_if_absent};
use crate::template::{
    render_daily, render_weekly, DEFAULT_DAILY_TEMPLATE, DEFAULT_WEEKLY_TEMPLATE,
};
use chrono::NaiveDate;
use log::{debug, error, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Role of a file written by the scaffolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatedKind {
    DailyTemplate,
    WeeklyTemplate,
    WeeklySummary,
    DailyNote,
}

impl CreatedKind {
    /// Human-readable label used in CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::DailyTemplate => "daily template",
            Self::WeeklyTemplate => "weekly template",
            Self::WeeklySummary => "weekly summary template",
            Self::DailyNote => "daily note",
        }
    }
}

/// One file written by a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedFile {
    pub kind: CreatedKind,
    pub path: PathBuf,
}

/// Result of one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub week: WeekSpan,
    pub week_dir: PathBuf,
    pub summary_path: PathBuf,
    /// Directories created by this run, parents first.
    pub created_dirs: Vec<PathBuf>,
    /// Files created by this run: templates, summary, then daily notes.
    pub created_files: Vec<CreatedFile>,
}

impl ScaffoldReport {
    /// `true` when the run found everything already in place.
    pub fn is_noop(&self) -> bool {
        self.created_dirs.is_empty() && self.created_files.is_empty()
    }
}

/// Scaffolder bound to one base directory.
pub struct ScaffoldService {
    config: RecallConfig,
}

impl ScaffoldService {
    pub fn new(config: RecallConfig) -> Self {
        Self { config }
    }

    /// Ensures the full skeleton for the week enclosing `date`.
    ///
    /// # Errors
    /// - `TemplateNotFound` when a template cannot be read back.
    /// - `Io` for any directory or file write failure.
    pub fn scaffold_week(&self, date: NaiveDate) -> RecallResult<ScaffoldReport> {
        let started_at = Instant::now();
        let week = WeekSpan::containing(date);
        info!(
            "event=scaffold_week module=scaffold status=start week={} dir={}",
            week.iso_week,
            week.dir_name()
        );

        let week_dir = week.week_dir(&self.config);
        let mut report = ScaffoldReport {
            week,
            summary_path: week_dir.join(week.summary_file_name()),
            week_dir,
            created_dirs: Vec::new(),
            created_files: Vec::new(),
        };

        match self.populate(&mut report) {
            Ok(()) => {
                info!(
                    "event=scaffold_week module=scaffold status=ok week={} created_dirs={} created_files={} duration_ms={}",
                    week.iso_week,
                    report.created_dirs.len(),
                    report.created_files.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(report)
            }
            Err(err) => {
                error!(
                    "event=scaffold_week module=scaffold status=error week={} duration_ms={} error={}",
                    week.iso_week,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn populate(&self, report: &mut ScaffoldReport) -> RecallResult<()> {
        let week = report.week;
        let daily_dir = report.week_dir.join(DAILY_DIR_NAME);

        self.ensure_dir_tracked(self.config.base_dir(), report)?;
        self.ensure_templates(report)?;

        let year_dir = self.config.year_dir(week.year);
        let quarter_dir = self.config.quarter_dir(week.year, week.quarter);
        let week_dir = report.week_dir.clone();
        for dir in [&year_dir, &quarter_dir, &week_dir, &daily_dir] {
            self.ensure_dir_tracked(dir, report)?;
        }

        let daily_template = read_template(&self.config.daily_template_path())?;
        let weekly_template = read_template(&self.config.weekly_template_path())?;

        let summary_path = report.summary_path.clone();
        let summary = render_weekly(&weekly_template, &week);
        if write_if_absent(&summary_path, &summary)? {
            info!(
                "event=note_create module=scaffold status=ok kind=weekly path={}",
                summary_path.display()
            );
            report.created_files.push(CreatedFile {
                kind: CreatedKind::WeeklySummary,
                path: summary_path,
            });
        }

        for day in week.workdays() {
            let day_path = daily_dir.join(daily_file_name(day));
            if write_if_absent(&day_path, &render_daily(&daily_template, day))? {
                info!(
                    "event=note_create module=scaffold status=ok kind=daily path={}",
                    day_path.display()
                );
                report.created_files.push(CreatedFile {
                    kind: CreatedKind::DailyNote,
                    path: day_path,
                });
            } else {
                debug!(
                    "event=note_create module=scaffold status=skipped kind=daily path={}",
                    day_path.display()
                );
            }
        }

        Ok(())
    }

    fn ensure_templates(&self, report: &mut ScaffoldReport) -> RecallResult<()> {
        self.ensure_dir_tracked(&self.config.templates_dir(), report)?;

        let defaults = [
            (
                self.config.daily_template_path(),
                DEFAULT_DAILY_TEMPLATE,
                CreatedKind::DailyTemplate,
            ),
            (
                self.config.weekly_template_path(),
                DEFAULT_WEEKLY_TEMPLATE,
                CreatedKind::WeeklyTemplate,
            ),
        ];
        for (path, contents, kind) in defaults {
            if write_if_absent(&path, contents)? {
                info!(
                    "event=template_create module=scaffold status=ok kind={:?} path={}",
                    kind,
                    path.display()
                );
                report.created_files.push(CreatedFile { kind, path });
            }
        }
        Ok(())
    }

    fn ensure_dir_tracked(&self, dir: &Path, report: &mut ScaffoldReport) -> RecallResult<()> {
        if ensure_dir(dir)? {
            debug!(
                "event=dir_create module=scaffold status=ok path={}",
                dir.display()
            );
            report.created_dirs.push(dir.to_path_buf());
        }
        Ok(())
    }
}

fn read_template(path: &Path) -> RecallResult<String> {
    if !path.is_file() {
        return Err(RecallError::TemplateNotFound(path.to_path_buf()));
    }
    read_text(path)
}
