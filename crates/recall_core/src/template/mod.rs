//! Built-in note templates and placeholder rendering.
//!
//! # Responsibility
//! - Provide default daily/weekly markdown skeletons for first-run setup.
//! - Substitute date placeholders by literal string replacement.
//!
//! # Invariants
//! - Defaults contain every heading from `DailySection` / `WeeklySection`.
//! - Rendering never touches text other than the placeholders.

use crate::calendar::week::WeekSpan;
use chrono::NaiveDate;

/// Placeholder replaced with `YYYY-MM-DD` in daily notes.
pub const DATE_PLACEHOLDER: &str = "[DATE]";
/// Placeholder replaced with the week's Monday in weekly summaries.
pub const START_DATE_PLACEHOLDER: &str = "[START_DATE]";
/// Placeholder replaced with the week's Sunday in weekly summaries.
pub const END_DATE_PLACEHOLDER: &str = "[END_DATE]";

pub const DEFAULT_DAILY_TEMPLATE: &str = "# Daily Notes: [DATE]

## 🏗️ Projects Worked On

- 

## 🛠️ Tasks Completed

- 

## 🤔 Decisions Made

- 

## 💡 Ideas & Insights

- 

## 🧠 Learnings

- 

## 🚧 Blockers & Challenges

- 

## 📌 Follow-ups Needed

- 

## 📝 Notes for Weekly Summary

- 
";

pub const DEFAULT_WEEKLY_TEMPLATE: &str = "# Weekly Release Notes: Week of [START_DATE] to [END_DATE]

## 🌟 Key Accomplishments

- 

## 📊 Project Progress

### [Project Name]
- Status: [On Track/At Risk/Blocked]
- Progress:
  - 
- Next Steps:
  - 

### [Project Name]
- Status:
- Progress:
- Next Steps:

## 💎 Key Learnings & Insights

- 

## 🔄 Process Improvements

- 

## 🚧 Challenges & Blockers

- 

## 👥 Collaborations & Meetings

- 

## 📅 Looking Ahead to Next Week

- 

## 🌱 Personal Growth & Development

- 
";

/// Fills the daily template for `date`.
pub fn render_daily(template: &str, date: NaiveDate) -> String {
    template.replace(DATE_PLACEHOLDER, &date.format("%Y-%m-%d").to_string())
}

/// Fills the weekly template with the week's long-form date range.
pub fn render_weekly(template: &str, week: &WeekSpan) -> String {
    template
        .replace(START_DATE_PLACEHOLDER, &week.start_label())
        .replace(END_DATE_PLACEHOLDER, &week.end_label())
}

/// Progress block inserted into the weekly summary for one project.
pub fn project_progress_block(project: &str) -> String {
    format!(
        "### {project}\n- Status: [On Track/At Risk/Blocked]\n- Progress:\n  - \n- Next Steps:\n  - \n"
    )
}
