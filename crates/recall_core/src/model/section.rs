//! Fixed section headings of daily notes and weekly summaries.
//!
//! # Invariants
//! - `heading()` returns the exact level-2 heading text, icon glyph included.
//! - Template defaults and the compiler resolve headings only through these
//!   enums.

use serde::Serialize;

/// Sections of a daily note, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DailySection {
    ProjectsWorkedOn,
    TasksCompleted,
    DecisionsMade,
    IdeasAndInsights,
    Learnings,
    BlockersAndChallenges,
    FollowUpsNeeded,
    NotesForWeeklySummary,
}

impl DailySection {
    pub const ALL: [DailySection; 8] = [
        Self::ProjectsWorkedOn,
        Self::TasksCompleted,
        Self::DecisionsMade,
        Self::IdeasAndInsights,
        Self::Learnings,
        Self::BlockersAndChallenges,
        Self::FollowUpsNeeded,
        Self::NotesForWeeklySummary,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Self::ProjectsWorkedOn => "🏗️ Projects Worked On",
            Self::TasksCompleted => "🛠️ Tasks Completed",
            Self::DecisionsMade => "🤔 Decisions Made",
            Self::IdeasAndInsights => "💡 Ideas & Insights",
            Self::Learnings => "🧠 Learnings",
            Self::BlockersAndChallenges => "🚧 Blockers & Challenges",
            Self::FollowUpsNeeded => "📌 Follow-ups Needed",
            Self::NotesForWeeklySummary => "📝 Notes for Weekly Summary",
        }
    }
}

/// Sections of a weekly summary, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklySection {
    KeyAccomplishments,
    ProjectProgress,
    KeyLearnings,
    ProcessImprovements,
    ChallengesAndBlockers,
    Collaborations,
    LookingAhead,
    PersonalGrowth,
}

impl WeeklySection {
    pub const ALL: [WeeklySection; 8] = [
        Self::KeyAccomplishments,
        Self::ProjectProgress,
        Self::KeyLearnings,
        Self::ProcessImprovements,
        Self::ChallengesAndBlockers,
        Self::Collaborations,
        Self::LookingAhead,
        Self::PersonalGrowth,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Self::KeyAccomplishments => "🌟 Key Accomplishments",
            Self::ProjectProgress => "📊 Project Progress",
            Self::KeyLearnings => "💎 Key Learnings & Insights",
            Self::ProcessImprovements => "🔄 Process Improvements",
            Self::ChallengesAndBlockers => "🚧 Challenges & Blockers",
            Self::Collaborations => "👥 Collaborations & Meetings",
            Self::LookingAhead => "📅 Looking Ahead to Next Week",
            Self::PersonalGrowth => "🌱 Personal Growth & Development",
        }
    }
}
