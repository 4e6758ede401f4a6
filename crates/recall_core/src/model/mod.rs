//! Typed vocabulary for note files.
//!
//! # Responsibility
//! - Name the fixed sections of daily notes and weekly summaries.

pub mod section;
