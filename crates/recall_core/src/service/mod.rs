//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate calendar, template and markdown helpers into the two
//!   user-facing operations: scaffold a week, compile a week.
//! - Keep the binaries free of filesystem and parsing details.

pub mod compile_service;
pub mod scaffold_service;
