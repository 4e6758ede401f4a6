//! Markdown section model.
//!
//! # Responsibility
//! - Parse notes into ordered level-2 sections and write them back.
//!
//! # Invariants
//! - Parse followed by serialize reproduces the input byte for byte.

pub mod document;
