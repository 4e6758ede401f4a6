//! Calendar week resolution.
//!
//! # Responsibility
//! - Map a calendar date to its Monday..Sunday week and on-disk location.
//!
//! # Invariants
//! - Year, quarter and ISO week number always come from the week's Monday.

pub mod week;
