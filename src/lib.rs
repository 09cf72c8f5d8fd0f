//! Roster: a personnel register toolkit
//!
//! A Unix-style CLI for maintaining a personnel register as a plain-text
//! tab-separated flat file, with indexed queries and recursive
//! reporting-line traversal.

pub mod cli;
pub mod core;
