//! Core roster model: records, the indexed store, the hierarchy walker,
//! the flat-file codec, and configuration.

pub mod config;
pub mod flatfile;
pub mod hierarchy;
pub mod record;
pub mod roster;

pub use config::Config;
pub use hierarchy::{HierarchyWalker, ReportEntry};
pub use record::{Record, RecordError, NO_SUPERVISOR};
pub use roster::{Roster, RosterError};
