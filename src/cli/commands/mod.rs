//! Command implementations

pub mod age;
pub mod completions;
pub mod copy;
pub mod count;
pub mod dept;
pub mod list;
pub mod position;
pub mod reports;
pub mod show;
pub mod workdays;
