//! Record - one personnel entry in the roster
//!
//! Records are immutable once constructed. A change to a person's data is
//! modeled as removing the old record from a store and inserting a new one,
//! never as in-place field mutation, so index entries cannot dangle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel supervisor value for records with no supervisor.
///
/// An empty supervisor field is normalized to this value at construction,
/// and the flat-file serializer maps it back to an empty field. The
/// supervisor index and the hierarchy walker both key on it, so the
/// normalization must happen in exactly one place: here.
pub const NO_SUPERVISOR: &str = "n/a";

/// Errors that can occur constructing a record
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed age '{value}': expected a non-negative integer")]
    MalformedAge { value: String },
}

/// One personnel record: name, age, department, position, supervisor,
/// and the list of workday labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    age: u32,
    department: String,
    position: String,
    supervisor: String,
    workdays: Vec<String>,
}

impl Record {
    /// Construct a record from raw field text.
    ///
    /// The age is supplied as text and parsed here; a non-numeric or
    /// negative value fails with [`RecordError::MalformedAge`] and no
    /// record is created. An empty supervisor is normalized to
    /// [`NO_SUPERVISOR`].
    pub fn new(
        name: impl Into<String>,
        age: &str,
        department: impl Into<String>,
        position: impl Into<String>,
        supervisor: &str,
        workdays: Vec<String>,
    ) -> Result<Self, RecordError> {
        let age = age.trim().parse::<u32>().map_err(|_| RecordError::MalformedAge {
            value: age.to_string(),
        })?;

        let supervisor = if supervisor.is_empty() {
            NO_SUPERVISOR.to_string()
        } else {
            supervisor.to_string()
        };

        Ok(Self {
            name: name.into(),
            age,
            department: department.into(),
            position: position.into(),
            supervisor,
            workdays,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// The supervisor's name, or [`NO_SUPERVISOR`] if none was supplied.
    pub fn supervisor(&self) -> &str {
        &self.supervisor
    }

    /// True if this record has no supervisor.
    pub fn has_no_supervisor(&self) -> bool {
        self.supervisor == NO_SUPERVISOR
    }

    /// Workday labels in the order they were entered; duplicates permitted.
    pub fn workdays(&self) -> &[String] {
        &self.workdays
    }

    /// True if any of this record's workdays appears in `days`.
    pub fn works_any_of<'a, I>(&self, days: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut days = days.into_iter();
        days.any(|d| self.workdays.iter().any(|w| w == d))
    }
}
