//! Roster - the owning store of records plus its secondary indices
//!
//! The roster owns every record exclusively in an insertion-ordered arena.
//! Four derived indices are updated on every insert and refer back into the
//! arena by stable slot (or by name key for the supervisor index), never by
//! independent owning pointers, so clearing or copying the roster cannot
//! leave a dangling index entry.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::core::record::Record;

/// Errors returned by roster lookups
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("name not found: '{0}'")]
    NameNotFound(String),

    #[error("department not found: '{0}'")]
    DepartmentNotFound(String),

    #[error("position not found: '{0}'")]
    PositionNotFound(String),

    #[error("no direct reports under: '{0}'")]
    NoDirectReports(String),

    #[error("unknown name: '{0}'")]
    UnknownName(String),
}

/// In-memory personnel register with indexed lookups.
///
/// Invariant: every inserted record adds exactly one entry to each index,
/// and no index entry exists without its arena record. On a duplicate name
/// the name index is overwritten (last insert wins) while the arena and the
/// category buckets keep the earlier entry; this matches the flat-file
/// format, which has no uniqueness guarantee, and is covered by tests.
#[derive(Debug, Default)]
pub struct Roster {
    /// Owning arena; slice order is insertion order.
    records: Vec<Record>,
    /// name -> arena slot (last insert wins on duplicates)
    name_idx: HashMap<String, usize>,
    /// department -> arena slots in insertion order
    dept_idx: HashMap<String, Vec<usize>>,
    /// position -> arena slots in insertion order
    pos_idx: HashMap<String, Vec<usize>>,
    /// supervisor name -> direct-report names in insertion order
    reports_idx: HashMap<String, Vec<String>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the arena - O(1).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take ownership of a record and update all four indices.
    ///
    /// Always succeeds: a duplicate name overwrites the name-index slot but
    /// still appends to the arena and to every bucket.
    pub fn insert(&mut self, record: Record) {
        let slot = self.records.len();

        self.name_idx.insert(record.name().to_string(), slot);
        self.dept_idx
            .entry(record.department().to_string())
            .or_default()
            .push(slot);
        self.pos_idx
            .entry(record.position().to_string())
            .or_default()
            .push(slot);
        self.reports_idx
            .entry(record.supervisor().to_string())
            .or_default()
            .push(record.name().to_string());

        self.records.push(record);
    }

    /// Discard every record and empty all indices. Idempotent.
    pub fn clear(&mut self) {
        self.records.clear();
        self.name_idx.clear();
        self.dept_idx.clear();
        self.pos_idx.clear();
        self.reports_idx.clear();
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records with `low <= age <= high`, in insertion order.
    ///
    /// Linear scan of the arena; `low > high` yields an empty result.
    pub fn in_age_range(&self, low: u32, high: u32) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| low <= r.age() && r.age() <= high)
            .collect()
    }

    /// Look up a record by exact name via the name index.
    pub fn by_name(&self, name: &str) -> Result<&Record, RosterError> {
        self.name_idx
            .get(name)
            .map(|&slot| &self.records[slot])
            .ok_or_else(|| RosterError::NameNotFound(name.to_string()))
    }

    /// All records in a department, in insertion order.
    pub fn by_department(&self, department: &str) -> Result<Vec<&Record>, RosterError> {
        let slots = self
            .dept_idx
            .get(department)
            .ok_or_else(|| RosterError::DepartmentNotFound(department.to_string()))?;
        Ok(slots.iter().map(|&s| &self.records[s]).collect())
    }

    /// All records holding a position, in insertion order.
    pub fn by_position(&self, position: &str) -> Result<Vec<&Record>, RosterError> {
        let slots = self
            .pos_idx
            .get(position)
            .ok_or_else(|| RosterError::PositionNotFound(position.to_string()))?;
        Ok(slots.iter().map(|&s| &self.records[s]).collect())
    }

    /// Names of everyone reporting directly to `supervisor`, in insertion
    /// order. Fails if the name never appears as a supervisor value.
    pub fn direct_reports_of(&self, supervisor: &str) -> Result<&[String], RosterError> {
        self.reports_idx
            .get(supervisor)
            .map(Vec::as_slice)
            .ok_or_else(|| RosterError::NoDirectReports(supervisor.to_string()))
    }

    /// Records whose workday list intersects the given days.
    ///
    /// Single scan of the arena with set semantics: each arena slot is
    /// considered once and can appear at most once in the result. Callers
    /// must treat the result as unordered membership.
    pub fn by_any_workday<'a, I>(&self, days: I) -> Vec<&Record>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let days: HashSet<&str> = days.into_iter().collect();
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for (slot, record) in self.records.iter().enumerate() {
            if record.works_any_of(days.iter().copied()) && seen.insert(slot) {
                found.push(record);
            }
        }
        found
    }

    /// Known department keys, in arbitrary order.
    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.dept_idx.keys().map(String::as_str)
    }

    /// Known position keys, in arbitrary order.
    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.pos_idx.keys().map(String::as_str)
    }

    /// Known supervisor keys (including the sentinel), in arbitrary order.
    pub fn supervisors(&self) -> impl Iterator<Item = &str> {
        self.reports_idx.keys().map(String::as_str)
    }

    /// True if `name` appears in the name index or as a supervisor key.
    ///
    /// Supervisor data is free-form text, so a name can exist purely as a
    /// supervisor value without a record of its own.
    pub fn contains_name(&self, name: &str) -> bool {
        self.name_idx.contains_key(name) || self.reports_idx.contains_key(name)
    }

    /// Build an independent roster by cloning every record and replaying
    /// inserts in arena order. The copy shares no ownership with `self`;
    /// its indices are rebuilt from scratch.
    pub fn deep_copy(&self) -> Self {
        let mut copy = Self::new();
        for record in &self.records {
            copy.insert(record.clone());
        }
        copy
    }
}

impl Clone for Roster {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}
