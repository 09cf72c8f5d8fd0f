//! Hierarchy walker - transitive closure of the reports-to relation
//!
//! Supervisor values are free-form text, so the reporting graph can contain
//! cycles (A supervises B, B supervises A) or self-loops. The walk therefore
//! carries a visited set as an integral part of the traversal: once a name
//! has been emitted it is never re-emitted or re-expanded, which bounds the
//! walk by the finite name universe regardless of graph shape.

use std::collections::HashSet;

use crate::core::roster::{Roster, RosterError};

/// One emitted entry of a hierarchy walk: the report's name and its nesting
/// level below the root (direct reports are level 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub level: usize,
    pub name: String,
}

impl ReportEntry {
    fn new(level: usize, name: &str) -> Self {
        Self {
            level,
            name: name.to_string(),
        }
    }
}

/// Depth-first pre-order traversal over a roster's supervisor index.
///
/// Borrows the roster read-only; a walk is a pure function of store state
/// and can be rerun or abandoned at any point.
pub struct HierarchyWalker<'a> {
    roster: &'a Roster,
}

impl<'a> HierarchyWalker<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Enumerate all direct and transitive reports under `root`.
    ///
    /// Fails with [`RosterError::UnknownName`] when the root appears in
    /// neither the name index nor the supervisor index. A known root with
    /// no direct reports yields an empty sequence, not an error.
    pub fn walk(&self, root: &str) -> Result<Vec<ReportEntry>, RosterError> {
        if !self.roster.contains_name(root) {
            return Err(RosterError::UnknownName(root.to_string()));
        }

        let mut entries = Vec::new();
        // The root is visited up front so a cycle back to it cannot re-emit it.
        let mut visited = HashSet::new();
        visited.insert(root.to_string());
        self.descend(root, 1, &mut visited, &mut entries);
        Ok(entries)
    }

    fn descend(
        &self,
        supervisor: &str,
        level: usize,
        visited: &mut HashSet<String>,
        entries: &mut Vec<ReportEntry>,
    ) {
        // No bucket means no direct reports; at this depth that is a leaf,
        // not an error.
        let Ok(reports) = self.roster.direct_reports_of(supervisor) else {
            return;
        };

        for name in reports {
            if !visited.insert(name.clone()) {
                continue;
            }
            entries.push(ReportEntry::new(level, name));
            self.descend(name, level + 1, visited, entries);
        }
    }
}
