use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Delete,
    Insert,
    Replace,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Delete => "delete",
            Operation::Insert => "insert",
            Operation::Replace => "replace",
        };
        f.write_str(name)
    }
}

/// One change between the old and new buffer.
///
/// `start`/`end` are window positions in the old buffer. `offset` is the
/// byte offset in the old buffer where `literal` applies. The literal holds
/// the removed old bytes for a delete and the new bytes otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub operation: Operation,
    pub start: usize,
    pub end: usize,
    pub offset: usize,
    pub literal: Vec<u8>,
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}) @{}: \"{}\"",
            self.operation,
            self.start,
            self.end,
            self.offset,
            self.literal.escape_ascii()
        )
    }
}

/// Deltas in the order they were detected, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeltaList {
    deltas: Vec<Delta>,
}

impl DeltaList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, delta: Delta) {
        self.deltas.push(delta);
    }

    pub fn deltas(&self) -> &[Delta] {
        &self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Delta> {
        self.deltas.iter()
    }

    pub fn stats(&self) -> DeltaStats {
        let mut stats = DeltaStats::default();
        for delta in &self.deltas {
            match delta.operation {
                Operation::Delete => stats.deletes += 1,
                Operation::Insert => stats.inserts += 1,
                Operation::Replace => stats.replaces += 1,
            }
            stats.literal_bytes += delta.literal.len();
        }
        stats
    }
}

impl<'a> IntoIterator for &'a DeltaList {
    type Item = &'a Delta;
    type IntoIter = std::slice::Iter<'a, Delta>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.iter()
    }
}

impl IntoIterator for DeltaList {
    type Item = Delta;
    type IntoIter = std::vec::IntoIter<Delta>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.into_iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeltaStats {
    pub deletes: usize,
    pub inserts: usize,
    pub replaces: usize,
    pub literal_bytes: usize,
}
