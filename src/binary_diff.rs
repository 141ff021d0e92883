use crate::config::DiffOptions;
use crate::delta_format::{Delta, DeltaList, Operation};
use crate::error::Result;
use crate::hash_table::HashTable;

/// Compute the delta that turns `old` into `new`.
///
/// Both buffers are hashed independently (in parallel), then walked left to
/// right:
/// 1. Equal window hashes advance both cursors.
/// 2. On divergence the unmatched run in each buffer is measured against the
///    other buffer's hash index and classified as delete, insert or replace.
/// 3. Cursors resume at the first window each side shares with the other.
pub fn compute_diff(old: &[u8], new: &[u8], options: &DiffOptions) -> Result<DeltaList> {
    let window = options.window();
    let params = options.params();

    let (old_table, new_table) = rayon::join(
        || HashTable::build(old, window, params),
        || HashTable::build(new, window, params),
    );
    let old_table = old_table?;
    let new_table = new_table?;

    Ok(compare(&old_table, &new_table, options.capture_tail()))
}

/// Walk two hash tables built with the same window and parameters.
pub fn compare(old: &HashTable<'_>, new: &HashTable<'_>, capture_tail: bool) -> DeltaList {
    let mut walk = Walk {
        old,
        new,
        i: 0,
        j: 0,
        old_done: 0,
        new_done: 0,
        gap_start: None,
    };
    let mut deltas = DeltaList::new();

    while walk.i < old.len() && walk.j < new.len() {
        let found = if old.hash_at(walk.i) == new.hash_at(walk.j) {
            let gap = walk.take_gap();
            walk.advance_matched();
            gap
        } else {
            walk.extract()
        };
        if let Some(delta) = found {
            record(&mut deltas, delta);
        }
    }

    if capture_tail {
        if let Some(delta) = walk.take_tail() {
            record(&mut deltas, delta);
        }
    }

    deltas
}

fn record(deltas: &mut DeltaList, delta: Delta) {
    tracing::debug!(
        operation = %delta.operation,
        start = delta.start,
        end = delta.end,
        offset = delta.offset,
        bytes = delta.literal.len(),
        "delta"
    );
    deltas.push(delta);
}

/// Cursor state of one comparison.
struct Walk<'t> {
    old: &'t HashTable<'t>,
    new: &'t HashTable<'t>,
    /// Window cursors.
    i: usize,
    j: usize,
    /// Byte offsets below which content is already accounted for, either by
    /// a matched window or by an emitted delta.
    old_done: usize,
    new_done: usize,
    /// First old window stepped past as a transposition and not yet reported.
    gap_start: Option<usize>,
}

impl<'t> Walk<'t> {
    fn advance_matched(&mut self) {
        let window = self.old.window();
        self.old_done = self.old_done.max(self.i + window);
        self.new_done = self.new_done.max(self.j + window);
        self.i += 1;
        self.j += 1;
    }

    /// Bytes skipped by earlier transpositions, flushed when both sides
    /// line up again.
    fn take_gap(&mut self) -> Option<Delta> {
        self.settle(self.i, self.i, self.i, self.j)
    }

    fn take_tail(&mut self) -> Option<Delta> {
        let start = self.i.min(self.old.len());
        let old_end = self.old.data().len();
        let new_end = self.new.data().len();
        self.settle(start, self.old.len(), old_end, new_end)
    }

    /// Handle a divergence at `(i, j)` and move the cursors past it.
    fn extract(&mut self) -> Option<Delta> {
        let (i, j) = (self.i, self.j);

        let old_stop = unmatched_run_end(self.old, i, self.new);
        let new_stop = if self.old.contains(self.new.hash_at(j)) {
            j
        } else {
            unmatched_run_end(self.new, j, self.old)
        };

        if old_stop == i && new_stop == j {
            // Both windows exist on the other side, just not here.
            tracing::trace!(i, j, "transposed windows, stepping past");
            self.gap_start.get_or_insert(i);
            self.i += 1;
            self.j += 1;
            return None;
        }

        tracing::trace!(i, j, old_stop, new_stop, "resynchronised");
        let old_end = run_byte_end(self.old, old_stop);
        let new_end = run_byte_end(self.new, new_stop);
        self.i = old_stop;
        self.j = new_stop;
        self.settle(i, old_stop, old_end, new_end)
    }

    /// Turn the unaccounted bytes up to `old_end`/`new_end` into a delta and
    /// mark them accounted. Returns `None` when neither side has any.
    /// Windows skipped since the last delta widen the range back to the
    /// first of them.
    fn settle(
        &mut self,
        start: usize,
        end: usize,
        old_end: usize,
        new_end: usize,
    ) -> Option<Delta> {
        let start = self.gap_start.take().map_or(start, |gap| gap.min(start));
        let old_range = self.old_done..old_end.max(self.old_done);
        let new_range = self.new_done..new_end.max(self.new_done);
        self.old_done = old_range.end;
        self.new_done = new_range.end;

        let operation = match (old_range.is_empty(), new_range.is_empty()) {
            (true, true) => return None,
            (false, true) => Operation::Delete,
            (true, false) => Operation::Insert,
            (false, false) => Operation::Replace,
        };
        let offset = old_range.start;
        let literal = match operation {
            Operation::Delete => self.old.data()[old_range].to_vec(),
            Operation::Insert | Operation::Replace => self.new.data()[new_range].to_vec(),
        };

        Some(Delta {
            operation,
            start,
            end,
            offset,
            literal,
        })
    }
}

/// First position at or after `from` whose hash `other` knows, or the table
/// length if there is none.
fn unmatched_run_end(table: &HashTable<'_>, from: usize, other: &HashTable<'_>) -> usize {
    (from..table.len())
        .find(|&pos| other.contains(table.hash_at(pos)))
        .unwrap_or(table.len())
}

/// A run that reaches the end of the table owns every remaining byte.
fn run_byte_end(table: &HashTable<'_>, stop: usize) -> usize {
    if stop >= table.len() {
        table.data().len()
    } else {
        stop
    }
}
