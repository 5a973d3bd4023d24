// edits.rs - The bit-packed edit log and its iterator.
//
// Grounded on ustrcase.cpp's `Edits`/`Edits::Iterator` (addUnchanged,
// addReplace, growArray, copyErrorTo, next, findSourceIndex) and on
// spec.md section 3's cell layout, which this module reproduces exactly so
// any downstream consumer that parses the cell stream directly stays
// compatible. `smallvec` is used the way the teacher uses it in
// scanner.rs: a small inline buffer that only spills to the heap once a
// mapping actually produces enough edits to need it.

use smallvec::SmallVec;

use crate::error::CaseMapError;

const MAX_UNCHANGED: u16 = 0x0FFF;
const MAX_SHORT_CHANGE: u16 = 0x6FFF;
const LONG_CHANGE_BASE: u16 = 0x7000;
const TRAILING_CELL_FLAG: u16 = 0x8000;
const TRAILING_CELL_MASK: u16 = 0x7FFF;

const INITIAL_HEAP_CAPACITY: usize = 2000;
/// A long-replacement record plus its trailing length cells is at most this
/// many cells; growth always leaves at least this much room so a single
/// `addReplace` never has to grow twice.
const MAX_RECORD_CELLS: usize = 5;

/// A compact, append-only log of which source spans a mapping left
/// unchanged and which it replaced, replayable by an iterator that a
/// caller can use to map indices or styles from source to result.
///
/// Errors are sticky: once an internal error is recorded, every further
/// `add_unchanged`/`add_replace` call is a no-op that returns the same
/// error.
#[derive(Debug, Clone)]
pub struct Edits {
    array: SmallVec<[u16; 32]>,
    delta: i64,
    num_changes: usize,
    error: Option<CaseMapError>,
    omit_unchanged: bool,
}

impl Default for Edits {
    fn default() -> Self {
        Edits::new()
    }
}

impl Edits {
    pub fn new() -> Self {
        Edits {
            array: SmallVec::new(),
            delta: 0,
            num_changes: 0,
            error: None,
            omit_unchanged: false,
        }
    }

    /// When set, appenders record unchanged spans in the log but do not
    /// copy their code units into the destination -- useful when a caller
    /// only wants the changed text plus a log to reconstruct the rest.
    pub fn set_omit_unchanged(&mut self, omit: bool) {
        self.omit_unchanged = omit;
    }

    pub fn omits_unchanged(&self) -> bool {
        self.omit_unchanged
    }

    /// Discards all records and clears any sticky error.
    pub fn reset(&mut self) {
        self.array.clear();
        self.delta = 0;
        self.num_changes = 0;
        self.error = None;
    }

    /// True if at least one `addReplace` call recorded an actual change
    /// (a same-length replacement still counts, even though it leaves
    /// `length_delta() == 0`).
    pub fn has_changes(&self) -> bool {
        self.num_changes > 0
    }

    pub fn number_of_changes(&self) -> usize {
        self.num_changes
    }

    /// `new total length - old total length` across every record added so
    /// far.
    pub fn length_delta(&self) -> i64 {
        self.delta
    }

    pub fn error(&self) -> Option<CaseMapError> {
        self.error
    }

    fn fail(&mut self, err: CaseMapError) -> Result<(), CaseMapError> {
        self.error = Some(err);
        Err(err)
    }

    fn check(&self) -> Result<(), CaseMapError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Appends or extends an unchanged run of `n` code units. A no-op for
    /// `n == 0`.
    pub fn add_unchanged(&mut self, mut n: u32) -> Result<(), CaseMapError> {
        self.check()?;
        if n == 0 {
            return Ok(());
        }
        if let Some(&last) = self.array.last() {
            if last <= MAX_UNCHANGED {
                let existing = last as u32 + 1;
                let room = 0x1000 - existing;
                let take = room.min(n);
                if take > 0 {
                    let idx = self.array.len() - 1;
                    self.array[idx] = (existing + take - 1) as u16;
                    n -= take;
                }
            }
        }
        while n > 0 {
            let take = n.min(0x1000);
            self.reserve(1)?;
            self.array.push((take - 1) as u16);
            n -= take;
        }
        Ok(())
    }

    /// Records a replacement of `old_len` source code units by `new_len`
    /// result code units. A no-op if both are zero.
    pub fn add_replace(&mut self, old_len: u32, new_len: u32) -> Result<(), CaseMapError> {
        self.check()?;
        if old_len == 0 && new_len == 0 {
            return Ok(());
        }
        let delta = new_len as i64 - old_len as i64;
        match self.delta.checked_add(delta) {
            Some(d) => self.delta = d,
            None => return self.fail(CaseMapError::IndexOutOfBounds),
        }
        self.num_changes += 1;

        if old_len == new_len && (1..=6).contains(&old_len) {
            let w = old_len as u16;
            if let Some(&last) = self.array.last() {
                if last >> 12 == w {
                    let count = last & MAX_UNCHANGED;
                    if count < MAX_UNCHANGED {
                        let idx = self.array.len() - 1;
                        self.array[idx] = last + 1;
                        return Ok(());
                    }
                }
            }
            self.reserve(1)?;
            self.array.push(w << 12);
            return Ok(());
        }

        self.push_long_replace(old_len, new_len)
    }

    fn push_long_replace(&mut self, old_len: u32, new_len: u32) -> Result<(), CaseMapError> {
        let (m, old_trailing) = encode_length_field(old_len);
        let (n, new_trailing) = encode_length_field(new_len);
        let total = 1 + old_trailing.len() + new_trailing.len();
        self.reserve(total)?;
        self.array
            .push(LONG_CHANGE_BASE | (m << 6) | n);
        self.array.extend(old_trailing);
        self.array.extend(new_trailing);
        Ok(())
    }

    /// Grows the backing storage to hold at least `extra` more cells,
    /// following the stack-to-2000-then-doubling policy, always leaving
    /// room for one more maximal record after the requested growth.
    fn reserve(&mut self, extra: usize) -> Result<(), CaseMapError> {
        let needed = self.array.len() + extra + MAX_RECORD_CELLS;
        if self.array.capacity() >= needed {
            return Ok(());
        }
        let mut new_capacity = if self.array.capacity() < INITIAL_HEAP_CAPACITY {
            INITIAL_HEAP_CAPACITY
        } else {
            self.array.capacity() * 2
        };
        while new_capacity < needed {
            new_capacity *= 2;
        }
        let additional = new_capacity - self.array.len();
        if self.array.try_reserve(additional).is_err() {
            return self.fail(CaseMapError::MemoryAllocation);
        }
        Ok(())
    }

    pub fn iter(&self, coarse: bool, only_changes: bool) -> EditsIterator<'_> {
        EditsIterator {
            array: &self.array,
            index: 0,
            remaining: 0,
            only_changes,
            coarse,
            changed: false,
            old_length: 0,
            new_length: 0,
            src_index: 0,
            repl_index: 0,
            dest_index: 0,
        }
    }

    pub fn coarse_iter(&self) -> EditsIterator<'_> {
        self.iter(true, false)
    }

    pub fn coarse_changes_iter(&self) -> EditsIterator<'_> {
        self.iter(true, true)
    }

    pub fn fine_iter(&self) -> EditsIterator<'_> {
        self.iter(false, false)
    }

    pub fn fine_changes_iter(&self) -> EditsIterator<'_> {
        self.iter(false, true)
    }
}

/// Encodes a length into a long-replacement record's 6-bit field plus any
/// trailing cells it requires, per spec.md section 3.
fn encode_length_field(len: u32) -> (u16, SmallVec<[u16; 2]>) {
    let mut trailing = SmallVec::new();
    if len <= 60 {
        (len as u16, trailing)
    } else if len <= TRAILING_CELL_MASK as u32 {
        trailing.push(TRAILING_CELL_FLAG | len as u16);
        (61, trailing)
    } else {
        let bit30 = ((len >> 30) & 1) as u16;
        let high = ((len >> 15) & TRAILING_CELL_MASK as u32) as u16;
        let low = (len & TRAILING_CELL_MASK as u32) as u16;
        trailing.push(TRAILING_CELL_FLAG | high);
        trailing.push(TRAILING_CELL_FLAG | low);
        (62 + bit30, trailing)
    }
}

/// A read-only cursor over an `Edits` log's records.
pub struct EditsIterator<'a> {
    array: &'a [u16],
    index: usize,
    remaining: u32,
    only_changes: bool,
    coarse: bool,
    changed: bool,
    old_length: u32,
    new_length: u32,
    src_index: u32,
    repl_index: u32,
    dest_index: u32,
}

impl<'a> EditsIterator<'a> {
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    pub fn old_length(&self) -> u32 {
        self.old_length
    }

    pub fn new_length(&self) -> u32 {
        self.new_length
    }

    pub fn source_index(&self) -> u32 {
        self.src_index
    }

    pub fn destination_index(&self) -> u32 {
        self.dest_index
    }

    pub fn replacement_index(&self) -> u32 {
        self.repl_index
    }

    fn commit_previous(&mut self) {
        self.src_index += self.old_length;
        self.dest_index += self.new_length;
        if self.changed {
            self.repl_index += self.new_length;
        }
    }

    fn next_cell(&mut self) -> Result<u16, CaseMapError> {
        let cell = *self
            .array
            .get(self.index)
            .ok_or(CaseMapError::IndexOutOfBounds)?;
        self.index += 1;
        Ok(cell)
    }

    fn read_length_field(&mut self, field: u16) -> Result<u32, CaseMapError> {
        match field {
            0..=60 => Ok(field as u32),
            61 => Ok((self.next_cell()? & TRAILING_CELL_MASK) as u32),
            62 | 63 => {
                let bit30 = (field & 1) as u32;
                let high = (self.next_cell()? & TRAILING_CELL_MASK) as u32;
                let low = (self.next_cell()? & TRAILING_CELL_MASK) as u32;
                Ok((bit30 << 30) | (high << 15) | low)
            }
            _ => unreachable!("6-bit field"),
        }
    }

    /// Advances to the next record. Returns `Ok(false)` once the log is
    /// exhausted.
    pub fn next(&mut self) -> Result<bool, CaseMapError> {
        self.commit_previous();
        if self.remaining > 0 {
            self.remaining -= 1;
            self.changed = true;
            return Ok(true);
        }
        loop {
            let Some(&cell) = self.array.get(self.index) else {
                self.old_length = 0;
                self.new_length = 0;
                self.changed = false;
                return Ok(false);
            };
            self.index += 1;

            if cell <= MAX_UNCHANGED {
                let len = cell as u32 + 1;
                self.changed = false;
                self.old_length = len;
                self.new_length = len;
                if self.only_changes {
                    self.commit_previous();
                    continue;
                }
                return Ok(true);
            }

            self.changed = true;
            if cell <= MAX_SHORT_CHANGE {
                let w = (cell >> 12) as u32;
                let count = (cell & MAX_UNCHANGED) as u32 + 1;
                if self.coarse {
                    self.old_length = w * count;
                    self.new_length = w * count;
                } else {
                    self.old_length = w;
                    self.new_length = w;
                    self.remaining = count - 1;
                }
            } else {
                let m_field = (cell >> 6) & 0x3F;
                let n_field = cell & 0x3F;
                self.old_length = self.read_length_field(m_field)?;
                self.new_length = self.read_length_field(n_field)?;
            }
            if self.coarse {
                self.merge_following_changes()?;
            }
            return Ok(true);
        }
    }

    /// In coarse mode, absorbs every immediately-following change record
    /// into the current span, stopping at the next unchanged record or the
    /// end of the log.
    fn merge_following_changes(&mut self) -> Result<(), CaseMapError> {
        loop {
            let Some(&cell) = self.array.get(self.index) else {
                return Ok(());
            };
            if cell <= MAX_UNCHANGED {
                return Ok(());
            }
            self.index += 1;
            if cell <= MAX_SHORT_CHANGE {
                let w = (cell >> 12) as u32;
                let count = (cell & MAX_UNCHANGED) as u32 + 1;
                self.old_length += w * count;
                self.new_length += w * count;
            } else {
                let m_field = (cell >> 6) & 0x3F;
                let n_field = cell & 0x3F;
                self.old_length += self.read_length_field(m_field)?;
                self.new_length += self.read_length_field(n_field)?;
            }
        }
    }

    /// Advances until the current record covers source offset `i`,
    /// stepping through a compressed short-same-width run one sub-edit at
    /// a time so the position never overshoots. Resets to the start first
    /// if `i` precedes the current position.
    pub fn find_source_index(&mut self, i: u32) -> Result<bool, CaseMapError> {
        if i < self.src_index {
            self.index = 0;
            self.remaining = 0;
            self.changed = false;
            self.old_length = 0;
            self.new_length = 0;
            self.src_index = 0;
            self.repl_index = 0;
            self.dest_index = 0;
        }
        loop {
            if self.old_length > 0 && i < self.src_index + self.old_length {
                return Ok(true);
            }
            if !self.next()? {
                return Ok(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_run_merges_and_has_no_changes() {
        let mut edits = Edits::new();
        edits.add_unchanged(3).unwrap();
        edits.add_unchanged(2).unwrap();
        assert!(!edits.has_changes());
        let mut it = edits.fine_iter();
        assert!(it.next().unwrap());
        assert_eq!(it.old_length(), 5);
        assert!(!it.has_changed());
        assert!(!it.next().unwrap());
    }

    #[test]
    fn unchanged_run_splits_past_0x1000() {
        let mut edits = Edits::new();
        edits.add_unchanged(0x1000 + 5).unwrap();
        let mut it = edits.fine_iter();
        assert!(it.next().unwrap());
        assert_eq!(it.old_length(), 0x1000);
        assert!(it.next().unwrap());
        assert_eq!(it.old_length(), 5);
        assert!(!it.next().unwrap());
    }

    #[test]
    fn hello_lowercases_as_one_short_change_run() {
        // Scenario 1 from spec.md section 8: "HELLO" -> "hello".
        let mut edits = Edits::new();
        for _ in 0..5 {
            edits.add_replace(1, 1).unwrap();
        }
        assert_eq!(edits.number_of_changes(), 5);
        assert_eq!(edits.length_delta(), 0);

        let mut coarse = edits.coarse_iter();
        assert!(coarse.next().unwrap());
        assert_eq!(coarse.old_length(), 5);
        assert_eq!(coarse.new_length(), 5);
        assert!(coarse.has_changed());
        assert!(!coarse.next().unwrap());

        let mut fine = edits.fine_iter();
        let mut count = 0;
        while fine.next().unwrap() {
            assert_eq!(fine.old_length(), 1);
            count += 1;
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn long_replace_inline_lengths() {
        let mut edits = Edits::new();
        edits.add_replace(2, 3).unwrap();
        assert_eq!(edits.length_delta(), 1);
        let mut it = edits.fine_iter();
        assert!(it.next().unwrap());
        assert_eq!(it.old_length(), 2);
        assert_eq!(it.new_length(), 3);
        assert!(it.has_changed());
    }

    #[test]
    fn long_replace_needs_one_trailing_cell() {
        let mut edits = Edits::new();
        edits.add_replace(200, 1).unwrap();
        let mut it = edits.fine_iter();
        assert!(it.next().unwrap());
        assert_eq!(it.old_length(), 200);
        assert_eq!(it.new_length(), 1);
    }

    #[test]
    fn long_replace_needs_two_trailing_cells() {
        let mut edits = Edits::new();
        edits.add_replace(100_000, 7).unwrap();
        let mut it = edits.fine_iter();
        assert!(it.next().unwrap());
        assert_eq!(it.old_length(), 100_000);
        assert_eq!(it.new_length(), 7);
    }

    #[test]
    fn only_changes_iterator_skips_unchanged_runs() {
        let mut edits = Edits::new();
        edits.add_unchanged(3).unwrap();
        edits.add_replace(1, 2).unwrap();
        edits.add_unchanged(4).unwrap();

        let mut it = edits.fine_changes_iter();
        assert!(it.next().unwrap());
        assert_eq!(it.source_index(), 3);
        assert_eq!(it.old_length(), 1);
        assert_eq!(it.new_length(), 2);
        assert!(!it.next().unwrap());
    }

    #[test]
    fn coarse_merges_adjacent_change_records_of_different_shapes() {
        let mut edits = Edits::new();
        edits.add_replace(1, 1).unwrap();
        edits.add_replace(200, 3).unwrap();
        edits.add_unchanged(5).unwrap();

        let mut coarse = edits.coarse_iter();
        assert!(coarse.next().unwrap());
        assert_eq!(coarse.old_length(), 201);
        assert_eq!(coarse.new_length(), 4);
        assert!(coarse.next().unwrap());
        assert_eq!(coarse.old_length(), 5);
        assert!(!coarse.has_changed());
        assert!(!coarse.next().unwrap());
    }

    #[test]
    fn find_source_index_lands_inside_short_run() {
        let mut edits = Edits::new();
        edits.add_unchanged(2).unwrap();
        for _ in 0..5 {
            edits.add_replace(1, 1).unwrap();
        }
        let mut it = edits.fine_iter();
        assert!(it.find_source_index(4).unwrap());
        assert_eq!(it.source_index(), 4);
        assert_eq!(it.old_length(), 1);
    }

    #[test]
    fn reset_clears_records_and_error() {
        let mut edits = Edits::new();
        edits.add_replace(1, 2).unwrap();
        assert!(edits.has_changes());
        edits.reset();
        assert!(!edits.has_changes());
        assert_eq!(edits.length_delta(), 0);
        assert_eq!(edits.error(), None);
        let mut it = edits.fine_iter();
        assert!(!it.next().unwrap());
    }
}
