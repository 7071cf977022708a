//! The program tape: a growable run of byte cells with a single head.

/// Number of cells the tape may grow to before a rightward move becomes a
/// fatal overflow. An explicit ceiling rather than whatever `Vec` happens to
/// tolerate, so the failure point is deterministic and testable.
pub const DEFAULT_TAPE_LIMIT: usize = 30_000;

/// A head movement that cannot be performed.
///
/// Faults carry no location; the interpreter attaches the 1-based position
/// of the instruction that triggered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapeFault {
    /// A rightward move would grow the tape past its configured ceiling.
    Overflow,
    /// A leftward move was attempted with the head on cell 0.
    Underflow,
}

/// An "unbounded" tape of 8-bit cells.
///
/// The tape starts as a single zeroed cell and grows rightward on demand,
/// one cell at a time, as the head moves past the current end. It never
/// shrinks. The head always addresses an existing cell.
pub struct Tape {
    cells: Vec<u8>,
    head: usize,
    limit: usize,
}

impl Tape {
    /// Create a tape of one zeroed cell with the head on it.
    ///
    /// `limit` is the maximum number of cells the tape may ever hold.
    pub fn new(limit: usize) -> Self {
        Self {
            cells: vec![0],
            head: 0,
            limit: limit.max(1),
        }
    }

    /// Move the head one cell to the right, appending a zeroed cell first
    /// if the head is at the current end of the tape.
    pub fn move_right(&mut self) -> Result<(), TapeFault> {
        if self.head + 1 >= self.limit {
            return Err(TapeFault::Overflow);
        }
        if self.head + 1 == self.cells.len() {
            self.cells.push(0);
        }
        self.head += 1;
        Ok(())
    }

    /// Move the head one cell to the left. Cell 0 is a hard boundary; the
    /// head does not wrap around.
    pub fn move_left(&mut self) -> Result<(), TapeFault> {
        if self.head == 0 {
            return Err(TapeFault::Underflow);
        }
        self.head -= 1;
        Ok(())
    }

    /// Increment the current cell, wrapping 255 to 0.
    pub fn increment(&mut self) {
        self.cells[self.head] = self.cells[self.head].wrapping_add(1);
    }

    /// Decrement the current cell, wrapping 0 to 255.
    pub fn decrement(&mut self) {
        self.cells[self.head] = self.cells[self.head].wrapping_sub(1);
    }

    /// Value of the cell under the head.
    pub fn cell(&self) -> u8 {
        self.cells[self.head]
    }

    /// Overwrite the cell under the head.
    pub fn set_cell(&mut self, value: u8) {
        self.cells[self.head] = value;
    }

    /// Current head index.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Number of cells currently allocated.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A tape always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_zeroed_cell() {
        let tape = Tape::default();
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.head(), 0);
        assert_eq!(tape.cell(), 0);
    }

    #[test]
    fn increment_wraps_after_256_steps() {
        let mut tape = Tape::default();
        tape.set_cell(200);
        for _ in 0..256 {
            tape.increment();
        }
        assert_eq!(tape.cell(), 200);
    }

    #[test]
    fn decrement_wraps_after_256_steps() {
        let mut tape = Tape::default();
        tape.set_cell(7);
        for _ in 0..256 {
            tape.decrement();
        }
        assert_eq!(tape.cell(), 7);
    }

    #[test]
    fn decrement_from_zero_yields_255() {
        let mut tape = Tape::default();
        tape.decrement();
        assert_eq!(tape.cell(), 255);
    }

    #[test]
    fn moving_right_grows_by_one_zeroed_cell() {
        let mut tape = Tape::default();
        tape.move_right().unwrap();
        assert_eq!(tape.len(), 2);
        assert_eq!(tape.head(), 1);
        assert_eq!(tape.cell(), 0);
    }

    #[test]
    fn right_then_left_restores_head_without_shrinking() {
        let mut tape = Tape::new(10);
        tape.set_cell(42);
        for _ in 0..9 {
            tape.move_right().unwrap();
        }
        assert_eq!(tape.len(), 10);
        for _ in 0..9 {
            tape.move_left().unwrap();
        }
        assert_eq!(tape.head(), 0);
        assert_eq!(tape.cell(), 42);
        // Growth is one-way; walking back does not release cells.
        assert_eq!(tape.len(), 10);
    }

    #[test]
    fn moving_left_at_cell_zero_underflows() {
        let mut tape = Tape::default();
        assert_eq!(tape.move_left(), Err(TapeFault::Underflow));
        // The failed move leaves the tape untouched.
        assert_eq!(tape.head(), 0);
        assert_eq!(tape.len(), 1);
    }

    #[test]
    fn moving_right_past_the_ceiling_overflows() {
        let mut tape = Tape::new(3);
        tape.move_right().unwrap();
        tape.move_right().unwrap();
        assert_eq!(tape.move_right(), Err(TapeFault::Overflow));
        assert_eq!(tape.head(), 2);
        assert_eq!(tape.len(), 3);
    }
}
