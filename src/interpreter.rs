//! The execution engine: instruction dispatch and live loop resolution.

use std::io::{self, BufRead, Write};

use crate::channel::LineInput;
use crate::tape::{DEFAULT_TAPE_LIMIT, Tape, TapeFault};

/// Errors that abort a run.
///
/// Every variant is fatal: no instruction after the triggering one executes.
/// Positions are 1-based character offsets into the source, counting every
/// character (comments included), so they line up with what an editor shows.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    /// A `>` would have grown the tape past its configured ceiling.
    #[error("attempted tape overflow at character {position}")]
    TapeOverflow { position: usize },

    /// A `<` was executed with the head already on cell 0.
    #[error("attempted tape underflow at character {position}")]
    TapeUnderflow { position: usize },

    /// A `[` took its jump and the forward scan ran off the end of the
    /// program without balancing.
    #[error("unbounded jump: expected a matching ']' but none was found")]
    UnmatchedOpenBracket,

    /// A `]` took its jump and the backward scan ran off the start of the
    /// program without balancing.
    #[error("unbounded jump: expected a matching '[' but none was found")]
    UnmatchedCloseBracket,

    /// The input or output channel failed mid-run.
    #[error("I/O error at character {position}: {source}")]
    Io {
        position: usize,
        #[source]
        source: io::Error,
    },
}

/// A Brainfuck interpreter over a growable tape.
///
/// The interpreter owns the program (kept verbatim, comments and all), the
/// instruction cursor, and the [`Tape`]. Loop brackets are not pre-indexed:
/// every time control reaches a bracket that has to jump, the matching
/// bracket is found by scanning the program and tracking nesting depth.
/// That makes each jump cost O(loop body) instead of O(1), which is a fair
/// trade for the small programs this targets.
pub struct Interpreter {
    program: Vec<char>,
    cursor: usize,
    tape: Tape,
}

impl Interpreter {
    /// Create an interpreter with the default tape ceiling of
    /// [`DEFAULT_TAPE_LIMIT`] cells.
    pub fn new(program: &str) -> Self {
        Self::with_tape_limit(program, DEFAULT_TAPE_LIMIT)
    }

    /// Create an interpreter whose tape may grow to at most `limit` cells.
    pub fn with_tape_limit(program: &str, limit: usize) -> Self {
        Self {
            program: program.chars().collect(),
            cursor: 0,
            tape: Tape::new(limit),
        }
    }

    /// Execute the program to completion.
    ///
    /// `.` writes raw bytes to `output` with no transformation and no
    /// trailing newline. `,` pulls one byte per line from `input` (the rest
    /// of the line is discarded); end of input stores 0 in the current cell.
    pub fn run(
        &mut self,
        input: impl BufRead,
        output: impl Write,
    ) -> Result<(), InterpreterError> {
        let mut input = LineInput::new(input);
        let mut output = output;
        self.execute(false, &mut input, &mut output)
    }

    /// Execute the program against the process's standard streams.
    pub fn run_stdio(&mut self) -> Result<(), InterpreterError> {
        self.run(io::stdin().lock(), io::stdout().lock())
    }

    /// Execute the program while printing a step-by-step table of operations
    /// instead of performing I/O.
    ///
    /// The tape, head, and cursor advance exactly as in a real run (loop
    /// scans included), but `.` logs the byte it would have written and `,`
    /// simulates end of input, storing 0.
    pub fn run_debug(&mut self) -> Result<(), InterpreterError> {
        let mut input = LineInput::new(io::empty());
        let mut output = io::sink();
        self.execute(true, &mut input, &mut output)
    }

    /// Final tape state, mostly useful for inspection after a run.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Dispatch loop shared by [`run`](Self::run) and
    /// [`run_debug`](Self::run_debug).
    ///
    /// Each non-loop handler advances the cursor by exactly one; the two
    /// loop handlers reposition it themselves, which is why there is no
    /// shared increment at the bottom of the loop.
    fn execute<R: BufRead, W: Write>(
        &mut self,
        debug: bool,
        input: &mut LineInput<R>,
        output: &mut W,
    ) -> Result<(), InterpreterError> {
        let mut step: usize = 0;
        if debug {
            println!("STEP | POS  | HEAD | CELL | INSTR | ACTION");
            println!("-----+------+------+------+-------+--------------------------------");
        }

        while self.cursor < self.program.len() {
            let instr = self.program[self.cursor];
            let position = self.position();
            let (head_before, cell_before) = (self.tape.head(), self.tape.cell());
            let mut action: Option<String> = if debug { Some(String::new()) } else { None };

            match instr {
                '>' => {
                    self.tape.move_right().map_err(|f| self.fault(f))?;
                    if let Some(a) = action.as_mut() {
                        *a = format!("move head right to cell {}", self.tape.head());
                    }
                    self.cursor += 1;
                }
                '<' => {
                    self.tape.move_left().map_err(|f| self.fault(f))?;
                    if let Some(a) = action.as_mut() {
                        *a = format!("move head left to cell {}", self.tape.head());
                    }
                    self.cursor += 1;
                }
                '+' => {
                    self.tape.increment();
                    if let Some(a) = action.as_mut() {
                        *a = format!("increment cell {} to {}", head_before, self.tape.cell());
                    }
                    self.cursor += 1;
                }
                '-' => {
                    self.tape.decrement();
                    if let Some(a) = action.as_mut() {
                        *a = format!("decrement cell {} to {}", head_before, self.tape.cell());
                    }
                    self.cursor += 1;
                }
                '.' => {
                    if debug {
                        if let Some(a) = action.as_mut() {
                            *a = format!("write byte {cell_before} (suppressed)");
                        }
                    } else {
                        output
                            .write_all(&[self.tape.cell()])
                            .map_err(|e| self.io_error(e))?;
                    }
                    self.cursor += 1;
                }
                ',' => {
                    if debug {
                        self.tape.set_cell(0);
                        if let Some(a) = action.as_mut() {
                            *a = "read byte: simulated end of input, cell set to 0".to_string();
                        }
                    } else {
                        let byte = input.read_byte().map_err(|e| self.io_error(e))?;
                        // End of input stores the documented sentinel, 0.
                        self.tape.set_cell(byte.unwrap_or(0));
                    }
                    self.cursor += 1;
                }
                '[' => {
                    if self.tape.cell() == 0 {
                        let target = self
                            .matching_close()
                            .ok_or(InterpreterError::UnmatchedOpenBracket)?;
                        if let Some(a) = action.as_mut() {
                            *a = format!("cell is 0; jump to matching ']' at {}", target + 1);
                        }
                        // Land on the ']' itself; its handler re-tests the
                        // cell and advances past it.
                        self.cursor = target;
                    } else {
                        if let Some(a) = action.as_mut() {
                            *a = "enter loop (cell is nonzero)".to_string();
                        }
                        self.cursor += 1;
                    }
                }
                ']' => {
                    if self.tape.cell() != 0 {
                        let target = self
                            .matching_open()
                            .ok_or(InterpreterError::UnmatchedCloseBracket)?;
                        if let Some(a) = action.as_mut() {
                            *a = format!("cell is nonzero; jump to matching '[' at {}", target + 1);
                        }
                        // Land on the '[' itself; it re-tests and advances.
                        self.cursor = target;
                    } else {
                        if let Some(a) = action.as_mut() {
                            *a = "exit loop (cell is 0)".to_string();
                        }
                        self.cursor += 1;
                    }
                }
                _ => {
                    // Anything outside the instruction set is a comment.
                    if let Some(a) = action.as_mut() {
                        *a = "comment (no effect)".to_string();
                    }
                    self.cursor += 1;
                }
            }

            if debug {
                println!(
                    "{:<4} | {:<4} | {:<4} | {:<4} |   {}   | {}",
                    step,
                    position,
                    head_before,
                    cell_before,
                    instr,
                    action.unwrap_or_default()
                );
            }
            step += 1;
        }

        Ok(())
    }

    /// Scan forward from the `[` under the cursor for its matching `]`,
    /// tracking nesting depth so inner loops are skipped as balanced units.
    /// The opening bracket itself contributes depth 1; the scan ends at the
    /// bracket that brings the depth back to 0.
    fn matching_close(&self) -> Option<usize> {
        let mut depth = 0usize;
        for idx in self.cursor..self.program.len() {
            match self.program[idx] {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(idx);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Scan backward from the `]` under the cursor for its matching `[`,
    /// using the mirror of the forward rule. Index 0 is examined before the
    /// scan gives up.
    fn matching_open(&self) -> Option<usize> {
        let mut depth = 0usize;
        let mut idx = self.cursor;
        loop {
            match self.program[idx] {
                ']' => depth += 1,
                '[' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(idx);
                    }
                }
                _ => {}
            }
            if idx == 0 {
                return None;
            }
            idx -= 1;
        }
    }

    /// 1-based position of the instruction under the cursor.
    fn position(&self) -> usize {
        self.cursor + 1
    }

    fn fault(&self, fault: TapeFault) -> InterpreterError {
        match fault {
            TapeFault::Overflow => InterpreterError::TapeOverflow {
                position: self.position(),
            },
            TapeFault::Underflow => InterpreterError::TapeUnderflow {
                position: self.position(),
            },
        }
    }

    fn io_error(&self, source: io::Error) -> InterpreterError {
        InterpreterError::Io {
            position: self.position(),
            source,
        }
    }
}
