//! A Brainfuck interpreter with an unbounded, rightward-growing memory tape.
//!
//! The tape starts as a single zeroed cell and grows to the right on demand,
//! up to an explicit configurable ceiling. Loop brackets are resolved live:
//! each jump scans the program for its matching bracket instead of consulting
//! a precomputed table.
//!
//! Features and behaviors:
//! - Tape cells are unsigned bytes with wrapping (modulo-256) arithmetic.
//! - Moving left from cell 0 is a fatal underflow; the tape never grows
//!   leftward. Moving right past the ceiling is a fatal overflow. Both
//!   report the 1-based position of the offending instruction.
//! - Input `,` reads one byte and discards the rest of that input line; at
//!   end of input the current cell is set to 0.
//! - Output `.` writes the raw byte of the current cell, nothing more.
//! - Nested loops balance correctly; a bracket whose match does not exist is
//!   reported the moment control actually reaches it.
//! - Characters outside `><+-.,[]` are comments and have no effect.
//!
//! Quick start:
//!
//! ```
//! use bftape::Interpreter;
//!
//! // 8 x 8 = 64, ASCII '@'
//! let mut bf = Interpreter::new("++++++++[>++++++++<-]>.");
//! let mut output = Vec::new();
//! bf.run(std::io::empty(), &mut output).expect("program should run");
//! assert_eq!(output, b"@");
//! ```

pub mod channel;
pub mod interpreter;
pub mod tape;

pub use channel::LineInput;
pub use interpreter::{Interpreter, InterpreterError};
pub use tape::{DEFAULT_TAPE_LIMIT, Tape, TapeFault};
