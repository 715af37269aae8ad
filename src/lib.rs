//! Tape VM is an interpreter for a tiny tape-based language of eight instructions.
//!
//! # Example
//!
//! ```text
//! ,[.,]
//! ```
//!
//! Copies the input to the output until the input runs out, then fails
//! with `Run-time error: empty input`.
//!
//! # Instructions
//!
//! | Instruction | Brief |
//! |-------------|-------|
//! | `+`         | Increment the current cell. The maximum value wraps to `0`. |
//! | `-`         | Decrement the current cell. `0` wraps to the maximum value. |
//! | `>`         | Move the pointer right. The tape grows when needed. |
//! | `<`         | Move the pointer left. The tape grows when needed. |
//! | `,`         | Pop one character from the input and store its code in the current cell. |
//! | `.`         | Push the character whose code is the current cell to the output. |
//! | `[`         | Run the tokens up to the matching `]` while the current cell is non-zero. |
//! | `]`         | Closes a loop. Only valid as the end of a loop body. |
//!
//! # Errors
//!
//! | Error                  | Cause |
//! |------------------------|-------|
//! | `Invalid syntax`       | A `[` without its `]`, or a `]` without its `[`. |
//! | `Undefined token`      | Any other non-whitespace character is executed. |
//! | `Run-time error: empty input` | `,` with no input left. |
//! | `Run-time error: step limit of N exceeded` | The optional step limit is reached. |
//!
//! # Important notes
//!
//! - Whitespace is removed before the program runs. Every other character is a token.
//! - Cells are 8 bits wide by default and the tape starts with 10 cells.
//! - Any error ends the whole run. The output produced so far is kept in the
//!   [`Failure`](error::Failure), but the error message is what gets displayed.
//! - Loops share the tape with the rest of the program.
//!

pub mod cell;
mod channel;
pub mod config;
pub mod error;
mod lexer;
pub mod tape;
pub mod token;
pub mod vm;

pub use config::Config;
pub use error::{ErrorKind, Failure};
pub use lexer::tokenize;
pub use vm::{Interpreter, Vm};

/// Run `program` over `input` with the default configuration.
pub fn interpret(program: &str, input: &str) -> Result<String, Failure> {
    Interpreter::default().interpret(program, input)
}
