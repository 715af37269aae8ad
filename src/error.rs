//! Run-time failures of an interpreted program
//!
//! [`ErrorKind`] names what went wrong. [`Failure`] is what a run hands back to
//! the host: the kind plus whatever output was produced before the failure.
//! Displaying a [`Failure`] shows only the message, never the partial output.

use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    /// Unmatched `[` or `]`
    InvalidSyntax,
    /// Character outside the instruction set, or a `]` outside a loop body
    UndefinedToken(char),
    /// `,` with no input left
    EmptyInput,
    /// More tokens were dispatched than the configured step limit
    StepLimitExceeded(u64),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidSyntax => write!(f, "Invalid syntax"),
            ErrorKind::UndefinedToken(_) => write!(f, "Undefined token"),
            ErrorKind::EmptyInput => write!(f, "Run-time error: empty input"),
            ErrorKind::StepLimitExceeded(limit) => {
                write!(f, "Run-time error: step limit of {} exceeded", limit)
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

/// A failed run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Failure {
    pub kind: ErrorKind,
    /// Output produced before the failure
    pub partial_output: String,
}

impl Failure {
    pub fn new(kind: ErrorKind, partial_output: String) -> Self {
        Failure {
            kind,
            partial_output,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
