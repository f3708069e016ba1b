use std::fmt;

use crate::object::Object;
use crate::token::{Token, Type};

/// Represents an error that occurs during scanning.
/// Scan errors are accumulated by the scanner; scanning always continues.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Represents an error that occurs during parsing.
/// Parse errors are accumulated by the parser while it synchronizes and
/// keeps going, so one pass can surface many of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.token.r#type == Type::EOF {
            write!(f, "[line {}] Error at end: {}", self.token.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error at '{}': {}",
                self.token.line, self.token.lexeme, self.message
            )
        }
    }
}

/// Represents an error that occurs during runtime.
/// The first runtime error halts the program.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.token.line)
    }
}

/// The non-local exit channel of evaluation.
///
/// A `return` statement unwinds through nested blocks and statements on the
/// same path as a runtime error, but it is not one: it must be consumed at
/// the enclosing function invocation, which turns it back into the call's
/// result value. The keyword token is kept so a signal that reaches the
/// top level can still be reported with a source line.
#[derive(Debug)]
pub enum Unwind {
    Error(RuntimeError),
    Return { keyword: Token, value: Object },
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
