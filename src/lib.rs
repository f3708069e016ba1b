//! Lox is a small dynamically typed scripting language with C-like syntax,
//! lexical scoping and first-class functions. This crate is a tree-walk
//! interpreter for it with a hand-written recursive descent parser, inspired
//! by the [Crafting Interpreters](https://craftinginterpreters.com/) book by
//! Bob Nystrom.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of
//! converting a string of characters into a list of tokens. A token is a
//! single unit of the language. For example, the string `1 + 2` would be
//! converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2), EOF]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as a single
//! forward pass over the characters in the source code, always consuming the
//! longest lexeme it can.
//!
//! The scanner reports trivial problems like an unterminated string literal
//! or an unexpected character as [`ScanError`](error::ScanError)s. It
//! accumulates them and keeps scanning, so the user gets every lexical error
//! in the file from one run.
//!
//! ## Parsing
//! The second step in the interpreter is parsing. Parsing is the process of
//! converting the list of tokens into an abstract syntax tree (AST). The
//! parser is implemented in the [`parser`](parser) module as a recursive
//! descent over the grammar, one function per precedence level.
//! [`Expressions`](expr::Expr) are pieces of code that produce a value,
//! specifically an [`Object`](object::Object). Objects are an umbrella term
//! for all types of values in the language including literals and functions.
//! [`Statements`](stmt::Stmt) are pieces of code that do not produce a value
//! but instead perform some action, like declaring a variable or printing.
//!
//! The parser reports syntax errors that span multiple tokens as
//! [`ParseError`](error::ParseError)s, for example a missing right-hand
//! operand:
//! ```text
//! 1 !=
//! ```
//! After an error the parser synchronizes to the next statement boundary and
//! keeps parsing, so several syntax errors can be fixed at once.
//!
//! ## Interpreting
//! The final step is interpreting: walking the AST and evaluating each node.
//! The interpreter is implemented in the [`interpreter`](interpreter) module
//! and dispatches directly on the node variant. Most of what the scanner and
//! the parser cannot catch only shows up here, as a
//! [`RuntimeError`](error::RuntimeError):
//! ```text
//! var a = "123";
//! var b = a + 123;
//! ```
//! The interpreter also manages the environment chain. An
//! [`Environment`](environment::Environment) maps variable names to values
//! and links to its enclosing scope, which is what gives the language
//! lexical scoping and lets closures capture the scope they were declared
//! in. The first runtime error halts the program; output that was already
//! printed stands.

use std::io::Write;
use std::{fs, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod ast;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod scanner;
pub mod stmt;
pub mod token;

use interpreter::Interpreter;
use parser::Parser;
use scanner::Scanner;

/// The top-level driver: wires source text through the scanner, the parser
/// and the interpreter, reports diagnostics to stderr and tracks the per-run
/// error flags that decide the process exit code.
///
/// `print` output goes to the injected sink so tests can capture it.
pub struct Lox<'a> {
    interpreter: Interpreter<'a>,
    had_error: bool,
    had_runtime_error: bool,
}

impl<'a> Lox<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        Lox {
            interpreter: Interpreter::new(output),
            had_error: false,
            had_runtime_error: false,
        }
    }

    /// Runs a source file to completion. Exits the process with 65 if the
    /// file had lex or parse errors and 70 if it stopped on a runtime error.
    pub fn run_file(&mut self, path: &str) {
        let contents = fs::read_to_string(path)
            .expect("Should have been able to read the file");

        self.run(&contents);

        if self.had_error {
            process::exit(65);
        }
        if self.had_runtime_error {
            process::exit(70);
        }
    }

    /// Runs an interactive prompt until the input closes. Errors are
    /// reported but do not terminate the session; the interpreter state
    /// carries over from line to line.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("readline editor");

        let history = home::home_dir().map(|path| path.join(".lox_history"));
        if let Some(path) = &history {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());

                    self.run(&line);

                    self.had_error = false;
                    self.had_runtime_error = false;
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("failed to read line: {error}");
                    break;
                },
            }
        }

        if let Some(path) = &history {
            let _ = editor.save_history(path);
        }
    }

    /// Runs a chunk of source text. Lex and parse diagnostics are batched
    /// and reported together; the program only executes when there were
    /// none. Runtime errors halt execution at the first failure.
    fn run(&mut self, source: &str) {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens();

        for error in scanner.errors() {
            eprintln!("{error}");
            self.had_error = true;
        }

        let mut parser = Parser::new(tokens);
        let statements = parser.parse();

        for error in parser.errors() {
            eprintln!("{error}");
            self.had_error = true;
        }

        if self.had_error {
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            eprintln!("{error}");
            self.had_runtime_error = true;
        }
    }
}
