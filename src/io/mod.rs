//! Input/output abstractions
//!
//! The game only needs to read a line and write a line. Keeping both behind
//! traits lets sessions be driven by scripted input in tests.

use std::io::{self, BufRead, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read one line of input after showing `prompt`, without its line ending.
    ///
    /// Returns an `UnexpectedEof` error once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message followed by a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
