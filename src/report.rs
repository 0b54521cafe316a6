//! Human-readable status output
//!
//! Each phase transition and each failure is printed as a delimited block
//! so it stands out between the test runner's own output.

use std::io::{self, Write};

/// Width of the block delimiter line
const RULE_WIDTH: usize = 44;

/// Render a message as a delimited status block
pub fn status_block(message: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\n{message}\n{rule}\n")
}

/// Sink for status blocks and subprocess transcripts
pub struct StatusWriter {
    out: Box<dyn Write>,
}

impl Default for StatusWriter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl StatusWriter {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Discard everything (library callers that report on their own)
    pub fn sink() -> Self {
        Self::new(Box::new(io::sink()))
    }

    /// Write a delimited status block
    pub fn block(&mut self, message: &str) {
        // Status output is best-effort; a closed stdout must not abort the hunt
        let _ = self.out.write_all(status_block(message).as_bytes());
        let _ = self.out.flush();
    }

    /// Echo a transcript line by line
    pub fn transcript(&mut self, text: &str) {
        for line in text.lines() {
            let _ = writeln!(self.out, "{line}");
        }
        let _ = self.out.flush();
    }
}
