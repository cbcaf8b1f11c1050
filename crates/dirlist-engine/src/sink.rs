//! Where listing output and diagnostics go.

use std::io::{self, Write};

/// Destination for a listing's output text and its diagnostics.
pub trait OutputSink {
    /// Write the listing text.
    fn output(&mut self, text: &str) -> io::Result<()>;

    /// Write one diagnostic line.
    fn error(&mut self, line: &str) -> io::Result<()>;
}

/// Writes output to stdout and diagnostics to stderr.
#[derive(Debug, Default)]
pub struct StdioSink;

impl StdioSink {
    /// Create a new stdio sink.
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdioSink {
    fn output(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }

    fn error(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{line}")
    }
}

/// Collects everything in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    /// Output text, each write followed by a newline.
    pub output: String,
    /// Diagnostic lines in the order reported.
    pub errors: Vec<String>,
}

impl BufferSink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for BufferSink {
    fn output(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn error(&mut self, line: &str) -> io::Result<()> {
        self.errors.push(line.to_string());
        Ok(())
    }
}
