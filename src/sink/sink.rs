use std::io::{self, Write};

/// Append-only consumer of report lines.
///
/// Failures are the sink's concern: the tracker logs them and carries on.
pub trait ReportSink {
    fn emit_line(&mut self, line: &str) -> io::Result<()>;

    /// Called once after the last line of each report.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        (**self).emit_line(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// In-memory capture, mostly useful in tests.
impl ReportSink for Vec<String> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Emits every line as an `info` event on the `word_tally::report` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        tracing::info!(target: "word_tally::report", "{line}");
        Ok(())
    }
}

/// Writes newline-terminated lines to any `io::Write`, flushing after each report.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
