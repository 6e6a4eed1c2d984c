use std::io::{self, BufRead, Write};

/// Line-oriented console used by the interactive session.
pub trait Console {
    /// Show `prompt` and read one line, trimmed. `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn print(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn read_trimmed(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Attached to a terminal: every write is flushed immediately.
pub struct TerminalConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        TerminalConsole {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.print(prompt)?;
        read_trimmed(&mut self.stdin.lock())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Buffered console over any reader and writer, for piped input and tests.
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StreamConsole { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;
        read_trimmed(&mut self.reader)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Pick the console for this process: a terminal console when both ends are
/// attached to a TTY, a buffered stream console otherwise.
pub fn stdio_console() -> Box<dyn Console> {
    if atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) {
        Box::new(TerminalConsole::new())
    } else {
        Box::new(StreamConsole::new(
            io::stdin().lock(),
            io::BufWriter::new(io::stdout()),
        ))
    }
}
