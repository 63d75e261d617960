use std::io::{BufRead, Write};

use crate::error::Result;

/// The chat boundary: yields incoming messages and delivers replies.
pub trait Transport {
    /// Next incoming message, or `None` once the conversation is over.
    fn receive(&mut self) -> Result<Option<String>>;

    fn send(&mut self, text: &str) -> Result<()>;
}

/// One message per line in, replies separated by blank lines out.
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Transport for LineTransport<R, W> {
    fn receive(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn send(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
