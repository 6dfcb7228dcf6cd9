use std::io::{BufRead, Write};
use crate::core::library::{BookId, LibraryError, LibraryResult};

/// Line-oriented console over any reader/writer pair.
///
/// The binary wires it to locked stdin/stdout; tests hand it an in-memory
/// buffer and read back what was written. A `None` from any read means the
/// input is exhausted.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
        }
    }

    pub fn write_line(&mut self, line: &str) -> LibraryResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    /// Print `label` without a newline and read one line of input.
    /// Bytes that are not valid UTF-8 decode to U+FFFD.
    pub fn prompt(&mut self, label: &str) -> LibraryResult<Option<String>> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt for a numeric id; anything that is not an integer is
    /// `InvalidInput`.
    pub fn prompt_id(&mut self, label: &str) -> LibraryResult<Option<BookId>> {
        match self.prompt(label)? {
            Some(line) => parse_id(&line).map(Some),
            None => Ok(None),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub fn parse_id(raw: &str) -> LibraryResult<BookId> {
    raw.trim().parse::<BookId>().map_err(|err| LibraryError::invalid_input(
        format!("expected a numeric id but got {:?}", raw).as_str(), Some(err.to_string())))
}
