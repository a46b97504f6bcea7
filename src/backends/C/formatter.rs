use std::io::{self, BufWriter, Write};

/// Writes preprocessor lines with indentation and `\` continuations.
pub struct CFormatter<T: Write> {
    stream: BufWriter<T>,
    indentation: usize,
}

impl<T> CFormatter<T>
where
    T: Write,
{
    pub fn new(writer: T) -> Self {
        Self {
            stream: BufWriter::new(writer),
            indentation: 0,
        }
    }

    pub fn indent(&mut self) {
        self.indentation += 4;
    }

    pub fn unindent(&mut self) {
        if self.indentation > 0 {
            self.indentation -= 4;
        }
    }

    pub fn write<S: AsRef<str>>(&mut self, line: S) -> io::Result<()> {
        writeln!(&mut self.stream, "{:width$}{}", "", line.as_ref(), width = self.indentation)
    }

    /// Write a line that continues on the next one.
    pub fn continued<S: AsRef<str>>(&mut self, line: S) -> io::Result<()> {
        writeln!(&mut self.stream, "{:width$}{} \\", "", line.as_ref(), width = self.indentation)
    }

    pub fn blankline(&mut self) -> io::Result<()> {
        writeln!(&mut self.stream)
    }

    /// Flush everything and hand back the underlying writer.
    pub fn finish(self) -> io::Result<T> {
        self.stream.into_inner().map_err(|e| e.into_error())
    }
}
