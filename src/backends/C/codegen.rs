use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    backends::C::formatter::CFormatter,
    count::RepeatCount,
    document::{RepeatDocument, Segment},
    error::{GeneratorError, Result},
    naming::HeaderNaming,
};

fn emit_guard_open<T: Write>(guard: &str, fmt: &mut CFormatter<T>) -> io::Result<()> {
    fmt.write(format!("#ifndef {}", guard))?;
    fmt.write(format!("#define {}", guard))
}

fn emit_guard_close<T: Write>(guard: &str, fmt: &mut CFormatter<T>) -> io::Result<()> {
    fmt.write(format!("#endif  /* !{} */", guard))
}

fn emit_repeat_block<T: Write>(name: &str, parameter: &str, count: RepeatCount, fmt: &mut CFormatter<T>) -> io::Result<()> {
    fmt.continued(format!("#define {}({})", name, parameter))?;
    fmt.indent();

    for i in count.indices() {
        fmt.continued(format!("{}({})", parameter, i))?;
    }

    fmt.unindent();

    // ends the continuation
    fmt.blankline()
}

fn emit_segment<T: Write>(segment: &Segment, fmt: &mut CFormatter<T>) -> io::Result<()> {
    match segment {
        Segment::GuardOpen(guard) => emit_guard_open(guard, fmt),
        Segment::Blank => fmt.blankline(),
        Segment::Comment(text) => fmt.write(format!("/* {} */", text)),
        Segment::Constant { name, value } => fmt.write(format!("#define {} {}", name, value)),
        Segment::RepeatBlock { name, parameter, count } => emit_repeat_block(name, parameter, *count, fmt),
        Segment::GuardClose(guard) => emit_guard_close(guard, fmt),
    }
}

fn emit_document<T: Write>(document: &RepeatDocument, writer: T) -> io::Result<T> {
    let mut fmt = CFormatter::new(writer);

    for segment in document.segments() {
        emit_segment(segment, &mut fmt)?;
    }

    fmt.finish()
}

/// Write `text` to `path`, replacing whatever the file contained before.
///
/// A failure after the file was opened can leave it truncated.
pub fn write_document<P: AsRef<Path>>(text: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let outfile = File::create(path).map_err(|e| GeneratorError::write(path, e))?;
    let mut stream = BufWriter::new(outfile);

    stream.write_all(text.as_bytes()).map_err(|e| GeneratorError::write(path, e))?;
    stream.flush().map_err(|e| GeneratorError::write(path, e))?;

    debug!(path = %path.display(), bytes = text.len(), "wrote header");

    Ok(())
}

/// This is the main struct of the [`C`](crate::backends::C) backend. It renders the repeat header and writes it to disk.
pub struct HeaderGenerator {
    naming: HeaderNaming,
    output_dir: PathBuf,
}

impl HeaderGenerator {
    /// Create a new HeaderGenerator that writes `repeat.h` into the current directory.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            naming: HeaderNaming::new(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Use a different naming scheme for guard, macros and file name.
    ///
    /// Default: [`HeaderNaming::new()`]
    pub fn naming(mut self, naming: HeaderNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Write the header into `dir` instead of the current directory.
    /// The directory must already exist.
    ///
    /// Default: `.`
    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// The path the header will be written to.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.naming.file_name())
    }

    /// Render `document` into the text of a header file.
    pub fn render(document: &RepeatDocument) -> String {
        let buf = emit_document(document, Vec::new()).expect("writing into memory cannot fail");
        String::from_utf8(buf).expect("generated header is always valid UTF-8")
    }

    /// Build the header for `count`, write it and return where it was written to.
    pub fn generate(self, count: RepeatCount) -> Result<PathBuf> {
        let document = RepeatDocument::build(count, &self.naming);
        let text = document.render();
        let path = self.output_dir.join(document.naming().file_name());

        debug!(count = document.count().get(), lines = text.lines().count(), "rendered header");

        write_document(&text, &path)?;

        info!(path = %path.display(), n = document.count().get(), "created {}", document.naming().file_name());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::build_document;

    fn count(n: i64) -> RepeatCount {
        RepeatCount::try_from(n).unwrap()
    }

    #[test]
    fn test_exact_output() {
        let expected = "\
#ifndef PATOMIC_IMPL_TSX_REPEAT_H
#define PATOMIC_IMPL_TSX_REPEAT_H

/* NOTE: this file is auto-generated by tsx-repeat-gen, do not edit by hand */

#define PATOMIC_TSX_REPEAT_N 2
#define PATOMIC_TSX_REPEAT_N_1 3

#define PATOMIC_TSX_REPEAT(def) \\
    def(1) \\
    def(2) \\


#endif  /* !PATOMIC_IMPL_TSX_REPEAT_H */
";
        assert_eq!(HeaderGenerator::render(&build_document(count(2))), expected);
    }

    #[test]
    fn test_invocations() {
        let text = build_document(count(5)).render();
        let invocations: Vec<&str> = text.lines().filter(|l| l.trim_start().starts_with("def(")).collect();

        assert_eq!(invocations, vec![
            "    def(1) \\",
            "    def(2) \\",
            "    def(3) \\",
            "    def(4) \\",
            "    def(5) \\",
        ]);
        assert!(text.contains("#define PATOMIC_TSX_REPEAT_N 5\n"));
        assert!(text.contains("#define PATOMIC_TSX_REPEAT_N_1 6\n"));
    }

    #[test]
    fn test_custom_parameter() {
        let naming = HeaderNaming::new().parameter("F").generator("build.rs");
        let text = RepeatDocument::build(count(3), &naming).render();

        assert!(text.contains("#define PATOMIC_TSX_REPEAT(F) \\\n    F(1) \\\n    F(2) \\\n    F(3) \\\n\n"));
        assert!(text.contains("auto-generated by build.rs"));
    }

    #[test]
    fn test_output_path() {
        let generator = HeaderGenerator::new()
            .naming(HeaderNaming::new().name("unroll"))
            .output_dir("/tmp/headers");
        assert_eq!(generator.output_path(), PathBuf::from("/tmp/headers/unroll.h"));
    }

    #[test]
    fn test_write_to_missing_directory() {
        let result = HeaderGenerator::new()
            .output_dir("/nonexistent/tsx-repeat-gen")
            .generate(count(4));
        assert!(matches!(result, Err(GeneratorError::WriteError { .. })));
    }
}
