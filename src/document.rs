//! The repeat header as an ordered list of typed line segments.
//!
//! Building the document is a pure function of the repeat count and the naming scheme,
//! turning it into text is the job of the [`C`](crate::backends::C) backend:
//! ```
//! use tsx_repeat_gen::{count::validate_argument, document::build_document};
//!
//! let document = build_document(validate_argument("5").unwrap());
//! let text = document.render();
//! assert!(text.contains("#define PATOMIC_TSX_REPEAT_N 5\n"));
//! ```

use crate::{
    backends::C::HeaderGenerator,
    count::RepeatCount,
    naming::HeaderNaming,
};

/// One logical piece of the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// `#ifndef` / `#define` pair of the include guard
    GuardOpen(String),

    /// An empty line
    Blank,

    /// A single-line C comment
    Comment(String),

    /// `#define NAME VALUE`
    Constant {
        /// Macro name
        name: String,
        /// Literal value
        value: usize,
    },

    /// The repeat macro, continued over one line per index and closed by a blank line
    RepeatBlock {
        /// Macro name
        name: String,
        /// Name of the macro parameter that gets invoked for every index
        parameter: String,
        /// How often the parameter is invoked
        count: RepeatCount,
    },

    /// `#endif` of the include guard
    GuardClose(String),
}

/// The complete repeat header, independent of any file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatDocument {
    naming: HeaderNaming,
    count: RepeatCount,
    segments: Vec<Segment>,
}

impl RepeatDocument {
    /// Assemble the header for `count` using the names in `naming`.
    pub fn build(count: RepeatCount, naming: &HeaderNaming) -> Self {
        let guard = naming.guard();

        let segments = vec![
            Segment::GuardOpen(guard.clone()),
            Segment::Blank,
            Segment::Comment(format!(
                "NOTE: this file is auto-generated by {}, do not edit by hand",
                naming.generator_name()
            )),
            Segment::Blank,
            Segment::Constant {
                name: naming.count_constant(),
                value: count.get(),
            },
            Segment::Constant {
                name: naming.bound_constant(),
                value: count.exclusive_bound(),
            },
            Segment::Blank,
            Segment::RepeatBlock {
                name: naming.repeat_macro(),
                parameter: naming.parameter_name().to_string(),
                count,
            },
            Segment::Blank,
            Segment::GuardClose(guard),
        ];

        Self {
            naming: naming.clone(),
            count,
            segments,
        }
    }

    /// The segments in output order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The repeat count this document was built for.
    pub fn count(&self) -> RepeatCount {
        self.count
    }

    /// The naming scheme this document was built with.
    pub fn naming(&self) -> &HeaderNaming {
        &self.naming
    }

    /// Render the document into the exact text of the header file.
    pub fn render(&self) -> String {
        HeaderGenerator::render(self)
    }
}

/// Build the repeat header for `count` with the default names.
pub fn build_document(count: RepeatCount) -> RepeatDocument {
    RepeatDocument::build(count, &HeaderNaming::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_order() {
        let count = RepeatCount::try_from(3i64).unwrap();
        let document = build_document(count);
        let segments = document.segments();

        assert_eq!(segments.len(), 10);
        assert_eq!(segments[0], Segment::GuardOpen("PATOMIC_IMPL_TSX_REPEAT_H".to_string()));
        assert!(matches!(segments[2], Segment::Comment(_)));
        assert_eq!(
            segments[4],
            Segment::Constant {
                name: "PATOMIC_TSX_REPEAT_N".to_string(),
                value: 3
            }
        );
        assert_eq!(
            segments[5],
            Segment::Constant {
                name: "PATOMIC_TSX_REPEAT_N_1".to_string(),
                value: 4
            }
        );
        assert!(matches!(&segments[7], Segment::RepeatBlock { count: c, .. } if *c == count));
        assert_eq!(segments[9], Segment::GuardClose("PATOMIC_IMPL_TSX_REPEAT_H".to_string()));
    }

    #[test]
    fn test_custom_naming() {
        let naming = HeaderNaming::new().name("unroll").macro_prefix("MY");
        let document = RepeatDocument::build(RepeatCount::try_from(2i64).unwrap(), &naming);

        assert!(document.segments().iter().any(|s| matches!(s, Segment::RepeatBlock { name, .. } if name == "MY_UNROLL")));
        assert_eq!(document.naming().file_name(), "unroll.h");
        assert_eq!(document.count().get(), 2);
    }

    #[test]
    fn test_deterministic() {
        let count = RepeatCount::try_from(17i64).unwrap();
        assert_eq!(build_document(count), build_document(count));
        assert_eq!(build_document(count).render(), build_document(count).render());
    }
}
