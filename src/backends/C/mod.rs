//! Render the repeat header as C preprocessor code.
//!
//! Use it like so:
//! ```no_run
//! use tsx_repeat_gen::{backends::C::HeaderGenerator, count::validate_argument};
//!
//! // Validate the repeat count first
//! let count = validate_argument("16").unwrap();
//!
//! // Then write repeat.h into the include directory
//! HeaderGenerator::new().output_dir("include").generate(count).unwrap();
//! ```

mod formatter;
mod codegen;

pub use codegen::{HeaderGenerator, write_document};
