//! This library generates `repeat.h`, a header with a preprocessor macro that invokes
//! a caller-supplied macro once for every index from 1 to N.
//!
//! It consists of
//! - __count__: validate the single repeat count argument (decimal, with a hex fallback)
//! - __document__: assemble the header as an ordered list of typed line segments
//! - __backend__: render the segments as C preprocessor code and write the file
//!
//! ## Getting Started
//! ```no_run
//! use tsx_repeat_gen::{
//!     backends::C::HeaderGenerator,
//!     count::validate_arguments,
//! };
//!
//! let count = validate_arguments(&["16"]).unwrap();
//! let path = HeaderGenerator::new().generate(count).unwrap();
//! println!("Created {} with n={}", path.display(), count);
//! ```
//! For N = 2 the resulting header reads:
//! ```text
//! #ifndef PATOMIC_IMPL_TSX_REPEAT_H
//! #define PATOMIC_IMPL_TSX_REPEAT_H
//!
//! /* NOTE: this file is auto-generated by tsx-repeat-gen, do not edit by hand */
//!
//! #define PATOMIC_TSX_REPEAT_N 2
//! #define PATOMIC_TSX_REPEAT_N_1 3
//!
//! #define PATOMIC_TSX_REPEAT(def) \
//!     def(1) \
//!     def(2) \
//!
//!
//! #endif  /* !PATOMIC_IMPL_TSX_REPEAT_H */
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod count;
pub mod naming;
pub mod document;
pub mod backends;
