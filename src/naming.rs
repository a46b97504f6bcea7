//! Names of the include guard, the macros and the output file.

use itertools::Itertools;

/// Logical name of the generated document
pub const DEFAULT_NAME: &str = "repeat";

/// Namespace of the include guard
pub const DEFAULT_GUARD_PREFIX: &str = "PATOMIC_IMPL_TSX";

/// Namespace of the emitted macros
pub const DEFAULT_MACRO_PREFIX: &str = "PATOMIC_TSX";

/// Name of the macro parameter that callers bind their own macro to
pub const DEFAULT_PARAMETER: &str = "def";

/// Who the provenance comment names as the author of the file
pub const DEFAULT_GENERATOR: &str = env!("CARGO_PKG_NAME");

/// Turn a logical name into a preprocessor token: uppercase, words joined by `_`.
pub fn token(name: &str) -> String {
    name.split_whitespace().map(str::to_uppercase).join("_")
}

/// All the names that appear in the generated header, derived from one logical name.
///
/// With the defaults this yields the guard `PATOMIC_IMPL_TSX_REPEAT_H`, the constants
/// `PATOMIC_TSX_REPEAT_N` and `PATOMIC_TSX_REPEAT_N_1` and the macro `PATOMIC_TSX_REPEAT(def)`
/// in a file called `repeat.h`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderNaming {
    name: String,
    guard_prefix: String,
    macro_prefix: String,
    parameter: String,
    generator: String,
}

impl HeaderNaming {
    /// Create the naming scheme for the repeat header.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            guard_prefix: DEFAULT_GUARD_PREFIX.to_string(),
            macro_prefix: DEFAULT_MACRO_PREFIX.to_string(),
            parameter: DEFAULT_PARAMETER.to_string(),
            generator: DEFAULT_GENERATOR.to_string(),
        }
    }

    /// Set the logical document name.
    ///
    /// Default: `repeat`
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the prefix of the include guard token.
    ///
    /// Default: `PATOMIC_IMPL_TSX`
    pub fn guard_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.guard_prefix = prefix.into();
        self
    }

    /// Set the prefix of the macro symbols.
    ///
    /// Default: `PATOMIC_TSX`
    pub fn macro_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.macro_prefix = prefix.into();
        self
    }

    /// Set the name of the repeat macro's parameter.
    ///
    /// Default: `def`
    pub fn parameter<S: Into<String>>(mut self, parameter: S) -> Self {
        self.parameter = parameter.into();
        self
    }

    /// Set the generator named in the provenance comment.
    ///
    /// Default: the name of this crate
    pub fn generator<S: Into<String>>(mut self, generator: S) -> Self {
        self.generator = generator.into();
        self
    }

    /// The repeat macro's parameter.
    pub fn parameter_name(&self) -> &str {
        &self.parameter
    }

    /// The generator named in the provenance comment.
    pub fn generator_name(&self) -> &str {
        &self.generator
    }

    /// The include guard token, identical in the opening and the closing guard.
    pub fn guard(&self) -> String {
        format!("{}_{}_H", self.guard_prefix, token(&self.name))
    }

    /// The name of the repeat macro. The constants are derived from it.
    pub fn repeat_macro(&self) -> String {
        format!("{}_{}", self.macro_prefix, token(&self.name))
    }

    /// The constant holding N.
    pub fn count_constant(&self) -> String {
        format!("{}_N", self.repeat_macro())
    }

    /// The constant holding N + 1.
    pub fn bound_constant(&self) -> String {
        format!("{}_N_1", self.repeat_macro())
    }

    /// The file name of the header.
    pub fn file_name(&self) -> String {
        format!("{}.h", self.name)
    }
}
