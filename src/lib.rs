//! Indented Builder
//!
//! A fluent, mutable string builder that tracks an indentation level
//! alongside its content, so multi-line generated text (code generators,
//! structured reports) can be produced without hand-managing leading
//! whitespace on every line.
//!
//! The builder wraps a plain character buffer and layers three things on
//! top: an indentation level clamped at zero, an eagerly-derived indentation
//! prefix, and line-oriented appends that prepend that prefix. Ordinary
//! buffer operations (append, insert, remove, replace, indexed access) pass
//! straight through, untouched by indentation state.
//!
//! # Modules
//!
//! - [`buffer`]: the underlying character-indexed buffer
//! - [`builder`]: indentation config and the fluent builder itself
//!
//! # Example
//!
//! ```
//! use indented::{IndentConfig, IndentedBuilder};
//!
//! let config = IndentConfig::spaces(4)?;
//! let mut out = IndentedBuilder::with_config(config);
//! out.append_line("fn main() {")
//!     .with_indent(|b| {
//!         b.append_line("println!(\"hello\");");
//!     })
//!     .append_line("}");
//!
//! assert_eq!(
//!     out.to_string(),
//!     "fn main() {\n    println!(\"hello\");\n}\n"
//! );
//! # Ok::<(), indented::ConfigError>(())
//! ```

pub mod buffer;
pub mod builder;

pub use buffer::CharBuffer;
pub use builder::{
    ConfigError, IndentConfig, IndentedBuilder, DEFAULT_INDENT_CHAR, LINE_TERMINATOR,
};
