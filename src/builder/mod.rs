//! Indented builder: indentation state composed with buffer mutation.
//!
//! [`IndentedBuilder`] wraps a [`CharBuffer`] and tracks an indentation
//! level alongside it. Line-oriented appends prepend the materialized
//! indentation prefix; everything else passes straight through to the
//! buffer. All mutators return `&mut Self` for fluent chaining.

use std::fmt;

use thiserror::Error;

use crate::buffer::CharBuffer;

/// Line terminator used by every line-producing operation (Unix-style `\n`).
pub const LINE_TERMINATOR: char = '\n';

/// Default character used to build indentation.
pub const DEFAULT_INDENT_CHAR: char = '\t';

/// Invalid indentation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `indent_size` below the minimum of one character per step.
    #[error("indent_size must be greater than or equal to 1 (got {given})")]
    IndentSize {
        /// The rejected value.
        given: usize,
    },
}

/// Indentation configuration, fixed for a builder's lifetime.
///
/// Construction validates that `indent_size` is at least 1; a valid config
/// cannot be mutated afterwards. A negative starting level is unrepresentable
/// (`usize`), so the only runtime validation is the step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentConfig {
    indent_char: char,
    starting_level: usize,
    indent_size: usize,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            indent_char: DEFAULT_INDENT_CHAR,
            starting_level: 0,
            indent_size: 1,
        }
    }
}

impl IndentConfig {
    /// Create a config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IndentSize`] when `indent_size < 1`.
    pub fn new(
        indent_char: char,
        starting_level: usize,
        indent_size: usize,
    ) -> Result<Self, ConfigError> {
        if indent_size < 1 {
            return Err(ConfigError::IndentSize { given: indent_size });
        }
        Ok(Self {
            indent_char,
            starting_level,
            indent_size,
        })
    }

    /// One tab per indentation step (the default).
    pub fn tabs() -> Self {
        Self::default()
    }

    /// `indent_size` spaces per indentation step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IndentSize`] when `indent_size < 1`.
    pub fn spaces(indent_size: usize) -> Result<Self, ConfigError> {
        Self::new(' ', 0, indent_size)
    }

    /// The character used to build indentation.
    pub fn indent_char(&self) -> char {
        self.indent_char
    }

    /// The level a builder starts at.
    pub fn starting_level(&self) -> usize {
        self.starting_level
    }

    /// Characters per indentation step.
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }
}

/// A fluent string builder that tracks an indentation level.
///
/// The builder owns a [`CharBuffer`] and an indentation level. Line appends
/// ([`append_line`](Self::append_line), [`append_lines`](Self::append_lines))
/// prepend the current indentation prefix; plain appends, inserts, removals,
/// and replacements delegate to the buffer untouched, so the type is a
/// superset of an ordinary character buffer rather than a replacement.
///
/// The indentation level never goes below zero: adjusting it by any amount,
/// positive or negative, clamps at zero instead of erroring.
///
/// # Example
///
/// ```
/// use indented::IndentedBuilder;
///
/// let mut out = IndentedBuilder::new();
/// out.append_line("Line 1")
///     .with_indent(|b| {
///         b.append_line("Line 2");
///     })
///     .append_line("Line 3");
/// assert_eq!(out.to_string(), "Line 1\n\tLine 2\nLine 3\n");
/// ```
#[derive(Debug, Clone)]
pub struct IndentedBuilder {
    buffer: CharBuffer,
    config: IndentConfig,
    level: usize,
    /// Cached prefix, always `indent_char` repeated `level * indent_size`
    /// times. Regenerated eagerly on every level change.
    indent_str: String,
}

impl Default for IndentedBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentedBuilder {
    /// Create a builder with an empty buffer and the default config
    /// (tab indentation, level 0, one character per step).
    pub fn new() -> Self {
        Self::with_buffer_and_config(CharBuffer::new(), IndentConfig::default())
    }

    /// Create a builder with an empty buffer and the given config.
    pub fn with_config(config: IndentConfig) -> Self {
        Self::with_buffer_and_config(CharBuffer::new(), config)
    }

    /// Wrap a pre-populated buffer with the default config.
    pub fn with_buffer(buffer: CharBuffer) -> Self {
        Self::with_buffer_and_config(buffer, IndentConfig::default())
    }

    /// Wrap a pre-populated buffer with the given config.
    pub fn with_buffer_and_config(buffer: CharBuffer, config: IndentConfig) -> Self {
        let level = config.starting_level();
        Self {
            buffer,
            config,
            level,
            indent_str: render_indent(&config, level),
        }
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Current indentation level.
    pub fn indent_level(&self) -> usize {
        self.level
    }

    /// The character used to build indentation.
    pub fn indent_char(&self) -> char {
        self.config.indent_char()
    }

    /// Characters per indentation step.
    pub fn indent_size(&self) -> usize {
        self.config.indent_size()
    }

    /// The materialized indentation prefix for the current level.
    pub fn indent_str(&self) -> &str {
        &self.indent_str
    }

    /// Number of characters currently in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check whether the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of characters the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The ceiling on buffer capacity, in characters.
    #[allow(clippy::unused_self, reason = "reads as a property of the builder")]
    pub fn max_capacity(&self) -> usize {
        CharBuffer::MAX_CAPACITY
    }

    /// Character at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<char> {
        self.buffer.get(index)
    }

    /// Character at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn char_at(&self, index: usize) -> char {
        self.buffer.char_at(index)
    }

    /// Materialize `count` characters starting at `start` as a `String`.
    ///
    /// # Panics
    ///
    /// Panics if the range falls outside the buffer.
    pub fn substring(&self, start: usize, count: usize) -> String {
        self.buffer.substring(start, count)
    }

    /// Borrow the underlying buffer.
    pub fn buffer(&self) -> &CharBuffer {
        &self.buffer
    }

    /// Consume the builder, yielding the underlying buffer.
    pub fn into_buffer(self) -> CharBuffer {
        self.buffer
    }

    // ------------------------------------------------------------------
    // Indentation level
    // ------------------------------------------------------------------

    /// Increase the indentation level by one step.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_by(1)
    }

    /// Decrease the indentation level by one step, clamping at zero.
    pub fn dedent(&mut self) -> &mut Self {
        self.dedent_by(1)
    }

    /// Adjust the indentation level by `amount`, clamping at zero.
    ///
    /// A negative `amount` decrements; zero is a no-op. Never errors.
    pub fn indent_by(&mut self, amount: isize) -> &mut Self {
        if amount == 0 {
            return self;
        }
        self.set_level(self.level.saturating_add_signed(amount));
        self
    }

    /// Adjust the indentation level by `-amount`, clamping at zero.
    ///
    /// The exact mirror of [`indent_by`](Self::indent_by): a negative
    /// `amount` increments.
    pub fn dedent_by(&mut self, amount: isize) -> &mut Self {
        self.indent_by(amount.saturating_neg())
    }

    /// Reset the indentation level (and prefix) to zero. Content untouched.
    pub fn clear_indentation(&mut self) -> &mut Self {
        self.set_level(0);
        self
    }

    fn set_level(&mut self, level: usize) {
        self.level = level;
        self.indent_str = render_indent(&self.config, level);
    }

    // ------------------------------------------------------------------
    // Line-oriented appends
    // ------------------------------------------------------------------

    /// Append a bare line terminator, with no indentation prefix.
    pub fn append_newline(&mut self) -> &mut Self {
        self.buffer.push(LINE_TERMINATOR);
        self
    }

    /// Append `count` bare line terminators. Zero is a no-op.
    pub fn append_newlines(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.buffer.push(LINE_TERMINATOR);
        }
        self
    }

    /// Append the indentation prefix, `value`, and a line terminator.
    ///
    /// An empty `value` still receives the prefix.
    pub fn append_line(&mut self, value: &str) -> &mut Self {
        self.buffer.push_str(&self.indent_str);
        self.buffer.push_str(value);
        self.buffer.push(LINE_TERMINATOR);
        self
    }

    /// Append each of `values` via [`append_line`](Self::append_line), in
    /// iteration order.
    ///
    /// Each line is prefixed at the level current when it is appended.
    pub fn append_lines<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.append_line(value.as_ref());
        }
        self
    }

    /// Run a callback against this builder without touching indentation.
    ///
    /// Purely for fluent composition: the callback may perform any builder
    /// operation, including nested block calls.
    pub fn append_block(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        f(self);
        self
    }

    /// Run a callback one indentation step deeper, then step back out.
    ///
    /// See [`with_indent_by`](Self::with_indent_by).
    pub fn with_indent(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.with_indent_by(1, f)
    }

    /// Run a callback with the indentation level adjusted by `amount`, then
    /// adjust it back by the same amount.
    ///
    /// The sequence is strictly increment, callback, decrement: a panic
    /// escaping the callback skips the decrement and leaves the level
    /// elevated. When the initial adjustment clamps at zero, stepping back
    /// lands above the pre-call level rather than on it.
    pub fn with_indent_by(&mut self, amount: isize, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.indent_by(amount);
        f(self);
        self.dedent_by(amount)
    }

    /// Append `values` with the indentation level adjusted by `amount`,
    /// restoring the prior level afterwards (same clamping caveat as
    /// [`with_indent_by`](Self::with_indent_by)).
    pub fn indent_and_append_lines<I, S>(&mut self, values: I, amount: isize) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.indent_by(amount).append_lines(values).dedent_by(amount)
    }

    // ------------------------------------------------------------------
    // Buffer passthrough
    // ------------------------------------------------------------------

    /// Append the display form of `value`, with no prefix and no terminator.
    ///
    /// Covers booleans, integers, floats, characters, strings, and anything
    /// else implementing [`fmt::Display`].
    pub fn append<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        self.buffer.push_str(&value.to_string());
        self
    }

    /// Append formatted text (pass `format_args!(..)`).
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.buffer.push_str(&args.to_string());
        self
    }

    /// Append `count` characters of `value` starting at character position
    /// `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start + count` exceeds the character length of `value`.
    pub fn append_substr(&mut self, value: &str, start: usize, count: usize) -> &mut Self {
        let total = value.chars().count();
        assert!(
            start.checked_add(count).is_some_and(|end| end <= total),
            "start {start} + count {count} out of bounds for value of {total} chars"
        );
        self.buffer.reserve(count);
        for ch in value.chars().skip(start).take(count) {
            self.buffer.push(ch);
        }
        self
    }

    /// Append a slice of characters.
    pub fn append_chars(&mut self, value: &[char]) -> &mut Self {
        self.buffer.push_chars(value);
        self
    }

    /// Append a snapshot of another builder's current content.
    ///
    /// The content is copied at append time; later mutation of `other` does
    /// not affect this builder. An empty source is a no-op.
    pub fn append_builder(&mut self, other: &IndentedBuilder) -> &mut Self {
        self.buffer.push_chars(other.buffer.as_chars());
        self
    }

    /// Append a snapshot of `count` characters of another builder's content
    /// starting at `start`. An empty source is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the source is non-empty and the range falls outside it.
    pub fn append_builder_range(
        &mut self,
        other: &IndentedBuilder,
        start: usize,
        count: usize,
    ) -> &mut Self {
        if other.is_empty() {
            return self;
        }
        let snapshot = other.buffer.substring(start, count);
        self.buffer.push_str(&snapshot);
        self
    }

    /// Insert the display form of `value` at character position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert<T: fmt::Display>(&mut self, index: usize, value: T) -> &mut Self {
        self.buffer.insert_str(index, &value.to_string());
        self
    }

    /// Insert `count` copies of `value` at character position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_str_repeat(&mut self, index: usize, value: &str, count: usize) -> &mut Self {
        self.buffer.insert_str(index, &value.repeat(count));
        self
    }

    /// Remove `count` characters starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the range falls outside the buffer.
    pub fn remove(&mut self, start: usize, count: usize) -> &mut Self {
        self.buffer.remove(start, count);
        self
    }

    /// Replace every occurrence of the character `old` with `new`.
    pub fn replace_char(&mut self, old: char, new: char) -> &mut Self {
        self.buffer.replace_char(old, new);
        self
    }

    /// Replace occurrences of the character `old` with `new` within the
    /// `count` characters starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the range falls outside the buffer.
    pub fn replace_char_in(&mut self, old: char, new: char, start: usize, count: usize) -> &mut Self {
        self.buffer.replace_char_in(old, new, start, count);
        self
    }

    /// Replace every occurrence of the substring `old` with `new`.
    ///
    /// # Panics
    ///
    /// Panics if `old` is empty.
    pub fn replace_str(&mut self, old: &str, new: &str) -> &mut Self {
        self.buffer.replace_str(old, new);
        self
    }

    /// Replace occurrences of the substring `old` with `new` that lie wholly
    /// within the `count` characters starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `old` is empty or the range falls outside the buffer.
    pub fn replace_str_in(&mut self, old: &str, new: &str, start: usize, count: usize) -> &mut Self {
        self.buffer.replace_str_in(old, new, start, count);
        self
    }

    /// Resize the buffer: shrinking truncates, growing pads with NUL.
    pub fn set_len(&mut self, new_len: usize) -> &mut Self {
        self.buffer.set_len(new_len);
        self
    }

    /// Reserve room for at least `additional` more characters.
    pub fn reserve(&mut self, additional: usize) -> &mut Self {
        self.buffer.reserve(additional);
        self
    }

    /// Drop excess buffer capacity.
    pub fn shrink_to_fit(&mut self) -> &mut Self {
        self.buffer.shrink_to_fit();
        self
    }

    /// Overwrite the character at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set_char_at(&mut self, index: usize, ch: char) -> &mut Self {
        self.buffer.set_char_at(index, ch);
        self
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Empty the buffer. Indentation level and prefix are untouched.
    pub fn clear_content(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    /// Empty the buffer and reset the indentation level to zero.
    pub fn clear(&mut self) -> &mut Self {
        self.clear_content().clear_indentation()
    }
}

impl fmt::Display for IndentedBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.buffer, f)
    }
}

fn render_indent(config: &IndentConfig, level: usize) -> String {
    std::iter::repeat(config.indent_char())
        .take(level * config.indent_size())
        .collect()
}
