//! Mutable character buffer underlying the indented builder.
//!
//! `CharBuffer` is the plain text-accumulation primitive: it owns a growable
//! sequence of characters and exposes append, insert, remove, ranged replace,
//! and indexed access. It knows nothing about indentation; that layer lives
//! in [`crate::builder`].

use std::fmt::{self, Write as _};

/// A growable, character-indexed text buffer.
///
/// Unlike `String`, which is addressed in UTF-8 bytes, `CharBuffer` stores
/// individual `char`s. Every index, offset, and count in its API is a
/// character position, so indexed get/set and ranged edits are well-defined
/// for any content, multi-byte or not.
///
/// Operations that take an index or range validate it before touching the
/// buffer and panic on violation, like `Vec::insert` and friends; a failed
/// call leaves the buffer exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharBuffer {
    chars: Vec<char>,
}

impl CharBuffer {
    /// Largest number of characters a buffer can hold.
    pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<char>();

    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
        }
    }

    /// Number of characters currently in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check whether the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of characters the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.chars.capacity()
    }

    /// Reserve room for at least `additional` more characters.
    pub fn reserve(&mut self, additional: usize) {
        self.chars.reserve(additional);
    }

    /// Drop excess capacity.
    pub fn shrink_to_fit(&mut self) {
        self.chars.shrink_to_fit();
    }

    /// Resize the buffer to `new_len` characters.
    ///
    /// Shrinking truncates; growing pads with NUL (`'\0'`) characters.
    pub fn set_len(&mut self, new_len: usize) {
        self.chars.resize(new_len, '\0');
    }

    /// Character at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Character at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn char_at(&self, index: usize) -> char {
        self.check_index(index);
        self.chars[index]
    }

    /// Overwrite the character at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set_char_at(&mut self, index: usize, ch: char) {
        self.check_index(index);
        self.chars[index] = ch;
    }

    /// Append a single character.
    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Append the characters of `value`.
    pub fn push_str(&mut self, value: &str) {
        self.chars.extend(value.chars());
    }

    /// Append a slice of characters.
    pub fn push_chars(&mut self, value: &[char]) {
        self.chars.extend_from_slice(value);
    }

    /// Insert a single character at `index`.
    ///
    /// `index` may equal `len`, which appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_char(&mut self, index: usize, ch: char) {
        self.check_insert_index(index);
        self.chars.insert(index, ch);
    }

    /// Insert the characters of `value` at `index`.
    ///
    /// `index` may equal `len`, which appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_str(&mut self, index: usize, value: &str) {
        self.check_insert_index(index);
        self.chars.splice(index..index, value.chars());
    }

    /// Remove `count` characters starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the range falls outside the buffer.
    pub fn remove(&mut self, start: usize, count: usize) {
        let end = self.range_end(start, count);
        self.chars.drain(start..end);
    }

    /// Replace every occurrence of the character `old` with `new`.
    pub fn replace_char(&mut self, old: char, new: char) {
        for ch in &mut self.chars {
            if *ch == old {
                *ch = new;
            }
        }
    }

    /// Replace occurrences of the character `old` with `new` within the
    /// `count` characters starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the range falls outside the buffer.
    pub fn replace_char_in(&mut self, old: char, new: char, start: usize, count: usize) {
        let end = self.range_end(start, count);
        for ch in &mut self.chars[start..end] {
            if *ch == old {
                *ch = new;
            }
        }
    }

    /// Replace every occurrence of the substring `old` with `new`.
    ///
    /// Matches are found left to right and do not overlap.
    ///
    /// # Panics
    ///
    /// Panics if `old` is empty.
    pub fn replace_str(&mut self, old: &str, new: &str) {
        let len = self.len();
        self.replace_str_in(old, new, 0, len);
    }

    /// Replace occurrences of the substring `old` with `new`, considering
    /// only matches that lie wholly within the `count` characters starting
    /// at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `old` is empty or the range falls outside the buffer.
    pub fn replace_str_in(&mut self, old: &str, new: &str, start: usize, count: usize) {
        assert!(!old.is_empty(), "replace pattern must not be empty");
        let end = self.range_end(start, count);

        let old_chars: Vec<char> = old.chars().collect();
        let new_chars: Vec<char> = new.chars().collect();
        if old_chars.len() > end - start {
            return;
        }

        let mut result: Vec<char> = Vec::with_capacity(self.chars.len());
        result.extend_from_slice(&self.chars[..start]);
        let mut i = start;
        while i < end {
            if i + old_chars.len() <= end && self.chars[i..i + old_chars.len()] == old_chars[..] {
                result.extend_from_slice(&new_chars);
                i += old_chars.len();
            } else {
                result.push(self.chars[i]);
                i += 1;
            }
        }
        result.extend_from_slice(&self.chars[end..]);
        self.chars = result;
    }

    /// Materialize `count` characters starting at `start` as a `String`.
    ///
    /// # Panics
    ///
    /// Panics if the range falls outside the buffer.
    pub fn substring(&self, start: usize, count: usize) -> String {
        let end = self.range_end(start, count);
        self.chars[start..end].iter().collect()
    }

    /// Remove all characters. Capacity is retained.
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// View the buffer contents as a character slice.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.chars.len(),
            "index {index} out of bounds (len {})",
            self.chars.len()
        );
    }

    fn check_insert_index(&self, index: usize) {
        assert!(
            index <= self.chars.len(),
            "index {index} out of bounds (len {})",
            self.chars.len()
        );
    }

    /// Validate `start`/`count` against the buffer and return the exclusive
    /// end position.
    fn range_end(&self, start: usize, count: usize) -> usize {
        assert!(
            start <= self.chars.len(),
            "start {start} out of bounds (len {})",
            self.chars.len()
        );
        match start.checked_add(count) {
            Some(end) if end <= self.chars.len() => end,
            _ => panic!(
                "count {count} out of bounds for start {start} (len {})",
                self.chars.len()
            ),
        }
    }
}

impl fmt::Display for CharBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            f.write_char(*ch)?;
        }
        Ok(())
    }
}

impl fmt::Write for CharBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push(c);
        Ok(())
    }
}

impl From<&str> for CharBuffer {
    fn from(value: &str) -> Self {
        Self {
            chars: value.chars().collect(),
        }
    }
}

impl From<String> for CharBuffer {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}
