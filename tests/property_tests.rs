//! Property-based tests for the indentation level algebra.
//!
//! These use proptest to verify the universally-quantified laws the unit
//! tests only spot-check:
//! 1. Level adjustment clamps at zero and never errors
//! 2. `indent_by` and `dedent_by` are exact mirrors under sign negation
//! 3. The prefix is always the indent char repeated `level * indent_size`
//! 4. Scoped indentation restores the pre-call level when no clamp occurs

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "Test levels are small enough to round-trip through isize"
)]

use indented::{IndentConfig, IndentedBuilder};
use proptest::prelude::*;

/// Build a builder at the given level with the given unit and step size.
fn builder_at(level: usize, indent_char: char, indent_size: usize) -> IndentedBuilder {
    let config = IndentConfig::new(indent_char, level, indent_size).expect("valid indent size");
    IndentedBuilder::with_config(config)
}

fn clamp0(value: isize) -> usize {
    value.max(0) as usize
}

proptest! {
    #[test]
    fn indent_by_yields_clamped_sum(level in 0usize..256, amount in -256isize..=256) {
        let mut b = builder_at(level, '\t', 1);
        b.indent_by(amount);
        prop_assert_eq!(b.indent_level(), clamp0(level as isize + amount));
    }

    #[test]
    fn dedent_by_yields_clamped_difference(level in 0usize..256, amount in -256isize..=256) {
        let mut b = builder_at(level, '\t', 1);
        b.dedent_by(amount);
        prop_assert_eq!(b.indent_level(), clamp0(level as isize - amount));
    }

    #[test]
    fn indent_and_dedent_mirror_under_negation(level in 0usize..256, amount in -256isize..=256) {
        let mut via_indent = builder_at(level, '\t', 1);
        via_indent.indent_by(amount);

        let mut via_dedent = builder_at(level, '\t', 1);
        via_dedent.dedent_by(-amount);

        prop_assert_eq!(via_indent.indent_level(), via_dedent.indent_level());
    }

    #[test]
    fn zero_amount_never_changes_state(level in 0usize..256) {
        let mut b = builder_at(level, ' ', 2);
        let prefix_before = b.indent_str().to_owned();
        b.indent_by(0);
        b.dedent_by(0);
        prop_assert_eq!(b.indent_level(), level);
        prop_assert_eq!(b.indent_str(), prefix_before);
    }

    #[test]
    fn prefix_invariant_holds_after_any_adjustment_sequence(
        indent_size in 1usize..8,
        amounts in prop::collection::vec(-16isize..=16, 0..32),
    ) {
        let mut b = builder_at(0, ' ', indent_size);
        for amount in amounts {
            b.indent_by(amount);
            let expected: String =
                std::iter::repeat(' ').take(b.indent_level() * indent_size).collect();
            prop_assert_eq!(b.indent_str(), expected);
        }
    }

    #[test]
    fn scoped_indent_restores_level_when_unclamped(
        level in 0usize..128,
        amount in -128isize..=128,
    ) {
        prop_assume!(level as isize + amount >= 0);
        let mut b = builder_at(level, '\t', 1);
        b.with_indent_by(amount, |b| {
            b.append_line("inside");
        });
        prop_assert_eq!(b.indent_level(), level);
    }

    #[test]
    fn indent_and_append_lines_restores_level_when_unclamped(
        level in 0usize..128,
        amount in 0isize..=128,
    ) {
        let mut b = builder_at(level, '\t', 1);
        b.indent_and_append_lines(["x"], amount);
        prop_assert_eq!(b.indent_level(), level);
    }

    #[test]
    fn append_line_emits_prefix_value_terminator(
        level in 0usize..32,
        indent_size in 1usize..8,
        value in "[a-zA-Z0-9 ]{0,40}",
    ) {
        let mut b = builder_at(level, ' ', indent_size);
        b.append_line(&value);
        let expected = format!("{}{}\n", " ".repeat(level * indent_size), value);
        prop_assert_eq!(b.to_string(), expected);
    }

    #[test]
    fn clear_always_zeroes_both(level in 0usize..128, content in "[a-z]{0,64}") {
        let mut b = builder_at(level, '\t', 1);
        b.append(content);
        b.clear();
        prop_assert_eq!(b.len(), 0);
        prop_assert_eq!(b.indent_level(), 0);
    }

    #[test]
    fn clear_content_preserves_level(level in 0usize..128, content in "[a-z]{0,64}") {
        let mut b = builder_at(level, '\t', 1);
        b.append(content);
        b.clear_content();
        prop_assert_eq!(b.len(), 0);
        prop_assert_eq!(b.indent_level(), level);
    }

    #[test]
    fn clear_indentation_preserves_content(level in 0usize..128, content in "[a-z]{0,64}") {
        let mut b = builder_at(level, '\t', 1);
        b.append(&content);
        b.clear_indentation();
        prop_assert_eq!(b.indent_level(), 0);
        prop_assert_eq!(b.to_string(), content);
    }
}
