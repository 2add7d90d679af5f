//! Property-based tests over randomly generated inputs.

use proptest::prelude::*;
use quill::{between, digit, literal, many, many1, optional, sep_by};

fn digits_as_chars(values: &[u8]) -> Vec<char> {
    values
        .iter()
        .map(|d| char::from(b'0' + d))
        .collect()
}

proptest! {
    /// Running the same parser twice on the same input is pure.
    #[test]
    fn parsers_are_deterministic(input in ".{0,40}") {
        let p = many(digit());
        prop_assert_eq!(p.run(&input), p.run(&input));

        let q = literal("ab");
        prop_assert_eq!(q.run(&input), q.run(&input));
    }

    /// `optional` never fails, and a miss leaves the state untouched.
    #[test]
    fn optional_is_total_and_non_consuming_on_miss(input in ".{0,40}") {
        let p = optional(literal("needle"));
        let result = p.run(&input);
        prop_assert!(result.is_ok());
        let (value, rest) = result.unwrap();
        if value.is_none() {
            prop_assert_eq!(rest.remaining(), input.as_str());
            prop_assert_eq!(rest.pos().offset, 0);
        }
    }

    /// `many` counts exactly the leading repetitions; `many1` succeeds iff
    /// there is at least one.
    #[test]
    fn many_counts_leading_repetitions(reps in 0usize..20) {
        let input = format!("{}ZZ", "ab".repeat(reps));
        let p = many(literal("ab"));
        let (values, rest) = p.run(&input).unwrap();
        prop_assert_eq!(values.len(), reps);
        prop_assert_eq!(rest.remaining(), "ZZ");

        prop_assert_eq!(many1(literal("ab")).run(&input).is_ok(), reps >= 1);
    }

    /// `sep_by` round-trips a comma-joined digit list.
    #[test]
    fn sep_by_round_trips_digit_lists(values in prop::collection::vec(0u8..10, 0..12)) {
        let input = values
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let p = sep_by(literal(","), digit());
        let (parsed, rest) = p.run(&input).unwrap();
        prop_assert_eq!(parsed, digits_as_chars(&values));
        prop_assert!(rest.is_at_end());
    }

    /// A trailing separator never changes the items and is left unconsumed.
    #[test]
    fn sep_by_ignores_a_trailing_separator(values in prop::collection::vec(0u8..10, 1..12)) {
        let input = format!(
            "{},",
            values
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(",")
        );
        let p = sep_by(literal(","), digit());
        let (parsed, rest) = p.run(&input).unwrap();
        prop_assert_eq!(parsed, digits_as_chars(&values));
        prop_assert_eq!(rest.remaining(), ",");
    }

    /// `between` accepts exactly open + interior + close.
    #[test]
    fn between_requires_both_delimiters(values in prop::collection::vec(0u8..10, 1..8)) {
        let interior: String = digits_as_chars(&values).into_iter().collect();
        let complete = format!("({interior})");
        let missing_close = format!("({interior}");
        let missing_open = format!("{interior})");
        let p = between("(", ")", many1(digit()));

        let (parsed, rest) = p.run(&complete).unwrap();
        prop_assert_eq!(parsed, digits_as_chars(&values));
        prop_assert!(rest.is_at_end());

        prop_assert!(p.run(&missing_close).is_err());
        prop_assert!(p.run(&missing_open).is_err());
    }
}
