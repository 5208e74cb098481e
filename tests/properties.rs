use proptest::prelude::*;
use sigmacomb::{
    ParseResult, ParseResultExt, Parser, TextCursor, eof, many, rest, run, sequence, string,
};

/// Position a parser finished at, whether it matched or not
fn end_position<T>(result: &ParseResult<'_, T>) -> usize {
    result.position().unwrap_or(usize::MAX)
}

/// A cursor `offset` bytes into `input`, reached by matching the prefix
fn cursor_at(input: &str, offset: usize) -> TextCursor<'_> {
    let prefix = input[..offset].to_string();
    let (_, cursor) = string(prefix)
        .parse(TextCursor::new(input))
        .expect("prefix of the input always matches");
    cursor
}

proptest! {
    #[test]
    fn string_matches_iff_input_starts_with_literal(
        literal in "[ab!]{0,4}",
        input in "[ab!]{0,8}",
    ) {
        let result = run(&string(literal.clone()), &input);

        if input.starts_with(&literal) {
            prop_assert_eq!(result.value().map(|v| v.to_string()), Some(literal.clone()));
            prop_assert_eq!(result.position(), Some(literal.len()));
        } else {
            prop_assert!(result.is_mismatch());
            prop_assert_eq!(result.expected(), Some(literal.as_str()));
            prop_assert_eq!(result.position(), Some(0));
        }
    }

    #[test]
    fn eof_matches_only_empty_input(input in "\\PC{0,8}") {
        let result = run(&eof(), &input);

        if input.is_empty() {
            prop_assert!(result.is_success());
        } else {
            prop_assert_eq!(result.expected(), Some("end of input"));
            prop_assert_eq!(result.position(), Some(0));
        }
    }

    #[test]
    fn rest_returns_unconsumed_suffix(prefix in "[a-z]{0,4}", suffix in "\\PC{0,12}") {
        let input = format!("{}{}", prefix, suffix);
        let parser = sequence((string(prefix.clone()), rest(), rest(), eof()));
        let ((_, first, second, ()), cursor) = run(&parser, &input).unwrap();

        prop_assert_eq!(first, suffix);
        prop_assert_eq!(second, "");
        prop_assert!(cursor.is_eof());
    }

    #[test]
    fn many_stops_before_first_non_match(count in 0usize..32, tail in "[a-wyz]{0,6}") {
        let input = format!("{}{}", "x!".repeat(count), tail);
        let (items, cursor) = run(&many(string("x!")), &input).unwrap();

        prop_assert_eq!(items.len(), count);
        prop_assert_eq!(cursor.position(), count * 2);
        prop_assert_eq!(cursor.remaining(), tail.as_str());
    }

    #[test]
    fn parsers_never_move_backwards(input in "[x!y]{0,16}", offset in 0usize..=16, literal in "[x!y]{0,3}") {
        let offset = offset.min(input.len());
        let start = cursor_at(&input, offset);

        let results = [
            end_position(&string(literal.clone()).parse(start)),
            end_position(&many(string("x!")).parse(start)),
            end_position(&many(string(literal.clone())).parse(start)),
            end_position(&rest().parse(start)),
            end_position(&eof().parse(start)),
            end_position(&sequence((many(string("x!")), string("y"), rest())).parse(start)),
        ];

        for position in results {
            prop_assert!(position >= start.position());
            prop_assert!(position <= input.len());
        }

        let (_, cursor) = rest().parse(start).expect("rest always matches");
        prop_assert!(cursor.is_eof());
    }

    #[test]
    fn runs_are_deterministic(input in "[x!]{0,12}") {
        let parser = sequence((many(string("x!")), eof()));
        prop_assert_eq!(run(&parser, &input), run(&parser, &input));
    }
}
