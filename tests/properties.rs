//! Property-based tests for the combinator laws.
//!
//! Every parser is a pure function of its input position, so the laws below
//! must hold for arbitrary text, not only for well-formed grammars.

use plait::prelude::*;
use plait::text::{char_eq, char_if, str, LocInput, PResult, TextInput};
use proptest::prelude::*;

fn word<I: TextInput>(input: I) -> PResult<Span<I>, I> {
    char_if(char::is_alphanumeric).rep(1..).recognize().parse(input)
}

fn words(input: LocInput<&str>) -> PResult<Vec<Span<LocInput<&str>>>, LocInput<&str>> {
    word.list(str(" ")).parse(input)
}

/// Arbitrary text mixing the characters the parsers above care about.
fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c ,\\r\\n]{0,24}",
        "[a-zA-Z0-9 ]{0,24}",
        any::<String>(),
    ]
}

/// Runs `parser` on `source` and flattens the result into plain values that
/// can be compared.
fn summary<'a, T, P>(parser: &P, source: &'a str) -> Result<(T, u32, u32), (String, u32, u32)>
where
    P: Parse<LocInput<&'a str>, Parsed = T, Error = plait::text::Error<LocInput<&'a str>>>,
{
    match parser.parse(LocInput::new(source)) {
        Ok(Success(val, rem)) => Ok((val, rem.line(), rem.column())),
        Err(Failure(err, _)) => Err((err.to_string(), err.line(), err.column())),
    }
}

proptest! {
    #[test]
    fn parsers_are_idempotent(source in source_strategy()) {
        let parser = word.list(char_eq(',')).map(|spans| spans.len());
        prop_assert_eq!(summary(&parser, &source), summary(&parser, &source));

        let input = LocInput::new(source.as_str());
        prop_assert_eq!(words(input), words(input));
    }

    #[test]
    fn opt_is_total(source in source_strategy(), literal in "[a-c]{0,3}") {
        let Success(val, rem) = str(literal.as_str()).opt().parse(source.as_str()).unwrap();
        match val {
            Some(matched) => {
                prop_assert!(source.starts_with(matched));
                prop_assert_eq!(rem, &source[matched.len()..]);
            }
            None => {
                prop_assert!(!source.starts_with(literal.as_str()));
                prop_assert_eq!(rem, source.as_str());
            }
        }
    }

    #[test]
    fn str_round_trips(literal in "\\PC{0,12}", tail in "\\PC{0,12}") {
        let source = format!("{literal}{tail}");
        let Success(parsed, rem) = str(literal.clone()).parse(source.as_str()).unwrap();
        prop_assert_eq!(&parsed, &literal);
        prop_assert_eq!(rem, tail.as_str());

        let reparsed = str(parsed.as_str()).complete().parse(parsed.as_str());
        prop_assert_eq!(reparsed, Ok(Success(literal.as_str(), "")));
    }

    #[test]
    fn str_fails_without_consuming(literal in "[ab]{1,6}", source in "[ab]{0,8}") {
        prop_assume!(!source.starts_with(literal.as_str()));
        let Failure(err, rem) = str(literal.as_str()).parse(LocInput::new(source.as_str())).unwrap_err();
        prop_assert_eq!(rem.inner(), &source.as_str());

        let common = literal
            .chars()
            .zip(source.chars())
            .take_while(|(expected, found)| expected == found)
            .count();
        prop_assert_eq!(err.column() as usize, common + 1);
    }

    #[test]
    fn diff_agrees_with_lookahead(source in "[a-c]{0,6}") {
        let p = || char_if(|ch| ch != 'c').rep(1..);
        let q = || str("ab");
        let excluded = q().parse(source.as_str()).is_ok();
        match p().diff(q()).parse(source.as_str()) {
            Ok(succ) => {
                prop_assert!(!excluded);
                prop_assert_eq!(Ok(succ), p().parse(source.as_str()));
            }
            Err(Failure(_, rem)) => {
                prop_assert!(excluded || p().parse(source.as_str()).is_err());
                prop_assert_eq!(rem, source.as_str());
            }
        }
    }

    #[test]
    fn list_matches_separated_items(items in prop::collection::vec("[a-z0-9]{1,4}", 1..6)) {
        let source = items.join(" ");
        let Success(spans, rem) = words(LocInput::new(source.as_str())).unwrap();
        let parsed: Vec<&str> = spans.into_iter().map(<&str>::from).collect();
        prop_assert_eq!(parsed, items.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert!(rem.is_empty());
    }

    #[test]
    fn list_rejects_trailing_delimiter(items in prop::collection::vec("[a-z]{1,4}", 1..6)) {
        let source = format!("{} ", items.join(" "));
        let Failure(err, rem) = words(LocInput::new(source.as_str())).unwrap_err();
        prop_assert_eq!(err.column() as usize, source.chars().count() + 1);
        prop_assert_eq!(rem.column(), 1);
    }
}
