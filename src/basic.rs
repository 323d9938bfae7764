//! Generic parsers and combinators.
//!
//! Everything in this module works with any combination of input and error
//! types. Most combinators here are also available as methods on the
//! [`Parse`] trait, which usually reads better in longer chains.
//!
//! Every parser built here upholds the same contract: on failure, the input
//! in the returned [`Failure`] is the input the parser was given, and the
//! error inside it records where the mismatch was detected.

use crate::{Error, ErrorSeed, Failure, Input, IntoInput, PResult, PResultExt, Parse, Span, Success};
use alloc::vec::Vec;
use core::marker::PhantomData;
use core::ops::{Bound, RangeBounds};

/// Creates a parser that matches exactly one of its arguments.
///
/// Each argument is tried in order, starting from the same input position,
/// and the first one to succeed determines the result. If every alternative
/// fails, the error of the last one is returned. All alternatives must
/// produce the same output and error types.
///
/// With no arguments, [`alt`] is a parser that always succeeds with `()`.
///
/// # Example
/// ```
/// use plait::prelude::*;
/// use plait::text::{str, PResult, TextInput};
///
/// fn boolean<I: TextInput>(input: I) -> PResult<bool, I> {
///     alt!(
///         str("true").with_value(true),
///         str("false").with_value(false),
///     )
///     .parse(input)
/// }
///
/// assert_eq!(boolean.parse("false;"), Ok(Success(false, ";")));
/// assert!(boolean.parse("maybe").is_err());
/// ```
pub use plait_macros::alt;

/// Creates a parser that matches a sequence of parsers.
///
/// The parsers are applied in order, each starting where the previous one
/// stopped. If all of them succeed, their values are produced as a tuple in
/// the same order. The first failure fails the whole sequence with that
/// parser's error.
///
/// [`seq`] is the variadic form of [`pair`], and is implemented with it.
///
/// # Example
/// ```
/// use plait::prelude::*;
/// use plait::text::{char_eq, char_if, PResult, TextInput};
///
/// fn assignment<I: TextInput>(input: I) -> PResult<(char, char), I> {
///     seq!(
///         char_if(|ch| ch.is_ascii_lowercase()),
///         char_eq('='),
///         char_if(|ch| ch.is_ascii_digit()),
///     )
///     .map(|(name, _, value)| (name, value))
///     .parse(input)
/// }
///
/// assert_eq!(assignment.parse("x=1"), Ok(Success(('x', '1'), "")));
/// ```
pub use plait_macros::seq;

/// Parser returned by [`constant`].
#[derive(Debug, Clone)]
pub struct ConstantParser<F, T, I, E>(F, PhantomData<fn() -> (T, I, E)>)
where
    F: Fn() -> T,
    I: Input,
    E: Error<I>;

impl<F, T, I, E> Parse<I> for ConstantParser<F, T, I, E>
where
    F: Fn() -> T,
    I: Input,
    E: Error<I>,
{
    type Parsed = T;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<T, I, E>
    where
        N: IntoInput<Input = I>,
    {
        Ok(Success((self.0)(), input.into_input()))
    }
}

/// Creates a parser that consumes nothing and produces the value returned
/// by `const_fn`.
#[inline]
pub const fn constant<F, T, I, E>(const_fn: F) -> ConstantParser<F, T, I, E>
where
    F: Fn() -> T,
    I: Input,
    E: Error<I>,
{
    ConstantParser(const_fn, PhantomData)
}

/// Parser returned by [`map`] and [`Parse::map`].
#[derive(Debug, Clone)]
pub struct MapParser<P, F, R, I>(P, F, PhantomData<fn() -> (R, I)>)
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> R;

impl<P, F, R, I> Parse<I> for MapParser<P, F, R, I>
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> R,
{
    type Parsed = R;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<R, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        self.0.parse(input).map_parsed(&self.1)
    }
}

/// Creates a parser whose parsed result is transformed.
///
/// When `parser` succeeds, `map_fn` is applied to its value and the
/// remaining input is left as `parser` returned it. When `parser` fails,
/// its failure is returned unchanged and `map_fn` is not called.
///
/// If the transformation can reject its input, use [`try_map`].
///
/// See also [`Parse::map`].
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::text::{self, PResult};
///
/// fn upper(input: &str) -> PResult<char, &str> {
///     map(text::char, |ch| ch.to_ascii_uppercase()).parse(input)
/// }
///
/// assert_eq!(upper.parse("ab"), Ok(Success('A', "b")));
/// ```
#[inline]
pub const fn map<P, F, R, I>(parser: P, map_fn: F) -> MapParser<P, F, R, I>
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> R,
{
    MapParser(parser, map_fn, PhantomData)
}

/// Parser returned by [`try_map`] and [`Parse::try_map`].
#[derive(Debug, Clone)]
pub struct TryMapParser<P, F, R, S, I>(P, F, PhantomData<fn() -> (R, S, I)>)
where
    P: Parse<I>,
    I: Input,
    S: ErrorSeed<I, P::Error>,
    F: Fn(P::Parsed) -> Result<R, S>;

impl<P, F, R, S, I> Parse<I> for TryMapParser<P, F, R, S, I>
where
    P: Parse<I>,
    I: Input,
    S: ErrorSeed<I, P::Error>,
    F: Fn(P::Parsed) -> Result<R, S>,
{
    type Parsed = R;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<R, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(val, rem) = self.0.parse(input.clone())?;
        match (self.1)(val) {
            Ok(val) => Ok(Success(val, rem)),
            Err(seed) => Err(Failure(seed.into_error(rem), input)),
        }
    }
}

/// Creates a parser whose parsed result is fallibly transformed.
///
/// When `parser` succeeds, `try_map_fn` is applied to its value. An [`Ok`]
/// value becomes the parsed result. An [`Err`] seed fails the new parser,
/// and the error is positioned at the end of `parser`'s match: the point
/// where the value was fully recognized and then rejected. When `parser`
/// itself fails, its failure is returned unchanged.
///
/// A panic in `try_map_fn` is not a parse failure and is never caught.
///
/// See also [`Parse::try_map`].
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::text::{char_if, LocInput, PResult, TextInput};
///
/// fn percent<I: TextInput>(input: I) -> PResult<u8, I> {
///     try_map(
///         char_if(|ch| ch.is_ascii_digit()).rep(1..),
///         |digits| {
///             let text: String = digits.into_iter().collect();
///             match text.parse::<u8>() {
///                 Ok(value) if value <= 100 => Ok(value),
///                 _ => Err("percentage above 100"),
///             }
///         },
///     )
///     .parse(input)
/// }
///
/// assert_eq!(percent.parse("42%"), Ok(Success(42, "%")));
///
/// let Failure(err, rem) = percent.parse(LocInput::new("250%")).unwrap_err();
/// assert_eq!(err.column(), 4);
/// assert_eq!(err.to_string(), "percentage above 100");
/// assert_eq!(rem.column(), 1);
/// ```
#[inline]
pub const fn try_map<P, F, R, S, I>(
    parser: P,
    try_map_fn: F,
) -> TryMapParser<P, F, R, S, I>
where
    P: Parse<I>,
    I: Input,
    S: ErrorSeed<I, P::Error>,
    F: Fn(P::Parsed) -> Result<R, S>,
{
    TryMapParser(parser, try_map_fn, PhantomData)
}

/// Parser returned by [`with_value`].
#[derive(Debug, Clone)]
pub struct WithValueParser<P, T, I>(P, T, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    T: Clone,
    I: Input;

impl<P, T, I> Parse<I> for WithValueParser<P, T, I>
where
    P: Parse<I>,
    T: Clone,
    I: Input,
{
    type Parsed = T;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<T, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        self.0.parse(input).map_parsed(|_| self.1.clone())
    }
}

/// Creates a parser that replaces the parsed result of `parser` with a
/// clone of `value`.
#[inline]
pub const fn with_value<P, T, I>(parser: P, value: T) -> WithValueParser<P, T, I>
where
    P: Parse<I>,
    T: Clone,
    I: Input,
{
    WithValueParser(parser, value, PhantomData)
}

/// Parses any single symbol.
pub fn pop<I: Input, E: Error<I>>(input: I) -> PResult<I::Symbol, I, E> {
    let mut rem = input.clone();
    match rem.next() {
        Some(symbol) => Ok(Success(symbol, rem)),
        None => Err(Failure(E::need_more_input(input.clone()), input)),
    }
}

/// Succeeds, consuming nothing, only at the end of input.
pub fn eof<I: Input, E: Error<I>>(input: I) -> PResult<(), I, E> {
    if input.is_empty() {
        Ok(Success((), input))
    } else {
        Err(Failure(E::expected_eof(input.clone()), input))
    }
}

/// Parser returned by [`complete`].
#[derive(Debug, Clone)]
pub struct CompleteParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for CompleteParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(val, rem) = self.0.parse(input.clone())?;
        if rem.is_empty() {
            Ok(Success(val, rem))
        } else {
            Err(Failure(Error::expected_eof(rem), input))
        }
    }
}

/// Creates a parser that fails unless `parser` consumes all of the input.
///
/// The error for leftover input is positioned where `parser` stopped.
#[inline]
pub const fn complete<P, I>(parser: P) -> CompleteParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    CompleteParser(parser, PhantomData)
}

/// Parser returned by [`recognize`].
#[derive(Debug, Clone)]
pub struct RecognizeParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for RecognizeParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = Span<I>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Span<I>, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(_, rem) = self.0.parse(input.clone())?;
        Ok(Success(Span::new(input, rem.clone()), rem))
    }
}

/// Creates a parser that produces the [`Span`] of input matched by `parser`,
/// discarding its parsed value.
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::basic::recognize;
/// use plait::text::{char_if, PResult, TextInput};
///
/// fn word<I: TextInput>(input: I) -> PResult<Span<I>, I> {
///     recognize(char_if(char::is_alphabetic).rep(1..)).parse(input)
/// }
///
/// let Success(span, rem) = word.parse("hello world").unwrap();
/// assert_eq!(<&str>::from(span), "hello");
/// assert_eq!(rem, " world");
/// ```
#[inline]
pub const fn recognize<P, I>(parser: P) -> RecognizeParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    RecognizeParser(parser, PhantomData)
}

/// Parser returned by [`not`].
#[derive(Debug, Clone)]
pub struct NotParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for NotParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = ();
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<(), I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match self.0.parse(input.clone()) {
            Ok(_) => Err(Failure(Error::unexpected_match(input.clone()), input)),
            Err(_) => Ok(Success((), input)),
        }
    }
}

/// Creates a negative lookahead parser.
///
/// The new parser succeeds with `()` where `parser` fails, and fails with
/// [`Error::unexpected_match`] where `parser` succeeds. Either way it
/// consumes no input.
#[inline]
pub const fn not<P, I>(parser: P) -> NotParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    NotParser(parser, PhantomData)
}

/// Parser returned by [`peek`].
#[derive(Debug, Clone)]
pub struct PeekParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for PeekParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(val, _) = self.0.parse(input.clone())?;
        Ok(Success(val, input))
    }
}

/// Creates a positive lookahead parser: `parser`'s result, without
/// consuming input.
#[inline]
pub const fn peek<P, I>(parser: P) -> PeekParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    PeekParser(parser, PhantomData)
}

/// Parser returned by [`opt`] and [`Parse::opt`].
#[derive(Debug, Clone)]
pub struct OptParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for OptParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = Option<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        match self.0.parse(input) {
            Ok(Success(val, rem)) => Ok(Success(Some(val), rem)),
            Err(Failure(_, rem)) => Ok(Success(None, rem)),
        }
    }
}

/// Creates a parser that matches `parser` zero or one time.
///
/// The new parser never fails. Where `parser` fails it produces [`None`]
/// and consumes nothing; where `parser` succeeds it produces [`Some`] and
/// the remaining input `parser` returned.
///
/// See also [`Parse::opt`].
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::text::{char_eq, PResult};
///
/// fn sign(input: &str) -> PResult<Option<char>, &str> {
///     opt(char_eq('-')).parse(input)
/// }
///
/// assert_eq!(sign.parse("-5"), Ok(Success(Some('-'), "5")));
/// assert_eq!(sign.parse("5"), Ok(Success(None, "5")));
/// ```
#[inline]
pub const fn opt<P, I>(parser: P) -> OptParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    OptParser(parser, PhantomData)
}

/// Parser returned by [`rep`], holding its lower and optional upper bound.
#[derive(Debug, Clone)]
pub struct RepParser<P, I>(P, usize, Option<usize>, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for RepParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let (min, max) = (self.1, self.2);
        let mut values = Vec::new();
        let mut rem = input.clone();

        while max.map_or(true, |max| values.len() < max) {
            match self.0.parse(rem.clone()) {
                Ok(Success(val, next)) => {
                    let stalled = next.pos_eq(&rem);
                    values.push(val);
                    rem = next;
                    // Once the minimum is met, a match that consumed nothing
                    // would match forever.
                    if stalled && values.len() >= min {
                        break;
                    }
                }
                Err(Failure(err, _)) if values.len() < min => return Err(Failure(err, input)),
                Err(_) => break,
            }
        }

        Ok(Success(values, rem))
    }
}

/// Creates a parser that greedily matches `parser` a number of times within
/// `range`, collecting the values into a [`Vec`].
///
/// Matching stops at the first failure of `parser`, at the upper bound of
/// `range`, or, once the lower bound is met, at a match that consumed no
/// input. If fewer than the lower bound of `range` could be matched, the
/// new parser fails with the error of the last attempt.
///
/// A range ending before zero, such as `..0`, allows no matches at all.
///
/// See also [`Parse::rep`].
///
/// # Panics
/// Panics if the lower bound of `range` exceeds its upper bound.
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::text::{char_if, PResult};
///
/// fn hex(input: &str) -> PResult<Vec<char>, &str> {
///     rep(char_if(|ch| ch.is_ascii_hexdigit()), 2..=4).parse(input)
/// }
///
/// assert_eq!(hex.parse("c0ffee"), Ok(Success(vec!['c', '0', 'f', 'f'], "ee")));
/// assert_eq!(hex.parse("ab!"), Ok(Success(vec!['a', 'b'], "!")));
/// assert!(hex.parse("a!").is_err());
/// ```
#[inline]
pub fn rep<P, R, I>(parser: P, range: R) -> RepParser<P, I>
where
    P: Parse<I>,
    R: RangeBounds<usize>,
    I: Input,
{
    let min = match range.start_bound() {
        Bound::Included(&min) => min,
        Bound::Excluded(&min) => min.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let max = match range.end_bound() {
        Bound::Included(&max) => Some(max),
        Bound::Excluded(&0) => Some(0),
        Bound::Excluded(&max) => Some(max - 1),
        Bound::Unbounded => None,
    };
    if let Some(max) = max {
        assert!(min <= max, "empty repetition range {min}..={max}");
    }
    RepParser(parser, min, max, PhantomData)
}

/// Parser returned by [`diff`] and [`Parse::diff`].
#[derive(Debug, Clone)]
pub struct DiffParser<P, Q, I>(P, Q, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    Q: Parse<I>,
    I: Input;

impl<P, Q, I> Parse<I> for DiffParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        if self.1.parse(input.clone()).is_ok() {
            return Err(Failure(Error::unexpected_match(input.clone()), input));
        }
        self.0.parse(input)
    }
}

/// Creates a parser that matches `parser` only where `excluded` does not
/// match.
///
/// `excluded` is tried first, as a negative lookahead at the current
/// position. If it matches, `parser` is never attempted and the new parser
/// fails at the current position with [`Error::unexpected_match`].
/// Otherwise the result is exactly that of `parser`. `excluded` never
/// consumes input and may have any parsed and error types.
///
/// See also [`Parse::diff`].
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::text::{char_if, str, PResult, TextInput};
///
/// fn name<I: TextInput>(input: I) -> PResult<Span<I>, I> {
///     let word = char_if(char::is_alphanumeric).rep(1..).recognize();
///     let keyword = alt!(str("if"), str("else")).then(char_if(char::is_alphanumeric).not());
///     diff(word, keyword).parse(input)
/// }
///
/// assert!(name.parse("iffy").is_ok());
/// assert!(name.parse("if x").is_err());
/// ```
#[inline]
pub const fn diff<P, Q, I>(parser: P, excluded: Q) -> DiffParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I>,
    I: Input,
{
    DiffParser(parser, excluded, PhantomData)
}

/// Parser returned by [`list`] and [`Parse::list`].
#[derive(Debug, Clone)]
pub struct ListParser<P, S, I>(P, S, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input;

impl<P, S, I> Parse<I> for ListParser<P, S, I>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(first, mut rem) = self.0.parse(input.clone())?;
        let mut values = alloc::vec![first];

        loop {
            let Ok(Success(_, after_delim)) = self.1.parse(rem.clone()) else {
                break;
            };
            match self.0.parse(after_delim) {
                Ok(Success(val, next)) => {
                    let stalled = next.pos_eq(&rem);
                    values.push(val);
                    rem = next;
                    if stalled {
                        break;
                    }
                }
                Err(Failure(err, _)) => return Err(Failure(err, input)),
            }
        }

        Ok(Success(values, rem))
    }
}

/// Creates a parser that matches one or more `parser`, separated by
/// `delimiter`, collecting the values into a [`Vec`].
///
/// The list ends at the first position where `delimiter` does not match.
/// A delimiter that matches but is not followed by another element fails
/// the whole list with that element's error: a trailing delimiter is never
/// silently left unconsumed. Delimiter values are discarded, and
/// `delimiter` may have any parsed and error types.
///
/// See also [`Parse::list`].
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::text::{char_eq, char_if, PResult};
///
/// fn letters(input: &str) -> PResult<Vec<char>, &str> {
///     list(char_if(char::is_alphabetic), char_eq(',')).parse(input)
/// }
///
/// assert_eq!(letters.parse("a,b,c;"), Ok(Success(vec!['a', 'b', 'c'], ";")));
/// assert_eq!(letters.parse("a"), Ok(Success(vec!['a'], "")));
/// assert!(letters.parse("").is_err());
/// assert!(letters.parse("a,").is_err());
/// ```
#[inline]
pub const fn list<P, S, I>(
    parser: P,
    delimiter: S,
) -> ListParser<P, S, I>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
    ListParser(parser, delimiter, PhantomData)
}

/// Parser returned by [`pair`] and [`Parse::then`].
#[derive(Debug, Clone)]
pub struct PairParser<P, Q, I>(P, Q, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input;

impl<P, Q, I> Parse<I> for PairParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input,
{
    type Parsed = (P::Parsed, Q::Parsed);
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(first, rem) = self.0.parse(input.clone())?;
        match self.1.parse(rem) {
            Ok(Success(second, rem)) => Ok(Success((first, second), rem)),
            Err(Failure(err, _)) => Err(Failure(err, input)),
        }
    }
}

/// Creates a parser that matches `first` and then `second`, producing both
/// values as a pair.
///
/// If either parser fails, the new parser fails with that parser's error.
#[inline]
pub const fn pair<P, Q, I>(
    first: P,
    second: Q,
) -> PairParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input,
{
    PairParser(first, second, PhantomData)
}

/// Parser returned by [`either`] and [`Parse::or`].
#[derive(Debug, Clone)]
pub struct EitherParser<P, Q, I>(P, Q, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    Q: Parse<I, Parsed = P::Parsed, Error = P::Error>,
    I: Input;

impl<P, Q, I> Parse<I> for EitherParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Parsed = P::Parsed, Error = P::Error>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        match self.0.parse(input) {
            Ok(succ) => Ok(succ),
            Err(Failure(_, rem)) => self.1.parse(rem),
        }
    }
}

/// Creates a parser that tries `first`, and `second` from the same position
/// if `first` fails.
///
/// See also [`alt`] for more than two alternatives.
#[inline]
pub const fn either<P, Q, I>(
    first: P,
    second: Q,
) -> EitherParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Parsed = P::Parsed, Error = P::Error>,
    I: Input,
{
    EitherParser(first, second, PhantomData)
}

/// Parser returned by [`prefix`].
#[derive(Debug, Clone)]
pub struct PrefixParser<P, Q, I>(P, Q, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input;

impl<P, Q, I> Parse<I> for PrefixParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input,
{
    type Parsed = Q::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(_, rem) = self.0.parse(input.clone())?;
        match self.1.parse(rem) {
            Ok(succ) => Ok(succ),
            Err(Failure(err, _)) => Err(Failure(err, input)),
        }
    }
}

/// Creates a parser that matches `prefix` and then `parser`, keeping only
/// the value of `parser`.
#[inline]
pub const fn prefix<P, Q, I>(prefix: P, parser: Q) -> PrefixParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input,
{
    PrefixParser(prefix, parser, PhantomData)
}

/// Parser returned by [`suffix`].
#[derive(Debug, Clone)]
pub struct SuffixParser<P, Q, I>(P, Q, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input;

impl<P, Q, I> Parse<I> for SuffixParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(val, rem) = self.0.parse(input.clone())?;
        match self.1.parse(rem) {
            Ok(Success(_, rem)) => Ok(Success(val, rem)),
            Err(Failure(err, _)) => Err(Failure(err, input)),
        }
    }
}

/// Creates a parser that matches `parser` and then `suffix`, keeping only
/// the value of `parser`.
#[inline]
pub const fn suffix<P, Q, I>(parser: P, suffix: Q) -> SuffixParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input,
{
    SuffixParser(parser, suffix, PhantomData)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::text::{self, char_eq, char_if, str, ErrorKind, LocInput, PResult, TextInput};
    use alloc::string::String;
    use alloc::vec;

    fn digit<I: TextInput>(input: I) -> PResult<char, I> {
        char_if(|ch| ch.is_ascii_digit()).parse(input)
    }

    fn letter<I: TextInput>(input: I) -> PResult<char, I> {
        char_if(|ch| ch.is_ascii_alphabetic()).parse(input)
    }

    #[test]
    fn map_keeps_failure_untouched() {
        let direct = digit.parse(LocInput::new("x")).unwrap_err();
        let mapped = map(digit, |ch| ch.to_digit(10))
            .parse(LocInput::new("x"))
            .unwrap_err();
        assert_eq!(mapped, direct);
    }

    #[test]
    fn try_map_rejects_at_rest() {
        let even = try_map(digit, |ch| {
            let value = ch.to_digit(10).unwrap_or(0);
            if value % 2 == 0 {
                Ok(value)
            } else {
                Err(String::from("odd digit"))
            }
        });
        let Success(value, rem) = even.parse(LocInput::new("4!")).unwrap();
        assert_eq!((value, rem.column()), (4, 2));

        let Failure(err, rem) = even.parse(LocInput::new("3!")).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Message("odd digit".into()));
        assert_eq!((err.line(), err.column()), (1, 2));
        assert_eq!(rem.column(), 1);
    }

    #[test]
    fn try_map_with_root_error_kind() {
        let never = try_map(digit, |_| Err::<char, _>(crate::ErrorKind::InvalidInput));
        let Failure(err, _) = never.parse("1").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidInput);
    }

    #[test]
    #[should_panic(expected = "mapping defect")]
    fn try_map_does_not_catch_panics() {
        let defect = try_map(digit, |_| -> Result<char, &'static str> { panic!("mapping defect") });
        let _ = defect.parse("1");
    }

    #[test]
    fn opt_is_total() {
        let parser = opt(str("abc"));
        assert_eq!(parser.parse("abd"), Ok(Success(None, "abd")));
        assert_eq!(parser.parse(""), Ok(Success(None, "")));
        assert_eq!(parser.parse("abcd"), Ok(Success(Some("abc"), "d")));
    }

    #[test]
    fn not_never_consumes() {
        let parser = not(digit);
        assert_eq!(parser.parse("a1"), Ok(Success((), "a1")));
        let Failure(err, rem) = parser.parse("1a").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnexpectedMatch);
        assert_eq!(rem, "1a");
    }

    #[test]
    fn diff_excludes_at_start() {
        let word = letter.rep(1..).recognize();
        let parser = diff(word, str("let"));
        assert!(parser.parse(LocInput::new("value")).is_ok());

        let Failure(err, rem) = parser.parse(LocInput::new("letter")).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnexpectedMatch);
        assert_eq!(err.column(), 1);
        assert_eq!(rem.column(), 1);
    }

    #[test]
    fn diff_excluded_parser_may_differ_in_type() {
        let parser = diff(letter, char_eq('x').with_value(()));
        assert_eq!(parser.parse("ab"), Ok(Success('a', "b")));
        assert!(parser.parse("xb").is_err());
    }

    #[test]
    fn list_propagates_element_failure() {
        let parser = list(letter, str(", "));
        let Success(values, rem) = parser.parse(LocInput::new("a, b, c.")).unwrap();
        assert_eq!(values, ['a', 'b', 'c']);
        assert_eq!(rem.inner(), &".");

        let Failure(err, rem) = parser.parse(LocInput::new("a, b, 1")).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidInput);
        assert_eq!(err.column(), 7);
        assert_eq!(rem.column(), 1);
    }

    #[test]
    fn list_stops_on_empty_matches() {
        let nothing = constant::<_, _, &str, text::Error<&str>>(|| 0);
        let parser = list(nothing, constant::<_, _, &str, text::Error<&str>>(|| ()));
        assert_eq!(parser.parse("abc"), Ok(Success(vec![0, 0], "abc")));
    }

    #[test]
    fn rep_bounds() {
        assert_eq!(digit.rep(..).parse("123x"), Ok(Success(vec!['1', '2', '3'], "x")));
        assert_eq!(digit.rep(..2).parse("123"), Ok(Success(vec!['1'], "23")));
        assert_eq!(digit.rep(0..=0).parse("123"), Ok(Success(vec![], "123")));

        let Failure(err, rem) = digit.rep(3..).parse(LocInput::new("12x")).unwrap_err();
        assert_eq!(err.column(), 3);
        assert_eq!(rem.column(), 1);
    }

    #[test]
    fn rep_stops_on_empty_matches() {
        let parser = rep(opt(digit), ..);
        assert_eq!(
            parser.parse("1a"),
            Ok(Success(vec![Some('1'), None], "a"))
        );
        let parser = rep(eof::<&str, text::Error<&str>>, 3..);
        assert_eq!(parser.parse("").map(|Success(v, _)| v.len()), Ok(3));
    }

    #[test]
    fn rep_up_to_zero_matches_nothing() {
        #[allow(clippy::reversed_empty_ranges)]
        let parser = digit.rep(..0);
        assert_eq!(parser.parse("123"), Ok(Success(vec![], "123")));
        assert_eq!(rep(digit, 0..0).parse("1"), Ok(Success(vec![], "1")));
    }

    #[test]
    fn chained_parsers_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let parser = letter::<&str>
            .list(str(", "))
            .map(|letters| letters.len())
            .opt()
            .complete();
        assert_send_sync(&parser);
        assert_send_sync(&suffix(prefix(char_eq::<&str>('('), digit.rep(1..)), char_eq(')')).recognize());
        assert_send_sync(&letter::<&str>.then(digit).or(constant(|| ('_', '0'))).diff(str("x")));
    }

    #[test]
    #[should_panic(expected = "empty repetition range")]
    fn rep_rejects_empty_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let _ = rep(digit::<&str>, 3..2);
    }

    #[test]
    fn seq_and_alt_macros() {
        let parser = seq!(letter, char_eq('='), digit.rep(1..));
        assert_eq!(
            parser.parse("x=42"),
            Ok(Success(('x', '=', vec!['4', '2']), ""))
        );

        let parser = alt!(str("<="), str("<"), str("="));
        assert_eq!(parser.parse("<=1"), Ok(Success("<=", "1")));
        assert_eq!(parser.parse("<1"), Ok(Success("<", "1")));
        let Failure(err, _) = parser.parse(">").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::ExpectedChar('='));
    }

    #[test]
    fn affixes_and_lookahead() {
        let quoted = suffix(prefix(char_eq('"'), letter.rep(..)), char_eq('"'));
        assert_eq!(quoted.parse("\"ab\"!"), Ok(Success(vec!['a', 'b'], "!")));
        assert!(quoted.parse("\"ab").is_err());

        assert_eq!(peek(letter).parse("ab"), Ok(Success('a', "ab")));
        assert_eq!(complete(letter.rep(..)).parse("ab").map(|s| s.0.len()), Ok(2));
        assert!(complete(letter).parse("ab").is_err());
        assert_eq!(pop::<_, text::Error<_>>("ab"), Ok(Success('a', "b")));
        assert!(eof::<_, text::Error<_>>("a").is_err());
    }
}
