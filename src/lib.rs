#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # A small algebra of parser combinators.
//!
//! `plait` builds parsers out of smaller parsers. A parser is any value
//! implementing [`Parse`], which every `Fn(I) -> PResult<T, I, E>`
//! does automatically, and a combinator is a function that takes parsers and
//! returns a new one. Nothing is mutated along the way: a parser is a pure
//! function from an input position to a [`Success`] or a [`Failure`], so
//! the same parser may be invoked any number of times, from any number of
//! threads, on any positions.
//!
//! # Example
//! ```
//! use plait::prelude::*;
//! use plait::text::{char_if, str, LocInput, PResult, TextInput};
//!
//! fn digit<I: TextInput>(input: I) -> PResult<u32, I> {
//!     char_if(|ch| ch.is_ascii_digit())
//!         .map(|ch| ch as u32 - '0' as u32)
//!         .parse(input)
//! }
//!
//! fn octet<I: TextInput>(input: I) -> PResult<u8, I> {
//!     digit
//!         .rep(1..=3)
//!         .try_map(|digits| {
//!             let value = digits.into_iter().fold(0, |acc, d| acc * 10 + d);
//!             u8::try_from(value).map_err(|_| "octet out of range")
//!         })
//!         .parse(input)
//! }
//!
//! fn address<I: TextInput>(input: I) -> PResult<Vec<u8>, I> {
//!     octet.list(str(".")).parse(input)
//! }
//!
//! let Success(octets, _) = address.parse(LocInput::new("10.0.255.1")).unwrap();
//! assert_eq!(octets, [10, 0, 255, 1]);
//!
//! let Failure(err, _) = address.parse(LocInput::new("10.0.256.1")).unwrap_err();
//! assert_eq!((err.line(), err.column()), (1, 9));
//! assert_eq!(err.to_string(), "octet out of range");
//! ```
//!
//! # Results and positions
//! A parser returns a [`PResult`]. On success, [`Success`] holds the parsed
//! value and the remaining input. On failure, [`Failure`] holds the parsing
//! error and the input exactly as the parser received it, so a failed parser
//! never appears to have consumed anything. The error itself records where
//! the problem was detected, which may lie further into the input.
//!
//! [`text::LocInput`] wraps character input and tracks 1-based line and
//! column numbers; errors positioned on it report both.
//!
//! # Errors
//! The [`Error`] trait is the interface generic combinators use to create
//! errors. An [`ErrorSeed`] is an error that has not been given a position
//! yet: fallible closures passed to combinators such as [`Parse::try_map`]
//! return seeds, and the combinator supplies the position. For character
//! input, [`text::Error`] is the concrete error type, and plain strings are
//! seeds for it.
//!
//! A panic inside a closure handed to a combinator is never caught. Only
//! rejections expressed as `Err(seed)` become parse failures.
//!
//! # Features
//! * `unicode` - Enables [`text::prop`] and Unicode property matching via
//!   `icu_properties`. Enabled by default.

extern crate alloc;

mod input;
mod span;

pub mod basic;
pub mod text;

pub use input::*;
pub use span::*;

extern crate self as plait;

/// The `plait` prelude.
pub mod prelude {
    pub use super::basic::{
        alt, constant, diff, either, eof, list, map, not, opt, pair, prefix, rep, seq, suffix,
        try_map,
    };
    pub use super::{
        Error as _, ErrorSeed as _, Failure, Input, IntoInput, PResultExt, Parse, Span, Success,
    };
}

/// A parsing error.
pub trait Error<I: Input>: Sized {
    /// Creates an error for input that ended before parsing was done.
    fn need_more_input(pos: I) -> Self;

    /// Creates an error for input that continues where its end was expected.
    fn expected_eof(pos: I) -> Self;

    /// Creates an error for a symbol or value that failed verification.
    fn invalid_input(pos: I) -> Self;

    /// Creates an error for a match that was required not to happen.
    ///
    /// Used by negative lookahead ([`basic::not`]) and exclusion
    /// ([`basic::diff`]). Defaults to [`Error::invalid_input`].
    fn unexpected_match(pos: I) -> Self {
        Self::invalid_input(pos)
    }

    /// Gets the input position where the error occurred.
    fn position(&self) -> &I;
}

/// A parsing error without a position.
///
/// Combinators that accept fallible closures, such as [`Parse::try_map`],
/// expect the `Err` variant to be an [`ErrorSeed`]. The combinator decides
/// where the error is reported and calls [`into_error`](ErrorSeed::into_error).
pub trait ErrorSeed<I: Input, E: Error<I>> {
    /// Combines this seed with a position to create a parsing error.
    fn into_error(self, pos: I) -> E;
}

/// An [`ErrorSeed`] for every error and input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// Converts to an error using [`Error::need_more_input`].
    NeedMoreInput,
    /// Converts to an error using [`Error::expected_eof`].
    ExpectedEof,
    /// Converts to an error using [`Error::invalid_input`].
    InvalidInput,
    /// Converts to an error using [`Error::unexpected_match`].
    UnexpectedMatch,
}

/// Type returned by a parser when parsing succeeds.
///
/// Holds the parsed value and the remaining, unparsed input.
#[derive(Debug, Clone)]
pub struct Success<T, I>(
    /// The parsed value
    pub T,
    /// The remaining unparsed input
    pub I,
);

/// Type returned by a parser when parsing fails.
///
/// Holds the parsing error and the input the parser was given. The input
/// member is always at the same position as the input originally provided
/// to the parser; where the failure was detected is recorded by the error.
#[derive(Debug, Clone)]
pub struct Failure<E, I>(
    /// The parsing error
    pub E,
    /// The input that failed to parse
    pub I,
);

/// The [`Result`] type returned by a parser.
///
/// Unlike a typical `Result` alias, [`PResult`] has three parameters: the
/// parsed value type, the input type and the error type.
pub type PResult<T, I, E> = Result<Success<T, I>, Failure<E, I>>;

/// Trait implemented by all parsers.
///
/// Most parsers are plain functions or closures and get this trait for free.
/// The provided methods are the combinators of [`basic`] in method form.
pub trait Parse<I: Input> {
    /// The value type that is produced by the parser on success.
    type Parsed: Sized;

    /// The error type that is produced by the parser on failure.
    type Error: Error<I>;

    /// Parses the provided input.
    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>;

    /// Creates a parser whose parsed result is transformed.
    ///
    /// See [`basic::map`].
    #[inline]
    fn map<F, R>(self, map_fn: F) -> basic::MapParser<Self, F, R, I>
    where
        Self: Sized,
        F: Fn(Self::Parsed) -> R,
    {
        basic::map(self, map_fn)
    }

    /// Creates a parser whose parsed result is fallibly transformed.
    ///
    /// See [`basic::try_map`].
    ///
    /// # Example
    /// ```
    /// # use plait::prelude::*;
    /// use plait::text::{char, LocInput, PResult, TextInput};
    ///
    /// fn vowel<I: TextInput>(input: I) -> PResult<char, I> {
    ///     char.try_map(|ch| if "aeiou".contains(ch) { Ok(ch) } else { Err("not a vowel") })
    ///         .parse(input)
    /// }
    ///
    /// assert_eq!(vowel.parse("abc").unwrap().0, 'a');
    ///
    /// let Failure(err, _) = vowel.parse(LocInput::new("xyz")).unwrap_err();
    /// assert_eq!(err.column(), 2);
    /// assert_eq!(err.to_string(), "not a vowel");
    /// ```
    #[inline]
    fn try_map<F, R, S>(self, map_fn: F) -> basic::TryMapParser<Self, F, R, S, I>
    where
        Self: Sized,
        S: ErrorSeed<I, Self::Error>,
        F: Fn(Self::Parsed) -> Result<R, S>,
    {
        basic::try_map(self, map_fn)
    }

    /// Replaces the parsed value with a clone of `value`.
    ///
    /// See [`basic::with_value`].
    #[inline]
    fn with_value<T>(self, value: T) -> basic::WithValueParser<Self, T, I>
    where
        Self: Sized,
        T: Clone,
    {
        basic::with_value(self, value)
    }

    /// Sequences `self` and `other`, producing both values as a pair.
    ///
    /// See [`basic::pair`].
    #[inline]
    fn then<P>(self, other: P) -> basic::PairParser<Self, P, I>
    where
        Self: Sized,
        P: Parse<I, Error = Self::Error>,
    {
        basic::pair(self, other)
    }

    /// Tries `self`, and `other` when `self` fails.
    ///
    /// See [`basic::either`].
    #[inline]
    fn or<P>(self, other: P) -> basic::EitherParser<Self, P, I>
    where
        Self: Sized,
        P: Parse<I, Parsed = Self::Parsed, Error = Self::Error>,
    {
        basic::either(self, other)
    }

    /// Negative lookahead: succeeds, consuming nothing, where `self` fails.
    ///
    /// See [`basic::not`].
    #[inline]
    fn not(self) -> basic::NotParser<Self, I>
    where
        Self: Sized,
    {
        basic::not(self)
    }

    /// Positive lookahead: parses with `self` without consuming input.
    ///
    /// See [`basic::peek`].
    #[inline]
    fn peek(self) -> basic::PeekParser<Self, I>
    where
        Self: Sized,
    {
        basic::peek(self)
    }

    /// Makes `self` optional. The new parser never fails.
    ///
    /// See [`basic::opt`].
    #[inline]
    fn opt(self) -> basic::OptParser<Self, I>
    where
        Self: Sized,
    {
        basic::opt(self)
    }

    /// Applies `self` repeatedly, as many times as `range` allows.
    ///
    /// See [`basic::rep`].
    #[inline]
    fn rep<R>(self, range: R) -> basic::RepParser<Self, I>
    where
        Self: Sized,
        R: core::ops::RangeBounds<usize>,
    {
        basic::rep(self, range)
    }

    /// Matches `self` only where `excluded` does not match.
    ///
    /// See [`basic::diff`].
    #[inline]
    fn diff<Q>(self, excluded: Q) -> basic::DiffParser<Self, Q, I>
    where
        Self: Sized,
        Q: Parse<I>,
    {
        basic::diff(self, excluded)
    }

    /// Matches one or more `self` separated by `delimiter`.
    ///
    /// See [`basic::list`].
    #[inline]
    fn list<S>(self, delimiter: S) -> basic::ListParser<Self, S, I>
    where
        Self: Sized,
        S: Parse<I>,
    {
        basic::list(self, delimiter)
    }

    /// Produces the [`Span`] of input matched by `self`.
    ///
    /// See [`basic::recognize`].
    #[inline]
    fn recognize(self) -> basic::RecognizeParser<Self, I>
    where
        Self: Sized,
    {
        basic::recognize(self)
    }

    /// Requires `self` to consume the whole input.
    ///
    /// See [`basic::complete`].
    #[inline]
    fn complete(self) -> basic::CompleteParser<Self, I>
    where
        Self: Sized,
    {
        basic::complete(self)
    }
}

mod sealed {
    use super::{Error, Input, PResult};

    pub trait Sealed {}

    impl<T, I: Input, E: Error<I>> Sealed for PResult<T, I, E> {}
}

/// Additional convenience methods for [`PResult`].
pub trait PResultExt: sealed::Sealed {
    type Parsed;
    type Error: Error<Self::Input>;
    type Input: Input;

    /// The remaining input on success, or the untouched input on failure.
    fn remaining(&self) -> &Self::Input;

    fn extract(self) -> (Result<Self::Parsed, Self::Error>, Self::Input);

    fn map_parsed<F, R>(self, map_fn: F) -> PResult<R, Self::Input, Self::Error>
    where
        F: FnOnce(Self::Parsed) -> R;
}

impl<T, I: Input, E: Error<I>> PResultExt for PResult<T, I, E> {
    type Parsed = T;
    type Error = E;
    type Input = I;

    fn remaining(&self) -> &I {
        match self {
            Ok(Success(_, rem)) => rem,
            Err(Failure(_, rem)) => rem,
        }
    }

    fn extract(self) -> (Result<T, E>, I) {
        match self {
            Ok(Success(val, rem)) => (Ok(val), rem),
            Err(Failure(err, rem)) => (Err(err), rem),
        }
    }

    fn map_parsed<F, R>(self, map_fn: F) -> PResult<R, I, E>
    where
        F: FnOnce(T) -> R,
    {
        self.map(move |succ| succ.map(map_fn))
    }
}

impl<F, T, I, E> Parse<I> for F
where
    F: Fn(I) -> PResult<T, I, E>,
    I: Input,
    E: Error<I>,
{
    type Parsed = T;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<T, I, E>
    where
        N: IntoInput<Input = I>,
    {
        (*self)(input.into_input())
    }
}

impl<T, I: Input> Success<T, I> {
    pub fn map<F, R>(self, map_fn: F) -> Success<R, I>
    where
        F: FnOnce(T) -> R,
    {
        let Success(val, rem) = self;
        Success(map_fn(val), rem)
    }
}

impl<I: Input, E: Error<I>> ErrorSeed<I, E> for core::convert::Infallible {
    fn into_error(self, _pos: I) -> E {
        match self {}
    }
}

impl<I: Input, E: Error<I>> ErrorSeed<I, E> for ErrorKind {
    fn into_error(self, pos: I) -> E {
        match self {
            Self::NeedMoreInput => E::need_more_input(pos),
            Self::ExpectedEof => E::expected_eof(pos),
            Self::InvalidInput => E::invalid_input(pos),
            Self::UnexpectedMatch => E::unexpected_match(pos),
        }
    }
}

impl<LT, LI, RT, RI> PartialEq<Success<RT, RI>> for Success<LT, LI>
where
    LT: PartialEq<RT>,
    LI: PartialEq<RI>,
{
    fn eq(&self, other: &Success<RT, RI>) -> bool {
        PartialEq::eq(&self.0, &other.0) && PartialEq::eq(&self.1, &other.1)
    }
}

impl<T: Eq, I: Eq> Eq for Success<T, I> {}

impl<LE, LI, RE, RI> PartialEq<Failure<RE, RI>> for Failure<LE, LI>
where
    LE: PartialEq<RE>,
    LI: PartialEq<RI>,
{
    fn eq(&self, other: &Failure<RE, RI>) -> bool {
        PartialEq::eq(&self.0, &other.0) && PartialEq::eq(&self.1, &other.1)
    }
}

impl<E: Eq, I: Eq> Eq for Failure<E, I> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::text::{char_eq, LocInput};

    #[test]
    fn presult_ext_keeps_positions() {
        let comma = char_eq(',');

        let res = comma.parse(LocInput::new(",x"));
        assert_eq!(res.remaining().column(), 2);
        let (parsed, rem) = res.map_parsed(|_| ';').extract();
        assert_eq!((parsed.ok(), rem.column()), (Some(';'), 2));

        let res = comma.parse(LocInput::new("x,"));
        assert_eq!(res.remaining().column(), 1);
        let (parsed, rem) = res.map_parsed(|_| ';').extract();
        assert_eq!(parsed.map_err(|err| err.column()), Err(1));
        assert_eq!(rem.inner(), &"x,");
    }
}
