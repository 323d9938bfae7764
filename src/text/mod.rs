//! Parsers and utilities for character input.
//!
//! Any [`Input`] whose symbols are [`char`](core::primitive::char)s is a
//! [`TextInput`]: `&str` directly, or `&str` wrapped in [`LocInput`] when
//! errors should carry line and column numbers.

use crate::{
    basic::{alt, seq},
    Error as PError, ErrorSeed, Failure, Input, IntoInput, Parse, Success,
};
use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;
use core::marker::PhantomData;

mod loc;
#[cfg(feature = "unicode")]
#[cfg_attr(docsrs, doc(cfg(feature = "unicode")))]
pub mod prop;

pub use loc::*;

#[cfg(feature = "unicode")]
pub use prop::char_with_prop;

/// Input made of characters.
pub trait TextInput: Input<Symbol = ::core::primitive::char> {}

impl<I> TextInput for I where I: Input<Symbol = ::core::primitive::char> {}

/// What went wrong, without saying where.
///
/// Every [`ErrorKind`] is also an [`ErrorSeed`] for [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input ended before the parser was satisfied.
    NeedMoreInput,
    /// The input continues where its end was required.
    ExpectedEof,
    /// A character or value failed verification.
    InvalidInput,
    /// A pattern matched where it was excluded, as by
    /// [`diff`](crate::basic::diff) or [`not`](crate::basic::not).
    UnexpectedMatch,
    /// A specific character was required.
    ExpectedChar(::core::primitive::char),
    /// A rejection with a free-form description, typically from
    /// [`Parse::try_map`].
    Message(Cow<'static, ::core::primitive::str>),
}

/// The parsing error for character input.
///
/// The [`Display`](fmt::Display) output is the human readable message. When
/// the position is a [`LocInput`], [`line`](Error::line) and
/// [`column`](Error::column) locate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error<I: Input> {
    kind: ErrorKind,
    pos: I,
}

/// The [`PResult`](crate::PResult) of a parser over character input.
pub type PResult<T, I> = crate::PResult<T, I, Error<I>>;

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeedMoreInput => f.write_str("unexpected end of input"),
            Self::ExpectedEof => f.write_str("expected end of input"),
            Self::InvalidInput => f.write_str("invalid input"),
            Self::UnexpectedMatch => f.write_str("matched an excluded pattern"),
            Self::ExpectedChar(ch) => write!(f, "expected {ch:?}"),
            Self::Message(msg) => f.write_str(msg),
        }
    }
}

impl<I: Input> Error<I> {
    /// Creates an error of `kind` located at `pos`.
    pub const fn new(kind: ErrorKind, pos: I) -> Self {
        Self { kind, pos }
    }

    /// Creates an [`ErrorKind::ExpectedChar`] error.
    pub const fn expected_char(ch: ::core::primitive::char, pos: I) -> Self {
        Self::new(ErrorKind::ExpectedChar(ch), pos)
    }

    /// Gets what went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The human readable description of this error.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl<I: TextInput> Error<LocInput<I>> {
    /// Gets the line number where the error occurred, starting at 1.
    pub fn line(&self) -> u32 {
        self.pos.line()
    }

    /// Gets the column number where the error occurred, counted in
    /// characters and starting at 1.
    pub fn column(&self) -> u32 {
        self.pos.column()
    }
}

impl<I: Input> fmt::Display for Error<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl<I: Input + fmt::Debug> core::error::Error for Error<I> {}

impl<I: Input> PError<I> for Error<I> {
    fn need_more_input(pos: I) -> Self {
        Self::new(ErrorKind::NeedMoreInput, pos)
    }

    fn expected_eof(pos: I) -> Self {
        Self::new(ErrorKind::ExpectedEof, pos)
    }

    fn invalid_input(pos: I) -> Self {
        Self::new(ErrorKind::InvalidInput, pos)
    }

    fn unexpected_match(pos: I) -> Self {
        Self::new(ErrorKind::UnexpectedMatch, pos)
    }

    fn position(&self) -> &I {
        &self.pos
    }
}

impl<I: Input> ErrorSeed<I, Error<I>> for ErrorKind {
    fn into_error(self, pos: I) -> Error<I> {
        Error::new(self, pos)
    }
}

impl<I: Input> ErrorSeed<I, Error<I>> for &'static ::core::primitive::str {
    fn into_error(self, pos: I) -> Error<I> {
        Error::new(ErrorKind::Message(Cow::Borrowed(self)), pos)
    }
}

impl<I: Input> ErrorSeed<I, Error<I>> for String {
    fn into_error(self, pos: I) -> Error<I> {
        Error::new(ErrorKind::Message(Cow::Owned(self)), pos)
    }
}

impl<I: Input> ErrorSeed<I, Error<I>> for Cow<'static, ::core::primitive::str> {
    fn into_error(self, pos: I) -> Error<I> {
        Error::new(ErrorKind::Message(self), pos)
    }
}

/// Parses any single character.
pub fn char<I: TextInput>(input: I) -> PResult<::core::primitive::char, I> {
    let mut rem = input.clone();
    match rem.next() {
        Some(ch) => Ok(Success(ch, rem)),
        None => Err(Failure(Error::need_more_input(input.clone()), input)),
    }
}

#[derive(Debug, Clone)]
struct CharEqParser<I>(::core::primitive::char, PhantomData<fn() -> I>)
where
    I: TextInput;

impl<I> Parse<I> for CharEqParser<I>
where
    I: TextInput,
{
    type Parsed = ::core::primitive::char;
    type Error = Error<I>;

    fn parse<N>(&self, input: N) -> PResult<::core::primitive::char, I>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let mut rem = input.clone();
        match rem.next() {
            Some(ch) if ch == self.0 => Ok(Success(ch, rem)),
            _ => Err(Failure(Error::expected_char(self.0, input.clone()), input)),
        }
    }
}

/// Parses exactly the character `expected`.
///
/// On a mismatch, including end of input, the error is
/// [`ErrorKind::ExpectedChar`] at the current position.
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::text::{char_eq, LocInput};
///
/// assert_eq!(char_eq(',').parse(",x"), Ok(Success(',', "x")));
///
/// let Failure(err, _) = char_eq(',').parse(LocInput::new("a;")).unwrap_err();
/// assert_eq!(err.to_string(), "expected ','");
/// assert_eq!(err.column(), 1);
/// ```
#[inline]
pub const fn char_eq<I>(
    expected: ::core::primitive::char,
) -> impl Parse<I, Parsed = ::core::primitive::char, Error = Error<I>>
where
    I: TextInput,
{
    CharEqParser(expected, PhantomData)
}

#[derive(Debug, Clone)]
struct CharIfParser<F, I>(F, PhantomData<fn() -> I>)
where
    F: Fn(::core::primitive::char) -> bool,
    I: TextInput;

impl<F, I> Parse<I> for CharIfParser<F, I>
where
    F: Fn(::core::primitive::char) -> bool,
    I: TextInput,
{
    type Parsed = ::core::primitive::char;
    type Error = Error<I>;

    fn parse<N>(&self, input: N) -> PResult<::core::primitive::char, I>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match char(input.clone()) {
            Ok(Success(ch, rem)) if (self.0)(ch) => Ok(Success(ch, rem)),
            Ok(_) => Err(Failure(Error::invalid_input(input.clone()), input)),
            Err(failure) => Err(failure),
        }
    }
}

/// Parses a character for which `predicate` holds.
#[inline]
pub const fn char_if<F, I>(
    predicate: F,
) -> impl Parse<I, Parsed = ::core::primitive::char, Error = Error<I>>
where
    F: Fn(::core::primitive::char) -> bool,
    I: TextInput,
{
    CharIfParser(predicate, PhantomData)
}

#[derive(Debug, Clone)]
struct StrParser<S, I>(S, PhantomData<fn() -> I>)
where
    S: AsRef<::core::primitive::str> + Clone,
    I: TextInput;

impl<S, I> Parse<I> for StrParser<S, I>
where
    S: AsRef<::core::primitive::str> + Clone,
    I: TextInput,
{
    type Parsed = S;
    type Error = Error<I>;

    fn parse<N>(&self, input: N) -> PResult<S, I>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let mut rem = input.clone();
        for expected in self.0.as_ref().chars() {
            match char_eq(expected).parse(rem) {
                Ok(Success(_, next)) => rem = next,
                Err(Failure(err, _)) => return Err(Failure(err, input)),
            }
        }
        Ok(Success(self.0.clone(), rem))
    }
}

/// Parses the literal string `literal`, producing `literal` itself.
///
/// The characters of `literal` are matched one after another. The first
/// character that does not match fails the parser with an
/// [`ErrorKind::ExpectedChar`] error positioned at that character. An empty
/// literal always succeeds without consuming anything.
///
/// # Example
/// ```
/// # use plait::prelude::*;
/// use plait::text::{str, LocInput};
///
/// assert_eq!(str("ab").parse("abc"), Ok(Success("ab", "c")));
/// assert_eq!(str("").parse("abc"), Ok(Success("", "abc")));
///
/// let Failure(err, rem) = str("ab").parse(LocInput::new("ac")).unwrap_err();
/// assert_eq!(err.column(), 2);
/// assert_eq!(rem.column(), 1);
/// ```
#[inline]
pub const fn str<S, I>(literal: S) -> impl Parse<I, Parsed = S, Error = Error<I>>
where
    S: AsRef<::core::primitive::str> + Clone,
    I: TextInput,
{
    StrParser(literal, PhantomData)
}

/// Parses a line break: LF, CRLF or a lone CR.
pub fn newline<I: TextInput>(input: I) -> PResult<(), I> {
    alt!(
        seq!(char_eq('\r'), char_eq('\n')).with_value(()),
        char_eq('\n').with_value(()),
        char_eq('\r').with_value(()),
    )
    .parse(input)
}

/// Skips any amount of whitespace, including none.
pub fn spaces<I: TextInput>(input: I) -> PResult<(), I> {
    char_if(::core::primitive::char::is_whitespace)
        .rep(..)
        .with_value(())
        .parse(input)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PResultExt;

    #[test]
    fn char_at_end_of_input() {
        let Failure(err, rem) = char("").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NeedMoreInput);
        assert!(rem.is_empty());
    }

    #[test]
    fn char_if_rejects_without_consuming() {
        let digit = char_if(|ch: ::core::primitive::char| ch.is_ascii_digit());
        assert_eq!(digit.parse("7up"), Ok(Success('7', "up")));
        let Failure(err, rem) = digit.parse("up").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidInput);
        assert_eq!(rem, "up");
    }

    #[test]
    fn str_reports_first_mismatch() {
        let res = str("hello").parse(LocInput::new("help"));
        let Err(Failure(err, rem)) = res else {
            panic!("expected failure");
        };
        assert_eq!(err.kind(), &ErrorKind::ExpectedChar('l'));
        assert_eq!((err.line(), err.column()), (1, 4));
        assert_eq!(rem.column(), 1);
    }

    #[test]
    fn str_accepts_owned_literal() {
        let keyword = String::from("let");
        assert_eq!(
            str(keyword.clone()).parse("let x"),
            Ok(Success(keyword, " x"))
        );
    }

    #[test]
    fn str_past_end_of_input() {
        let Failure(err, _) = str("abc").parse(LocInput::new("ab")).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::ExpectedChar('c'));
        assert_eq!(err.column(), 3);
    }

    #[test]
    fn newline_variants() {
        assert_eq!(newline("\r\nx"), Ok(Success((), "x")));
        assert_eq!(newline("\nx"), Ok(Success((), "x")));
        assert_eq!(newline("\rx"), Ok(Success((), "x")));
        assert!(newline("x").is_err());
    }

    #[test]
    fn spaces_never_fails() {
        assert_eq!(spaces("  \t x"), Ok(Success((), "x")));
        assert_eq!(*spaces("x").remaining(), "x");
    }

    #[test]
    fn seeds_become_messages() {
        let err: Error<&str> = "bad digit".into_error("rest");
        assert_eq!(err.message(), "bad digit");
        let err: Error<&str> = String::from("owned").into_error("rest");
        assert_eq!(err.to_string(), "owned");
        assert_eq!(err.position(), &"rest");
    }
}
