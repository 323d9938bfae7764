//! Unicode character properties.
//!
//! A [`Property`] is a set of characters. Properties compose with the `!`,
//! `&` and `|` operators, and [`char_with_prop`] turns one into a parser:
//!
//! ```
//! # use plait::prelude::*;
//! use plait::text::prop::{char_with_prop, GeneralCategory, XidContinue, XidStart};
//!
//! let ident_start = char_with_prop(XidStart | GeneralCategory::ConnectorPunctuation);
//! assert_eq!(ident_start.parse("_x"), Ok(Success('_', "x")));
//!
//! let not_digit = char_with_prop(XidContinue & !GeneralCategory::DecimalNumber);
//! assert!(not_digit.parse("7").is_err());
//! ```

use super::{Error, PResult, TextInput};
use crate::{Error as _, Failure, IntoInput, Parse, Success};
use core::marker::PhantomData;
use icu_properties::props::{self as icup, BinaryProperty, EnumeratedProperty};

/// A set of characters defined by Unicode character properties.
pub trait Property: core::fmt::Debug + Copy {
    fn contains(self, ch: char) -> bool;
}

/// Characters not in the inner property.
#[derive(Debug, Clone, Copy)]
pub struct Not<P: Property>(P);

/// Characters in both properties.
#[derive(Debug, Clone, Copy)]
pub struct And<L: Property, R: Property>(L, R);

/// Characters in either property.
#[derive(Debug, Clone, Copy)]
pub struct Or<L: Property, R: Property>(L, R);

pub const fn not<P: Property>(property: P) -> Not<P> {
    Not(property)
}

pub const fn and<L: Property, R: Property>(lhs: L, rhs: R) -> And<L, R> {
    And(lhs, rhs)
}

pub const fn or<L: Property, R: Property>(lhs: L, rhs: R) -> Or<L, R> {
    Or(lhs, rhs)
}

impl<P: Property> Property for Not<P> {
    fn contains(self, ch: char) -> bool {
        !self.0.contains(ch)
    }
}

impl<L: Property, R: Property> Property for And<L, R> {
    fn contains(self, ch: char) -> bool {
        self.0.contains(ch) && self.1.contains(ch)
    }
}

impl<L: Property, R: Property> Property for Or<L, R> {
    fn contains(self, ch: char) -> bool {
        self.0.contains(ch) || self.1.contains(ch)
    }
}

macro_rules! impl_prop_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> core::ops::Not for $ty {
            type Output = Not<Self>;

            fn not(self) -> Not<Self> {
                Not(self)
            }
        }

        impl<$($gen)* Rhs: Property> core::ops::BitAnd<Rhs> for $ty {
            type Output = And<Self, Rhs>;

            fn bitand(self, rhs: Rhs) -> And<Self, Rhs> {
                And(self, rhs)
            }
        }

        impl<$($gen)* Rhs: Property> core::ops::BitOr<Rhs> for $ty {
            type Output = Or<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
                Or(self, rhs)
            }
        }
    };
}

impl_prop_ops!([P: Property,] Not<P>);
impl_prop_ops!([L: Property, R: Property,] And<L, R>);
impl_prop_ops!([L: Property, R: Property,] Or<L, R>);

macro_rules! def_bool_prop {
    ($($(#[$attr:meta])* $ty:ident => $prop:ty;)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy)]
            pub struct $ty;

            impl Property for $ty {
                fn contains(self, ch: char) -> bool {
                    <$prop as BinaryProperty>::for_char(ch)
                }
            }

            impl_prop_ops!([] $ty);
        )*
    };
}

def_bool_prop! {
    Alphabetic => icup::Alphabetic;
    AsciiHexDigit => icup::AsciiHexDigit;
    Dash => icup::Dash;
    Emoji => icup::Emoji;
    HexDigit => icup::HexDigit;
    /// Characters that may continue an identifier, as in UAX #31.
    IdContinue => icup::IdContinue;
    /// Characters that may start an identifier, as in UAX #31.
    IdStart => icup::IdStart;
    Ideographic => icup::Ideographic;
    Lowercase => icup::Lowercase;
    Math => icup::Math;
    PatternSyntax => icup::PatternSyntax;
    PatternWhiteSpace => icup::PatternWhiteSpace;
    QuotationMark => icup::QuotationMark;
    Uppercase => icup::Uppercase;
    WhiteSpace => icup::WhiteSpace;
    /// [`IdContinue`], closed under NFKC normalization.
    XidContinue => icup::XidContinue;
    /// [`IdStart`], closed under NFKC normalization.
    XidStart => icup::XidStart;
}

/// The Unicode General_Category of a character.
///
/// Each variant is the [`Property`] of having that category. The
/// associated constants group the categories by major class, e.g.
/// [`GeneralCategory::LETTER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneralCategory {
    Unassigned,
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    PrivateUse,
    Surrogate,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    ConnectorPunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
}

impl GeneralCategory {
    /// Gets the category of a character.
    pub fn of(ch: char) -> Self {
        use icup::GeneralCategory as Gc;

        match <Gc as EnumeratedProperty>::for_char(ch) {
            Gc::Unassigned => Self::Unassigned,
            Gc::UppercaseLetter => Self::UppercaseLetter,
            Gc::LowercaseLetter => Self::LowercaseLetter,
            Gc::TitlecaseLetter => Self::TitlecaseLetter,
            Gc::ModifierLetter => Self::ModifierLetter,
            Gc::OtherLetter => Self::OtherLetter,
            Gc::NonspacingMark => Self::NonspacingMark,
            Gc::SpacingMark => Self::SpacingMark,
            Gc::EnclosingMark => Self::EnclosingMark,
            Gc::DecimalNumber => Self::DecimalNumber,
            Gc::LetterNumber => Self::LetterNumber,
            Gc::OtherNumber => Self::OtherNumber,
            Gc::SpaceSeparator => Self::SpaceSeparator,
            Gc::LineSeparator => Self::LineSeparator,
            Gc::ParagraphSeparator => Self::ParagraphSeparator,
            Gc::Control => Self::Control,
            Gc::Format => Self::Format,
            Gc::PrivateUse => Self::PrivateUse,
            Gc::Surrogate => Self::Surrogate,
            Gc::DashPunctuation => Self::DashPunctuation,
            Gc::OpenPunctuation => Self::OpenPunctuation,
            Gc::ClosePunctuation => Self::ClosePunctuation,
            Gc::ConnectorPunctuation => Self::ConnectorPunctuation,
            Gc::InitialPunctuation => Self::InitialPunctuation,
            Gc::FinalPunctuation => Self::FinalPunctuation,
            Gc::OtherPunctuation => Self::OtherPunctuation,
            Gc::MathSymbol => Self::MathSymbol,
            Gc::CurrencySymbol => Self::CurrencySymbol,
            Gc::ModifierSymbol => Self::ModifierSymbol,
            Gc::OtherSymbol => Self::OtherSymbol,
            #[allow(unreachable_patterns)]
            _ => Self::Unassigned,
        }
    }

    pub const LETTER: Or<Self, Or<Self, Or<Self, Or<Self, Self>>>> = or(
        Self::UppercaseLetter,
        or(
            Self::LowercaseLetter,
            or(
                Self::TitlecaseLetter,
                or(Self::ModifierLetter, Self::OtherLetter),
            ),
        ),
    );

    pub const MARK: Or<Self, Or<Self, Self>> = or(
        Self::NonspacingMark,
        or(Self::SpacingMark, Self::EnclosingMark),
    );

    pub const NUMBER: Or<Self, Or<Self, Self>> = or(
        Self::DecimalNumber,
        or(Self::LetterNumber, Self::OtherNumber),
    );

    pub const SEPARATOR: Or<Self, Or<Self, Self>> = or(
        Self::SpaceSeparator,
        or(Self::LineSeparator, Self::ParagraphSeparator),
    );
}

impl Property for GeneralCategory {
    fn contains(self, ch: char) -> bool {
        self == Self::of(ch)
    }
}

impl_prop_ops!([] GeneralCategory);

#[derive(Debug, Clone)]
struct CharWithPropParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Property,
    I: TextInput;

impl<P, I> Parse<I> for CharWithPropParser<P, I>
where
    P: Property,
    I: TextInput,
{
    type Parsed = char;
    type Error = Error<I>;

    fn parse<N>(&self, input: N) -> PResult<char, I>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match super::char(input.clone()) {
            Ok(Success(ch, rem)) if self.0.contains(ch) => Ok(Success(ch, rem)),
            Ok(_) => Err(Failure(Error::invalid_input(input.clone()), input)),
            Err(failure) => Err(failure),
        }
    }
}

/// Parses a character that has `property`.
#[inline]
pub const fn char_with_prop<P, I>(property: P) -> impl Parse<I, Parsed = char, Error = Error<I>>
where
    P: Property,
    I: TextInput,
{
    CharWithPropParser(property, PhantomData)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn composed_properties() {
        let ident_continue = XidContinue | GeneralCategory::ConnectorPunctuation;
        assert!(ident_continue.contains('é'));
        assert!(ident_continue.contains('_'));
        assert!(!ident_continue.contains('-'));
        assert!((!WhiteSpace).contains('x'));
        assert!(!(Alphabetic & Uppercase).contains('a'));
    }

    #[test]
    fn general_category_groups() {
        assert_eq!(GeneralCategory::of('7'), GeneralCategory::DecimalNumber);
        assert!(GeneralCategory::LETTER.contains('ß'));
        assert!(GeneralCategory::SEPARATOR.contains(' '));
        assert!(!GeneralCategory::NUMBER.contains('x'));
    }

    #[test]
    fn char_with_prop_rejects_in_place() {
        let space = char_with_prop(WhiteSpace);
        assert_eq!(space.parse("\u{3000}a"), Ok(Success('\u{3000}', "a")));
        let Failure(err, rem) = space.parse("a").unwrap_err();
        assert_eq!(err.kind(), &crate::text::ErrorKind::InvalidInput);
        assert_eq!(rem, "a");
    }
}
