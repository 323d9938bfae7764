//! An integer calculator.
//!
//! Run it and enter an expression at the prompt; the value is printed, or
//! the column and reason the expression was rejected.
//!
//! Operators, lowest precedence first:
//! * `n + m`, `n - m`
//! * `n * m`, `n / m`, `n % m`
//! * `-n`
//!
//! Parentheses group as usual. Numbers are signed 64-bit integers. A chain
//! of operators of equal precedence is evaluated once the whole chain is
//! parsed, so overflow or division by zero is reported at the end of the
//! chain that contains it.

use plait::prelude::*;
use plait::text::{char_eq, char_if, spaces, Error, LocInput, PResult, TextInput};

fn token<I: TextInput>(ch: char) -> impl Parse<I, Parsed = char, Error = Error<I>> {
    prefix(spaces, char_eq(ch))
}

fn number<I: TextInput>(input: I) -> PResult<i64, I> {
    prefix(spaces, char_if(|ch| ch.is_ascii_digit()).rep(1..).recognize())
        .try_map(|digits| {
            digits
                .map(|ch| i64::from(ch as u8 - b'0'))
                .try_fold(0i64, |acc, digit| acc.checked_mul(10)?.checked_add(digit))
                .ok_or("number out of range")
        })
        .parse(input)
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Op {
    fn apply(self, lhs: i64, rhs: i64) -> Result<i64, &'static str> {
        let value = match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div | Op::Rem if rhs == 0 => return Err("division by zero"),
            Op::Div => lhs.checked_div(rhs),
            Op::Rem => lhs.checked_rem(rhs),
        };
        value.ok_or("arithmetic overflow")
    }
}

fn fold_ops((init, rest): (i64, Vec<(Op, i64)>)) -> Result<i64, &'static str> {
    rest.into_iter()
        .try_fold(init, |acc, (op, rhs)| op.apply(acc, rhs))
}

fn primary<I: TextInput>(input: I) -> PResult<i64, I> {
    alt!(number, suffix(prefix(token('('), expr), token(')'))).parse(input)
}

fn unary<I: TextInput>(input: I) -> PResult<i64, I> {
    alt!(
        prefix(token('-'), unary).try_map(|value: i64| value.checked_neg().ok_or("arithmetic overflow")),
        primary,
    )
    .parse(input)
}

fn term<I: TextInput>(input: I) -> PResult<i64, I> {
    let op = alt!(
        token('*').with_value(Op::Mul),
        token('/').with_value(Op::Div),
        token('%').with_value(Op::Rem),
    );
    unary.then(op.then(unary).rep(..)).try_map(fold_ops).parse(input)
}

fn expr<I: TextInput>(input: I) -> PResult<i64, I> {
    let op = alt!(
        token('+').with_value(Op::Add),
        token('-').with_value(Op::Sub),
    );
    term.then(op.then(term).rep(..)).try_map(fold_ops).parse(input)
}

fn eval(line: &str) -> Result<i64, Error<LocInput<&str>>> {
    suffix(expr, spaces)
        .complete()
        .parse(LocInput::new(line))
        .extract()
        .0
}

fn main() -> std::io::Result<()> {
    use std::io::{BufRead, Write};

    let mut out = std::io::stdout();
    writeln!(out, "Enter 'q' to exit.")?;
    write!(out, "> ")?;
    out.flush()?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line == "q" {
            break;
        }

        if !line.trim().is_empty() {
            match eval(&line) {
                Ok(value) => writeln!(out, "{value}")?,
                // The prompt takes two columns.
                Err(err) => {
                    let width = err.column() as usize + 2;
                    writeln!(out, "{:>width$} column {}: {err}", "^", err.column())?
                }
            }
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn evaluates_with_precedence() {
        assert_eq!(eval(" 2 * (3 + 4) - -1 "), Ok(15));
        assert_eq!(eval("7 % 4 * 2"), Ok(6));
    }

    #[test]
    fn arithmetic_errors_end_the_chain() {
        let err = eval("1/0*3").unwrap_err();
        assert_eq!(err.to_string(), "division by zero");
        assert_eq!(err.column(), 6);

        let err = eval("7 % (2 - 2)").unwrap_err();
        assert_eq!(err.column(), 12);

        let err = eval("9223372036854775807 + 1").unwrap_err();
        assert_eq!(err.to_string(), "arithmetic overflow");
        assert_eq!(err.column(), 24);
    }

    #[test]
    fn rejects_trailing_input() {
        let err = eval("1 + 2 )").unwrap_err();
        assert_eq!(err.column(), 7);
    }
}
