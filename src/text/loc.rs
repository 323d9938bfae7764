use super::TextInput;
use crate::{Input, IntoInput, Span};

/// Character input that tracks line and column numbers.
///
/// Line and column numbers start at 1. A line ends at LF, at CRLF, or at a
/// lone CR. The column counts characters, not bytes, so `"é"` advances it
/// by one.
///
/// [`LocInput`] is what makes [`Error::line`](super::Error::line) and
/// [`Error::column`](super::Error::column) available. A [`LocInput`] treats
/// the input it is created from as the very beginning of the source.
///
/// # Example
/// ```
/// use plait::Input;
/// use plait::text::LocInput;
///
/// let mut input = LocInput::new("a\r\nb");
/// input.advance_by(3);
/// assert_eq!((input.line(), input.column()), (2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocInput<I: TextInput> {
    input: I,
    line: u32,
    column: u32,
}

impl<I: TextInput> LocInput<I> {
    /// Creates a new [`LocInput`] at line 1, column 1.
    ///
    /// Input consumed before `input` is invisible to the new [`LocInput`];
    /// positions are counted from where `input` starts.
    pub fn new<N>(input: N) -> Self
    where
        N: IntoInput<Input = I>,
    {
        Self {
            input: input.into_input(),
            line: 1,
            column: 1,
        }
    }

    /// Gets the current line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Gets the current column number, counted in characters.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Gets the wrapped input at the current position.
    pub fn inner(&self) -> &I {
        &self.input
    }
}

impl<I: TextInput> Input for LocInput<I> {
    type Symbol = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        let breaks_line = match ch {
            '\n' => true,
            // CR right before LF is the first half of a single break.
            '\r' => self.input.clone().next() != Some('\n'),
            _ => false,
        };
        if breaks_line {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn pos_eq(&self, other: &Self) -> bool {
        self.input.pos_eq(&other.input)
    }

    fn size_hint(&self) -> Option<usize> {
        self.input.size_hint()
    }

    fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}

impl<'a> From<Span<LocInput<&'a str>>> for &'a str {
    fn from(span: Span<LocInput<&'a str>>) -> &'a str {
        let start = *span.start().inner();
        let end = *span.end().inner();
        &start[..(start.len() - end.len())]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn position(src: &str, count: usize) -> (u32, u32) {
        let mut input = LocInput::new(src);
        assert_eq!(input.advance_by(count), count);
        (input.line(), input.column())
    }

    #[test]
    fn starts_at_one_one() {
        assert_eq!(position("", 0), (1, 1));
    }

    #[test]
    fn columns_count_chars() {
        assert_eq!(position("héllo", 3), (1, 4));
    }

    #[test]
    fn line_endings() {
        assert_eq!(position("a\nb", 2), (2, 1));
        assert_eq!(position("a\rb", 2), (2, 1));
        assert_eq!(position("a\r\nb", 2), (1, 3));
        assert_eq!(position("a\r\nb", 3), (2, 1));
        assert_eq!(position("\r\r\n\n", 4), (4, 1));
    }

    #[test]
    fn clones_track_independently() {
        let mut first = LocInput::new("ab\ncd");
        first.advance_by(3);
        let mut second = first;
        second.next();
        assert_eq!((first.line(), first.column()), (2, 1));
        assert_eq!((second.line(), second.column()), (2, 2));
        assert!(!first.pos_eq(&second));
    }

    #[test]
    fn span_to_str() {
        let start = LocInput::new("key = value");
        let mut end = start;
        end.advance_by(3);
        assert_eq!(<&str>::from(Span::new(start, end)), "key");
    }
}
