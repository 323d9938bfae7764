use crate::Input;
use core::fmt;

/// The stretch of input matched by a parser.
///
/// A [`Span`] is produced by [`recognize`](crate::basic::recognize) and
/// [`Parse::recognize`](crate::Parse::recognize). It holds the position the
/// match started at and the position just past its end, and can itself be
/// consumed as an [`Input`] that stops at `end`. Spans over `&str`, `&[T]`
/// and [`LocInput<&str>`](crate::text::LocInput) convert back into slices
/// with [`From`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<I: Input> {
    start: I,
    end: I,
}

impl<I: Input + Copy> Copy for Span<I> {}

impl<I: Input> Span<I> {
    /// Creates a new [`Span`] covering the input from `start` up to `end`.
    ///
    /// `end` must be reachable from `start` by advancing it.
    pub fn new(start: I, end: I) -> Self {
        Self { start, end }
    }

    /// Gets the position of the first symbol in the span.
    pub fn start(&self) -> &I {
        &self.start
    }

    /// Gets the position just past the last symbol in the span.
    pub fn end(&self) -> &I {
        &self.end
    }

    /// Splits the span back into its start and end positions.
    pub fn into_bounds(self) -> (I, I) {
        (self.start, self.end)
    }

    /// A [`Span`] is empty when it starts and ends at the same position.
    pub fn is_empty(&self) -> bool {
        self.start.pos_eq(&self.end)
    }

    /// Counts the symbols in the span.
    ///
    /// Constant time when the underlying input knows its remaining length,
    /// otherwise the span is walked.
    pub fn len(&self) -> usize {
        match Input::size_hint(self) {
            Some(len) => len,
            None => self.clone().count(),
        }
    }
}

impl<I: Input> Input for Span<I> {
    type Symbol = I::Symbol;

    fn next(&mut self) -> Option<Self::Symbol> {
        if self.is_empty() {
            return None;
        }
        self.start.next()
    }

    fn pos_eq(&self, other: &Self) -> bool {
        self.start.pos_eq(&other.start)
    }

    fn size_hint(&self) -> Option<usize> {
        let start = self.start.size_hint()?;
        let end = self.end.size_hint()?;
        start.checked_sub(end)
    }

    fn is_empty(&self) -> bool {
        Span::is_empty(self)
    }
}

impl<I: Input> Iterator for Span<I> {
    type Item = I::Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        Input::next(self)
    }
}

/// Writes the symbols of the span back to back.
impl<I> fmt::Display for Span<I>
where
    I: Input,
    I::Symbol: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.clone().try_for_each(|symbol| symbol.fmt(f))
    }
}

impl<'a> From<Span<&'a str>> for &'a str {
    fn from(span: Span<&'a str>) -> &'a str {
        let (start, end) = span.into_bounds();
        &start[..start.len() - end.len()]
    }
}

impl<'a, T: Copy> From<Span<&'a [T]>> for &'a [T] {
    fn from(span: Span<&'a [T]>) -> &'a [T] {
        let (start, end) = span.into_bounds();
        &start[..start.len() - end.len()]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::text::LocInput;
    use alloc::string::{String, ToString};

    #[test]
    fn span_iterates_up_to_end() {
        let source = "key=value";
        let span = Span::new(source, &source[3..]);
        assert_eq!(span.clone().collect::<String>(), "key");
        assert_eq!(<&str>::from(span), "key");
    }

    #[test]
    fn empty_span() {
        let source = "abc";
        assert!(Span::new(&source[1..], &source[1..]).is_empty());
        assert!(!Span::new(source, &source[1..]).is_empty());
    }

    #[test]
    fn len_counts_symbols() {
        let source = "héllo wörld";
        let span = Span::new(source, &source[6..]);
        assert_eq!(span.len(), 5);

        let bytes: &[u8] = &[1, 2, 3, 4];
        let span = Span::new(bytes, &bytes[3..]);
        assert_eq!(Input::size_hint(&span), Some(3));
        assert_eq!(<&[u8]>::from(span), [1, 2, 3]);

        let mut end = LocInput::new("a\nbc");
        end.advance_by(3);
        assert_eq!(Span::new(LocInput::new("a\nbc"), end).len(), 3);
    }

    #[test]
    fn display_writes_symbols() {
        let source = "[1, 2]";
        assert_eq!(Span::new(&source[1..], &source[5..]).to_string(), "1, 2");
        assert_eq!(Span::new(source, source).to_string(), "");
    }
}
