/// A parsable symbol stream.
///
/// [`Input`] plays the role of a position in the source. It is an
/// [`Iterator`]-like cursor that must be cheap to clone, where a clone is an
/// independent position: advancing one never moves another. Combinators
/// backtrack simply by holding on to a clone of the input they were given.
///
/// Two inputs can be compared for positional equality with
/// [`pos_eq`](Input::pos_eq), which lets combinators detect whether a parser
/// made progress.
pub trait Input: Clone {
    /// The symbol type this input provides a stream of.
    type Symbol;

    /// Gets the next symbol in the stream.
    ///
    /// [`None`] indicates that the end of the input has been reached.
    fn next(&mut self) -> Option<Self::Symbol>;

    /// Returns `true` if both inputs are at the same position of the stream.
    fn pos_eq(&self, other: &Self) -> bool;

    /// Advances the stream by a given number of symbols.
    ///
    /// The number of skipped symbols is returned. It is only less than
    /// `count` when the end of input was reached.
    fn advance_by(&mut self, count: usize) -> usize {
        for idx in 0..count {
            let Some(_) = self.next() else {
                return idx;
            };
        }
        count
    }

    /// Returns the remaining number of symbols, if known in constant time.
    fn size_hint(&self) -> Option<usize> {
        None
    }

    /// Returns `true` if the stream is at the end of input.
    fn is_empty(&self) -> bool {
        self.clone().next().is_none()
    }
}

/// Trait for types that can be directly converted into an [`Input`] type.
///
/// [`IntoInput`] is to [`Input`] what [`IntoIterator`] is to [`Iterator`].
/// [`Parse::parse`](crate::Parse::parse) accepts any [`IntoInput`], so
/// `parser.parse(&my_string)` works without an explicit conversion.
pub trait IntoInput {
    /// The symbol type of the [`Input`] this type will convert to.
    type Symbol;

    /// The [`Input`] this type will convert to.
    type Input: Input<Symbol = Self::Symbol>;

    /// Convert to an [`Input`] type.
    fn into_input(self) -> Self::Input;
}

impl<T: Copy> Input for &[T] {
    type Symbol = T;

    fn next(&mut self) -> Option<Self::Symbol> {
        let (head, tail) = self.split_first()?;
        *self = tail;
        Some(*head)
    }

    fn pos_eq(&self, other: &Self) -> bool {
        self.as_ptr() == other.as_ptr()
    }

    fn advance_by(&mut self, count: usize) -> usize {
        let count = core::cmp::min(self.len(), count);
        *self = &self[count..];
        count
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(*self)
    }
}

impl Input for &str {
    type Symbol = char;

    fn next(&mut self) -> Option<Self::Symbol> {
        let mut chars = self.chars();
        let ret = chars.next();
        *self = chars.as_str();
        ret
    }

    fn pos_eq(&self, other: &Self) -> bool {
        self.as_ptr() == other.as_ptr()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(*self)
    }
}

impl<I: Input> IntoInput for I {
    type Symbol = <I as Input>::Symbol;
    type Input = I;

    fn into_input(self) -> Self::Input {
        self
    }
}

impl<'a, T: Copy, const LEN: usize> IntoInput for &'a [T; LEN] {
    type Symbol = T;
    type Input = &'a [T];

    fn into_input(self) -> Self::Input {
        self
    }
}

impl<'a, T: Copy> IntoInput for &'a alloc::vec::Vec<T> {
    type Symbol = T;
    type Input = &'a [T];

    fn into_input(self) -> &'a [T] {
        self
    }
}

impl<'a> IntoInput for &'a alloc::string::String {
    type Symbol = char;
    type Input = &'a str;

    fn into_input(self) -> &'a str {
        self
    }
}

impl<'a> IntoInput for &'a alloc::boxed::Box<str> {
    type Symbol = char;
    type Input = &'a str;

    fn into_input(self) -> &'a str {
        self
    }
}

impl<'a> IntoInput for &'a alloc::rc::Rc<str> {
    type Symbol = char;
    type Input = &'a str;

    fn into_input(self) -> &'a str {
        self
    }
}

impl<'a> IntoInput for &'a alloc::sync::Arc<str> {
    type Symbol = char;
    type Input = &'a str;

    fn into_input(self) -> &'a str {
        self
    }
}
