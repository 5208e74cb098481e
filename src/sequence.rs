use crate::cursor::TextCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// A group of parsers that run one after another
///
/// Implemented for tuples of up to twelve parsers, whose outputs are collected
/// positionally into a tuple, and for `Vec<P>`, whose outputs are collected
/// into a `Vec`.
pub trait Sequence {
    type Output;

    fn parse_all<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output>;
}

macro_rules! impl_sequence {
    ($($parser:ident $value:ident $index:tt),+) => {
        impl<$($parser),+> Sequence for ($($parser,)+)
        where
            $($parser: Parser,)+
        {
            type Output = ($($parser::Output,)+);

            fn parse_all<'code>(
                &self,
                cursor: TextCursor<'code>,
            ) -> ParseResult<'code, Self::Output> {
                $(let ($value, cursor) = self.$index.parse(cursor)?;)+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

impl_sequence!(A a 0);
impl_sequence!(A a 0, B b 1);
impl_sequence!(A a 0, B b 1, C c 2);
impl_sequence!(A a 0, B b 1, C c 2, D d 3);
impl_sequence!(A a 0, B b 1, C c 2, D d 3, E e 4);
impl_sequence!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5);
impl_sequence!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6);
impl_sequence!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7);
impl_sequence!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8);
impl_sequence!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9);
impl_sequence!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9, K k 10);
impl_sequence!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9, K k 10, L l 11);

impl<P> Sequence for Vec<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse_all<'code>(&self, mut cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::with_capacity(self.len());

        for parser in self {
            let (value, next_cursor) = parser.parse(cursor)?;
            values.push(value);
            cursor = next_cursor;
        }

        Ok((values, cursor))
    }
}

/// Parser combinator that runs its children in order
///
/// The first child to fail decides the result: its failure is returned as is,
/// so the diagnostic points at the most specific mismatch rather than at the
/// sequence as a whole.
pub struct SequenceParser<S> {
    parsers: S,
}

impl<S> SequenceParser<S> {
    pub fn new(parsers: S) -> Self {
        SequenceParser { parsers }
    }
}

impl<S> Parser for SequenceParser<S>
where
    S: Sequence,
{
    type Output = S::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parsers.parse_all(cursor)
    }
}

/// Convenience function to create a SequenceParser
///
/// ```
/// use sigmacomb::{eof, run, sequence, string};
///
/// let parser = sequence((string("start"), eof()));
/// let ((start, ()), _) = run(&parser, "start").unwrap();
/// assert_eq!(start, "start");
/// ```
pub fn sequence<S>(parsers: S) -> SequenceParser<S>
where
    S: Sequence,
{
    SequenceParser::new(parsers)
}
