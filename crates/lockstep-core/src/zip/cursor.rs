// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::cursor::Cursor;

/// A tuple of cursors moved and compared as one.
///
/// Implemented for tuples of 1 to 8 [`Cursor`]s. Every operation is a fold
/// over the components in declaration order.
pub trait CursorTuple: Clone {
    /// Moves every component `n` positions forward.
    fn advance_all(&mut self, n: usize);

    /// Moves every component `n` positions backward.
    fn retreat_all(&mut self, n: usize);

    /// Returns `true` if at least one component of `self` equals the
    /// component of `other` at the same position.
    fn any_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_cursor_tuple {
    ($($c:ident $idx:tt),+) => {
        impl<$($c: Cursor),+> CursorTuple for ($($c,)+) {
            #[inline]
            fn advance_all(&mut self, n: usize) {
                $(self.$idx.advance_by(n);)+
            }

            #[inline]
            fn retreat_all(&mut self, n: usize) {
                $(self.$idx.retreat_by(n);)+
            }

            #[inline]
            fn any_eq(&self, other: &Self) -> bool {
                false $(|| self.$idx == other.$idx)+
            }
        }
    };
}

impl_cursor_tuple!(A 0);
impl_cursor_tuple!(A 0, B 1);
impl_cursor_tuple!(A 0, B 1, C 2);
impl_cursor_tuple!(A 0, B 1, C 2, D 3);
impl_cursor_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// A position within a [`Zip`](crate::zip::Zip): one cursor per lane, in
/// lane order.
///
/// Moving a `ZipCursor` moves every component unconditionally, including
/// components whose lane is already exhausted.
///
/// # Equality
///
/// Two zip cursors are equal as soon as **any** pair of components is
/// equal. Comparing a traversal cursor against the zip's `end()` therefore
/// reports "done" the moment the shortest lane runs out. Inequality is the
/// exact negation of equality. Because the relation is not transitive,
/// compare only against the `end()` (or `begin()`) of the same zip, never
/// two arbitrary mid-traversal cursors.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::cursor::index::IndexCursor;
/// # use lockstep_core::zip::ZipCursor;
/// let at = ZipCursor::new((IndexCursor::new(2), IndexCursor::new(2)));
/// let end = ZipCursor::new((IndexCursor::new(5), IndexCursor::new(2)));
/// assert!(at == end); // The second lane is exhausted.
/// ```
#[derive(Clone, Copy)]
pub struct ZipCursor<C> {
    positions: C,
}

impl<C> ZipCursor<C>
where
    C: CursorTuple,
{
    /// Creates a zip cursor from per-lane positions.
    #[inline]
    pub const fn new(positions: C) -> Self {
        Self { positions }
    }

    /// Returns the per-lane positions.
    #[inline]
    pub const fn positions(&self) -> &C {
        &self.positions
    }

    /// Consumes the cursor, returning the per-lane positions.
    #[inline]
    pub fn into_positions(self) -> C {
        self.positions
    }
}

impl<C> Cursor for ZipCursor<C>
where
    C: CursorTuple,
{
    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.positions.advance_all(n);
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.positions.retreat_all(n);
    }
}

impl<C> PartialEq for ZipCursor<C>
where
    C: CursorTuple,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.positions.any_eq(&other.positions)
    }
}

impl<C> std::ops::Add<usize> for ZipCursor<C>
where
    C: CursorTuple,
{
    type Output = Self;

    #[inline]
    fn add(mut self, n: usize) -> Self::Output {
        self.advance_by(n);
        self
    }
}

impl<C> std::ops::AddAssign<usize> for ZipCursor<C>
where
    C: CursorTuple,
{
    #[inline]
    fn add_assign(&mut self, n: usize) {
        self.advance_by(n);
    }
}

impl<C> std::ops::Sub<usize> for ZipCursor<C>
where
    C: CursorTuple,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, n: usize) -> Self::Output {
        self.retreat_by(n);
        self
    }
}

impl<C> std::ops::SubAssign<usize> for ZipCursor<C>
where
    C: CursorTuple,
{
    #[inline]
    fn sub_assign(&mut self, n: usize) {
        self.retreat_by(n);
    }
}

impl<C> std::fmt::Debug for ZipCursor<C>
where
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ZipCursor").field(&self.positions).finish()
    }
}
