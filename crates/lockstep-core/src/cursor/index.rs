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

//! # Index Cursors
//!
//! `IndexCursor` is a transparent wrapper around a `usize` position, the
//! cursor of every index-addressed container. This module implements the
//! [`Sequence`] and [`SequenceMut`] protocol for slices, arrays, `Vec`, and
//! `VecDeque` in terms of it.
//!
//! Cursor arithmetic wraps, so stepping one position before `0` produces a
//! sentinel that steps back to `0` again. Reading at a position outside the
//! container panics with the usual out-of-bounds message.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_core::cursor::{Sequence, index::IndexCursor};
//!
//! let letters = ['a', 'b', 'c'];
//! let at = letters.begin() + 2;
//! assert_eq!(at, IndexCursor::new(2));
//! assert_eq!(*letters.read(&at), 'c');
//! ```

use crate::cursor::{Cursor, Sequence, SequenceMut};
use std::collections::VecDeque;

/// A position within an index-addressed container.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::cursor::index::IndexCursor;
/// let at = IndexCursor::new(5);
/// assert_eq!(at.get(), 5);
/// assert_eq!((at - 2).get(), 3);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IndexCursor {
    index: usize,
}

impl IndexCursor {
    /// Creates a cursor at `index`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the underlying position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl Cursor for IndexCursor {
    #[inline(always)]
    fn advance_by(&mut self, n: usize) {
        self.index = self.index.wrapping_add(n);
    }

    #[inline(always)]
    fn retreat_by(&mut self, n: usize) {
        self.index = self.index.wrapping_sub(n);
    }
}

impl std::fmt::Debug for IndexCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IndexCursor({})", self.index)
    }
}

impl std::fmt::Display for IndexCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.index)
    }
}

impl From<usize> for IndexCursor {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<IndexCursor> for usize {
    fn from(cursor: IndexCursor) -> Self {
        cursor.index
    }
}

macro_rules! impl_cursor_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $wrapping:ident) => {
        impl std::ops::$trait_name<usize> for IndexCursor {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: usize) -> Self::Output {
                Self::new(self.index.$wrapping(rhs))
            }
        }
        impl std::ops::$assign_trait<usize> for IndexCursor {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: usize) {
                self.index = self.index.$wrapping(rhs);
            }
        }
    };
}

impl_cursor_op!(Add, add, AddAssign, add_assign, wrapping_add);
impl_cursor_op!(Sub, sub, SubAssign, sub_assign, wrapping_sub);

impl<T> Sequence for [T] {
    type Cursor = IndexCursor;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> IndexCursor {
        IndexCursor::new(0)
    }

    #[inline]
    fn end(&self) -> IndexCursor {
        IndexCursor::new(self.len())
    }

    #[inline]
    fn read<'a>(&'a self, at: &IndexCursor) -> &'a T {
        &self[at.index]
    }
}

impl<T> SequenceMut for [T] {
    type Mut<'a>
        = &'a mut T
    where
        Self: 'a;

    #[inline]
    fn read_mut<'a>(&'a mut self, at: &IndexCursor) -> &'a mut T {
        &mut self[at.index]
    }
}

macro_rules! delegate_to_slice {
    ([$($generics:tt)*] $container:ty) => {
        impl<$($generics)*> Sequence for $container {
            type Cursor = IndexCursor;
            type Ref<'a>
                = &'a T
            where
                Self: 'a;

            #[inline]
            fn begin(&self) -> IndexCursor {
                self.as_slice().begin()
            }

            #[inline]
            fn end(&self) -> IndexCursor {
                self.as_slice().end()
            }

            #[inline]
            fn read<'a>(&'a self, at: &IndexCursor) -> &'a T {
                self.as_slice().read(at)
            }
        }

        impl<$($generics)*> SequenceMut for $container {
            type Mut<'a>
                = &'a mut T
            where
                Self: 'a;

            #[inline]
            fn read_mut<'a>(&'a mut self, at: &IndexCursor) -> &'a mut T {
                self.as_mut_slice().read_mut(at)
            }
        }
    };
}

delegate_to_slice!([T] Vec<T>);
delegate_to_slice!([T, const N: usize] [T; N]);

impl<T> Sequence for VecDeque<T> {
    type Cursor = IndexCursor;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> IndexCursor {
        IndexCursor::new(0)
    }

    #[inline]
    fn end(&self) -> IndexCursor {
        IndexCursor::new(self.len())
    }

    #[inline]
    fn read<'a>(&'a self, at: &IndexCursor) -> &'a T {
        &self[at.index]
    }
}

impl<T> SequenceMut for VecDeque<T> {
    type Mut<'a>
        = &'a mut T
    where
        Self: 'a;

    #[inline]
    fn read_mut<'a>(&'a mut self, at: &IndexCursor) -> &'a mut T {
        &mut self[at.index]
    }
}
