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

//! # Cursor Protocol
//!
//! The explicit iteration protocol shared by ranges and zips. A sequence
//! hands out `begin()` and `end()` cursors; a traversal reads at the front
//! cursor and advances it until it compares equal to the end cursor.
//!
//! ```rust
//! use lockstep_core::cursor::{Cursor, Sequence};
//!
//! let data = vec![3, 1, 4];
//! let mut at = data.begin();
//! let end = data.end();
//! let mut seen = Vec::new();
//! while at != end {
//!     seen.push(*data.read(&at));
//!     at.advance();
//! }
//! assert_eq!(seen, [3, 1, 4]);
//! ```
//!
//! ## Access Modes
//!
//! Read-only and mutable access are separate capabilities. `Sequence::read`
//! borrows the sequence shared and yields `Ref<'a>`; `SequenceMut::read_mut`
//! borrows it exclusively and yields `Mut<'a>`. Which one a zip lane uses is
//! chosen by the caller when wrapping (`&s` or `&mut s`), never inferred.
//!
//! ## Caller Obligations
//!
//! Cursors are plain positions. Nothing stops a cursor from being moved
//! outside of `[begin, end)`, and a loop that tests `at != end` only stops
//! if the cursor lands on `end` exactly. Reading at a cursor outside the
//! sequence is delegated to the sequence; the index-addressed containers in
//! [`index`] panic.
//!
//! ## Submodules
//!
//! - `index`: `IndexCursor` and the protocol for slices, arrays, `Vec`, and
//!   `VecDeque`.

pub mod index;

/// A position within a sequence that can move in both directions.
///
/// Moving a cursor never fails and never inspects the sequence it came
/// from.
pub trait Cursor: Clone + PartialEq {
    /// Moves the cursor `n` positions forward.
    fn advance_by(&mut self, n: usize);

    /// Moves the cursor `n` positions backward.
    fn retreat_by(&mut self, n: usize);

    /// Moves the cursor one position forward.
    #[inline]
    fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Moves the cursor one position backward.
    #[inline]
    fn retreat(&mut self) {
        self.retreat_by(1);
    }
}

/// A sequence that can be traversed with cursors and read without
/// exclusive access.
pub trait Sequence {
    /// The cursor type addressing this sequence.
    type Cursor: Cursor;

    /// What a read yields; a reference for containers, a value for
    /// generators.
    type Ref<'a>
    where
        Self: 'a;

    /// Returns a cursor at the first element.
    fn begin(&self) -> Self::Cursor;

    /// Returns a cursor one past the last element.
    fn end(&self) -> Self::Cursor;

    /// Reads the element at `at`.
    fn read<'a>(&'a self, at: &Self::Cursor) -> Self::Ref<'a>;
}

/// A sequence whose elements can be mutated in place through a cursor.
pub trait SequenceMut: Sequence {
    /// What a mutable read yields.
    type Mut<'a>
    where
        Self: 'a;

    /// Reads the element at `at` with exclusive access.
    fn read_mut<'a>(&'a mut self, at: &Self::Cursor) -> Self::Mut<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn collect_forward<S>(seq: &S) -> Vec<S::Ref<'_>>
    where
        S: Sequence + ?Sized,
    {
        let mut out = Vec::new();
        let mut at = seq.begin();
        let end = seq.end();
        while at != end {
            out.push(seq.read(&at));
            at.advance();
        }
        out
    }

    #[test]
    fn test_forward_traversal_over_containers() {
        let v = vec![1, 2, 3];
        assert_eq!(collect_forward(&v), [&1, &2, &3]);

        let arr = ['x', 'y'];
        assert_eq!(collect_forward(&arr), [&'x', &'y']);

        let dq: VecDeque<u8> = [9, 8].into_iter().collect();
        assert_eq!(collect_forward(&dq), [&9, &8]);

        let empty: &[i32] = &[];
        assert!(collect_forward(empty).is_empty());
    }

    #[test]
    fn test_backward_traversal() {
        let v = vec![10, 20, 30];
        let mut at = v.end();
        let begin = v.begin();
        let mut out = Vec::new();
        while at != begin {
            at.retreat();
            out.push(*v.read(&at));
        }
        assert_eq!(out, [30, 20, 10]);
    }

    #[test]
    fn test_read_mut_writes_in_place() {
        let mut v = vec![1, 2, 3];
        let mut at = v.begin();
        at.advance_by(2);
        *v.read_mut(&at) *= 10;
        assert_eq!(v, [1, 2, 30]);
    }

    #[test]
    fn test_begin_end_are_idempotent() {
        let v = vec![0; 4];
        assert_eq!(v.begin(), v.begin());
        assert_eq!(v.end(), v.end());
    }
}
