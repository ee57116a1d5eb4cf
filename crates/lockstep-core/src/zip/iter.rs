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
use crate::zip::cursor::ZipCursor;
use crate::zip::lane::SharedLanes;
use crate::zip::sequence::Zip;
use std::iter::FusedIterator;

/// An iterator over the tuples of a [`Zip`] whose lanes are all read-only.
///
/// Yields tuples from `begin()` until the cursor equals `end()`, that is,
/// exactly as many tuples as the shortest lane has elements.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::range::IntRange;
/// # use lockstep_core::zip::zip;
/// let weights = [0.5, 0.25, 0.25];
/// let total: f64 = zip((IntRange::up_to(10_u32), &weights))
///     .into_iter()
///     .map(|(i, w)| f64::from(i) * w)
///     .sum();
/// assert_eq!(total, 0.75);
/// ```
#[derive(Clone)]
pub struct ZipIter<L>
where
    L: SharedLanes,
{
    zip: Zip<L>,
    front: ZipCursor<L::Cursors>,
    end: ZipCursor<L::Cursors>,
}

impl<L> ZipIter<L>
where
    L: SharedLanes,
{
    #[inline]
    pub(crate) fn new(zip: Zip<L>) -> Self {
        let front = zip.begin();
        let end = zip.end();
        Self { zip, front, end }
    }
}

impl<L> Iterator for ZipIter<L>
where
    L: SharedLanes,
{
    type Item = L::Shared;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.end {
            return None;
        }
        let item = self.zip.read(&self.front);
        self.front.advance();
        Some(item)
    }

    /// Lanes do not report their lengths, so the hint is `(0, Some(0))`
    /// once exhausted and `(1, None)` while any tuple is left.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front == self.end {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

impl<L> FusedIterator for ZipIter<L> where L: SharedLanes {}

impl<L> std::fmt::Debug for ZipIter<L>
where
    L: SharedLanes + std::fmt::Debug,
    L::Cursors: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipIter")
            .field("zip", &self.zip)
            .field("front", &self.front)
            .field("end", &self.end)
            .finish()
    }
}
