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
use crate::num::step::{StepInt, offset_by_wide};
use crate::range::cursor::RangeCursor;
use std::iter::FusedIterator;

/// An iterator over the values of an [`IntRange`](crate::range::IntRange).
///
/// Tracks the front cursor and the number of values left, so it never
/// depends on landing exactly on the exclusive bound. The count is kept as
/// a `u128`, so both ends stay exact for spans wider than `usize`; only the
/// reported length saturates at `usize::MAX`.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::range::IntRange;
/// let mut it = IntRange::new(0, 10, 4).iter();
/// assert_eq!(it.len(), 3);
/// assert_eq!(it.next_back(), Some(8));
/// assert_eq!(it.next(), Some(0));
/// assert_eq!(it.next(), Some(4));
/// assert_eq!(it.next(), None);
/// ```
#[derive(Clone)]
pub struct RangeIter<T> {
    front: RangeCursor<T>,
    remaining: u128,
}

impl<T> RangeIter<T>
where
    T: StepInt,
{
    #[inline]
    pub(crate) fn new(front: RangeCursor<T>, remaining: u128) -> Self {
        Self { front, remaining }
    }

    /// Returns the cursor `count` steps ahead of the front.
    #[inline]
    fn ahead(&self, count: u128) -> RangeCursor<T> {
        RangeCursor::new(
            offset_by_wide(self.front.get(), self.front.step(), count),
            self.front.step(),
        )
    }
}

impl<T> Iterator for RangeIter<T>
where
    T: StepInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.front.get();
        self.front.advance();
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let n = n as u128;
        if n >= self.remaining {
            self.front = self.ahead(self.remaining);
            self.remaining = 0;
            return None;
        }
        self.front = self.ahead(n);
        self.remaining -= n;
        self.next()
    }
}

impl<T> DoubleEndedIterator for RangeIter<T>
where
    T: StepInt,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.ahead(self.remaining).get())
    }
}

impl<T> ExactSizeIterator for RangeIter<T>
where
    T: StepInt,
{
    #[inline]
    fn len(&self) -> usize {
        usize::try_from(self.remaining).unwrap_or(usize::MAX)
    }
}

impl<T> FusedIterator for RangeIter<T> where T: StepInt {}

impl<T> std::fmt::Debug for RangeIter<T>
where
    T: StepInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeIter")
            .field("front", &self.front)
            .field("remaining", &self.remaining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::range::IntRange;

    #[test]
    fn test_forward_values() {
        let v: Vec<i32> = IntRange::new(1, 8, 3).iter().collect();
        assert_eq!(v, [1, 4, 7]);
    }

    #[test]
    fn test_reverse_values() {
        let v: Vec<i32> = IntRange::new(1, 8, 3).iter().rev().collect();
        assert_eq!(v, [7, 4, 1]);
    }

    #[test]
    fn test_meet_in_the_middle() {
        let mut it = IntRange::new(0_u8, 5, 1).iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_size_hint_and_len() {
        let mut it = IntRange::new(0_i64, 100, 7).iter();
        assert_eq!(it.size_hint(), (15, Some(15)));
        it.next();
        assert_eq!(it.len(), 14);
    }

    #[test]
    fn test_nth_skips_in_constant_steps() {
        let mut it = IntRange::new(0_u32, 50, 5).iter();
        assert_eq!(it.nth(3), Some(15));
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.nth(100), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut it = IntRange::new(0_i8, 1, 1).iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_terminates_near_type_boundary() {
        let v: Vec<u8> = IntRange::new(250_u8, 255, 2).iter().collect();
        assert_eq!(v, [250, 252, 254]);

        let v: Vec<i8> = IntRange::new(-126_i8, i8::MIN, -1).iter().collect();
        assert_eq!(v, [-126, -127]);
    }

    #[test]
    fn test_wide_span_ends_stay_exact() {
        let mut it = IntRange::new(0_u128, 1 << 100, 1).iter();
        assert_eq!(it.size_hint(), (usize::MAX, None));
        assert_eq!(it.len(), usize::MAX);
        assert_eq!(it.next_back(), Some((1 << 100) - 1));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.nth(9), Some(10));
        assert_eq!(it.next_back(), Some((1 << 100) - 2));

        let mut down = IntRange::new(i128::MAX, i128::MIN, -1).iter();
        assert_eq!(down.next_back(), Some(i128::MIN + 1));
        assert_eq!(down.next(), Some(i128::MAX));
    }

    #[test]
    fn test_composition() {
        let squares: Vec<u64> = IntRange::up_to(4_u64).iter().map(|x| x * x).collect();
        assert_eq!(squares, [0, 1, 4, 9]);
    }
}
