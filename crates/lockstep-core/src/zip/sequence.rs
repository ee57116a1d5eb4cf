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

use crate::cursor::{Cursor, Sequence};
use crate::zip::cursor::ZipCursor;
use crate::zip::iter::ZipIter;
use crate::zip::lane::{Lanes, SharedLanes};

/// A fixed tuple of sequences traversed in lockstep.
///
/// `Zip` holds its lanes as given: borrows stay borrows and the wrapped
/// sequences are never copied. Its cursors are tuples of lane cursors, and
/// reading at a cursor yields a tuple with one entry per lane.
///
/// Traversal stops as soon as the shortest lane is exhausted; see
/// [`ZipCursor`] for the equality rule that implements this.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::range::IntRange;
/// # use lockstep_core::zip::zip;
/// let letters = ['a', 'b'];
/// let pairs: Vec<_> = zip((IntRange::up_to(5), &letters)).into_iter().collect();
/// assert_eq!(pairs, vec![(0, &'a'), (1, &'b')]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Zip<L> {
    lanes: L,
}

impl<L> Zip<L>
where
    L: Lanes,
{
    /// The number of lanes.
    pub const ARITY: usize = L::ARITY;

    /// Creates a zip over `lanes`.
    #[inline]
    pub fn new(lanes: L) -> Self {
        Self { lanes }
    }

    /// Returns the number of lanes.
    #[inline]
    pub fn arity(&self) -> usize {
        L::ARITY
    }

    /// Returns the lanes.
    #[inline]
    pub fn lanes(&self) -> &L {
        &self.lanes
    }

    /// Consumes the zip, returning its lanes.
    #[inline]
    pub fn into_lanes(self) -> L {
        self.lanes
    }

    /// Returns a cursor at every lane's first element.
    #[inline]
    pub fn begin(&self) -> ZipCursor<L::Cursors> {
        ZipCursor::new(self.lanes.begin())
    }

    /// Returns a cursor at every lane's end.
    #[inline]
    pub fn end(&self) -> ZipCursor<L::Cursors> {
        ZipCursor::new(self.lanes.end())
    }

    /// Reads every lane at `at`.
    ///
    /// Mutable lanes hand out mutable references, so the returned tuple
    /// keeps the zip borrowed.
    ///
    /// # Panics
    ///
    /// Panics if a lane is read past its end and the lane's own read
    /// panics (as slices and vectors do).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::cursor::Cursor;
    /// # use lockstep_core::zip::zip;
    /// let src = vec![1, 2, 3];
    /// let mut dst = vec![0; 3];
    /// let mut z = zip((&src, &mut dst));
    /// let mut at = z.begin();
    /// let end = z.end();
    /// while at != end {
    ///     let (s, d) = z.get(&at);
    ///     *d = s * 10;
    ///     at.advance();
    /// }
    /// assert_eq!(dst, vec![10, 20, 30]);
    /// ```
    #[inline]
    pub fn get(&mut self, at: &ZipCursor<L::Cursors>) -> L::Items<'_> {
        self.lanes.get(at.positions())
    }

    /// Starts a lending traversal from `begin()` to `end()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::zip::zip;
    /// let mut scores = vec![1, 2, 3, 4];
    /// let bonus = [10, 20];
    /// let mut z = zip((&mut scores, &bonus));
    /// let mut walk = z.traverse();
    /// while let Some((score, b)) = walk.next() {
    ///     *score += b;
    /// }
    /// assert_eq!(scores, vec![11, 22, 3, 4]);
    /// ```
    #[inline]
    pub fn traverse(&mut self) -> Traversal<'_, L> {
        let front = self.begin();
        let end = self.end();
        Traversal {
            zip: self,
            front,
            end,
        }
    }
}

impl<L> Zip<L>
where
    L: SharedLanes,
{
    /// Reads every lane at `at` without borrowing the zip for the result.
    #[inline]
    pub fn read(&self, at: &ZipCursor<L::Cursors>) -> L::Shared {
        self.lanes.read(at.positions())
    }

    /// Returns an iterator over the tuples of the zip.
    #[inline]
    pub fn iter(&self) -> ZipIter<L>
    where
        L: Clone,
    {
        ZipIter::new(self.clone())
    }
}

impl<L> Sequence for Zip<L>
where
    L: SharedLanes,
{
    type Cursor = ZipCursor<L::Cursors>;
    type Ref<'a>
        = L::Shared
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> Self::Cursor {
        Zip::begin(self)
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        Zip::end(self)
    }

    #[inline]
    fn read<'a>(&'a self, at: &Self::Cursor) -> L::Shared {
        Zip::read(self, at)
    }
}

impl<L> IntoIterator for Zip<L>
where
    L: SharedLanes,
{
    type Item = L::Shared;
    type IntoIter = ZipIter<L>;

    fn into_iter(self) -> Self::IntoIter {
        ZipIter::new(self)
    }
}

/// Wraps a tuple of lanes into a [`Zip`].
///
/// Each lane is `&s` for read-only access, `&mut s` for in-place mutation,
/// or an owned [`IntRange`](crate::range::IntRange).
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::zip::zip;
/// let a = [1, 2, 3, 4, 5];
/// let b = ['x', 'y', 'z'];
/// let c = vec![0.5; 7];
/// assert_eq!(zip((&a, &b, &c)).into_iter().count(), 3);
/// ```
#[inline]
pub fn zip<L>(lanes: L) -> Zip<L>
where
    L: Lanes,
{
    Zip::new(lanes)
}

/// A lending walk over a [`Zip`], from `begin()` until the cursor equals
/// `end()`.
///
/// Unlike [`ZipIter`], each tuple borrows the traversal, which is what
/// allows lanes wrapped as `&mut s` to hand out mutable references.
pub struct Traversal<'z, L>
where
    L: Lanes,
{
    zip: &'z mut Zip<L>,
    front: ZipCursor<L::Cursors>,
    end: ZipCursor<L::Cursors>,
}

impl<L> Traversal<'_, L>
where
    L: Lanes,
{
    /// Reads the tuple at the current position and advances past it.
    /// Returns `None` once any lane is exhausted.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) -> Option<L::Items<'_>> {
        if self.front == self.end {
            return None;
        }
        let at = self.front.clone();
        self.front.advance();
        Some(self.zip.get(&at))
    }

    /// Returns the cursor of the next tuple.
    #[inline]
    pub fn cursor(&self) -> &ZipCursor<L::Cursors> {
        &self.front
    }

    /// Returns `true` once any lane is exhausted.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.front == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::IntRange;
    use std::collections::VecDeque;

    #[test]
    fn test_concrete_range_and_chars() {
        let letters = ['a', 'b'];
        let z = zip((IntRange::new(0, 5, 1), &letters));
        let pairs: Vec<(i32, char)> = z.iter().map(|(i, c)| (i, *c)).collect();
        assert_eq!(pairs, [(0, 'a'), (1, 'b')]);
    }

    #[test]
    fn test_stops_at_shortest_of_three() {
        let a = [1, 2, 3, 4, 5];
        let b = vec!["x", "y", "z"];
        let c: VecDeque<u8> = (0..7).collect();
        let z = zip((&a, &b, &c));
        assert_eq!(z.iter().count(), 3);

        let mut at = z.begin();
        let end = z.end();
        let mut steps = 0;
        while at != end {
            at.advance();
            steps += 1;
        }
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_tuples_pair_elements_by_position() {
        let s1 = vec![10, 20, 30, 40];
        let s2 = vec!['p', 'q', 'r'];
        let z = zip((&s1, &s2));
        for (i, (x, y)) in z.iter().enumerate() {
            assert_eq!(*x, s1[i]);
            assert_eq!(*y, s2[i]);
        }
    }

    #[test]
    fn test_mutation_through_mut_lane() {
        let mut values = vec![1, 2, 3];
        let offsets = [100, 200, 300];
        {
            let mut z = zip((&mut values, &offsets));
            let mut walk = z.traverse();
            while let Some((v, o)) = walk.next() {
                *v += *o;
            }
            assert!(walk.is_done());
        }
        assert_eq!(values, [101, 202, 303]);
    }

    #[test]
    fn test_two_mut_lanes() {
        let mut left = vec![1, 2];
        let mut right = vec![3, 4, 5];
        {
            let mut z = zip((&mut left, &mut right));
            let mut walk = z.traverse();
            while let Some((l, r)) = walk.next() {
                std::mem::swap(l, r);
            }
        }
        assert_eq!(left, [3, 4]);
        assert_eq!(right, [1, 2, 5]);
    }

    #[test]
    fn test_get_at_cursor_and_step_back() {
        let a = [1, 2, 3];
        let b = ['x', 'y', 'z'];
        let mut z = zip((&a, &b));
        let mut at = z.end();
        at.retreat();
        assert_eq!(z.get(&at), (&3, &'z'));
        at -= 2;
        assert_eq!(z.read(&at), (&1, &'x'));
        at += 1;
        assert_eq!(z.read(&at), (&2, &'y'));
        assert_eq!(z.read(&(at + 1)), (&3, &'z'));
        assert_eq!(z.read(&(at - 1)), (&1, &'x'));
    }

    #[test]
    fn test_reverse_traversal_of_equal_lengths() {
        let a = vec![1, 2, 3];
        let b = IntRange::new(10_i32, 40, 10);
        let z = zip((&a, b));
        let begin = z.begin();
        let mut at = z.end();
        let mut seen = Vec::new();
        while at != begin {
            at.retreat();
            seen.push(z.read(&at));
        }
        assert_eq!(seen, [(&3, 30), (&2, 20), (&1, 10)]);
    }

    #[test]
    fn test_begin_end_are_idempotent() {
        let a = [1, 2, 3];
        let z = zip((&a, IntRange::new(0_u8, 3, 1)));
        assert!(z.begin() == z.begin());
        assert!(z.end() == z.end());
        assert_eq!(z.begin().into_positions(), z.begin().into_positions());
        assert_eq!(z.end().into_positions(), z.end().into_positions());
        assert_eq!(z.iter().count(), z.iter().count());
    }

    #[test]
    fn test_inequality_matches_negated_equality_during_traversal() {
        let a = [1, 2, 3, 4];
        let b = [5, 6];
        let z = zip((&a, &b));
        let end = z.end();
        let mut at = z.begin();
        for _ in 0..4 {
            assert_eq!(at != end, !(at == end));
            at.advance();
        }
    }

    #[test]
    fn test_empty_lane_yields_nothing() {
        let a: Vec<i32> = Vec::new();
        let b = [1, 2, 3];
        let z = zip((&a, &b));
        assert!(z.begin() == z.end());
        assert_eq!(z.iter().next(), None);
    }

    #[test]
    fn test_arity() {
        let a = [0_u8; 2];
        assert_eq!(zip((&a,)).arity(), 1);
        assert_eq!(zip((&a, &a, IntRange::up_to(3_i32))).arity(), 3);
        assert_eq!(Zip::<(&[u8], &[u8])>::ARITY, 2);
    }

    #[test]
    fn test_zip_of_zip() {
        let a = [1, 2, 3];
        let b = ['a', 'b', 'c'];
        let inner = zip((&a, &b));
        let c = IntRange::new(100_i64, 0, -50);
        let outer = zip((&inner, c));
        let got: Vec<_> = outer.iter().map(|((x, y), z)| (*x, *y, z)).collect();
        assert_eq!(got, [(1, 'a', 100), (2, 'b', 50)]);
    }

    #[test]
    fn test_into_lanes_returns_borrows() {
        let a = vec![1];
        let z = zip((&a, IntRange::up_to(1_usize)));
        let (lane, range) = z.into_lanes();
        assert!(std::ptr::eq(lane, &a));
        assert_eq!(range, IntRange::up_to(1));
    }
}
