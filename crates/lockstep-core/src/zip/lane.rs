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

use crate::cursor::{Cursor, Sequence, SequenceMut};
use crate::num::step::StepInt;
use crate::range::{IntRange, RangeCursor};
use crate::zip::cursor::CursorTuple;

/// One input of a zip, together with how it is accessed.
///
/// The access mode is picked by the caller when wrapping:
///
/// - `&S` for any [`Sequence`]: reads yield `S::Ref<'a>`, e.g. `&T`;
/// - `&mut S` for any [`SequenceMut`]: reads yield `S::Mut<'z>`, e.g.
///   `&mut T`, so tuple entries can be written through;
/// - an owned [`IntRange`]: reads yield the integer by value, and the
///   lane ends at [`IntRange::stop`] so unaligned bounds still terminate.
///
/// Borrowed lanes are never copied; the zip only ever holds the borrow.
pub trait Lane {
    /// The cursor addressing this lane.
    type Cursor: Cursor;

    /// What a read through an exclusive borrow of the lane yields.
    type Item<'z>
    where
        Self: 'z;

    /// Returns a cursor at the first element of the lane.
    fn begin(&self) -> Self::Cursor;

    /// Returns a cursor one past the last element of the lane.
    fn end(&self) -> Self::Cursor;

    /// Reads the element at `at`.
    fn get<'z>(&'z mut self, at: &Self::Cursor) -> Self::Item<'z>;
}

/// A lane whose reads do not borrow the lane itself.
pub trait SharedLane: Lane {
    /// What a shared read yields.
    type Shared;

    /// Reads the element at `at`.
    fn read(&self, at: &Self::Cursor) -> Self::Shared;
}

impl<'a, S> Lane for &'a S
where
    S: Sequence + ?Sized,
{
    type Cursor = S::Cursor;
    type Item<'z>
        = S::Ref<'a>
    where
        Self: 'z;

    #[inline]
    fn begin(&self) -> S::Cursor {
        S::begin(*self)
    }

    #[inline]
    fn end(&self) -> S::Cursor {
        S::end(*self)
    }

    #[inline]
    fn get<'z>(&'z mut self, at: &S::Cursor) -> S::Ref<'a> {
        S::read(*self, at)
    }
}

impl<'a, S> SharedLane for &'a S
where
    S: Sequence + ?Sized,
{
    type Shared = S::Ref<'a>;

    #[inline]
    fn read(&self, at: &S::Cursor) -> S::Ref<'a> {
        S::read(*self, at)
    }
}

impl<S> Lane for &mut S
where
    S: SequenceMut + ?Sized,
{
    type Cursor = S::Cursor;
    type Item<'z>
        = S::Mut<'z>
    where
        Self: 'z;

    #[inline]
    fn begin(&self) -> S::Cursor {
        S::begin(&**self)
    }

    #[inline]
    fn end(&self) -> S::Cursor {
        S::end(&**self)
    }

    #[inline]
    fn get<'z>(&'z mut self, at: &S::Cursor) -> S::Mut<'z> {
        S::read_mut(&mut **self, at)
    }
}

impl<T> Lane for IntRange<T>
where
    T: StepInt,
{
    type Cursor = RangeCursor<T>;
    type Item<'z>
        = T
    where
        Self: 'z;

    #[inline]
    fn begin(&self) -> RangeCursor<T> {
        IntRange::begin(self)
    }

    #[inline]
    fn end(&self) -> RangeCursor<T> {
        self.stop()
    }

    #[inline]
    fn get<'z>(&'z mut self, at: &RangeCursor<T>) -> T {
        at.get()
    }
}

impl<T> SharedLane for IntRange<T>
where
    T: StepInt,
{
    type Shared = T;

    #[inline]
    fn read(&self, at: &RangeCursor<T>) -> T {
        at.get()
    }
}

/// A fixed-arity tuple of [`Lane`]s.
///
/// Implemented for tuples of 1 to 8 lanes; `ARITY` is the tuple length.
pub trait Lanes {
    /// One cursor per lane.
    type Cursors: CursorTuple;

    /// One read per lane.
    type Items<'z>
    where
        Self: 'z;

    /// The number of lanes.
    const ARITY: usize;

    /// Returns every lane's `begin()` cursor.
    fn begin(&self) -> Self::Cursors;

    /// Returns every lane's `end()` cursor.
    fn end(&self) -> Self::Cursors;

    /// Reads every lane at its own cursor.
    fn get<'z>(&'z mut self, at: &Self::Cursors) -> Self::Items<'z>;
}

/// A tuple of [`SharedLane`]s, readable without exclusive access.
pub trait SharedLanes: Lanes {
    /// One shared read per lane.
    type Shared;

    /// Reads every lane at its own cursor.
    fn read(&self, at: &Self::Cursors) -> Self::Shared;
}

macro_rules! impl_lanes {
    ($arity:literal; $($l:ident $idx:tt),+) => {
        impl<$($l: Lane),+> Lanes for ($($l,)+) {
            type Cursors = ($(<$l as Lane>::Cursor,)+);
            type Items<'z>
                = ($(<$l as Lane>::Item<'z>,)+)
            where
                Self: 'z;

            const ARITY: usize = $arity;

            #[inline]
            fn begin(&self) -> Self::Cursors {
                ($(self.$idx.begin(),)+)
            }

            #[inline]
            fn end(&self) -> Self::Cursors {
                ($(self.$idx.end(),)+)
            }

            #[inline]
            fn get<'z>(&'z mut self, at: &Self::Cursors) -> Self::Items<'z> {
                ($(self.$idx.get(&at.$idx),)+)
            }
        }

        impl<$($l: SharedLane),+> SharedLanes for ($($l,)+) {
            type Shared = ($(<$l as SharedLane>::Shared,)+);

            #[inline]
            fn read(&self, at: &Self::Cursors) -> Self::Shared {
                ($(self.$idx.read(&at.$idx),)+)
            }
        }
    };
}

impl_lanes!(1; A 0);
impl_lanes!(2; A 0, B 1);
impl_lanes!(3; A 0, B 1, C 2);
impl_lanes!(4; A 0, B 1, C 2, D 3);
impl_lanes!(5; A 0, B 1, C 2, D 3, E 4);
impl_lanes!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_lanes!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_lanes!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_lane_reads_reference() {
        let v = vec![1, 2, 3];
        let lane = &v;
        let at = Lane::begin(&lane) + 1;
        assert_eq!(lane.read(&at), &2);
    }

    #[test]
    fn test_mut_lane_writes_through() {
        let mut v = vec![1, 2, 3];
        {
            let mut lane = &mut v;
            let at = Lane::end(&lane) - 1;
            *lane.get(&at) = 30;
        }
        assert_eq!(v, [1, 2, 30]);
    }

    #[test]
    fn test_range_lane_reads_value() {
        let mut lane = IntRange::new(5_i32, 0, -1);
        let at = Lane::begin(&lane) + 2;
        assert_eq!(lane.get(&at), 3);
        assert_eq!(SharedLane::read(&lane, &at), 3);
    }

    #[test]
    fn test_arity() {
        type Two<'a> = (&'a [u8], IntRange<i32>);
        type Eight<'a> = (
            &'a [u8],
            &'a [u8],
            &'a [u8],
            &'a [u8],
            &'a [u8],
            &'a [u8],
            &'a [u8],
            &'a [u8],
        );
        assert_eq!(<(IntRange<u8>,) as Lanes>::ARITY, 1);
        assert_eq!(<Two<'static> as Lanes>::ARITY, 2);
        assert_eq!(<Eight<'static> as Lanes>::ARITY, 8);
    }

    #[test]
    fn test_tuple_get_mixes_access_modes() {
        let names = ["a", "b"];
        let mut counts = vec![0_u32, 0];
        let mut lanes = (&names[..], &mut counts, IntRange::new(10_i64, 20, 5));
        let at = Lanes::begin(&lanes);
        let (name, count, value) = lanes.get(&at);
        *count += 7;
        assert_eq!((*name, value), ("a", 10));
        assert_eq!(counts, [7, 0]);
    }
}
