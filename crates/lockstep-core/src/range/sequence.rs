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

use crate::cursor::Sequence;
use crate::num::step::{StepInt, offset_by_wide, span_count, span_len};
use crate::range::cursor::RangeCursor;
use crate::range::iter::RangeIter;
use num_traits::NumCast;

/// The reason a range could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The step was zero, so the range would never move.
    ZeroStep,
    /// The requested length does not fit the integer type of the range.
    LengthOverflow {
        /// The length that could not be represented.
        len: usize,
    },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "Range step must be non-zero"),
            Self::LengthOverflow { len } => {
                write!(f, "Range length {} is not representable in the index type", len)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// A lazy, stepped sequence of integers between `start` (inclusive) and
/// `end` (exclusive).
///
/// A positive step travels upwards through `[start, end)`, a negative step
/// travels downwards through `(end, start]`. Nothing is materialized; the
/// range is three integers and may be traversed any number of times.
///
/// # Invariants
///
/// `step` is never zero.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::range::IntRange;
/// let r = IntRange::new(2, 10, 3);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 5, 8]);
///
/// let down = IntRange::new(5, 0, -2);
/// assert_eq!(down.iter().collect::<Vec<_>>(), vec![5, 3, 1]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRange<T = usize> {
    start: T,
    end: T,
    step: T,
}

impl<T> IntRange<T>
where
    T: StepInt,
{
    /// Creates a new `IntRange`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::range::IntRange;
    /// let r = IntRange::new(0_u32, 10, 5);
    /// assert_eq!(r.len(), 2);
    /// ```
    #[inline]
    pub fn new(start: T, end: T, step: T) -> Self {
        assert!(step != T::zero(), "Invalid range: step must be non-zero");
        Self { start, end, step }
    }

    /// Creates a new `IntRange` if `step` is non-zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::range::{IntRange, RangeError};
    /// assert!(IntRange::try_new(0, 10, 2).is_ok());
    /// assert_eq!(IntRange::try_new(0, 10, 0), Err(RangeError::ZeroStep));
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T, step: T) -> Result<Self, RangeError> {
        if step == T::zero() {
            return Err(RangeError::ZeroStep);
        }
        Ok(Self { start, end, step })
    }

    /// Creates the range `[0, end)` with step `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::range::IntRange;
    /// assert_eq!(IntRange::up_to(4), IntRange::new(0, 4, 1));
    /// ```
    #[inline]
    pub fn up_to(end: T) -> Self {
        Self {
            start: T::zero(),
            end,
            step: T::one(),
        }
    }

    /// Creates the index range `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not representable in `T`.
    #[inline]
    pub fn with_len(len: usize) -> Self {
        match Self::try_with_len(len) {
            Ok(range) => range,
            Err(e) => panic!("Invalid range: {}", e),
        }
    }

    /// Creates the index range `[0, len)` if `len` is representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::range::{IntRange, RangeError};
    /// assert_eq!(IntRange::<u8>::try_with_len(3), Ok(IntRange::up_to(3)));
    /// assert_eq!(
    ///     IntRange::<u8>::try_with_len(256),
    ///     Err(RangeError::LengthOverflow { len: 256 })
    /// );
    /// ```
    #[inline]
    pub fn try_with_len(len: usize) -> Result<Self, RangeError> {
        match <T as NumCast>::from(len) {
            Some(end) => Ok(Self::up_to(end)),
            None => Err(RangeError::LengthOverflow { len }),
        }
    }

    /// Creates the index range `[0, len)` covering every position of
    /// `iterable`, where `len` is the number of items it yields.
    ///
    /// # Panics
    ///
    /// Panics if the length is not representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::range::IntRange;
    /// let idx: IntRange = IntRange::indices_of("hello".chars());
    /// assert_eq!(idx, IntRange::up_to(5));
    ///
    /// let names = ["ada", "grace"];
    /// assert_eq!(IntRange::<u8>::indices_of(&names).len(), 2);
    /// ```
    #[inline]
    pub fn indices_of<I>(iterable: I) -> Self
    where
        I: IntoIterator,
    {
        Self::with_len(iterable.into_iter().count())
    }

    /// Returns the first value of the range.
    #[inline(always)]
    pub const fn start_value(&self) -> T {
        self.start
    }

    /// Returns the exclusive bound of the range.
    #[inline(always)]
    pub const fn end_value(&self) -> T {
        self.end
    }

    /// Returns the distance between consecutive values.
    #[inline(always)]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns a cursor at `start`.
    #[inline]
    pub fn begin(&self) -> RangeCursor<T> {
        RangeCursor::new(self.start, self.step)
    }

    /// Returns a cursor at `end`.
    ///
    /// Forward cursor traversal from `begin()` only reaches this cursor when
    /// `end - start` is a multiple of `step`; use [`IntRange::iter`] for
    /// ranges whose bounds are not aligned.
    #[inline]
    pub fn end(&self) -> RangeCursor<T> {
        RangeCursor::new(self.end, self.step)
    }

    /// Returns the cursor forward traversal actually stops at, `start`
    /// moved by every produced step. The offset is computed in `u128`, so it
    /// stays exact when the count exceeds `usize::MAX`.
    ///
    /// Equal to `end()` when `end - start` is a multiple of `step`; one step
    /// past the last produced value otherwise. The [`Sequence`] impl and zip
    /// lanes use this as their end cursor, so generic cursor loops over a
    /// range always terminate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::range::IntRange;
    /// assert_eq!(IntRange::new(0, 10, 2).stop(), IntRange::new(0, 10, 2).end());
    /// assert_eq!(IntRange::new(2, 10, 3).stop().get(), 11);
    /// ```
    #[inline]
    pub fn stop(&self) -> RangeCursor<T> {
        let count = span_count(self.start, self.end, self.step);
        RangeCursor::new(offset_by_wide(self.start, self.step, count), self.step)
    }

    /// Returns a cursor at the last value the range produces.
    ///
    /// For aligned ranges this is `end() - 1`. Retreating from here reaches
    /// [`IntRange::rend`] exactly, for aligned and unaligned ranges alike.
    /// For an empty range `rbegin() == rend()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::cursor::Cursor;
    /// # use lockstep_core::range::IntRange;
    /// let r = IntRange::new(2, 10, 3);
    /// let mut at = r.rbegin();
    /// let mut seen = Vec::new();
    /// while at != r.rend() {
    ///     seen.push(at.get());
    ///     at.retreat();
    /// }
    /// assert_eq!(seen, vec![8, 5, 2]);
    /// ```
    #[inline]
    pub fn rbegin(&self) -> RangeCursor<T> {
        match span_count(self.start, self.end, self.step) {
            0 => self.rend(),
            count => {
                let last = offset_by_wide(self.start, self.step, count - 1);
                RangeCursor::new(last, self.step)
            }
        }
    }

    /// Returns a cursor one step before `start`.
    #[inline]
    pub fn rend(&self) -> RangeCursor<T> {
        self.begin() - 1
    }

    /// Returns the number of values the range produces.
    ///
    /// This is `ceil((end - start) / step)` when the step travels from
    /// `start` towards `end`, and `0` otherwise. Counts beyond `usize::MAX`
    /// saturate; cursors and iterators still cover the full span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::range::IntRange;
    /// assert_eq!(IntRange::new(0, 10, 3).len(), 4);
    /// assert_eq!(IntRange::new(0, 10, -3).len(), 0);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        span_len(self.start, self.end, self.step)
    }

    /// Returns `true` if the range produces no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        span_count(self.start, self.end, self.step) == 0
    }

    /// Returns `true` if traversing the range produces `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::range::IntRange;
    /// let r = IntRange::new(2, 10, 3);
    /// assert!(r.contains(5));
    /// assert!(!r.contains(6));
    /// assert!(!r.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let inside = if self.step > T::zero() {
            self.start <= value && value < self.end
        } else {
            self.end < value && value <= self.start
        };
        inside && value.abs_diff_wide(self.start) % self.step.magnitude() == 0
    }

    /// Creates an iterator over the values of the range.
    ///
    /// The iterator yields exactly [`IntRange::len`] values, so it stops
    /// even when `end` is not reachable in whole steps.
    #[inline]
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter::new(self.begin(), span_count(self.start, self.end, self.step))
    }
}

impl<T> Sequence for IntRange<T>
where
    T: StepInt,
{
    type Cursor = RangeCursor<T>;
    type Ref<'a>
        = T
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> RangeCursor<T> {
        IntRange::begin(self)
    }

    #[inline]
    fn end(&self) -> RangeCursor<T> {
        self.stop()
    }

    #[inline]
    fn read<'a>(&'a self, at: &RangeCursor<T>) -> T {
        at.get()
    }
}

impl<T> std::fmt::Debug for IntRange<T>
where
    T: StepInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .finish()
    }
}

impl<T> std::fmt::Display for IntRange<T>
where
    T: StepInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) by {}", self.start, self.end, self.step)
    }
}

impl<T> From<std::ops::Range<T>> for IntRange<T>
where
    T: StepInt,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self {
            start: range.start,
            end: range.end,
            step: T::one(),
        }
    }
}

impl<T> IntoIterator for IntRange<T>
where
    T: StepInt,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &IntRange<T>
where
    T: StepInt,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
