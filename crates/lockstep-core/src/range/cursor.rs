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
use crate::num::step::{StepInt, offset_back_by, offset_by};
use std::cmp::Ordering;

/// A position within an [`IntRange`](crate::range::IntRange), carrying the
/// step it moves by.
///
/// Equality and ordering look at the current value only: two cursors with
/// different steps but the same value compare equal. That is what lets a
/// traversal stop on the `end()` cursor, and it means cursors from ranges
/// with different steps must not be mixed within one traversal.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::range::RangeCursor;
/// let mut at = RangeCursor::new(2, 3);
/// at += 2;
/// assert_eq!(at.get(), 8);
/// at -= 1;
/// assert_eq!(at.get(), 5);
/// assert_eq!(RangeCursor::new(5, 1), at);
/// ```
#[derive(Clone, Copy)]
pub struct RangeCursor<T> {
    value: T,
    step: T,
}

impl<T> RangeCursor<T>
where
    T: StepInt,
{
    /// Creates a cursor at `value` moving by `step`.
    #[inline(always)]
    pub const fn new(value: T, step: T) -> Self {
        Self { value, step }
    }

    /// Returns the current value.
    #[inline(always)]
    pub const fn get(&self) -> T {
        self.value
    }

    /// Returns a read-only reference to the current value.
    #[inline(always)]
    pub const fn get_ref(&self) -> &T {
        &self.value
    }

    /// Returns the step this cursor moves by.
    #[inline(always)]
    pub const fn step(&self) -> T {
        self.step
    }
}

impl<T> Cursor for RangeCursor<T>
where
    T: StepInt,
{
    #[inline(always)]
    fn advance_by(&mut self, n: usize) {
        self.value = offset_by(self.value, self.step, n);
    }

    #[inline(always)]
    fn retreat_by(&mut self, n: usize) {
        self.value = offset_back_by(self.value, self.step, n);
    }
}

impl<T> PartialEq for RangeCursor<T>
where
    T: StepInt,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for RangeCursor<T> where T: StepInt {}

impl<T> PartialOrd for RangeCursor<T>
where
    T: StepInt,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for RangeCursor<T>
where
    T: StepInt,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for RangeCursor<T>
where
    T: StepInt + std::hash::Hash,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::ops::Add<usize> for RangeCursor<T>
where
    T: StepInt,
{
    type Output = Self;

    #[inline(always)]
    fn add(mut self, n: usize) -> Self::Output {
        self.advance_by(n);
        self
    }
}

impl<T> std::ops::AddAssign<usize> for RangeCursor<T>
where
    T: StepInt,
{
    #[inline(always)]
    fn add_assign(&mut self, n: usize) {
        self.advance_by(n);
    }
}

impl<T> std::ops::Sub<usize> for RangeCursor<T>
where
    T: StepInt,
{
    type Output = Self;

    #[inline(always)]
    fn sub(mut self, n: usize) -> Self::Output {
        self.retreat_by(n);
        self
    }
}

impl<T> std::ops::SubAssign<usize> for RangeCursor<T>
where
    T: StepInt,
{
    #[inline(always)]
    fn sub_assign(&mut self, n: usize) {
        self.retreat_by(n);
    }
}

impl<T> std::fmt::Debug for RangeCursor<T>
where
    T: StepInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeCursor")
            .field("value", &self.value)
            .field("step", &self.step)
            .finish()
    }
}

impl<T> std::fmt::Display for RangeCursor<T>
where
    T: StepInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_decrement() {
        let mut at = RangeCursor::new(0_i32, 4);
        at.advance();
        assert_eq!(at.get(), 4);
        at.advance();
        at.retreat();
        assert_eq!(at.get(), 4);
    }

    #[test]
    fn test_offset_by_n_steps() {
        let at = RangeCursor::new(10_i64, -3);
        assert_eq!((at + 3).get(), 1);
        assert_eq!((at - 2).get(), 16);
    }

    #[test]
    fn test_equality_ignores_step() {
        assert_eq!(RangeCursor::new(7_u32, 1), RangeCursor::new(7_u32, 5));
        assert_ne!(RangeCursor::new(7_u32, 1), RangeCursor::new(8_u32, 1));
    }

    #[test]
    fn test_ordering_ignores_step() {
        let low = RangeCursor::new(1_i8, 100);
        let high = RangeCursor::new(2_i8, 1);
        assert!(low < high);
        assert!(high > low);
        assert!(low <= RangeCursor::new(1, -1));
        assert!(high >= RangeCursor::new(2, 9));
    }

    #[test]
    fn test_get_ref_reads_current_value() {
        let mut at = RangeCursor::new(3_usize, 2);
        assert_eq!(*at.get_ref(), 3);
        at += 1;
        assert_eq!(*at.get_ref(), 5);
        assert_eq!(at.step(), 2);
    }

    #[test]
    fn test_unsigned_step_before_zero_wraps() {
        let mut at = RangeCursor::new(0_u8, 3);
        at.retreat();
        assert_eq!(at.get(), 253);
        at.advance();
        assert_eq!(at.get(), 0);
    }

    #[test]
    fn test_unaligned_cursor_skips_past_end() {
        // Caller obligation: equality-terminated loops must land on `end` exactly.
        let end = RangeCursor::new(10_i32, 3);
        let mut at = RangeCursor::new(2_i32, 3);
        for _ in 0..3 {
            assert_ne!(at, end);
            at.advance();
        }
        assert_eq!(at.get(), 11);
        assert!(at > end);
    }

    #[test]
    fn test_debug_and_display() {
        let at = RangeCursor::new(4_i32, -1);
        assert_eq!(format!("{}", at), "4");
        assert_eq!(format!("{:?}", at), "RangeCursor { value: 4, step: -1 }");
    }
}
