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

//! # Stepped Integer Domain
//!
//! `StepInt` is the integer domain accepted by ranges and range cursors. It
//! combines `num_traits::PrimInt` with the by-value wrapping operations from
//! [`crate::num::ops`] and a few widening helpers that let generic code count
//! the elements of a stepped span without overflowing.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_core::num::step::span_len;
//!
//! assert_eq!(span_len(2_i32, 10, 3), 3); // 2, 5, 8
//! assert_eq!(span_len(10_i32, 0, -2), 5); // 10, 8, 6, 4, 2
//! assert_eq!(span_len(5_u8, 5, 1), 0);
//! ```

use crate::num::ops::wrapping_arithmetic::{WrappingAddVal, WrappingMulVal, WrappingSubVal};
use num_traits::PrimInt;

/// A primitive integer that can drive a stepped range.
///
/// Implemented for every core integer type. Cursor arithmetic on a
/// `StepInt` wraps at the type boundary, so an unsigned cursor may step one
/// position before zero and come back without panicking.
pub trait StepInt: PrimInt + WrappingAddVal + WrappingSubVal + WrappingMulVal {
    /// Converts an element count into `Self`, truncating modulo `2^BITS`.
    ///
    /// Combined with wrapping multiplication this yields the exact offset of
    /// `count` steps whenever the destination is representable.
    fn from_count(count: usize) -> Self;

    /// Converts a `u128` element count into `Self`, truncating modulo
    /// `2^BITS`. Used where a count may exceed `usize`.
    fn from_wide(count: u128) -> Self;

    /// Returns `|self - other|` widened to `u128`. Never overflows.
    fn abs_diff_wide(self, other: Self) -> u128;

    /// Returns `|self|` widened to `u128`. Never overflows.
    fn magnitude(self) -> u128;
}

macro_rules! impl_step_int_unsigned {
    ($($t:ty),+) => {
        $(
            impl StepInt for $t {
                #[inline(always)]
                fn from_count(count: usize) -> Self {
                    count as $t
                }

                #[inline(always)]
                fn from_wide(count: u128) -> Self {
                    count as $t
                }

                #[inline(always)]
                fn abs_diff_wide(self, other: Self) -> u128 {
                    self.abs_diff(other) as u128
                }

                #[inline(always)]
                fn magnitude(self) -> u128 {
                    self as u128
                }
            }
        )+
    };
}

macro_rules! impl_step_int_signed {
    ($($t:ty),+) => {
        $(
            impl StepInt for $t {
                #[inline(always)]
                fn from_count(count: usize) -> Self {
                    count as $t
                }

                #[inline(always)]
                fn from_wide(count: u128) -> Self {
                    count as $t
                }

                #[inline(always)]
                fn abs_diff_wide(self, other: Self) -> u128 {
                    self.abs_diff(other) as u128
                }

                #[inline(always)]
                fn magnitude(self) -> u128 {
                    self.unsigned_abs() as u128
                }
            }
        )+
    };
}

impl_step_int_unsigned!(u8, u16, u32, u64, u128, usize);
impl_step_int_signed!(i8, i16, i32, i64, i128, isize);

/// Returns the number of values `start, start + step, start + 2 * step, ...`
/// that lie strictly before `end` in the direction of `step`, as a `u128`.
///
/// This is `ceil((end - start) / step)` when the sign of `step` agrees with
/// the direction from `start` to `end`, and `0` otherwise (including a zero
/// step). The count is exact for every integer type.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::num::step::span_count;
/// assert_eq!(span_count(0_u128, 1 << 100, 1), 1 << 100);
/// assert_eq!(span_count(2_i32, 10, 3), 3);
/// ```
pub fn span_count<T>(start: T, end: T, step: T) -> u128
where
    T: StepInt,
{
    let travels_up = step > T::zero() && start < end;
    let travels_down = step < T::zero() && start > end;
    if !travels_up && !travels_down {
        return 0;
    }

    let distance = start.abs_diff_wide(end);
    let stride = step.magnitude();
    (distance - 1) / stride + 1
}

/// Returns [`span_count`] as a `usize`. Counts beyond `usize::MAX`
/// saturate.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::num::step::span_len;
/// assert_eq!(span_len(0_usize, 10, 1), 10);
/// assert_eq!(span_len(0_i64, 10, -1), 0); // Wrong direction
/// assert_eq!(span_len(i8::MIN, i8::MAX, 1), 255);
/// ```
pub fn span_len<T>(start: T, end: T, step: T) -> usize
where
    T: StepInt,
{
    usize::try_from(span_count(start, end, step)).unwrap_or(usize::MAX)
}

/// Returns `start` moved by `count` steps, wrapping at the type boundary.
#[inline(always)]
pub fn offset_by<T>(start: T, step: T, count: usize) -> T
where
    T: StepInt,
{
    start.wrapping_add_val(T::from_count(count).wrapping_mul_val(step))
}

/// Returns `start` moved by a `u128` number of steps, wrapping at the type
/// boundary.
#[inline(always)]
pub fn offset_by_wide<T>(start: T, step: T, count: u128) -> T
where
    T: StepInt,
{
    start.wrapping_add_val(T::from_wide(count).wrapping_mul_val(step))
}

/// Returns `start` moved back by `count` steps, wrapping at the type boundary.
#[inline(always)]
pub fn offset_back_by<T>(start: T, step: T, count: usize) -> T
where
    T: StepInt,
{
    start.wrapping_sub_val(T::from_count(count).wrapping_mul_val(step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_aligned_and_unaligned() {
        assert_eq!(span_len(0_i32, 10, 2), 5);
        assert_eq!(span_len(0_i32, 9, 2), 5);
        assert_eq!(span_len(2_i32, 10, 3), 3);
        assert_eq!(span_len(0_u64, 1, 100), 1);
    }

    #[test]
    fn test_span_len_negative_step() {
        assert_eq!(span_len(10_i32, 0, -2), 5);
        assert_eq!(span_len(10_i32, 1, -3), 3); // 10, 7, 4
        assert_eq!(span_len(0_i32, 10, -1), 0);
    }

    #[test]
    fn test_span_len_empty() {
        assert_eq!(span_len(5_u32, 5, 1), 0);
        assert_eq!(span_len(6_u32, 5, 1), 0);
        assert_eq!(span_len(5_i32, 10, 0), 0);
    }

    #[test]
    fn test_span_len_full_width_does_not_overflow() {
        assert_eq!(span_len(i8::MIN, i8::MAX, 1), 255);
        assert_eq!(span_len(i64::MAX, i64::MIN, -1), u64::MAX as usize);
        assert_eq!(span_len(0_u128, u128::MAX, 1), usize::MAX);
        assert_eq!(span_len(i128::MIN, i128::MAX, i128::MAX), 3); // MIN, -1, MAX - 1
    }

    #[test]
    fn test_span_count_beyond_usize() {
        assert_eq!(span_count(0_u128, 1 << 100, 1), 1 << 100);
        assert_eq!(span_count(0_u128, u128::MAX, 1), u128::MAX);
        assert_eq!(span_count(i128::MAX, i128::MIN, -1), u128::MAX);
        assert_eq!(span_count(0_u128, 1 << 100, 3), ((1 << 100) - 1) / 3 + 1);
        assert_eq!(span_len(0_u128, 1 << 100, 1), usize::MAX);
    }

    #[test]
    fn test_offset_by_wide_reaches_far_values() {
        assert_eq!(offset_by_wide(0_u128, 1, 1 << 100), 1 << 100);
        assert_eq!(offset_by_wide(7_i128, -2, 1 << 90), 7 - (1_i128 << 91));
        assert_eq!(offset_by_wide(3_u8, 1, 256), 3);
        assert_eq!(u16::from_wide(70_000), 70_000_u128 as u16);
    }

    #[test]
    fn test_offsets_round_trip_through_zero() {
        let before_zero = offset_back_by(0_usize, 1, 1);
        assert_eq!(before_zero, usize::MAX);
        assert_eq!(offset_by(before_zero, 1, 1), 0);

        assert_eq!(offset_by(2_i32, -3, 4), -10);
        assert_eq!(offset_back_by(-10_i32, -3, 4), 2);
    }
}
