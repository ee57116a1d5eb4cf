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

use core::ops::{Add, Mul, Sub};

/// A trait for types that support wrapping addition by value (no references).
///
/// Mirrors the primitive `wrapping_add`: the result wraps around at the
/// boundary of the type instead of overflowing.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// let a: u8 = 250;
/// assert_eq!(a.wrapping_add_val(10), 4);
/// assert_eq!(a.wrapping_add_val(5), 255);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

/// A trait for types that support wrapping subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::num::ops::wrapping_arithmetic::WrappingSubVal;
/// let a: u8 = 0;
/// assert_eq!(a.wrapping_sub_val(1), 255); // One step before zero
/// let b: i8 = -128;
/// assert_eq!(b.wrapping_sub_val(1), 127);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

/// A trait for types that support wrapping multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::num::ops::wrapping_arithmetic::WrappingMulVal;
/// let a: u8 = 20;
/// assert_eq!(a.wrapping_mul_val(10), 200);
/// assert_eq!(a.wrapping_mul_val(20), 144); // 400 mod 256
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> $t {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, wrapping_add; u8, u16, u32, u64, u128, usize);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, wrapping_add; i8, i16, i32, i64, i128, isize);

wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, wrapping_sub; u8, u16, u32, u64, u128, usize);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, wrapping_sub; i8, i16, i32, i64, i128, isize);

wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, wrapping_mul; u8, u16, u32, u64, u128, usize);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, wrapping_mul; i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_add_at_boundary() {
        assert_eq!(u16::MAX.wrapping_add_val(1), 0);
        assert_eq!(i32::MAX.wrapping_add_val(1), i32::MIN);
        assert_eq!(7_usize.wrapping_add_val(3), 10);
    }

    #[test]
    fn test_wrapping_sub_below_zero() {
        assert_eq!(0_usize.wrapping_sub_val(1), usize::MAX);
        assert_eq!(0_u32.wrapping_sub_val(3), u32::MAX - 2);
        assert_eq!(i64::MIN.wrapping_sub_val(1), i64::MAX);
    }

    #[test]
    fn test_wrapping_mul_then_sub_restores_value() {
        // Moving forward and back by the same wrapped offset is lossless.
        let start: u8 = 3;
        let offset = 200_u8.wrapping_mul_val(7);
        assert_eq!(start.wrapping_add_val(offset).wrapping_sub_val(offset), start);
    }
}
