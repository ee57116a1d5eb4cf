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

//! # Numeric Foundations
//!
//! Integer-centric building blocks for stepped iteration. Cursors move by
//! multiples of a step and must behave identically for every primitive
//! integer type, including the unsigned ones where stepping one position
//! before zero is a legitimate sentinel.
//!
//! ## Submodules
//!
//! - `ops`: By-value wrapping arithmetic traits (`WrappingAddVal`,
//!   `WrappingSubVal`, `WrappingMulVal`) implemented for all core integer
//!   types.
//! - `step`: The `StepInt` trait tying `num_traits::PrimInt` to the wrapping
//!   operations, plus `span_count` / `span_len`, overflow-free element counts for stepped
//!   spans.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod ops;
pub mod step;
