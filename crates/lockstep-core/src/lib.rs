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

//! # Lockstep Core
//!
//! Two allocation-free iteration primitives and the cursor protocol they
//! share.
//!
//! ## Modules
//!
//! - `cursor`: The explicit iteration protocol (`Cursor`, `Sequence`,
//!   `SequenceMut`) and `IndexCursor` for slices, arrays, `Vec`, and
//!   `VecDeque`.
//! - `range`: `IntRange`, a lazy stepped integer range over every primitive
//!   integer type, its `RangeCursor`, and the `RangeIter` iterator.
//! - `zip`: `Zip`, a fixed-arity lockstep combinator over borrowed
//!   sequences and ranges that stops at the shortest input, with cursor,
//!   lending, and `Iterator` traversal.
//! - `num`: The `StepInt` integer domain and by-value wrapping arithmetic
//!   used by cursor movement.
//!
//! ## Example
//!
//! ```rust
//! use lockstep_core::range::IntRange;
//! use lockstep_core::zip::zip;
//!
//! let evens: Vec<u32> = IntRange::new(0, 10, 2).into_iter().collect();
//! assert_eq!(evens, [0, 2, 4, 6, 8]);
//!
//! let labels = ['a', 'b', 'c'];
//! let tagged: Vec<_> = zip((&evens, &labels)).into_iter().collect();
//! assert_eq!(tagged, [(&0, &'a'), (&2, &'b'), (&4, &'c')]);
//! ```

pub mod cursor;
pub mod num;
pub mod range;
pub mod zip;
