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

//! # Stepped Integer Ranges
//!
//! A lazy integer generator for "iterate `0..N`" style loops that never
//! allocates. `IntRange` produces `start, start + step, ...` up to but not
//! including `end`; a negative step walks downwards.
//!
//! ## Types
//!
//! - `IntRange`: the range itself (`begin`, `end`, `stop`, `rbegin`, `rend`,
//!   `len`, `contains`, `iter`), plus the `up_to`, `with_len` and
//!   `indices_of` shorthands.
//! - `RangeCursor`: a position carrying its step, with `+ n`, `- n`,
//!   `+= n`, `-= n` and value-only comparisons.
//! - `RangeIter`: the `Iterator` (`DoubleEndedIterator`,
//!   `ExactSizeIterator`, `FusedIterator`) over a range.
//! - `RangeError`: why a fallible constructor refused its input.
//!
//! ## Cursor Loops vs. Iterators
//!
//! `IntRange::iter` always yields exactly `len()` values. A hand-written
//! cursor loop `while at != range.end()` terminates only if `end - start`
//! is a multiple of `step`; with unaligned bounds the cursor skips past
//! `end` and the loop never stops. Reverse cursor loops from `rbegin()` to
//! `rend()` always terminate, and so do loops that stop at `stop()`, which
//! is the end cursor ranges expose through the `Sequence` protocol and as
//! zip lanes.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_core::range::IntRange;
//!
//! let data = ['a', 'b', 'c'];
//! let mut visited = Vec::new();
//! for i in IntRange::<usize>::indices_of(&data) {
//!     visited.push((i, data[i]));
//! }
//! assert_eq!(visited, [(0, 'a'), (1, 'b'), (2, 'c')]);
//! ```

mod cursor;
mod iter;
mod sequence;

pub use cursor::RangeCursor;
pub use iter::RangeIter;
pub use sequence::{IntRange, RangeError};
