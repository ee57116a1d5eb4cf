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

//! # Lockstep Zips
//!
//! `Zip` fuses a fixed tuple of sequences into one sequence of tuples and
//! moves every input one position per step. Traversal ends when the
//! **shortest** input is exhausted, without tracking lengths: a zip cursor
//! equals the zip's `end()` as soon as any one of its components equals
//! that lane's end.
//!
//! ## Lanes
//!
//! Every input is a lane with an explicit access mode: `&s` reads shared
//! references, `&mut s` hands out mutable references into `s`, and an
//! owned `IntRange` yields its integers by value. Borrowed inputs are never
//! copied, and the borrow checker keeps them alive and unaliased for as
//! long as the zip exists.
//!
//! ## Traversal
//!
//! - Cursor loop: `begin()`, `end()`, `get()`/`read()`, `advance()`,
//!   `retreat()`, `+= n`, `-= n`.
//! - `traverse()`: a lending walk that works with mutable lanes.
//! - `iter()` / `into_iter()`: a standard `Iterator` for read-only zips.
//!
//! Stepping a zip cursor backward is only meaningful when every lane can
//! move back within its bounds, which in practice means lanes of equal
//! length.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_core::range::IntRange;
//! use lockstep_core::zip::zip;
//!
//! let names = ["ada", "grace", "barbara"];
//! let mut ranks = vec![0_usize; 3];
//!
//! let mut z = zip((IntRange::up_to(3_usize), &names, &mut ranks));
//! let mut walk = z.traverse();
//! while let Some((i, name, rank)) = walk.next() {
//!     *rank = i * 10 + name.len();
//! }
//! assert_eq!(ranks, [3, 15, 27]);
//! ```

mod cursor;
mod iter;
mod lane;
mod sequence;

pub use cursor::{CursorTuple, ZipCursor};
pub use iter::ZipIter;
pub use lane::{Lane, Lanes, SharedLane, SharedLanes};
pub use sequence::{Traversal, Zip, zip};
