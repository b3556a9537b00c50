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

//! # Ballast Engine
//!
//! **The solving engines of the ballast track-balancing solver.**
//!
//! Three strategies attack the same problem — spread a catalog of tracks
//! across sides so the side totals come out even — with very different
//! cost/quality trade-offs:
//!
//! * **`exhaustive`**: Depth-first backtracking over `(side, track)` pairs.
//!   Explores the packing tree completely when given time, keeping the best
//!   complete layout as an anytime answer.
//! * **`cyclic`**: Per-track recursion that offers each track to the sides
//!   in an alternating cyclic order, cancelling the low-index bias a plain
//!   ascending scan would have. Exits early once a layout is balanced enough.
//! * **`sweep`**: A linear greedy packer driven by a one-dimensional binary
//!   search over the candidate side capacity. Deterministic and fast.
//!
//! All three consume an immutable `Catalog`, a resolved `Target`, and a
//! `SearchMonitor` they poll cooperatively at every step. `target` derives
//! the side count and capacity bracket from the user's constraint.

pub mod cyclic;
pub mod exhaustive;
pub mod sweep;
pub mod target;
