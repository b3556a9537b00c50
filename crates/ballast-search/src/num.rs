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

//! # Weight Numeric Trait
//!
//! Unified numeric bounds for the solving engines. Track durations are
//! non-negative whole seconds, so the engines are generic over unsigned
//! primitive integers. This alias collects the required capabilities into a
//! single bound: intrinsic integer traits (`PrimInt`, `Unsigned`), lossless
//! widening to `u64` for aggregate/deviation math, and conversion back from
//! `u64` for derived capacities.
//!
//! `usize` is intentionally excluded: it has no portable `Into<u64>`, and
//! durations are data, not memory sizes.

use num_traits::{FromPrimitive, PrimInt, Unsigned};
use std::hash::Hash;

/// A trait alias for numeric types usable as track durations.
///
/// Implemented automatically for `u8`, `u16`, `u32` and `u64`.
pub trait Weight:
    PrimInt
    + Unsigned
    + FromPrimitive
    + Into<u64>
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
{
}

impl<T> Weight for T where
    T: PrimInt
        + Unsigned
        + FromPrimitive
        + Into<u64>
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::Weight;

    fn assert_weight<T: Weight>() {}

    #[test]
    fn test_unsigned_primitives_are_weights() {
        assert_weight::<u8>();
        assert_weight::<u16>();
        assert_weight::<u32>();
        assert_weight::<u64>();
    }
}
