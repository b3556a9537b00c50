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

//! Target resolution.
//!
//! The user pins down either a maximum side capacity or a fixed side count,
//! never both. The resolver turns that one constraint plus the catalog
//! aggregates into the numbers every engine needs: how many sides to aim
//! for (`optimum`), the lower bound on a useful side length (`length`), and
//! the capacity ceiling (`capacity`).
//!
//! This layer produces no errors. Conflicting or missing constraints are
//! rejected by the command-line front end before a resolver is ever built,
//! and a zero side count is a debug-asserted precondition violation.

use ballast_search::num::Weight;

/// The user's sizing constraint: exactly one of a capacity ceiling or a
/// fixed number of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint<T> {
    /// No side may play longer than this many seconds.
    MaxCapacity(T),
    /// Use exactly this many sides.
    SideCount(usize),
}

/// Resolved sizing parameters for one solving run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<T> {
    optimum: usize,
    length: T,
    capacity: T,
}

impl<T> Target<T>
where
    T: Weight,
{
    /// Derives the target from the catalog aggregates and the constraint.
    ///
    /// With `MaxCapacity(d)`: `optimum = ceil(total/d)`, bumped to the next
    /// even number when `even` is set; `length = floor(total/optimum)`; the
    /// capacity ceiling is `d` itself.
    ///
    /// With `SideCount(b)`: `optimum = b`; `length = floor(total/b)`; the
    /// capacity ceiling is `max(longest, ceil(total * 1.1 / b))` — the 10%
    /// slack guarantees the greedy packer can always close a feasible
    /// bracket.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `SideCount(0)` is passed or if
    /// `MaxCapacity(0)` is passed; both are excluded upstream.
    pub fn resolve(total: T, longest: T, constraint: &Constraint<T>, even: bool) -> Self {
        let total_u: u64 = total.into();

        match *constraint {
            Constraint::MaxCapacity(capacity) => {
                let capacity_u: u64 = capacity.into();
                debug_assert!(capacity_u > 0, "capacity constraint must be positive");

                let mut optimum = total_u.div_ceil(capacity_u).max(1) as usize;
                if optimum & 1 == 1 && even {
                    optimum += 1;
                }

                Target {
                    optimum,
                    length: from_u64_saturating(total_u / optimum as u64),
                    capacity,
                }
            }
            Constraint::SideCount(count) => {
                debug_assert!(count > 0, "side count constraint must be positive");

                let longest_u: u64 = longest.into();
                let slack = total_u.saturating_mul(11).div_ceil(10 * count as u64);

                Target {
                    optimum: count,
                    length: from_u64_saturating(total_u / count as u64),
                    capacity: from_u64_saturating(longest_u.max(slack)),
                }
            }
        }
    }

    /// The number of sides the run aims for.
    #[inline]
    pub fn optimum(&self) -> usize {
        self.optimum
    }

    /// The minimum useful side length (floor of the perfectly even split).
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    /// The side capacity ceiling.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }
}

fn from_u64_saturating<T>(value: u64) -> T
where
    T: Weight,
{
    T::from_u64(value).unwrap_or_else(T::max_value)
}
