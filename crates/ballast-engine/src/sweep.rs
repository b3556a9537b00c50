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

//! Greedy packer driven by a binary search over the side capacity.
//!
//! The packer walks the catalog once in its given order, accumulating into
//! the current side while the running total stays within a candidate
//! capacity; on overflow it closes the side and opens a new one. That makes
//! a single pack O(n) with no sorting dependency — but the quality of the
//! result depends entirely on picking the right capacity.
//!
//! The binary search homes in on that capacity. The bracket starts at the
//! resolver's `[length, capacity]`; each step packs at the rounded-up
//! midpoint and classifies the result: too many sides means the candidate
//! is too short, a lopsided layout (deviation above tolerance, the last
//! side left sparse) means it is too long. The rounding toward the maximum
//! guarantees the bracket shrinks every step, so the loop terminates in at
//! most `ceil(log2(max - min)) + 1` iterations.

use crate::target::Target;
use ballast_model::{
    catalog::Catalog,
    layout::{Layout, Side},
};
use ballast_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::Weight,
    result::SolverOutcome,
    stats::SolverStatisticsBuilder,
};
use std::time::Instant;

/// Deviation (in seconds) above which a packed layout counts as lopsided,
/// pushing the binary search toward shorter sides.
pub const DEVIATION_TOLERANCE: f64 = 10.0;

/// Packs the catalog into sides of at most `capacity` seconds, in catalog
/// order, one linear pass.
///
/// A track longer than `capacity` still gets a side of its own; the packer
/// never drops tracks, it only overflows the bound.
///
/// # Examples
///
/// ```rust
/// # use ballast_engine::sweep::pack;
/// # use ballast_model::catalog::{CatalogBuilder, Track};
///
/// let mut builder = CatalogBuilder::new();
/// for i in 0..4 {
///     builder.push(Track::new(format!("Track {}", i + 1), 300u64));
/// }
/// let catalog = builder.build();
///
/// let layout = pack(&catalog, 650);
/// assert_eq!(layout.num_sides(), 2);
/// assert_eq!(layout.deviation(), 0.0);
/// ```
pub fn pack<T>(catalog: &Catalog<T>, capacity: T) -> Layout<T>
where
    T: Weight,
{
    let mut layout = Layout::new();
    let mut side: Side<T> = Side::new("Side 1");

    for track in catalog.track_refs() {
        let fits = side
            .seconds()
            .checked_add(&track.seconds)
            .is_some_and(|sum| sum <= capacity);

        if fits || side.is_empty() {
            side.push(track);
        } else {
            let next_title = format!("Side {}", layout.num_sides() + 2);
            layout.push_side(std::mem::replace(&mut side, Side::new(next_title)));
            side.push(track);
        }
    }
    if !side.is_empty() {
        layout.push_side(side);
    }

    layout
}

/// Binary-search solver around the greedy packer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepSolver;

impl SweepSolver {
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Homes in on the smallest capacity that packs into the target side
    /// count without leaving the tail sparse.
    ///
    /// Always yields a layout: on deadline expiry the last packed layout
    /// stands.
    pub fn solve<T, M>(
        &self,
        catalog: &Catalog<T>,
        target: &Target<T>,
        monitor: &mut M,
    ) -> SolverOutcome<T>
    where
        T: Weight,
        M: SearchMonitor<T>,
    {
        monitor.on_enter_search(catalog);
        let start_time = Instant::now();

        let mut minimum: u64 = target.length().into();
        let mut maximum: u64 = target.capacity().into();

        let mut layout: Option<Layout<T>> = None;
        let mut steps: u64 = 0;
        let mut solutions: u64 = 0;
        let mut stop_reason: Option<String> = None;

        while minimum <= maximum {
            // Round toward the maximum so the bracket always shrinks;
            // written overflow-safe for saturated capacity bounds.
            let median = minimum + (maximum - minimum + 1) / 2;

            steps += 1;
            monitor.on_step();

            let candidate = pack(catalog, from_u64_saturating::<T>(median));
            let deviation = candidate.deviation();
            monitor.on_solution_found(&candidate, deviation);
            solutions += 1;
            let too_many_sides = candidate.num_sides() > target.optimum();
            let too_long = is_too_long(&candidate);
            layout = Some(candidate);

            if median == minimum || median == maximum {
                break;
            } else if too_many_sides {
                // Too short: the pack needed more sides than requested.
                minimum = median;
            } else if too_long {
                maximum = median;
            } else {
                break;
            }

            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                stop_reason = Some(reason);
                break;
            }
        }

        monitor.on_exit_search();

        let statistics = SolverStatisticsBuilder::new()
            .steps(steps)
            .solutions_found(solutions)
            .solve_duration(start_time.elapsed())
            .build();

        match stop_reason {
            Some(reason) => SolverOutcome::aborted(layout, reason, statistics),
            None => SolverOutcome::completed(layout, statistics),
        }
    }
}

/// A layout is too long when earlier sides hoarded tracks and the tail came
/// out sparse. A single side can never be too long.
fn is_too_long<T>(layout: &Layout<T>) -> bool
where
    T: Weight,
{
    if layout.num_sides() <= 1 {
        return false;
    }
    layout.deviation() > DEVIATION_TOLERANCE
}

fn from_u64_saturating<T>(value: u64) -> T
where
    T: Weight,
{
    T::from_u64(value).unwrap_or_else(T::max_value)
}
