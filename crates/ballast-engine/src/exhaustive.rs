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

//! Exhaustive backtracking engine.
//!
//! Depth-first search over `(side, track)` decisions. At side `s` the
//! engine scans the catalog from a start index forward; every not-in-use
//! track that fits the remaining capacity of `s` is tentatively placed, the
//! search continues filling `s` from the next track onward, and the
//! placement is undone on return. A track that does not fit `s` advances
//! the search into side `s+1`, restarting the scan.
//!
//! The search is subset-sum-like and exponential in the worst case. It runs
//! as an anytime algorithm: every complete assignment is offered to the
//! incumbent, and the best snapshot so far becomes the answer the moment
//! the deadline fires. The monitor is polled at every call entry, so
//! cancellation latency is one recursive branch.
//!
//! Search state is owned here, not in the catalog: a `FixedBitSet` carries
//! the in-use flags and the working `Layout` carries the partial
//! assignment, both mutated strictly in LIFO push/undo pairs.

use crate::target::Target;
use ballast_model::{
    catalog::Catalog,
    index::{SideIndex, TrackIndex},
    layout::Layout,
};
use ballast_search::{
    incumbent::Incumbent,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::Weight,
    result::SolverOutcome,
    stats::SolverStatisticsBuilder,
};
use fixedbitset::FixedBitSet;
use std::time::Instant;

/// Exhaustive depth-first backtracking solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the search for the given catalog and resolved target.
    ///
    /// Returns the best complete layout discovered, or `Infeasible` if none
    /// was found before the monitor stopped the run (or none exists within
    /// the capacity bound).
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

        let mut session = SearchSession {
            catalog,
            capacity: target.capacity(),
            side_count: target.optimum(),
            track_count: catalog.len(),
            in_use: FixedBitSet::with_capacity(catalog.len()),
            used_count: 0,
            layout: Layout::with_sides(target.optimum()),
            incumbent: Incumbent::new(),
            monitor,
            steps: 0,
            solutions: 0,
            stop_reason: None,
        };

        if session.track_count == 0 {
            // Nothing to place: the empty layout is trivially complete.
            let deviation = session.layout.deviation();
            let layout = session.layout.clone();
            if session.incumbent.try_install(&layout, deviation) {
                session.monitor.on_solution_found(&layout, deviation);
                session.solutions += 1;
            }
        } else {
            session.look(0, 0);
        }

        let SearchSession {
            incumbent,
            monitor,
            steps,
            solutions,
            stop_reason,
            ..
        } = session;

        monitor.on_exit_search();

        let statistics = SolverStatisticsBuilder::new()
            .steps(steps)
            .solutions_found(solutions)
            .solve_duration(start_time.elapsed())
            .build();

        match stop_reason {
            Some(reason) => SolverOutcome::aborted(incumbent.into_snapshot(), reason, statistics),
            None => SolverOutcome::completed(incumbent.into_snapshot(), statistics),
        }
    }
}

struct SearchSession<'a, T, M> {
    catalog: &'a Catalog<T>,
    capacity: T,
    side_count: usize,
    track_count: usize,
    in_use: FixedBitSet,
    used_count: usize,
    layout: Layout<T>,
    incumbent: Incumbent<T>,
    monitor: &'a mut M,
    steps: u64,
    solutions: u64,
    stop_reason: Option<String>,
}

impl<T, M> SearchSession<'_, T, M>
where
    T: Weight,
    M: SearchMonitor<T>,
{
    fn look(&mut self, side_index: usize, track_index: usize) {
        self.steps += 1;
        self.monitor.on_step();
        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.stop_reason.get_or_insert(reason);
            return;
        }
        if side_index == self.side_count {
            return;
        }

        let side = SideIndex::new(side_index);
        for index in track_index..self.track_count {
            if self.stop_reason.is_some() {
                return;
            }
            if self.in_use.contains(index) {
                continue;
            }

            let track = self.catalog.track_ref(TrackIndex::new(index));
            let fits = self
                .layout
                .side_seconds(side)
                .checked_add(&track.seconds)
                .is_some_and(|sum| sum <= self.capacity);

            if fits {
                self.in_use.insert(index);
                self.used_count += 1;
                self.layout.push(side, track);

                if self.used_count == self.track_count {
                    let deviation = self.layout.deviation();
                    if self.incumbent.try_install(&self.layout, deviation) {
                        self.monitor.on_solution_found(&self.layout, deviation);
                        self.solutions += 1;
                    }
                } else {
                    self.look(side_index, index + 1);
                }

                self.layout.pop(side);
                self.used_count -= 1;
                self.in_use.set(index, false);
            } else {
                self.look(side_index + 1, 0);
            }
        }
    }
}
