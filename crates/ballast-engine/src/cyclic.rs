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

//! Cyclic-heuristic engine.
//!
//! A cheaper alternative to the exhaustive search that biases side choice
//! per track instead of exploring every side ordering. The engine recurses
//! per track (not per side): the current track is offered to candidate
//! sides in the order produced by `CyclicIndexer`, the search descends to
//! the next track on a successful placement, and the placement is undone on
//! return.
//!
//! The indexer alternates direction from track to track, which cancels the
//! low-index bias a naive ascending-only scan would create — without it the
//! first sides fill up long before the last ones see a track. Worst case
//! the search still touches `sides^tracks` orderings; in practice the
//! quality monitor (a complete layout below the deviation threshold) or the
//! deadline ends it long before that.

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
use std::time::Instant;

/// Cycling side-visit order for one track position.
///
/// For track position `p` among `limit` sides the sequence starts at
/// `(p/2) % limit` and runs ascending (wrapping) when `p` is even, or at
/// `limit - 1 - (p/2) % limit` running descending (wrapping) when `p` is
/// odd.
///
/// # Examples
///
/// ```rust
/// # use ballast_engine::cyclic::CyclicIndexer;
///
/// let mut ascending = CyclicIndexer::new(0, 4);
/// assert_eq!(ascending.current(), 0);
/// assert_eq!(ascending.advance(), 1);
///
/// let descending = CyclicIndexer::new(1, 4);
/// assert_eq!(descending.current(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicIndexer {
    index: usize,
    start: usize,
    end: usize,
    descending: bool,
}

impl CyclicIndexer {
    /// Creates an indexer for track position `first` among `limit` sides.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `limit` is zero.
    pub fn new(first: usize, limit: usize) -> Self {
        debug_assert!(limit > 0, "cyclic indexer needs at least one side");

        let descending = first & 1 == 1;
        let mut index = (first / 2) % limit;
        let (mut start, mut end) = (0, limit - 1);
        if descending {
            index = limit - 1 - index;
            std::mem::swap(&mut start, &mut end);
        }

        Self {
            index,
            start,
            end,
            descending,
        }
    }

    /// Returns the current index.
    #[inline]
    pub fn current(&self) -> usize {
        self.index
    }

    /// Steps to the next index in the cycle and returns it.
    #[inline]
    pub fn advance(&mut self) -> usize {
        if self.index == self.end {
            self.index = self.start;
        } else if self.descending {
            self.index -= 1;
        } else {
            self.index += 1;
        }
        self.index
    }
}

/// Per-track recursive solver with cyclic side ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicSolver;

impl CyclicSolver {
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the search for the given catalog and resolved target.
    ///
    /// Works best on a catalog ordered longest track first; the caller
    /// controls that through the catalog builder or loader.
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

        let mut session = CyclicSession {
            catalog,
            capacity: target.capacity(),
            side_count: target.optimum(),
            track_count: catalog.len(),
            layout: Layout::with_sides(target.optimum()),
            incumbent: Incumbent::new(),
            monitor,
            steps: 0,
            solutions: 0,
            stop_reason: None,
        };

        if session.track_count == 0 {
            let deviation = session.layout.deviation();
            let layout = session.layout.clone();
            if session.incumbent.try_install(&layout, deviation) {
                session.monitor.on_solution_found(&layout, deviation);
                session.solutions += 1;
            }
        } else if session.side_count > 0 {
            session.look(0);
        }

        let CyclicSession {
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

struct CyclicSession<'a, T, M> {
    catalog: &'a Catalog<T>,
    capacity: T,
    side_count: usize,
    track_count: usize,
    layout: Layout<T>,
    incumbent: Incumbent<T>,
    monitor: &'a mut M,
    steps: u64,
    solutions: u64,
    stop_reason: Option<String>,
}

impl<T, M> CyclicSession<'_, T, M>
where
    T: Weight,
    M: SearchMonitor<T>,
{
    fn look(&mut self, position: usize) {
        self.steps += 1;
        self.monitor.on_step();
        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.stop_reason.get_or_insert(reason);
            return;
        }

        let track = self.catalog.track_ref(TrackIndex::new(position));
        let mut indexer = CyclicIndexer::new(position, self.side_count);

        for _ in 0..self.side_count {
            if self.stop_reason.is_some() {
                return;
            }

            let side = SideIndex::new(indexer.current());
            let fits = self
                .layout
                .side_seconds(side)
                .checked_add(&track.seconds)
                .is_some_and(|sum| sum <= self.capacity);

            if fits {
                self.layout.push(side, track);

                if position + 1 == self.track_count {
                    let deviation = self.layout.deviation();
                    if self.incumbent.try_install(&self.layout, deviation) {
                        self.monitor.on_solution_found(&self.layout, deviation);
                        self.solutions += 1;
                    }
                } else {
                    self.look(position + 1);
                }

                self.layout.pop(side);
            }

            indexer.advance();
        }
    }
}
