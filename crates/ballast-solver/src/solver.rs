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

//! Strategy selection and monitor assembly.
//!
//! One logical worker executes the chosen engine synchronously; the
//! monitors are the only way a run ends early, and they are polled, never
//! preemptive. A timeout of zero means unbounded search.
//!
//! ## Usage
//!
//! ```rust
//! use ballast_model::catalog::{CatalogBuilder, Track};
//! use ballast_engine::target::Constraint;
//! use ballast_solver::solver::{SolverBuilder, Strategy};
//! use std::time::Duration;
//!
//! let mut builder = CatalogBuilder::new();
//! builder.push(Track::new("Speak to Me", 90u64));
//! builder.push(Track::new("Breathe", 163u64));
//! let catalog = builder.build();
//!
//! let solver = SolverBuilder::new(Constraint::MaxCapacity(200u64))
//!     .with_strategy(Strategy::Exhaustive)
//!     .with_timeout(Duration::ZERO) // unbounded
//!     .build();
//!
//! let outcome = solver.solve(&catalog);
//! assert!(outcome.is_feasible());
//! ```

use ballast_engine::{
    cyclic::CyclicSolver,
    exhaustive::ExhaustiveSolver,
    sweep::SweepSolver,
    target::{Constraint, Target},
};
use ballast_model::catalog::Catalog;
use ballast_search::{
    monitor::{
        composite::CompositeMonitor,
        deadline::DeadlineMonitor,
        quality::{QualityMonitor, DEFAULT_QUALITY_THRESHOLD},
    },
    num::Weight,
    result::SolverOutcome,
};
use std::time::Duration;

/// Which engine a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Linear greedy packing driven by a binary search over capacity.
    /// Deterministic and fast; the default.
    #[default]
    Greedy,
    /// Per-track recursion with cyclic side ordering; expects a
    /// longest-first catalog and exits early on a balanced layout.
    Cyclic,
    /// Depth-first backtracking over every packing decision.
    Exhaustive,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "Greedy"),
            Strategy::Cyclic => write!(f, "Cyclic"),
            Strategy::Exhaustive => write!(f, "Exhaustive"),
        }
    }
}

/// A configured solver, ready to run against any catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Solver<T> {
    strategy: Strategy,
    constraint: Constraint<T>,
    even: bool,
    timeout: Duration,
    quality_threshold: f64,
}

impl<T> Solver<T>
where
    T: Weight,
{
    /// Returns the configured strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the resolved target for the given catalog.
    #[inline]
    pub fn target_for(&self, catalog: &Catalog<T>) -> Target<T> {
        Target::resolve(
            catalog.total(),
            catalog.longest(),
            &self.constraint,
            self.even,
        )
    }

    /// Runs the configured strategy against the catalog.
    pub fn solve(&self, catalog: &Catalog<T>) -> SolverOutcome<T> {
        let target = self.target_for(catalog);

        match self.strategy {
            Strategy::Greedy => {
                // The sweep performs only a handful of iterations, so the
                // deadline is checked on every poll instead of being
                // step-masked.
                let mut monitor = CompositeMonitor::new();
                if !self.timeout.is_zero() {
                    monitor.add_monitor(DeadlineMonitor::<T>::with_clock_check_mask(
                        self.timeout,
                        0,
                    ));
                }
                SweepSolver::new().solve(catalog, &target, &mut monitor)
            }
            Strategy::Cyclic => {
                let mut monitor = CompositeMonitor::new();
                monitor.add_monitor(QualityMonitor::<T>::new(self.quality_threshold));
                if !self.timeout.is_zero() {
                    monitor.add_monitor(DeadlineMonitor::<T>::new(self.timeout));
                }
                CyclicSolver::new().solve(catalog, &target, &mut monitor)
            }
            Strategy::Exhaustive => {
                let mut monitor = CompositeMonitor::new();
                if !self.timeout.is_zero() {
                    monitor.add_monitor(DeadlineMonitor::<T>::new(self.timeout));
                }
                ExhaustiveSolver::new().solve(catalog, &target, &mut monitor)
            }
        }
    }
}

/// Builder for `Solver`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverBuilder<T> {
    strategy: Strategy,
    constraint: Constraint<T>,
    even: bool,
    timeout: Duration,
    quality_threshold: f64,
}

impl<T> SolverBuilder<T>
where
    T: Weight,
{
    /// Creates a builder for the given sizing constraint with the default
    /// strategy, a 60-second timeout, and the default quality threshold.
    #[inline]
    pub fn new(constraint: Constraint<T>) -> Self {
        Self {
            strategy: Strategy::default(),
            constraint,
            even: false,
            timeout: Duration::from_secs(60),
            quality_threshold: DEFAULT_QUALITY_THRESHOLD,
        }
    }

    /// Selects the solving strategy.
    #[inline]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Requires an even number of sides (capacity constraint only).
    #[inline]
    pub fn with_even(mut self, even: bool) -> Self {
        self.even = even;
        self
    }

    /// Sets the search timeout. `Duration::ZERO` disables the bound.
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the deviation below which the cyclic strategy stops searching.
    #[inline]
    pub fn with_quality_threshold(mut self, threshold: f64) -> Self {
        self.quality_threshold = threshold;
        self
    }

    /// Builds the configured solver.
    #[inline]
    pub fn build(self) -> Solver<T> {
        Solver {
            strategy: self.strategy,
            constraint: self.constraint,
            even: self.even,
            timeout: self.timeout,
            quality_threshold: self.quality_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballast_model::catalog::{CatalogBuilder, Track};
    use ballast_search::result::TerminationReason;

    fn catalog_of(durations: &[u64]) -> Catalog<u64> {
        let mut builder = CatalogBuilder::new();
        for (i, &d) in durations.iter().enumerate() {
            builder.push(Track::new(format!("Track {}", i + 1), d));
        }
        builder.build()
    }

    #[test]
    fn test_greedy_strategy_end_to_end() {
        let catalog = catalog_of(&[300, 300, 300, 300]);
        let solver = SolverBuilder::new(Constraint::SideCount(2)).build();

        let outcome = solver.solve(&catalog);
        assert!(outcome.is_feasible());
        let layout = outcome.layout().unwrap();
        assert_eq!(layout.num_sides(), 2);
        assert_eq!(layout.deviation(), 0.0);
    }

    #[test]
    fn test_exhaustive_strategy_unbounded_finds_minimum() {
        let catalog = catalog_of(&[3, 3, 2, 2]);
        let solver = SolverBuilder::new(Constraint::MaxCapacity(5u64))
            .with_strategy(Strategy::Exhaustive)
            .with_timeout(Duration::ZERO)
            .build();

        let outcome = solver.solve(&catalog);
        assert!(outcome.is_feasible());
        assert_eq!(outcome.reason(), &TerminationReason::Completed);
        assert_eq!(outcome.layout().unwrap().deviation(), 0.0);
    }

    #[test]
    fn test_cyclic_strategy_stops_on_quality() {
        let catalog = catalog_of(&[100, 100, 100, 100, 100, 100]);
        let solver = SolverBuilder::new(Constraint::SideCount(2))
            .with_strategy(Strategy::Cyclic)
            .with_timeout(Duration::ZERO)
            .build();

        let outcome = solver.solve(&catalog);
        assert!(outcome.is_feasible());
        assert!(matches!(
            outcome.reason(),
            TerminationReason::Aborted(reason) if reason.contains("quality")
        ));
    }

    #[test]
    fn test_even_flag_reaches_the_resolver() {
        let catalog = catalog_of(&[1000, 1000, 1000]);
        let solver = SolverBuilder::new(Constraint::MaxCapacity(1000u64))
            .with_even(true)
            .build();

        assert_eq!(solver.target_for(&catalog).optimum(), 4);
    }

    #[test]
    fn test_strategy_display_names() {
        assert_eq!(Strategy::Greedy.to_string(), "Greedy");
        assert_eq!(Strategy::Cyclic.to_string(), "Cyclic");
        assert_eq!(Strategy::Exhaustive.to_string(), "Exhaustive");
    }
}
