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

//! # Deadline Monitor
//!
//! A monitor that enforces a wall-clock budget on a search. It records a
//! start instant on search entry and, when polled, compares elapsed time
//! against the configured limit using a bitmask-based step filter so the
//! clock is not read on every single step.
//!
//! ## Motivation
//!
//! Exhaustive layout search is subset-sum-like and explodes combinatorially.
//! The engines are anytime algorithms: they keep the best complete layout
//! found so far and the deadline simply decides when to stop improving it.
//! There is no background countdown thread — the deadline is an explicit
//! timestamp checked at poll points, which keeps the whole solver
//! single-threaded with no shared mutable state.
//!
//! ## Highlights
//!
//! - `DeadlineMonitor::new(limit)` — a `Duration::ZERO` limit disables the
//!   bound entirely; the monitor then always answers `Continue`, which makes
//!   deterministic exhaustive runs possible in tests.
//! - Bitmask-driven clock checks: `(steps & clock_check_mask) == 0` triggers
//!   a check. The default mask (`0xFFF`) checks roughly every 4,096 steps;
//!   mask 0 checks on every poll.
//! - `on_step()` uses `wrapping_add` so the counter can run forever.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use ballast_model::{catalog::Catalog, layout::Layout};
use num_traits::{PrimInt, Unsigned};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineMonitor<T> {
    clock_check_mask: u64,
    steps: u64,
    time_limit: Duration,
    start_time: Instant,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> DeadlineMonitor<T> {
    /// Default mask: check the clock every 4,096 steps (2^12).
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0xFFF;

    /// Creates a monitor enforcing the given wall-clock limit.
    ///
    /// A limit of `Duration::ZERO` disables the bound.
    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self {
            clock_check_mask: Self::DEFAULT_STEP_CLOCK_CHECK_MASK,
            steps: 0,
            time_limit,
            start_time: Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Creates a monitor with a custom clock-check mask. A mask of zero
    /// checks the clock on every poll.
    #[inline]
    pub fn with_clock_check_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns `true` if the bound is disabled.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.time_limit.is_zero()
    }

    #[cfg(test)]
    fn backdate(&mut self, by: Duration) {
        self.start_time = Instant::now() - by;
    }
}

impl<T> SearchMonitor<T> for DeadlineMonitor<T>
where
    T: PrimInt + Unsigned,
{
    fn name(&self) -> &str {
        "DeadlineMonitor"
    }

    fn on_enter_search(&mut self, _catalog: &Catalog<T>) {
        self.start_time = Instant::now();
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _layout: &Layout<T>, _deviation: f64) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.time_limit.is_zero() {
            return SearchCommand::Continue;
        }
        if (self.steps & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("deadline reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type W = u64;

    #[test]
    fn test_zero_limit_disables_the_bound() {
        let mut mon = DeadlineMonitor::<W>::new(Duration::ZERO);
        assert!(mon.is_unbounded());

        // Even with the clock far in the past, the monitor keeps going.
        mon.backdate(Duration::from_secs(3600));
        mon.steps = 0;
        assert_eq!(
            SearchMonitor::<W>::search_command(&mon),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_terminates_after_limit_when_mask_condition_met() {
        let mut mon = DeadlineMonitor::<W>::new(Duration::from_millis(10));
        mon.backdate(Duration::from_millis(50));

        mon.steps = 0; // (steps & mask) == 0, clock check runs
        match SearchMonitor::<W>::search_command(&mon) {
            SearchCommand::Terminate(reason) => {
                assert!(reason.contains("deadline"), "unexpected reason: {reason}");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_continues_when_mask_condition_not_met_even_if_time_exceeded() {
        let mut mon = DeadlineMonitor::<W>::new(Duration::from_millis(1));
        mon.backdate(Duration::from_millis(50));

        mon.steps = 1; // 1 & 0xFFF != 0, check skipped
        assert_eq!(
            SearchMonitor::<W>::search_command(&mon),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_mask_zero_always_checks() {
        let mut mon =
            DeadlineMonitor::<W>::with_clock_check_mask(Duration::from_millis(1), 0);
        mon.backdate(Duration::from_millis(50));

        mon.steps = 12345;
        assert!(matches!(
            SearchMonitor::<W>::search_command(&mon),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_continues_before_limit() {
        let mut mon = DeadlineMonitor::<W>::new(Duration::from_secs(3600));
        mon.steps = 0;
        assert_eq!(
            SearchMonitor::<W>::search_command(&mon),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_on_step_wraps() {
        let mut mon = DeadlineMonitor::<W>::new(Duration::from_secs(1));
        mon.steps = u64::MAX;
        SearchMonitor::<W>::on_step(&mut mon);
        assert_eq!(mon.steps, 0);
    }

    #[test]
    fn test_enter_search_resets_clock_and_steps() {
        let mut mon = DeadlineMonitor::<W>::new(Duration::from_secs(1));
        mon.steps = 999;
        mon.backdate(Duration::from_secs(10));

        let catalog = ballast_model::catalog::CatalogBuilder::<W>::new().build();
        mon.on_enter_search(&catalog);

        assert_eq!(mon.steps, 0);
        assert!(mon.start_time.elapsed() < Duration::from_secs(1));
    }
}
