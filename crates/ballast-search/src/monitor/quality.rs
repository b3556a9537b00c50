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

//! # Quality Monitor
//!
//! Stops a search as soon as a complete layout of acceptable balance has
//! been found. The cyclic heuristic keeps producing complete layouts at a
//! high rate; once one of them falls below the deviation threshold there is
//! little to gain from searching on, so the monitor arms itself on
//! `on_solution_found` and answers `Terminate` from the next poll onward.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use ballast_model::{catalog::Catalog, layout::Layout};
use num_traits::{PrimInt, Unsigned};

/// Deviation (in seconds) below which a layout counts as balanced enough to
/// stop searching.
pub const DEFAULT_QUALITY_THRESHOLD: f64 = 20.0;

/// A monitor that terminates the search once a found layout's deviation
/// falls strictly below a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityMonitor<T> {
    threshold: f64,
    satisfied: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QualityMonitor<T> {
    /// Creates a monitor with the given deviation threshold.
    #[inline]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            satisfied: false,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<T> Default for QualityMonitor<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY_THRESHOLD)
    }
}

impl<T> SearchMonitor<T> for QualityMonitor<T>
where
    T: PrimInt + Unsigned,
{
    fn name(&self) -> &str {
        "QualityMonitor"
    }

    fn on_enter_search(&mut self, _catalog: &Catalog<T>) {
        self.satisfied = false;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _layout: &Layout<T>, deviation: f64) {
        if deviation < self.threshold {
            self.satisfied = true;
        }
    }

    #[inline(always)]
    fn on_step(&mut self) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.satisfied {
            return SearchCommand::Terminate("quality threshold reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballast_model::layout::Layout;

    type W = u64;

    #[test]
    fn test_continues_until_a_good_layout_appears() {
        let mon = QualityMonitor::<W>::new(20.0);
        assert_eq!(
            SearchMonitor::<W>::search_command(&mon),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_terminates_once_deviation_is_below_threshold() {
        let mut mon = QualityMonitor::<W>::new(20.0);
        let layout = Layout::<W>::with_sides(2);

        mon.on_solution_found(&layout, 19.9);
        assert!(matches!(
            SearchMonitor::<W>::search_command(&mon),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut mon = QualityMonitor::<W>::new(20.0);
        let layout = Layout::<W>::with_sides(2);

        mon.on_solution_found(&layout, 20.0);
        assert_eq!(
            SearchMonitor::<W>::search_command(&mon),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_enter_search_rearms() {
        let mut mon = QualityMonitor::<W>::new(20.0);
        let layout = Layout::<W>::with_sides(2);
        mon.on_solution_found(&layout, 0.0);

        let catalog = ballast_model::catalog::CatalogBuilder::<W>::new().build();
        mon.on_enter_search(&catalog);
        assert_eq!(
            SearchMonitor::<W>::search_command(&mon),
            SearchCommand::Continue
        );
    }
}
