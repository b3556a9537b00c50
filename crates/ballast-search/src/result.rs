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

use crate::stats::SolverStatistics;
use ballast_model::layout::Layout;
use num_traits::{PrimInt, Unsigned};

/// What a solver run produced.
///
/// A run that stops — for whatever reason — before any complete layout was
/// found reports `Infeasible`; partial placements are never dressed up as
/// success.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult<T> {
    /// A complete layout was found; every track is placed exactly once.
    Feasible(Layout<T>),
    /// No complete layout was found within the run's bounds.
    Infeasible,
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: PrimInt + Unsigned + Into<u64> + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Feasible(layout) => {
                write!(f, "Feasible(deviation={:.2})", layout.deviation())
            }
            SolverResult::Infeasible => write!(f, "Infeasible"),
        }
    }
}

/// Why a solver run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The solver exhausted its search space or converged on its own.
    Completed,
    /// A monitor requested termination (deadline, quality threshold). The
    /// string carries the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Completed => write!(f, "Completed"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of a solver run after termination: what was found, why the run
/// stopped, and what it cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome<T> {
    result: SolverResult<T>,
    reason: TerminationReason,
    statistics: SolverStatistics,
}

impl<T> SolverOutcome<T> {
    /// Constructs an outcome for a run that ended on its own.
    #[inline]
    pub fn completed(layout: Option<Layout<T>>, statistics: SolverStatistics) -> Self {
        Self {
            result: match layout {
                Some(layout) => SolverResult::Feasible(layout),
                None => SolverResult::Infeasible,
            },
            reason: TerminationReason::Completed,
            statistics,
        }
    }

    /// Constructs an outcome for a run a monitor stopped.
    #[inline]
    pub fn aborted<R>(layout: Option<Layout<T>>, reason: R, statistics: SolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: match layout {
                Some(layout) => SolverResult::Feasible(layout),
                None => SolverResult::Infeasible,
            },
            reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Returns `true` if a complete layout was found.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    /// Returns the found layout, if any.
    #[inline]
    pub fn layout(&self) -> Option<&Layout<T>> {
        match &self.result {
            SolverResult::Feasible(layout) => Some(layout),
            SolverResult::Infeasible => None,
        }
    }

    /// Consumes the outcome, yielding the found layout, if any.
    #[inline]
    pub fn into_layout(self) -> Option<Layout<T>> {
        match self.result {
            SolverResult::Feasible(layout) => Some(layout),
            SolverResult::Infeasible => None,
        }
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Unsigned + Into<u64> + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.result, self.reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballast_model::layout::Layout;

    #[test]
    fn test_completed_with_layout_is_feasible() {
        let layout = Layout::<u64>::with_sides(2);
        let outcome = SolverOutcome::completed(Some(layout), SolverStatistics::default());

        assert!(outcome.is_feasible());
        assert_eq!(outcome.reason(), &TerminationReason::Completed);
        assert!(outcome.layout().is_some());
    }

    #[test]
    fn test_completed_without_layout_is_infeasible() {
        let outcome = SolverOutcome::<u64>::completed(None, SolverStatistics::default());

        assert!(!outcome.is_feasible());
        assert!(outcome.layout().is_none());
        assert_eq!(outcome.result(), &SolverResult::Infeasible);
    }

    #[test]
    fn test_aborted_keeps_reason_and_snapshot() {
        let layout = Layout::<u64>::with_sides(1);
        let outcome = SolverOutcome::aborted(
            Some(layout),
            "deadline reached",
            SolverStatistics::default(),
        );

        assert!(outcome.is_feasible());
        match outcome.reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "deadline reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_into_layout() {
        let layout = Layout::<u64>::with_sides(3);
        let outcome = SolverOutcome::completed(Some(layout), SolverStatistics::default());
        assert_eq!(outcome.into_layout().unwrap().num_sides(), 3);
    }
}
