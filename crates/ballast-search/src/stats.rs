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

/// Statistics collected during a solver run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverStatistics {
    /// Search steps performed (recursive calls or packing iterations).
    pub steps: u64,
    /// Complete layouts found during the run.
    pub solutions_found: u64,
    /// Total wall-clock duration of the run.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Steps: {}", self.steps)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        write!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolverStatistics`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverStatisticsBuilder {
    steps: u64,
    solutions_found: u64,
    solve_duration: std::time::Duration,
}

impl SolverStatisticsBuilder {
    /// Creates a builder with all counters zeroed.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of search steps performed.
    #[inline]
    pub fn steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the number of complete layouts found.
    #[inline]
    pub fn solutions_found(mut self, solutions_found: u64) -> Self {
        self.solutions_found = solutions_found;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolverStatistics` instance.
    #[inline]
    pub fn build(self) -> SolverStatistics {
        SolverStatistics {
            steps: self.steps,
            solutions_found: self.solutions_found,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_round_trip() {
        let stats = SolverStatisticsBuilder::new()
            .steps(42)
            .solutions_found(3)
            .solve_duration(Duration::from_millis(1500))
            .build();

        assert_eq!(stats.steps, 42);
        assert_eq!(stats.solutions_found, 3);
        assert_eq!(stats.solve_duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_display_mentions_all_fields() {
        let stats = SolverStatisticsBuilder::new()
            .steps(7)
            .solutions_found(1)
            .build();

        let text = format!("{}", stats);
        assert!(text.contains("Steps: 7"));
        assert!(text.contains("Solutions Found: 1"));
        assert!(text.contains("Solve Duration"));
    }
}
