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

use ballast_model::{catalog::Catalog, layout::Layout};
use num_traits::{PrimInt, Unsigned};

/// Verdict returned from a monitor poll.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Observer and cooperative stop signal for a running search.
///
/// Engines call `on_step` plus `search_command` at every recursive call or
/// loop iteration and stop descending as soon as a `Terminate` comes back.
/// Monitors never preempt anything; they only answer when polled, so
/// cancellation latency is bounded by the cost of a single search step.
pub trait SearchMonitor<T>
where
    T: PrimInt + Unsigned,
{
    fn name(&self) -> &str;
    fn on_enter_search(&mut self, catalog: &Catalog<T>);
    fn on_exit_search(&mut self);
    fn on_solution_found(&mut self, layout: &Layout<T>, deviation: f64);
    fn on_step(&mut self);
    fn search_command(&self) -> SearchCommand;
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// A monitor that never terminates the search. Useful for tests and for
/// deterministic unbounded runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl<T> SearchMonitor<T> for NoOpMonitor
where
    T: PrimInt + Unsigned,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_enter_search(&mut self, _catalog: &Catalog<T>) {}

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _layout: &Layout<T>, _deviation: f64) {}

    #[inline(always)]
    fn on_step(&mut self) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
