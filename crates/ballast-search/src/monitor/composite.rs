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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use ballast_model::{catalog::Catalog, layout::Layout};
use num_traits::{PrimInt, Unsigned};

/// A monitor that aggregates multiple monitors and forwards events to all of
/// them. The first `Terminate` answer wins.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<T> std::fmt::Debug for CompositeMonitor<'_, T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<T> Default for CompositeMonitor<'_, T>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: PrimInt + Unsigned,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Adds a monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Returns the number of aggregated monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if no monitors are aggregated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<T> SearchMonitor<T> for CompositeMonitor<'_, T>
where
    T: PrimInt + Unsigned,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, catalog: &Catalog<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(catalog);
        }
    }

    fn on_exit_search(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search();
        }
    }

    fn on_solution_found(&mut self, layout: &Layout<T>, deviation: f64) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(layout, deviation);
        }
    }

    #[inline]
    fn on_step(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_step();
        }
    }

    #[inline]
    fn search_command(&self) -> SearchCommand {
        for monitor in &self.monitors {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::quality::QualityMonitor;
    use crate::monitor::search_monitor::NoOpMonitor;
    use ballast_model::layout::Layout;

    type W = u64;

    #[test]
    fn test_empty_composite_continues() {
        let composite = CompositeMonitor::<W>::new();
        assert!(composite.is_empty());
        assert_eq!(
            SearchMonitor::<W>::search_command(&composite),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_forwards_events_and_any_terminate_wins() {
        let mut composite = CompositeMonitor::<W>::new();
        composite.add_monitor(NoOpMonitor);
        composite.add_monitor(QualityMonitor::<W>::new(20.0));
        assert_eq!(composite.len(), 2);

        let layout = Layout::<W>::with_sides(2);
        composite.on_solution_found(&layout, 1.0);

        assert!(matches!(
            SearchMonitor::<W>::search_command(&composite),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_debug_lists_monitor_names() {
        let mut composite = CompositeMonitor::<W>::new();
        composite.add_monitor(NoOpMonitor);
        let debug = format!("{:?}", composite);
        assert!(debug.contains("NoOpMonitor"));
    }
}
