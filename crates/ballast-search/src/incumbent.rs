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

//! # Incumbent (Best Layout Holder)
//!
//! Holds the best complete layout discovered so far during a search, keyed
//! by its deviation. Engines offer every complete layout they reach; the
//! incumbent keeps a full copy only when the candidate is strictly better
//! than anything seen before. The snapshot outlives the call that created it
//! and becomes the final answer when the deadline fires.
//!
//! Solvers run one at a time on a single thread, so this is a plain struct —
//! no locking, no atomics. The "no layout yet" state is represented by an
//! `f64::INFINITY` deviation next to a `None` snapshot.

use ballast_model::layout::Layout;
use num_traits::{PrimInt, Unsigned};

/// Best-found snapshot of a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent<T> {
    deviation: f64,
    best: Option<Layout<T>>,
}

impl<T> Default for Incumbent<T>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Incumbent<T>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    /// Creates an empty incumbent with no layout installed.
    #[inline]
    pub fn new() -> Self {
        Self {
            deviation: f64::INFINITY,
            best: None,
        }
    }

    /// Returns the deviation of the installed layout, or `f64::INFINITY` if
    /// none is installed yet.
    #[inline]
    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    /// Returns `true` if a layout has been installed.
    #[inline]
    pub fn has_snapshot(&self) -> bool {
        self.best.is_some()
    }

    /// Returns the installed layout, if any.
    #[inline]
    pub fn snapshot(&self) -> Option<&Layout<T>> {
        self.best.as_ref()
    }

    /// Consumes the incumbent, yielding the installed layout, if any.
    #[inline]
    pub fn into_snapshot(self) -> Option<Layout<T>> {
        self.best
    }

    /// Attempts to install `candidate` as the new best layout.
    ///
    /// Installs only on strict improvement and copies the layout when it
    /// does. Returns `true` if the candidate was installed.
    pub fn try_install(&mut self, candidate: &Layout<T>, deviation: f64) -> bool {
        if deviation >= self.deviation {
            return false;
        }

        self.deviation = deviation;
        self.best = Some(candidate.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballast_model::catalog::TrackRef;
    use ballast_model::index::{SideIndex, TrackIndex};

    fn layout_with_totals(totals: &[u64]) -> Layout<u64> {
        let mut layout = Layout::with_sides(totals.len());
        for (i, &t) in totals.iter().enumerate() {
            layout.push(
                SideIndex::new(i),
                TrackRef {
                    index: TrackIndex::new(i),
                    seconds: t,
                },
            );
        }
        layout
    }

    #[test]
    fn test_initial_state() {
        let incumbent = Incumbent::<u64>::new();
        assert!(!incumbent.has_snapshot());
        assert!(incumbent.snapshot().is_none());
        assert_eq!(incumbent.deviation(), f64::INFINITY);
    }

    #[test]
    fn test_install_better_candidate() {
        let mut incumbent = Incumbent::new();
        let layout = layout_with_totals(&[10, 12]);

        assert!(incumbent.try_install(&layout, layout.deviation()));
        assert!(incumbent.has_snapshot());
        assert_eq!(incumbent.deviation(), 1.0);
        assert_eq!(incumbent.snapshot().unwrap().num_sides(), 2);
    }

    #[test]
    fn test_reject_worse_or_equal_candidates() {
        let mut incumbent = Incumbent::new();
        let good = layout_with_totals(&[10, 10]);
        let bad = layout_with_totals(&[5, 15]);

        assert!(incumbent.try_install(&good, good.deviation()));
        assert!(!incumbent.try_install(&bad, bad.deviation()));
        // Equal deviation is rejected too.
        assert!(!incumbent.try_install(&good, good.deviation()));

        assert_eq!(incumbent.deviation(), 0.0);
        assert_eq!(incumbent.snapshot().unwrap(), &good);
    }

    #[test]
    fn test_snapshot_outlives_later_rejections() {
        let mut incumbent = Incumbent::new();
        let first = layout_with_totals(&[9, 11]);
        assert!(incumbent.try_install(&first, first.deviation()));

        let worse = layout_with_totals(&[2, 18]);
        assert!(!incumbent.try_install(&worse, worse.deviation()));

        assert_eq!(incumbent.into_snapshot().unwrap(), first);
    }
}
