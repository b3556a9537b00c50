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

//! Working containers for candidate solutions.
//!
//! A `Side` accumulates tracks up to a capacity; a `Layout` is the ordered
//! collection of sides forming one candidate solution. Both are mutated by
//! the solvers exclusively through `push`/`pop` pairs in LIFO order — that
//! discipline is what makes backtracking undo correct, so there is no other
//! mutation path.
//!
//! Invariants upheld here:
//! - `Side::seconds` always equals the sum of durations of the tracks held.
//! - `Layout::seconds` always equals the sum of its side totals.

use crate::catalog::{population_deviation, TrackRef};
use crate::index::SideIndex;
use num_traits::{PrimInt, Unsigned};

/// A single container accumulating tracks up to a capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side<T> {
    title: String,
    seconds: T,
    tracks: Vec<TrackRef<T>>,
}

impl<T> Side<T>
where
    T: PrimInt + Unsigned,
{
    /// Creates an empty side with the given title.
    #[inline]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            seconds: T::zero(),
            tracks: Vec::new(),
        }
    }

    /// Returns the side title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the running total of this side in seconds.
    #[inline]
    pub fn seconds(&self) -> T {
        self.seconds
    }

    /// Returns the number of tracks currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if the side holds no tracks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterates over the held tracks in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TrackRef<T>> {
        self.tracks.iter()
    }

    /// Appends a track and adds its duration to the running total.
    #[inline]
    pub fn push(&mut self, track: TrackRef<T>) {
        self.seconds = self.seconds + track.seconds;
        self.tracks.push(track);
    }

    /// Removes the most recently pushed track, subtracting its duration.
    ///
    /// Returns the removed track, or `None` if the side is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<TrackRef<T>> {
        let track = self.tracks.pop()?;
        self.seconds = self.seconds - track.seconds;
        Some(track)
    }
}

/// An ordered collection of sides forming one candidate solution.
///
/// This is what a solver snapshots as its best-found result and what the
/// renderer ultimately consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<T> {
    sides: Vec<Side<T>>,
    seconds: T,
}

impl<T> Default for Layout<T>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Layout<T>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    /// Creates an empty layout with no sides.
    #[inline]
    pub fn new() -> Self {
        Self {
            sides: Vec::new(),
            seconds: T::zero(),
        }
    }

    /// Creates a layout with `count` empty sides titled `Side 1`, `Side 2`, …
    pub fn with_sides(count: usize) -> Self {
        let sides = (1..=count)
            .map(|i| Side::new(format!("Side {}", i)))
            .collect();
        Self {
            sides,
            seconds: T::zero(),
        }
    }

    /// Returns the number of sides.
    #[inline]
    pub fn num_sides(&self) -> usize {
        self.sides.len()
    }

    /// Returns the total play time across all sides.
    #[inline]
    pub fn seconds(&self) -> T {
        self.seconds
    }

    /// Returns the side at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn side(&self, index: SideIndex) -> &Side<T> {
        &self.sides[index.get()]
    }

    /// Iterates over the sides in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Side<T>> {
        self.sides.iter()
    }

    /// Appends a fully built side (used by the greedy packer, which closes
    /// sides one at a time instead of filling a fixed set).
    #[inline]
    pub fn push_side(&mut self, side: Side<T>) {
        self.seconds = self.seconds + side.seconds();
        self.sides.push(side);
    }

    /// Pushes a track onto the side at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn push(&mut self, index: SideIndex, track: TrackRef<T>) {
        self.seconds = self.seconds + track.seconds;
        self.sides[index.get()].push(track);
    }

    /// Pops the most recently pushed track off the side at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn pop(&mut self, index: SideIndex) -> Option<TrackRef<T>> {
        let track = self.sides[index.get()].pop()?;
        self.seconds = self.seconds - track.seconds;
        Some(track)
    }

    /// Returns the running total of the side at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn side_seconds(&self, index: SideIndex) -> T {
        self.sides[index.get()].seconds()
    }

    /// Population standard deviation of the per-side totals.
    ///
    /// This is the balance-quality metric: lower is better, `0.0` means all
    /// sides play for exactly the same time. A layout with no sides has
    /// deviation `0.0`.
    pub fn deviation(&self) -> f64 {
        population_deviation(self.sides.iter().map(|s| s.seconds().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::TrackIndex;

    fn tr(index: usize, seconds: u64) -> TrackRef<u64> {
        TrackRef {
            index: TrackIndex::new(index),
            seconds,
        }
    }

    #[test]
    fn test_side_push_updates_total() {
        let mut side = Side::new("Side 1");
        side.push(tr(0, 100));
        side.push(tr(1, 50));
        assert_eq!(side.seconds(), 150);
        assert_eq!(side.len(), 2);
    }

    #[test]
    fn test_side_push_pop_is_a_net_no_op() {
        let mut side = Side::new("Side 1");
        side.push(tr(0, 100));

        let before_total = side.seconds();
        let before_len = side.len();

        side.push(tr(1, 77));
        let popped = side.pop().unwrap();

        assert_eq!(popped.index.get(), 1);
        assert_eq!(popped.seconds, 77);
        assert_eq!(side.seconds(), before_total);
        assert_eq!(side.len(), before_len);
    }

    #[test]
    fn test_side_pop_is_lifo() {
        let mut side = Side::new("Side 1");
        side.push(tr(0, 10));
        side.push(tr(1, 20));
        assert_eq!(side.pop().unwrap().index.get(), 1);
        assert_eq!(side.pop().unwrap().index.get(), 0);
        assert!(side.pop().is_none());
        assert_eq!(side.seconds(), 0);
    }

    #[test]
    fn test_layout_with_sides_titles() {
        let layout: Layout<u64> = Layout::with_sides(3);
        assert_eq!(layout.num_sides(), 3);
        assert_eq!(layout.side(SideIndex::new(0)).title(), "Side 1");
        assert_eq!(layout.side(SideIndex::new(2)).title(), "Side 3");
    }

    #[test]
    fn test_layout_conservation() {
        // The layout total always equals the sum of the side totals, which
        // equals the sum of all placed track durations.
        let mut layout: Layout<u64> = Layout::with_sides(2);
        layout.push(SideIndex::new(0), tr(0, 300));
        layout.push(SideIndex::new(1), tr(1, 200));
        layout.push(SideIndex::new(0), tr(2, 100));

        let side_sum: u64 = layout.iter().map(|s| s.seconds()).sum();
        assert_eq!(layout.seconds(), 600);
        assert_eq!(side_sum, 600);

        layout.pop(SideIndex::new(0));
        let side_sum: u64 = layout.iter().map(|s| s.seconds()).sum();
        assert_eq!(layout.seconds(), 500);
        assert_eq!(side_sum, 500);
    }

    #[test]
    fn test_deviation_uniform_sides_is_zero() {
        let mut layout: Layout<u64> = Layout::with_sides(3);
        layout.push(SideIndex::new(0), tr(0, 10));
        layout.push(SideIndex::new(1), tr(1, 10));
        layout.push(SideIndex::new(2), tr(2, 10));
        assert_eq!(layout.deviation(), 0.0);
    }

    #[test]
    fn test_deviation_two_sides() {
        // Totals [5, 15]: mean 10, deviation 5.0.
        let mut layout: Layout<u64> = Layout::with_sides(2);
        layout.push(SideIndex::new(0), tr(0, 5));
        layout.push(SideIndex::new(1), tr(1, 15));
        assert!((layout.deviation() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_deviation_of_empty_layout_is_zero() {
        let layout: Layout<u64> = Layout::new();
        assert_eq!(layout.deviation(), 0.0);
    }

    #[test]
    fn test_push_side_accumulates_total() {
        let mut side = Side::new("Side 1");
        side.push(tr(0, 42));

        let mut layout: Layout<u64> = Layout::new();
        layout.push_side(side);
        assert_eq!(layout.num_sides(), 1);
        assert_eq!(layout.seconds(), 42);
    }
}
