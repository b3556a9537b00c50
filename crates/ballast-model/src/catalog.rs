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

//! The immutable track catalog.
//!
//! A `Catalog` is the full ordered list of tracks for one balancing run,
//! together with the aggregates every solver needs: the total play time,
//! the longest single track, and the population standard deviation of the
//! track durations. Aggregates are computed once at build time; the catalog
//! never changes while a solver runs.
//!
//! Construction goes through `CatalogBuilder`, which can optionally reorder
//! the tracks longest-first — the heuristic engines rely on that ordering to
//! place awkward long tracks before the easy short ones.

use crate::index::TrackIndex;
use num_traits::{PrimInt, Unsigned};

/// A single track: a title and a play time in seconds.
///
/// Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track<T> {
    title: String,
    seconds: T,
}

impl<T> Track<T>
where
    T: PrimInt + Unsigned,
{
    /// Creates a new track.
    #[inline]
    pub fn new(title: impl Into<String>, seconds: T) -> Self {
        Self {
            title: title.into(),
            seconds,
        }
    }

    /// Returns the track title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the track play time in seconds.
    #[inline]
    pub fn seconds(&self) -> T {
        self.seconds
    }
}

/// A lightweight reference to a catalog entry: its position plus its
/// duration, copied out so the hot search loops never touch the title
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRef<T> {
    /// Position of the track in the catalog.
    pub index: TrackIndex,
    /// Play time of the track in seconds.
    pub seconds: T,
}

/// The immutable, ordered list of tracks for one run, with precomputed
/// aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    tracks: Vec<Track<T>>,
    total: T,
    longest: T,
    deviation: f64,
}

impl<T> Catalog<T>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    /// Returns the number of tracks in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if the catalog holds no tracks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Returns the total play time of all tracks.
    #[inline]
    pub fn total(&self) -> T {
        self.total
    }

    /// Returns the duration of the longest track.
    #[inline]
    pub fn longest(&self) -> T {
        self.longest
    }

    /// Returns the population standard deviation of the track durations.
    #[inline]
    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    /// Returns the track at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn track(&self, index: TrackIndex) -> &Track<T> {
        &self.tracks[index.get()]
    }

    /// Returns a `TrackRef` for the track at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn track_ref(&self, index: TrackIndex) -> TrackRef<T> {
        TrackRef {
            index,
            seconds: self.tracks[index.get()].seconds(),
        }
    }

    /// Iterates over all tracks in catalog order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Track<T>> {
        self.tracks.iter()
    }

    /// Iterates over `TrackRef`s in catalog order.
    pub fn track_refs(&self) -> impl Iterator<Item = TrackRef<T>> + '_ {
        self.tracks.iter().enumerate().map(|(i, t)| TrackRef {
            index: TrackIndex::new(i),
            seconds: t.seconds(),
        })
    }
}

/// Mutable construction side of `Catalog`.
///
/// Collect tracks with `push`, optionally request longest-first ordering,
/// then call `build` to freeze the catalog and compute its aggregates.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder<T> {
    tracks: Vec<Track<T>>,
    sort_longest_first: bool,
}

impl<T> CatalogBuilder<T>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            sort_longest_first: false,
        }
    }

    /// Creates an empty builder with preallocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tracks: Vec::with_capacity(capacity),
            sort_longest_first: false,
        }
    }

    /// Appends a track.
    #[inline]
    pub fn push(&mut self, track: Track<T>) -> &mut Self {
        self.tracks.push(track);
        self
    }

    /// Requests that the built catalog be ordered longest track first.
    ///
    /// The sort is stable, so equal-length tracks keep their input order.
    #[inline]
    pub fn sort_longest_first(&mut self, enable: bool) -> &mut Self {
        self.sort_longest_first = enable;
        self
    }

    /// Freezes the builder into a `Catalog`, computing all aggregates.
    pub fn build(mut self) -> Catalog<T> {
        if self.sort_longest_first {
            self.tracks
                .sort_by(|a, b| b.seconds().cmp(&a.seconds()));
        }

        let total = self
            .tracks
            .iter()
            .fold(T::zero(), |acc, t| acc + t.seconds());
        let longest = self
            .tracks
            .iter()
            .map(Track::seconds)
            .max()
            .unwrap_or_else(T::zero);
        let deviation = population_deviation(self.tracks.iter().map(|t| t.seconds().into()));

        Catalog {
            tracks: self.tracks,
            total,
            longest,
            deviation,
        }
    }
}

/// Population standard deviation of a sequence of values.
///
/// Returns `0.0` for an empty sequence.
pub fn population_deviation(values: impl Iterator<Item = u64> + Clone) -> f64 {
    let count = values.clone().count();
    if count == 0 {
        return 0.0;
    }

    let total: u64 = values.clone().sum();
    let mean = total as f64 / count as f64;
    let variance = values
        .map(|v| {
            let diff = mean - v as f64;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(durations: &[u64]) -> Catalog<u64> {
        let mut builder = CatalogBuilder::new();
        for (i, &d) in durations.iter().enumerate() {
            builder.push(Track::new(format!("Track {}", i + 1), d));
        }
        builder.build()
    }

    #[test]
    fn test_empty_catalog_aggregates() {
        let catalog = catalog_of(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.total(), 0);
        assert_eq!(catalog.longest(), 0);
        assert_eq!(catalog.deviation(), 0.0);
    }

    #[test]
    fn test_aggregates() {
        let catalog = catalog_of(&[120, 240, 180]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.total(), 540);
        assert_eq!(catalog.longest(), 240);
    }

    #[test]
    fn test_deviation_of_uniform_durations_is_zero() {
        let catalog = catalog_of(&[10, 10, 10]);
        assert_eq!(catalog.deviation(), 0.0);
    }

    #[test]
    fn test_deviation_of_two_values() {
        // mean 10, squared distances 25 + 25, variance 25, deviation 5
        let catalog = catalog_of(&[5, 15]);
        assert!((catalog.deviation() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_sort_longest_first() {
        let mut builder = CatalogBuilder::new();
        builder.push(Track::new("a", 100u64));
        builder.push(Track::new("b", 300u64));
        builder.push(Track::new("c", 200u64));
        builder.sort_longest_first(true);
        let catalog = builder.build();

        let durations: Vec<u64> = catalog.iter().map(Track::seconds).collect();
        assert_eq!(durations, vec![300, 200, 100]);
        // Aggregates are order-independent.
        assert_eq!(catalog.total(), 600);
        assert_eq!(catalog.longest(), 300);
    }

    #[test]
    fn test_sort_is_stable_for_equal_durations() {
        let mut builder = CatalogBuilder::new();
        builder.push(Track::new("first", 100u64));
        builder.push(Track::new("second", 100u64));
        builder.sort_longest_first(true);
        let catalog = builder.build();

        assert_eq!(catalog.track(TrackIndex::new(0)).title(), "first");
        assert_eq!(catalog.track(TrackIndex::new(1)).title(), "second");
    }

    #[test]
    fn test_track_ref_carries_index_and_duration() {
        let catalog = catalog_of(&[120, 240]);
        let r = catalog.track_ref(TrackIndex::new(1));
        assert_eq!(r.index.get(), 1);
        assert_eq!(r.seconds, 240);
    }

    #[test]
    fn test_track_refs_iterates_in_order() {
        let catalog = catalog_of(&[1, 2, 3]);
        let refs: Vec<_> = catalog.track_refs().collect();
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[2].index.get(), 2);
        assert_eq!(refs[2].seconds, 3);
    }
}
