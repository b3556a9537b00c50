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

//! Track listing loader.
//!
//! Turns plain-text track listings into a validated `Catalog`. Each line is
//! `DURATION<whitespace>TITLE`, with the duration given as plain seconds or
//! as `hh:mm:ss` / `mm:ss`. Blank lines and lines starting with `#` are
//! skipped.
//!
//! Errors point at the offending line number so a user can fix their listing
//! without guessing. The loader accepts any `BufRead`, a string slice, or a
//! file path, which keeps tests and tooling convenient.

use crate::catalog::{Catalog, CatalogBuilder, Track};
use crate::time::parse_duration;
use num_traits::{FromPrimitive, PrimInt, Unsigned};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// The error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// An I/O error occurred while reading the input.
    #[error("i/o error while reading track listing")]
    Io(#[from] std::io::Error),

    /// A line had a duration but no title.
    #[error("line {line}: missing track title")]
    MissingTitle { line: usize },

    /// A duration token could not be parsed.
    #[error("line {line}: could not parse duration '{token}'")]
    BadDuration { line: usize, token: String },

    /// A duration parsed fine but does not fit the catalog's numeric type.
    #[error("line {line}: duration '{token}' out of range")]
    DurationRange { line: usize, token: String },
}

/// Loader for `DURATION TITLE` track listings.
///
/// # Examples
///
/// ```rust
/// # use ballast_model::loading::CatalogLoader;
///
/// let listing = "4:07 Breathe\n247 Time\n";
/// let catalog = CatalogLoader::new().from_str::<u64>(listing).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.total(), 494);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    sort_longest_first: bool,
}

impl CatalogLoader {
    /// Creates a loader with default settings.
    #[inline]
    pub fn new() -> Self {
        Self {
            sort_longest_first: false,
        }
    }

    /// Requests longest-first ordering of the loaded catalog (used by the
    /// heuristic solving modes).
    #[inline]
    pub fn sort_longest_first(mut self, enable: bool) -> Self {
        self.sort_longest_first = enable;
        self
    }

    /// Loads a catalog from a file path.
    pub fn from_path<T>(&self, path: impl AsRef<Path>) -> Result<Catalog<T>, CatalogLoadError>
    where
        T: PrimInt + Unsigned + FromPrimitive + Into<u64>,
    {
        let file = File::open(path)?;
        self.from_reader(BufReader::new(file))
    }

    /// Loads a catalog from a string slice.
    pub fn from_str<T>(&self, input: &str) -> Result<Catalog<T>, CatalogLoadError>
    where
        T: PrimInt + Unsigned + FromPrimitive + Into<u64>,
    {
        self.from_reader(input.as_bytes())
    }

    /// Loads a catalog from any buffered reader.
    pub fn from_reader<T>(&self, reader: impl BufRead) -> Result<Catalog<T>, CatalogLoadError>
    where
        T: PrimInt + Unsigned + FromPrimitive + Into<u64>,
    {
        let mut builder = CatalogBuilder::new();
        builder.sort_longest_first(self.sort_longest_first);

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let number = number + 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (token, rest) = match trimmed.split_once(char::is_whitespace) {
                Some(parts) => parts,
                None => {
                    return Err(CatalogLoadError::MissingTitle { line: number });
                }
            };

            let seconds =
                parse_duration(token).map_err(|_| CatalogLoadError::BadDuration {
                    line: number,
                    token: token.to_string(),
                })?;
            let seconds = T::from_u64(seconds).ok_or_else(|| CatalogLoadError::DurationRange {
                line: number,
                token: token.to_string(),
            })?;

            let title = rest.trim();
            if title.is_empty() {
                return Err(CatalogLoadError::MissingTitle { line: number });
            }

            builder.push(Track::new(title, seconds));
        }

        Ok(builder.build())
    }
}
