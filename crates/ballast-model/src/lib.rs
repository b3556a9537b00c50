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

//! # Ballast Model
//!
//! **The Core Domain Model for the Ballast Track-Balancing Solver.**
//!
//! This crate defines the data structures used to spread a catalog of
//! weighted tracks across a set of sides so that side play times come out as
//! even as possible. It is the data interchange layer between problem
//! loading (user input) and the solving engines (`ballast_engine`).
//!
//! ## Architecture
//!
//! The crate separates **immutable input** from **mutable working state**:
//!
//! * **`index`**: Strongly-typed wrappers (`TrackIndex`, `SideIndex`) to prevent
//!   logical indexing errors.
//! * **`catalog`**: The `Catalog` (immutable, aggregates precomputed) and
//!   `CatalogBuilder` (mutable, optimized for configuration).
//! * **`layout`**: `Side` and `Layout`, the working containers every solver
//!   mutates through a strict push/pop discipline.
//! * **`loading`**: Turns `DURATION TITLE` text lines into a validated `Catalog`.
//! * **`time`**: Parsing and formatting of `hh:mm:ss` durations.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types; a `TrackIndex` cannot be
//!     used where a `SideIndex` is expected.
//! 2.  **Immutability**: A built `Catalog` never changes during a run. All
//!     search bookkeeping (in-use flags, partial layouts) lives in the engine.
//! 3.  **Fail-Fast**: The loader validates input eagerly so the solvers never
//!     see an invalid catalog.

pub mod catalog;
pub mod index;
pub mod layout;
pub mod loading;
pub mod time;
