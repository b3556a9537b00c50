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

//! # Ballast Search
//!
//! **Search plumbing shared by every ballast solving engine.**
//!
//! The engines in `ballast_engine` differ in how they explore the space of
//! layouts, but they all need the same surrounding machinery: a cooperative
//! way to stop (deadline, quality threshold), a place to keep the best
//! complete layout seen so far, and a common outcome/statistics vocabulary.
//! That machinery lives here so the engines stay focused on search order.
//!
//! * **`monitor`**: The `SearchMonitor` trait plus the deadline, quality and
//!   composite monitors. Cancellation is cooperative only — engines poll at
//!   every recursive call or loop iteration, nothing is ever preempted.
//! * **`incumbent`**: Best-found snapshot holder with strict-improvement
//!   installs.
//! * **`result`**: `SolverResult`, `TerminationReason`, `SolverOutcome`.
//! * **`stats`**: Run statistics with a small builder.
//! * **`num`**: The `Weight` numeric alias trait all engines are generic over.

pub mod incumbent;
pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
