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

//! Shunter-Search: abstractions shared by sequencing engines and the
//! portfolio orchestrator.
//!
//! Module map
//! - `incumbent`: `SharedIncumbent<T>`, a concurrent holder of the best
//!   assembly found so far (atomic sidelined-count hint + mutex snapshot).
//! - `monitor`: `SearchMonitor<T>` and implementations (composite,
//!   time-limit, interrupt, solution-limit) plus `SearchCommand`.
//! - `result`: `SolverResult` / `TerminationReason` / `SolverOutcome`.
//! - `stats`: cross-thread solve statistics.
//! - `portfolio`: the contract connecting engines to the orchestrator.
//! - `num`: the `CarNumeric` trait alias for car weight types.

pub mod incumbent;
pub mod monitor;
pub mod num;
pub mod portfolio;
pub mod result;
pub mod stats;
