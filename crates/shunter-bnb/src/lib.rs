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

//! Shunter-BnB: branch-and-bound for railway-yard sequencing
//!
//! High-level crate that implements a deterministic, modular
//! branch-and-bound sequencer. Each arriving car admits a three-way decision
//! (couple to the front, couple to the rear, route to the siding), the
//! assembled train must be non-increasing in weight from front to rear, and
//! the engine minimizes the number of sidelined cars — equivalently, it
//! maximizes the length of the outgoing train.
//!
//! Core flow
//! - Provide a `shunter_model::manifest::Manifest<T>`.
//! - Choose a `branching::BranchPolicy` (exploration order of the three
//!   decisions).
//! - Optionally attach a shared incumbent and monitors.
//! - Run `bnb::Sequencer` directly, or integrate via `portfolio`.
//!
//! Design highlights
//! - Separation of concerns: policies order decisions; admissibility lives
//!   in `branching::decision`; monitors observe/control; outcomes carry
//!   stats.
//! - Tight inner loop: the assembly is mutated in place as a double-ended
//!   buffer and restored on return (classic backtracking), no per-node
//!   sequence copies.
//! - The incumbent bound (fewest sidelined cars so far) prunes dominated
//!   subtrees; a perfect assembly (every car coupled) stops the entire
//!   search immediately.
//! - Deterministic given a deterministic policy.
//!
//! Module map
//! - `bnb`: the sequencer engine and session orchestration.
//! - `branching`: decisions, admissibility, and exploration-order policies.
//! - `monitor`: tree-search monitors (log, composite, no-op, wrapper).
//! - `portfolio`: adapter to the `shunter_search` portfolio API.
//! - `result`: sequencer outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.
//! - `state`: the double-ended assembly buffer with undo-on-return.

pub mod bnb;
pub mod branching;
mod incumbent;
pub mod monitor;
pub mod portfolio;
pub mod result;
pub mod state;
pub mod stats;
