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

use shunter_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected during the execution of the sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequencerStatistics {
    /// Total nodes visited.
    pub nodes_explored: u64,
    /// Total returns from a child branch back to its parent.
    pub backtracks: u64,
    /// Total coupling/siding decisions applied.
    pub decisions_applied: u64,
    /// The deepest position reached in the tree.
    pub max_depth: u64,
    /// Branches cut because the coupling would break the non-increasing
    /// order of the train.
    pub prunings_order: u64,
    /// Branches cut because the subtree was a mirror image of one already
    /// explored (rear-coupling to an empty train).
    pub prunings_symmetry: u64,
    /// Branches cut because they had already sidelined more cars than the
    /// incumbent.
    pub prunings_bound: u64,
    /// Total complete assemblies recorded during the search.
    pub solutions_found: u64,
    /// Total time spent in the sequencer.
    pub time_total: Duration,
}

impl SequencerStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add_val(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add_val(1);
    }

    #[inline]
    pub fn on_decision_applied(&mut self) {
        self.decisions_applied = self.decisions_applied.saturating_add_val(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_pruning_order(&mut self) {
        self.prunings_order = self.prunings_order.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_symmetry(&mut self) {
        self.prunings_symmetry = self.prunings_symmetry.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add_val(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add_val(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SequencerStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sequencer Statistics:")?;
        writeln!(f, "  Nodes explored:      {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:          {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:   {}", self.max_depth)?;
        writeln!(f, "  Decisions applied:   {}", self.decisions_applied)?;
        writeln!(f, "  Prunings (order):    {}", self.prunings_order)?;
        writeln!(f, "  Prunings (symmetry): {}", self.prunings_symmetry)?;
        writeln!(f, "  Prunings (bound):    {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:     {}", self.solutions_found)?;
        writeln!(f, "  Total time:          {:.2?}", self.time_total)?;
        Ok(())
    }
}
