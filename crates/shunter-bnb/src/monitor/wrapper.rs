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

//! Bridges the engine-agnostic `shunter_search::SearchMonitor` interface
//! (used by the portfolio orchestrator) into the engine-specific
//! `TreeSearchMonitor` interface consumed by the sequencer. Tree-level
//! events with no counterpart on the search level (prunes, descents,
//! backtracks) are swallowed.

use crate::{
    branching::decision::Decision,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::SearchState,
    stats::SequencerStatistics,
};
use num_traits::{PrimInt, Signed};
use shunter_model::{assembly::Assembly, manifest::Manifest};
use shunter_search::monitor::search_monitor::{SearchCommand, SearchMonitor};

/// Adapts a `SearchMonitor` into a `TreeSearchMonitor`.
pub struct SearchMonitorAdapter<'a, T> {
    inner: &'a mut dyn SearchMonitor<T>,
}

impl<'a, T> SearchMonitorAdapter<'a, T> {
    /// Creates a new adapter around the given search monitor.
    #[inline(always)]
    pub fn new(inner: &'a mut dyn SearchMonitor<T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> std::fmt::Debug for SearchMonitorAdapter<'a, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitorAdapter({})", self.inner.name())
    }
}

impl<'a, T> TreeSearchMonitor<T> for SearchMonitorAdapter<'a, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn on_enter_search(&mut self, manifest: &Manifest<T>, _statistics: &SequencerStatistics) {
        self.inner.on_enter_search(manifest);
    }

    fn on_exit_search(&mut self, _statistics: &SequencerStatistics) {
        self.inner.on_exit_search();
    }

    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        _statistics: &SequencerStatistics,
    ) -> SearchCommand {
        self.inner.search_command()
    }

    #[inline(always)]
    fn on_step(&mut self, _state: &SearchState<T>, _statistics: &SequencerStatistics) {
        self.inner.on_step();
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        _state: &SearchState<T>,
        _reason: PruneReason,
        _statistics: &SequencerStatistics,
    ) {
    }

    #[inline(always)]
    fn on_decisions_generated(
        &mut self,
        _state: &SearchState<T>,
        _count: usize,
        _statistics: &SequencerStatistics,
    ) {
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        _state: &SearchState<T>,
        _decision: Decision<T>,
        _statistics: &SequencerStatistics,
    ) {
    }

    #[inline(always)]
    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &SequencerStatistics) {}

    fn on_solution_found(&mut self, assembly: &Assembly<T>, _statistics: &SequencerStatistics) {
        self.inner.on_solution_found(assembly);
    }
}
