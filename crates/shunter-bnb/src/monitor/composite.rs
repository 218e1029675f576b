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

use crate::{
    branching::decision::Decision,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::SearchState,
    stats::SequencerStatistics,
};
use num_traits::{PrimInt, Signed};
use shunter_model::{assembly::Assembly, manifest::Manifest};
use shunter_search::monitor::search_monitor::SearchCommand;

/// A composite monitor that aggregates multiple tree-search monitors and
/// forwards events to all of them. The first `Terminate` command returned
/// by any aggregated monitor wins.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn TreeSearchMonitor<T> + 'a>>,
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Returns the number of monitors in the composite monitor.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> TreeSearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, manifest: &Manifest<T>, statistics: &SequencerStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_search(manifest, statistics);
        }
    }

    fn on_exit_search(&mut self, statistics: &SequencerStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_search(statistics);
        }
    }

    fn search_command(
        &mut self,
        state: &SearchState<T>,
        statistics: &SequencerStatistics,
    ) -> SearchCommand {
        for monitor in self.monitors.iter_mut() {
            if let SearchCommand::Terminate(reason) = monitor.search_command(state, statistics) {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }

    fn on_step(&mut self, state: &SearchState<T>, statistics: &SequencerStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_step(state, statistics);
        }
    }

    fn on_prune(
        &mut self,
        state: &SearchState<T>,
        reason: PruneReason,
        statistics: &SequencerStatistics,
    ) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_prune(state, reason, statistics);
        }
    }

    fn on_decisions_generated(
        &mut self,
        state: &SearchState<T>,
        count: usize,
        statistics: &SequencerStatistics,
    ) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_decisions_generated(state, count, statistics);
        }
    }

    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        decision: Decision<T>,
        statistics: &SequencerStatistics,
    ) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_descend(state, decision, statistics);
        }
    }

    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &SequencerStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_backtrack(state, statistics);
        }
    }

    fn on_solution_found(&mut self, assembly: &Assembly<T>, statistics: &SequencerStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_solution_found(assembly, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;

    type IntegerType = i64;

    /// A monitor that records which callbacks fired.
    #[derive(Default)]
    struct RecordingMonitor {
        steps: u64,
        prunes: u64,
        solutions: u64,
        terminate: bool,
    }

    impl TreeSearchMonitor<IntegerType> for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }

        fn on_enter_search(
            &mut self,
            _manifest: &Manifest<IntegerType>,
            _statistics: &SequencerStatistics,
        ) {
        }

        fn on_exit_search(&mut self, _statistics: &SequencerStatistics) {}

        fn search_command(
            &mut self,
            _state: &SearchState<IntegerType>,
            _statistics: &SequencerStatistics,
        ) -> SearchCommand {
            if self.terminate {
                SearchCommand::Terminate("recording monitor says stop".to_string())
            } else {
                SearchCommand::Continue
            }
        }

        fn on_step(&mut self, _state: &SearchState<IntegerType>, _stats: &SequencerStatistics) {
            self.steps += 1;
        }

        fn on_prune(
            &mut self,
            _state: &SearchState<IntegerType>,
            _reason: PruneReason,
            _stats: &SequencerStatistics,
        ) {
            self.prunes += 1;
        }

        fn on_decisions_generated(
            &mut self,
            _state: &SearchState<IntegerType>,
            _count: usize,
            _stats: &SequencerStatistics,
        ) {
        }

        fn on_descend(
            &mut self,
            _state: &SearchState<IntegerType>,
            _decision: Decision<IntegerType>,
            _stats: &SequencerStatistics,
        ) {
        }

        fn on_backtrack(
            &mut self,
            _state: &SearchState<IntegerType>,
            _stats: &SequencerStatistics,
        ) {
        }

        fn on_solution_found(
            &mut self,
            _assembly: &Assembly<IntegerType>,
            _stats: &SequencerStatistics,
        ) {
            self.solutions += 1;
        }
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        assert!(composite.is_empty());

        let state = SearchState::new();
        let stats = SequencerStatistics::default();
        assert!(matches!(
            composite.search_command(&state, &stats),
            SearchCommand::Continue
        ));
    }

    #[test]
    fn test_first_terminate_wins() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor(RecordingMonitor {
            terminate: true,
            ..Default::default()
        });
        assert_eq!(composite.len(), 2);

        let state = SearchState::new();
        let stats = SequencerStatistics::default();
        match composite.search_command(&state, &stats) {
            SearchCommand::Terminate(reason) => {
                assert_eq!(reason, "recording monitor says stop");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }
}
