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

use crate::monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor};
use crate::state::SearchState;
use crate::stats::SequencerStatistics;
use crate::branching::decision::Decision;
use num_traits::{PrimInt, Signed};
use shunter_model::{assembly::Assembly, manifest::Manifest};
use std::time::{Duration, Instant};

/// A monitor that periodically prints a progress table of the search.
///
/// Printing is throttled twice: a bitmask on the node counter keeps the
/// clock off the hot path, and a wall-clock interval keeps the output
/// readable on long runs.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_len: Option<usize>,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_len: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<7} | {:<10} | {:<14} | {:<14} | {:<10}",
            "Elapsed",
            "Nodes",
            "Depth",
            "Best Len",
            "Pruned (Ord)",
            "Pruned (Bnd)",
            "Backtracks"
        );
        println!("{}", "-".repeat(96));
    }

    #[inline(always)]
    fn log_line<T>(&mut self, state: &SearchState<T>, stats: &SequencerStatistics)
    where
        T: PrimInt + Signed,
    {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_len_str = match self.best_len {
            Some(len) => format!("{}", len),
            None => "-".to_string(),
        };

        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<7} | {:<10} | {:<14} | {:<14} | {:<10}",
            elapsed_field,
            stats.nodes_explored,
            state.assembly_len(),
            best_len_str,
            stats.prunings_order,
            stats.prunings_bound,
            stats.backtracks
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogMonitor
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, _manifest: &Manifest<T>, _statistics: &SequencerStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_len = None; // Reset
        self.print_header();
    }

    fn on_exit_search(&mut self, _statistics: &SequencerStatistics) {
        println!("{}", "-".repeat(96));
        println!("Search finished.");
    }

    fn on_step(&mut self, state: &SearchState<T>, stats: &SequencerStatistics) {
        if (stats.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state, stats);
        }
    }

    fn on_prune(
        &mut self,
        _state: &SearchState<T>,
        _reason: PruneReason,
        _statistics: &SequencerStatistics,
    ) {
    }

    fn on_decisions_generated(
        &mut self,
        _state: &SearchState<T>,
        _count: usize,
        _statistics: &SequencerStatistics,
    ) {
    }

    fn on_descend(
        &mut self,
        _state: &SearchState<T>,
        _decision: Decision<T>,
        _statistics: &SequencerStatistics,
    ) {
    }

    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &SequencerStatistics) {}

    fn on_solution_found(&mut self, assembly: &Assembly<T>, _statistics: &SequencerStatistics) {
        let len = assembly.len();
        if self.best_len.is_none_or(|best| len > best) {
            self.best_len = Some(len);
        }
    }
}
