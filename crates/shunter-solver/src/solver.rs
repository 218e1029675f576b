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

//! # Portfolio-Orchestrated Sequencing Solver
//!
//! A high-level orchestrator that runs multiple sequencer configurations in
//! parallel, manages a shared incumbent, and enforces global termination
//! criteria via pluggable monitors (time limit, solution count, external
//! interrupt).
//!
//! ## Motivation
//!
//! Different branching policies walk the decision tree in different orders
//! and install improving assemblies at different times. This solver
//! coordinates a portfolio of policies, letting them compete to tighten the
//! shared sidelined-count bound while respecting global limits and
//! early-stop signals once optimality is proven anywhere.
//!
//! ## Highlights
//!
//! - Portfolio execution:
//!   - Spawn each `PortfolioSolver<T>` in a thread using
//!     `std::thread::scope`.
//!   - Build a `CompositeMonitor<T>` per thread with interrupt,
//!     solution-limit, and optional time-limit monitors.
//! - Shared state:
//!   - `SharedIncumbent<T>` stores the best assembly (atomic bound + mutex
//!     snapshot).
//!   - Global counters (`AtomicU64`) for assemblies found; `AtomicBool`
//!     stop signal.
//! - Outcome construction:
//!   - Aggregates thread results, determines the best global assembly, and
//!     returns `SolverOutcome<T>` with statistics and termination reason.
//! - Builder pattern:
//!   - `SolverBuilder` to configure solution/time limits and add portfolio
//!     members.
//!
//! For the plain one-shot question there is `longest_train`, which wraps
//! manifest validation and a single default-policy sequencer run.

use shunter_bnb::{
    bnb::Sequencer,
    branching::front_first::FrontFirstPolicy,
    monitor::no_op::NoOperationMonitor,
};
use shunter_model::{
    assembly::Assembly,
    manifest::{InvalidManifestError, Manifest},
};
use shunter_search::{
    incumbent::SharedIncumbent,
    monitor::{
        composite::CompositeMonitor, interrupt::InterruptMonitor,
        solution_limit::SolutionLimitMonitor, time_limit::TimeLimitMonitor,
    },
    num::CarNumeric,
    portfolio::{PortfolioSolver, PortfolioSolverContext, PortfolioSolverResult},
    result::{SolverOutcome, SolverResult, TerminationReason},
    stats::{SolverStatistics, SolverStatisticsBuilder},
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Computes the length of the longest non-increasing train assemblable from
/// the given framed car stream.
///
/// The framing convention reserves `declared` as the redundant car count
/// announced ahead of the weights; a mismatch is rejected as invalid input
/// before any search work begins. On success the returned length `L`
/// satisfies `1 <= L <= weights.len()`, and `L == weights.len()` exactly
/// when a zero-sideline assembly exists.
///
/// # Errors
///
/// Returns `InvalidManifestError` if the weight list is empty or `declared`
/// does not match its length.
///
/// # Examples
///
/// ```rust
/// let len = shunter_solver::longest_train(4, vec![4i64, 5, 2, 1]).unwrap();
/// assert_eq!(len, 4);
///
/// assert!(shunter_solver::longest_train(3, vec![4i64, 5, 2, 1]).is_err());
/// ```
pub fn longest_train<T>(declared: usize, weights: Vec<T>) -> Result<usize, InvalidManifestError>
where
    T: CarNumeric,
{
    let manifest = Manifest::from_framed(declared, weights)?;

    let mut sequencer = Sequencer::preallocated(manifest.num_cars());
    let mut policy = FrontFirstPolicy::new();
    let outcome = sequencer.solve(&manifest, &mut policy, NoOperationMonitor::new());

    let assembly = outcome
        .result()
        .assembly()
        .expect("an unmonitored search over a valid manifest runs to completion");
    Ok(assembly.len())
}

/// The portfolio orchestrator.
pub struct Solver<'a, T> {
    portfolio_members: Vec<Box<dyn PortfolioSolver<T> + Send + 'a>>,
    incumbent: SharedIncumbent<T>,
    global_solution_count: AtomicU64,
    /// Shared flag to signal all members to stop (e.g., when optimality is
    /// proven).
    stop_signal: AtomicBool,
    solution_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
}

impl<'a, T> Solver<'a, T>
where
    T: CarNumeric,
{
    #[inline]
    pub fn add_solver<S>(&mut self, solver: S)
    where
        S: PortfolioSolver<T> + Send + 'a,
    {
        self.portfolio_members.push(Box::new(solver));
    }

    #[inline]
    pub fn incumbent(&self) -> &SharedIncumbent<T> {
        &self.incumbent
    }

    #[inline]
    pub fn solution_limit(&self) -> Option<u64> {
        self.solution_limit
    }

    #[inline]
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        self.time_limit
    }

    /// Runs the whole portfolio over the given manifest.
    ///
    /// # Panics
    ///
    /// Panics if no portfolio member has been added.
    pub fn solve(&mut self, manifest: &Manifest<T>) -> SolverOutcome<T> {
        assert!(
            !self.portfolio_members.is_empty(),
            "called `Solver::solve` with no portfolio members added"
        );

        let start_time = std::time::Instant::now();

        // 1. Reset state for this run
        self.stop_signal.store(false, Ordering::Relaxed);
        self.global_solution_count.store(0, Ordering::Relaxed);

        // 2. Run parallel members
        let results = self.run_portfolio_parallel(manifest);

        // 3. Construct and return the outcome
        self.construct_outcome(start_time, results)
    }

    /// Internal helper to spawn threads and collect results.
    fn run_portfolio_parallel(&mut self, manifest: &Manifest<T>) -> Vec<PortfolioSolverResult<T>> {
        // Capture references for threads
        let solution_limit = self.solution_limit;
        let time_limit = self.time_limit;
        let incumbent = &self.incumbent;
        let global_solution_count = &self.global_solution_count;
        let stop_signal = &self.stop_signal;

        let mut results = Vec::with_capacity(self.portfolio_members.len());

        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.portfolio_members.len());

            for member in &mut self.portfolio_members {
                let handle = scope.spawn(move || {
                    // 1. Build the monitor stack. The interrupt monitor lets
                    // this thread be stopped if another one finishes early;
                    // the solution monitor keeps the global counter even
                    // when no explicit limit was configured.
                    let mut monitor = CompositeMonitor::<T>::new();
                    monitor.add_monitor(InterruptMonitor::new(stop_signal));
                    monitor.add_monitor(SolutionLimitMonitor::new(
                        global_solution_count,
                        solution_limit.unwrap_or(u64::MAX),
                    ));

                    if let Some(limit) = time_limit {
                        monitor.add_monitor(TimeLimitMonitor::new(limit));
                    }

                    // 2. Run the member
                    let ctx = PortfolioSolverContext::new(
                        manifest,
                        incumbent,
                        &mut monitor,
                        stop_signal,
                    );
                    let result = member.solve(ctx);

                    // 3. Signal stop if optimal
                    if matches!(result.result(), SolverResult::Optimal(_)) {
                        stop_signal.store(true, Ordering::Relaxed);
                    }

                    result
                });
                handles.push(handle);
            }

            for handle in handles {
                results.push(handle.join().expect("portfolio member thread panicked"));
            }
        });

        results
    }

    /// Finds the absolute best assembly among all thread results and the
    /// shared incumbent.
    fn find_best_assembly(&self, results: &[PortfolioSolverResult<T>]) -> Option<Assembly<T>> {
        let thread_assemblies = results.iter().filter_map(|r| r.result().assembly());

        let incumbent_snapshot = self.incumbent.snapshot();

        thread_assemblies
            .chain(incumbent_snapshot.as_ref())
            .min_by_key(|a| a.num_sidelined())
            .cloned()
    }

    fn build_statistics(
        &self,
        start_time: std::time::Instant,
        used_threads: usize,
    ) -> SolverStatistics {
        SolverStatisticsBuilder::new()
            .solutions_found(self.global_solution_count.load(Ordering::Relaxed))
            .used_threads(used_threads)
            .solve_duration(start_time.elapsed())
            .build()
    }

    fn construct_outcome(
        &self,
        start_time: std::time::Instant,
        results: Vec<PortfolioSolverResult<T>>,
    ) -> SolverOutcome<T> {
        let stats = self.build_statistics(start_time, results.len());

        // 1. Always identify the best assembly globally first.
        let best_assembly = self.find_best_assembly(&results);

        // 2. Check if any member proved the global optimum.
        let optimality_proven = results
            .iter()
            .any(|r| matches!(r.result(), SolverResult::Optimal(_)));

        // 3. Hierarchy: Optimality > Feasibility > Unknown
        if let Some(assembly) = best_assembly {
            if optimality_proven {
                return SolverOutcome::optimal(assembly, stats);
            }
            // We hold an assembly but no proof; report the best feasible one.
            let reason = self.determine_abort_reason(&results);
            return SolverOutcome::feasible(assembly, reason, stats);
        }

        // 4. Nothing found anywhere.
        let reason = self.determine_abort_reason(&results);
        SolverOutcome::unknown(reason, stats)
    }

    fn determine_abort_reason(&self, results: &[PortfolioSolverResult<T>]) -> String {
        // 1. Explicit monitor trigger (time/solution limit)
        if let Some(msg) = results.iter().find_map(|res| {
            if let TerminationReason::Aborted(msg) = res.termination_reason() {
                Some(msg.clone())
            } else {
                None
            }
        }) {
            return msg;
        }

        // 2. Global signal (optimality found elsewhere)
        if self.stop_signal.load(Ordering::Relaxed) {
            return "external interrupt".to_string();
        }

        // 3. Natural exhaustion
        "search space exhausted without proof".to_string()
    }
}

pub struct SolverBuilder<'a, T> {
    portfolio_members: Vec<Box<dyn PortfolioSolver<T> + Send + 'a>>,
    solution_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
}

impl<'a, T> Default for SolverBuilder<'a, T>
where
    T: CarNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SolverBuilder<'a, T>
where
    T: CarNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            portfolio_members: Vec::new(),
            solution_limit: None,
            time_limit: None,
        }
    }

    #[inline]
    pub fn with_solution_limit(mut self, limit: u64) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: std::time::Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn add_solver<S>(mut self, solver: S) -> Self
    where
        S: PortfolioSolver<T> + Send + 'a,
    {
        self.portfolio_members.push(Box::new(solver));
        self
    }

    #[inline]
    pub fn build(self) -> Solver<'a, T> {
        Solver {
            portfolio_members: self.portfolio_members,
            incumbent: SharedIncumbent::new(),
            global_solution_count: AtomicU64::new(0),
            stop_signal: AtomicBool::new(false),
            solution_limit: self.solution_limit,
            time_limit: self.time_limit,
        }
    }
}
