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

//! Branch-and-Bound sequencer for railway-yard train assembly.
//!
//! This module implements a stateful search engine that explores the
//! three-way decision tree over an incoming car stream — couple each car to
//! the front of the train, couple it to the rear, or route it to the siding
//! — while pruning subtrees that cannot beat the incumbent. The `Sequencer`
//! owns a reusable double-ended assembly buffer, supports shared incumbents
//! for portfolio runs, and keeps capacities across repeated solves via a
//! fast `reset`.
//!
//! A search session object encapsulates per-run state, statistics, and
//! timing, enabling reproducible and debuggable runs. Three cuts shape the
//! tree: couplings that would break the non-increasing order are never
//! descended into, subtrees that have already sidelined more cars than the
//! best known assembly are bound-dominated, and an assembly that couples
//! every car ends the entire search on the spot since nothing can sideline
//! fewer than zero cars. The order of these checks is load-bearing: the
//! perfect-assembly check runs before the bound check, and the stop flags
//! are honored at the top of every recursive call, so the short-circuit
//! reaches all pending branches.

use crate::{
    branching::{
        decision::{Attachment, Decision},
        BranchPolicy,
    },
    incumbent::{IncumbentStore, NoSharedIncumbent, SharedIncumbentAdapter},
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    result::SequencerOutcome,
    state::SearchState,
    stats::SequencerStatistics,
};
use num_traits::{PrimInt, Signed};
use shunter_model::{assembly::Assembly, index::CarIndex, manifest::Manifest};
use shunter_search::{incumbent::SharedIncumbent, monitor::search_monitor::SearchCommand};
use smallvec::SmallVec;

/// A branch-and-bound sequencer for the train assembly problem using a
/// recursive backtracking search. Note that this is just the execution
/// engine; the exploration order of the three decisions per car is chosen
/// by a `BranchPolicy`, and admissibility is decided by `Decision::try_new`.
///
/// # Examples
///
/// ```rust
/// use shunter_bnb::bnb::Sequencer;
/// use shunter_bnb::branching::front_first::FrontFirstPolicy;
/// use shunter_bnb::monitor::no_op::NoOperationMonitor;
/// use shunter_model::manifest::Manifest;
///
/// let manifest = Manifest::new(vec![4i64, 5, 2, 1]).unwrap();
/// let mut sequencer = Sequencer::new();
/// let mut policy = FrontFirstPolicy::new();
///
/// let outcome = sequencer.solve(&manifest, &mut policy, NoOperationMonitor::new());
/// let assembly = outcome.result().assembly().expect("search ran to completion");
/// assert_eq!(assembly.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Sequencer<T>
where
    T: PrimInt + Signed,
{
    state: SearchState<T>,
}

impl<T> Default for Sequencer<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequencer<T>
where
    T: PrimInt + Signed,
{
    /// Create a new sequencer instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: SearchState::new(),
        }
    }

    /// Create a new sequencer instance with preallocated storage for the
    /// given number of cars.
    ///
    /// # Note
    ///
    /// When you invoke the sequencer it will internally ensure that the
    /// assembly buffer has sufficient capacity for the given manifest.
    /// Constructing the sequencer with preallocated storage only moves the
    /// cost of the allocation to construction time.
    #[inline]
    pub fn preallocated(num_cars: usize) -> Self {
        Self {
            state: SearchState::preallocated(num_cars),
        }
    }

    /// Solve the given manifest using the provided `BranchPolicy` and
    /// `TreeSearchMonitor`. This variant does not use a shared incumbent and
    /// thus acts as a standalone, single threaded engine.
    #[inline]
    pub fn solve<P, S>(
        &mut self,
        manifest: &Manifest<T>,
        policy: &mut P,
        monitor: S,
    ) -> SequencerOutcome<T>
    where
        P: BranchPolicy,
        S: TreeSearchMonitor<T>,
    {
        let backing = NoSharedIncumbent::new();
        self.solve_internal(manifest, policy, monitor, backing)
    }

    /// Solve the given manifest using the provided `BranchPolicy`,
    /// `TreeSearchMonitor`, and `SharedIncumbent`. The shared incumbent
    /// synchronizes the best known assembly between engine instances; the
    /// branch and bound algorithm uses it to prune branches that cannot
    /// improve upon the shared best assembly.
    #[inline]
    pub fn solve_with_incumbent<P, S>(
        &mut self,
        manifest: &Manifest<T>,
        policy: &mut P,
        monitor: S,
        incumbent: &SharedIncumbent<T>,
    ) -> SequencerOutcome<T>
    where
        P: BranchPolicy,
        S: TreeSearchMonitor<T>,
    {
        let backing = SharedIncumbentAdapter::new(incumbent);
        self.solve_internal(manifest, policy, monitor, backing)
    }

    /// Internal solve method that takes an `IncumbentStore`, which is
    /// usually either a `NoSharedIncumbent` or a `SharedIncumbentAdapter`.
    #[inline(always)]
    fn solve_internal<P, S, I>(
        &mut self,
        manifest: &Manifest<T>,
        policy: &mut P,
        mut monitor: S,
        backing: I,
    ) -> SequencerOutcome<T>
    where
        P: BranchPolicy,
        S: TreeSearchMonitor<T>,
        I: IncumbentStore<T>,
    {
        self.state.ensure_capacity(manifest.num_cars());

        let session = SequencerSearchSession::new(self, manifest, policy, &mut monitor, backing);
        let res = session.run();
        self.reset();
        res
    }

    /// Reset the internal state of the sequencer.
    ///
    /// # Note
    ///
    /// This does not deallocate the assembly buffer, it only clears its
    /// logical content.
    #[inline]
    fn reset(&mut self) {
        self.state.reset();
    }
}

/// A search session for the sequencer. This struct encapsulates the state
/// and logic of a single search run.
struct SequencerSearchSession<'a, T, P, S, I>
where
    T: PrimInt + Signed,
{
    sequencer: &'a mut Sequencer<T>,
    manifest: &'a Manifest<T>,
    policy: &'a mut P,
    monitor: &'a mut S,
    incumbent: I,
    /// Minimum number of sidelined cars among all assemblies known so far.
    best_sidelined: usize,
    /// The retained best assembly. Kept for verification and diagnostics;
    /// the contractual output is its length.
    best_assembly: Option<Assembly<T>>,
    /// Set once a perfect assembly (every car coupled) has been recorded.
    /// Honored at the top of every recursive call.
    done: bool,
    /// Set once a monitor requested termination.
    abort_reason: Option<String>,
    stats: SequencerStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, P, S, I> std::fmt::Debug for SequencerSearchSession<'a, T, P, S, I>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequencerSearchSession")
            .field("manifest", &self.manifest)
            .field("state", &self.sequencer.state)
            .field("best_sidelined", &self.best_sidelined)
            .field("best_assembly", &self.best_assembly)
            .field("done", &self.done)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, P, S, I> SequencerSearchSession<'a, T, P, S, I>
where
    T: PrimInt + Signed,
    P: BranchPolicy,
    S: TreeSearchMonitor<T>,
    I: IncumbentStore<T>,
{
    /// Create a new search session.
    #[inline]
    fn new(
        sequencer: &'a mut Sequencer<T>,
        manifest: &'a Manifest<T>,
        policy: &'a mut P,
        monitor: &'a mut S,
        incumbent_backing: I,
    ) -> Self {
        let best_sidelined = incumbent_backing.initial_best_sidelined();

        Self {
            sequencer,
            manifest,
            policy,
            monitor,
            incumbent: incumbent_backing,
            best_sidelined,
            best_assembly: None,
            done: false,
            abort_reason: None,
            stats: SequencerStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session.
    #[inline]
    fn run(mut self) -> SequencerOutcome<T> {
        self.monitor.on_enter_search(self.manifest, &self.stats);

        self.explore(0);

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result()
    }

    /// Finalize the sequencer result based on the best assembly found and
    /// the way the search ended.
    ///
    /// # Note
    ///
    /// This consumes self.
    #[inline]
    fn finalize_result(self) -> SequencerOutcome<T> {
        match (self.abort_reason, self.best_assembly) {
            (Some(reason), best) => SequencerOutcome::aborted(best, reason, self.stats),
            (None, Some(assembly)) => SequencerOutcome::optimal(assembly, self.stats),
            // Only reachable when a foreign shared incumbent dominates every
            // local leaf; a bound taken from a real assembly of the same
            // manifest always leaves at least one leaf reachable.
            (None, None) => SequencerOutcome::aborted(
                None,
                "search exhausted under a dominating shared incumbent",
                self.stats,
            ),
        }
    }

    /// One recursive call of the branch-and-bound search, deciding the car
    /// at `position`.
    ///
    /// The check order is load-bearing: stop flags first, then the
    /// perfect-assembly cut, then the bound cut, then the base case. The
    /// bound cut is only valid because a perfect assembly has already
    /// stopped the search before the bound can be consulted.
    fn explore(&mut self, position: usize) {
        if self.done || self.abort_reason.is_some() {
            return;
        }

        self.stats.on_node_explored();
        self.stats.on_depth_update(position as u64);
        self.monitor.on_step(&self.sequencer.state, &self.stats);

        if let SearchCommand::Terminate(reason) = self
            .monitor
            .search_command(&self.sequencer.state, &self.stats)
        {
            self.abort_reason = Some(reason);
            return;
        }

        // Perfect cut: a train that couples every car sidelines nothing, and
        // no branch anywhere in the tree can sideline fewer than zero cars.
        if self.sequencer.state.assembly_len() == self.manifest.num_cars() {
            self.handle_perfect_assembly();
            return;
        }

        self.best_sidelined = self.incumbent.tighten(self.best_sidelined);

        // Bound cut: every descendant sidelines at least as many cars as
        // this node already has.
        let sidelined = self.sequencer.state.num_sidelined(position);
        if sidelined > self.best_sidelined {
            self.stats.on_pruning_bound();
            self.monitor.on_prune(
                &self.sequencer.state,
                PruneReason::BoundDominated,
                &self.stats,
            );
            return;
        }

        // Base case: every car has been decided.
        if position == self.manifest.num_cars() {
            self.handle_complete_assembly(sidelined);
            return;
        }

        self.branch(position);
    }

    /// Generate the admissible decisions for the car at `position` in the
    /// policy's exploration order, then descend into each in turn.
    fn branch(&mut self, position: usize) {
        let car_index = CarIndex::new(position);
        let order = self.policy.exploration_order();

        let mut decisions: SmallVec<[Decision<T>; 3]> = SmallVec::new();
        for attachment in order {
            match Decision::try_new(car_index, attachment, self.manifest, &self.sequencer.state) {
                Some(decision) => decisions.push(decision),
                None => {
                    if attachment == Attachment::Rear && self.sequencer.state.is_assembly_empty() {
                        self.stats.on_pruning_symmetry();
                        self.monitor.on_prune(
                            &self.sequencer.state,
                            PruneReason::SymmetryDuplicate,
                            &self.stats,
                        );
                    } else {
                        self.stats.on_pruning_order();
                        self.monitor.on_prune(
                            &self.sequencer.state,
                            PruneReason::OrderViolated,
                            &self.stats,
                        );
                    }
                }
            }
        }

        self.monitor
            .on_decisions_generated(&self.sequencer.state, decisions.len(), &self.stats);

        for decision in decisions {
            self.descend(decision, position);
            if self.done || self.abort_reason.is_some() {
                return;
            }
        }
    }

    /// Descend into the given decision, applying it to the assembly buffer
    /// and undoing it on return.
    #[inline(always)]
    fn descend(&mut self, decision: Decision<T>, position: usize) {
        self.apply(decision);
        self.stats.on_decision_applied();
        self.monitor
            .on_descend(&self.sequencer.state, decision, &self.stats);

        self.explore(position + 1);

        self.undo(decision);
        self.stats.on_backtrack();
        self.monitor.on_backtrack(&self.sequencer.state, &self.stats);
    }

    #[inline(always)]
    fn apply(&mut self, decision: Decision<T>) {
        match decision.attachment() {
            Attachment::Front => self.sequencer.state.attach_front(decision.weight()),
            Attachment::Rear => self.sequencer.state.attach_rear(decision.weight()),
            Attachment::Siding => {}
        }
    }

    #[inline(always)]
    fn undo(&mut self, decision: Decision<T>) {
        match decision.attachment() {
            Attachment::Front => self.sequencer.state.detach_front(),
            Attachment::Rear => self.sequencer.state.detach_rear(),
            Attachment::Siding => {}
        }
    }

    /// Record a perfect assembly (every car coupled) and stop the entire
    /// search: zero sidelined cars is globally optimal.
    #[inline(always)]
    fn handle_perfect_assembly(&mut self) {
        let assembly = self.sequencer.state.to_assembly(0);
        debug_assert!(
            assembly.is_non_increasing(),
            "recorded a perfect assembly that violates the ordering invariant"
        );

        self.stats.on_solution_found();
        self.best_sidelined = 0;
        self.incumbent.on_solution_found(&assembly);
        self.monitor.on_solution_found(&assembly, &self.stats);
        self.best_assembly = Some(assembly);
        self.done = true;
    }

    /// Record a complete assembly at a leaf and update the incumbent bound.
    #[inline(always)]
    fn handle_complete_assembly(&mut self, sidelined: usize) {
        let assembly = self.sequencer.state.to_assembly(sidelined);
        debug_assert!(
            assembly.is_non_increasing(),
            "recorded an assembly that violates the ordering invariant"
        );

        self.stats.on_solution_found();

        // The incumbent never regresses.
        if sidelined < self.best_sidelined {
            self.best_sidelined = sidelined;
        }

        let improves = self
            .best_assembly
            .as_ref()
            .is_none_or(|best| sidelined < best.num_sidelined());

        self.incumbent.on_solution_found(&assembly);
        self.monitor.on_solution_found(&assembly, &self.stats);

        if improves {
            self.best_assembly = Some(assembly);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::front_first::FrontFirstPolicy;
    use crate::branching::rear_first::RearFirstPolicy;
    use crate::branching::shuffled::ShuffledPolicy;
    use crate::monitor::no_op::NoOperationMonitor;
    use shunter_search::result::{SolverResult, TerminationReason};

    type IntegerType = i64;

    fn manifest(weights: &[IntegerType]) -> Manifest<IntegerType> {
        Manifest::new(weights.to_vec()).unwrap()
    }

    fn solve(weights: &[IntegerType]) -> SequencerOutcome<IntegerType> {
        let manifest = manifest(weights);
        let mut sequencer = Sequencer::preallocated(manifest.num_cars());
        let mut policy = FrontFirstPolicy::new();
        sequencer.solve(&manifest, &mut policy, NoOperationMonitor::new())
    }

    fn optimal_len(weights: &[IntegerType]) -> usize {
        let outcome = solve(weights);
        assert!(
            matches!(outcome.result(), SolverResult::Optimal(_)),
            "expected an optimal outcome"
        );
        outcome.result().assembly().unwrap().len()
    }

    #[test]
    fn test_single_car_stream() {
        assert_eq!(optimal_len(&[42]), 1);
    }

    #[test]
    fn test_small_stream_uses_all_cars() {
        // 4 -> start, 5 -> front, 2 -> rear, 1 -> rear.
        assert_eq!(optimal_len(&[4, 5, 2, 1]), 4);
    }

    #[test]
    fn test_already_non_increasing_stream_is_perfect() {
        assert_eq!(optimal_len(&[9, 7, 5, 5, 2]), 5);
    }

    #[test]
    fn test_strictly_increasing_stream_is_perfect_via_front_couplings() {
        assert_eq!(optimal_len(&[1, 2, 3]), 3);
    }

    #[test]
    fn test_all_equal_weights_are_perfect() {
        assert_eq!(optimal_len(&[5, 5, 5]), 3);
    }

    #[test]
    fn test_ten_car_stream_sidelines_three() {
        let outcome = solve(&[11, 5, 13, 15, 7, 1, 18, 12, 16, 17]);
        let assembly = outcome.result().assembly().unwrap();
        assert_eq!(assembly.len(), 7);
        assert_eq!(assembly.num_sidelined(), 3);
    }

    #[test]
    fn test_zig_zag_stream_is_perfect() {
        let outcome = solve(&[5, 6, 4, 7, 3, 8, 2, 9, 1, 10]);
        let assembly = outcome.result().assembly().unwrap();
        assert_eq!(assembly.len(), 10);
        assert_eq!(assembly.num_sidelined(), 0);
        // A perfect zig-zag folds into a strictly descending train.
        assert_eq!(
            assembly.cars(),
            &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn test_twenty_five_car_stream() {
        let weights: [IntegerType; 25] = [
            31, 19, 17, 4, 10, 37, 42, 35, 15, 43, 45, 30, 39, 9, 21, 33, 25, 3, 47, 41, 50, 18,
            11, 26, 28,
        ];
        assert_eq!(optimal_len(&weights), 12);
    }

    #[test]
    fn test_result_assembly_is_valid_and_consistent() {
        let weights = [11, 5, 13, 15, 7, 1, 18, 12, 16, 17];
        let outcome = solve(&weights);
        let assembly = outcome.result().assembly().unwrap();

        assert!(assembly.is_non_increasing());
        assert!(assembly.len() <= weights.len());
        assert_eq!(assembly.len() + assembly.num_sidelined(), weights.len());
    }

    #[test]
    fn test_perfect_cut_stops_exploration_early() {
        let weights = [9, 7, 5, 5, 2];
        let outcome = solve(&weights);

        let stats = outcome.statistics();
        // The search dives straight down the rear-coupling path and stops:
        // one node per position plus the root, a single recorded assembly,
        // and no bound pruning at all.
        assert_eq!(stats.nodes_explored, weights.len() as u64 + 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.prunings_bound, 0);
        assert_eq!(stats.max_depth, weights.len() as u64);
    }

    #[test]
    fn test_determinism_across_runs() {
        let weights = [11, 5, 13, 15, 7, 1, 18, 12, 16, 17];
        let first = optimal_len(&weights);
        let second = optimal_len(&weights);
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_length_for_every_policy() {
        let weights = [11, 5, 13, 15, 7, 1, 18, 12, 16, 17];
        let manifest = manifest(&weights);

        let mut sequencer = Sequencer::new();

        let mut front_first = FrontFirstPolicy::new();
        let mut rear_first = RearFirstPolicy::new();
        let mut shuffled = ShuffledPolicy::with_seed(123);

        let a = sequencer.solve(&manifest, &mut front_first, NoOperationMonitor::new());
        let b = sequencer.solve(&manifest, &mut rear_first, NoOperationMonitor::new());
        let c = sequencer.solve(&manifest, &mut shuffled, NoOperationMonitor::new());

        assert_eq!(a.result().assembly().unwrap().len(), 7);
        assert_eq!(b.result().assembly().unwrap().len(), 7);
        assert_eq!(c.result().assembly().unwrap().len(), 7);
    }

    #[test]
    fn test_sequencer_end_state_is_clean_and_reusable() {
        let mut sequencer = Sequencer::<IntegerType>::new();
        let mut policy = FrontFirstPolicy::new();

        for _ in 0..3 {
            let manifest = manifest(&[4, 5, 2, 1]);
            let outcome = sequencer.solve(&manifest, &mut policy, NoOperationMonitor::new());
            assert_eq!(outcome.result().assembly().unwrap().len(), 4);
            assert!(
                sequencer.state.is_assembly_empty(),
                "assembly buffer must be empty after a solve"
            );
        }
    }

    #[test]
    fn test_shared_incumbent_is_installed_and_tightened() {
        let weights = [11, 5, 13, 15, 7, 1, 18, 12, 16, 17];
        let manifest = manifest(&weights);
        let incumbent = SharedIncumbent::<IntegerType>::new();
        assert_eq!(incumbent.best_sidelined(), usize::MAX);

        let mut sequencer = Sequencer::new();
        let mut policy = FrontFirstPolicy::new();
        let outcome = sequencer.solve_with_incumbent(
            &manifest,
            &mut policy,
            NoOperationMonitor::new(),
            &incumbent,
        );

        assert_eq!(outcome.result().assembly().unwrap().len(), 7);
        assert_eq!(incumbent.best_sidelined(), 3);

        let snap = incumbent.snapshot().expect("incumbent snapshot should be Some");
        assert_eq!(snap.num_sidelined(), 3);
        assert_eq!(snap.len(), 7);
    }

    #[test]
    fn test_preinstalled_worse_incumbent_is_overwritten() {
        let weights = [11, 5, 13, 15, 7, 1, 18, 12, 16, 17];
        let manifest = manifest(&weights);

        let incumbent = SharedIncumbent::<IntegerType>::new();
        // A lazy assembly: couple the first car, sideline everything else.
        assert!(incumbent.try_install(&Assembly::new(vec![11], 9)));
        assert_eq!(incumbent.best_sidelined(), 9);

        let mut sequencer = Sequencer::new();
        let mut policy = FrontFirstPolicy::new();
        let outcome = sequencer.solve_with_incumbent(
            &manifest,
            &mut policy,
            NoOperationMonitor::new(),
            &incumbent,
        );

        assert_eq!(outcome.result().assembly().unwrap().len(), 7);
        assert_eq!(incumbent.best_sidelined(), 3);
    }

    #[test]
    fn test_unreachable_foreign_incumbent_does_not_panic() {
        // No assembly of [1, 3, 2] couples all three cars, so a zero-
        // sidelined bound leaves no reachable leaf. The engine must come
        // back gracefully instead of claiming optimality.
        let manifest = manifest(&[1, 3, 2]);

        let incumbent = SharedIncumbent::<IntegerType>::new();
        assert!(incumbent.try_install(&Assembly::new(vec![9, 8, 7], 0)));

        let mut sequencer = Sequencer::new();
        let mut policy = FrontFirstPolicy::new();
        let outcome = sequencer.solve_with_incumbent(
            &manifest,
            &mut policy,
            NoOperationMonitor::new(),
            &incumbent,
        );

        assert!(!matches!(outcome.result(), SolverResult::Optimal(_)));
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
    }

    /// A monitor that terminates the search after a fixed number of steps.
    struct StepBudgetMonitor {
        steps: u64,
        budget: u64,
    }

    impl StepBudgetMonitor {
        fn new(budget: u64) -> Self {
            Self { steps: 0, budget }
        }
    }

    impl TreeSearchMonitor<IntegerType> for StepBudgetMonitor {
        fn name(&self) -> &str {
            "StepBudgetMonitor"
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
            if self.steps >= self.budget {
                SearchCommand::Terminate("step budget exhausted".to_string())
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
        }
    }

    #[test]
    fn test_monitor_can_abort_before_any_leaf() {
        let manifest = manifest(&[11, 5, 13, 15, 7, 1, 18, 12, 16, 17]);
        let mut sequencer = Sequencer::new();
        let mut policy = FrontFirstPolicy::new();

        let outcome = sequencer.solve(&manifest, &mut policy, StepBudgetMonitor::new(0));

        assert!(matches!(outcome.result(), SolverResult::Unknown));
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => {
                assert_eq!(reason, "step budget exhausted");
            }
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_monitor_abort_midway_surrenders_best_assembly_so_far() {
        let manifest = manifest(&[11, 5, 13, 15, 7, 1, 18, 12, 16, 17]);
        let mut sequencer = Sequencer::new();
        let mut policy = FrontFirstPolicy::new();

        // Enough budget to reach some leaves, not enough to finish.
        let outcome = sequencer.solve(&manifest, &mut policy, StepBudgetMonitor::new(50));

        match outcome.result() {
            SolverResult::Feasible(assembly) => {
                assert!(assembly.is_non_increasing());
                assert!(assembly.len() <= 7);
            }
            SolverResult::Unknown => {
                // Acceptable if the budget ran out before the first leaf.
            }
            SolverResult::Optimal(_) => {
                panic!("a 50-step budget cannot prove optimality on this instance")
            }
        }
    }

    #[test]
    fn test_log_monitor_does_not_affect_results() {
        use crate::monitor::log::LogMonitor;

        let manifest = manifest(&[11, 5, 13, 15, 7, 1, 18, 12, 16, 17]);
        let mut sequencer = Sequencer::new();
        let mut policy = FrontFirstPolicy::new();

        let outcome = sequencer.solve(&manifest, &mut policy, LogMonitor::default());
        assert_eq!(outcome.result().assembly().unwrap().len(), 7);
    }

    #[test]
    fn test_statistics_are_populated() {
        let outcome = solve(&[11, 5, 13, 15, 7, 1, 18, 12, 16, 17]);
        let stats = outcome.statistics();

        assert!(stats.nodes_explored > 0);
        assert!(stats.decisions_applied > 0);
        assert!(stats.backtracks > 0);
        assert!(stats.solutions_found > 0);
        assert_eq!(stats.max_depth, 10);
    }

    #[test]
    fn test_negative_weights() {
        // Orderable values below zero work the same way.
        assert_eq!(optimal_len(&[-1, -2, -3]), 3);
        // -2 fits neither in front of -1 nor behind -3; one car is lost.
        assert_eq!(optimal_len(&[-3, -1, -2]), 2);
    }
}
