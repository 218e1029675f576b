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

//! Adapter that lets a `Sequencer` with a chosen `BranchPolicy` take part
//! in a portfolio run orchestrated through `shunter_search::portfolio`.
//!
//! Each member races the others over the same manifest. The orchestrator's
//! monitor stack arrives through the context as an engine-agnostic
//! `SearchMonitor` and is bridged into the tree-level interface by
//! `SearchMonitorAdapter`; the shared incumbent keeps the sidelined-count
//! bound synchronized across members.

use crate::{
    bnb::Sequencer, branching::BranchPolicy, monitor::wrapper::SearchMonitorAdapter,
};
use num_traits::{PrimInt, Signed};
use shunter_search::portfolio::{PortfolioSolver, PortfolioSolverContext, PortfolioSolverResult};

/// A portfolio member: one sequencer driven by one branching policy.
#[derive(Debug, Clone)]
pub struct PortfolioSequencer<P> {
    policy: P,
}

impl<P> PortfolioSequencer<P>
where
    P: BranchPolicy,
{
    /// Creates a new portfolio member around the given policy.
    #[inline]
    pub fn new(policy: P) -> Self {
        Self { policy }
    }
}

impl<T, P> PortfolioSolver<T> for PortfolioSequencer<P>
where
    T: PrimInt + Signed,
    P: BranchPolicy,
{
    fn solve<'a>(&mut self, context: PortfolioSolverContext<'a, T>) -> PortfolioSolverResult<T> {
        let mut sequencer = Sequencer::preallocated(context.manifest.num_cars());
        let adapter = SearchMonitorAdapter::new(context.monitor);

        let outcome = sequencer.solve_with_incumbent(
            context.manifest,
            &mut self.policy,
            adapter,
            context.incumbent,
        );

        outcome.into()
    }

    fn name(&self) -> &str {
        self.policy.name()
    }
}
