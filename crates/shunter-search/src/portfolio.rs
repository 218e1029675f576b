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

//! The contract between sequencing engines and the portfolio orchestrator.
//!
//! A portfolio run races several engine configurations (e.g. different
//! branching policies) over the SAME manifest. Each engine receives a
//! `PortfolioSolverContext` carrying the shared incumbent, a monitor stack,
//! and the global stop flag, and returns a `PortfolioSolverResult`. Distinct
//! configurations only change which equally-long assembly is found first;
//! the optimal length itself is configuration-invariant.

use crate::{
    incumbent::SharedIncumbent,
    monitor::search_monitor::SearchMonitor,
    result::{SolverResult, TerminationReason},
};
use num_traits::{PrimInt, Signed};
use shunter_model::{assembly::Assembly, manifest::Manifest};
use std::sync::atomic::AtomicBool;

/// Everything an engine needs to take part in a portfolio run.
pub struct PortfolioSolverContext<'a, T>
where
    T: PrimInt + Signed,
{
    pub manifest: &'a Manifest<T>,
    pub incumbent: &'a SharedIncumbent<T>,
    pub monitor: &'a mut dyn SearchMonitor<T>,
    pub stop: &'a AtomicBool,
}

impl<'a, T> PortfolioSolverContext<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    pub fn new(
        manifest: &'a Manifest<T>,
        incumbent: &'a SharedIncumbent<T>,
        monitor: &'a mut dyn SearchMonitor<T>,
        stop: &'a AtomicBool,
    ) -> Self {
        Self {
            manifest,
            incumbent,
            monitor,
            stop,
        }
    }
}

impl<'a, T> std::fmt::Debug for PortfolioSolverContext<'a, T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioSolverContext")
            .field("manifest", &self.manifest)
            .field("incumbent", &self.incumbent)
            .field("monitor", &self.monitor.name())
            .field("stop", &self.stop)
            .finish()
    }
}

impl<'a, T> std::fmt::Display for PortfolioSolverContext<'a, T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PortfolioSolverContext(manifest: {}, monitor: {})",
            self.manifest,
            self.monitor.name(),
        )
    }
}

/// The result one portfolio member reports back to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSolverResult<T>
where
    T: PrimInt + Signed,
{
    result: SolverResult<T>,
    termination_reason: TerminationReason,
}

impl<T> PortfolioSolverResult<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn optimal(assembly: Assembly<T>) -> Self {
        Self {
            result: SolverResult::Optimal(assembly),
            termination_reason: TerminationReason::OptimalityProven,
        }
    }

    #[inline]
    pub fn aborted<R>(assembly: Option<Assembly<T>>, reason: R) -> Self
    where
        R: Into<String>,
    {
        let termination_reason = TerminationReason::Aborted(reason.into());

        let result = match assembly {
            Some(a) => SolverResult::Feasible(a),
            None => SolverResult::Unknown,
        };

        Self {
            result,
            termination_reason,
        }
    }

    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }
}

impl<T> std::fmt::Display for PortfolioSolverResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PortfolioSolverResult(result: {}, termination_reason: {})",
            self.result, self.termination_reason
        )
    }
}

/// An engine configuration that can take part in a portfolio run.
pub trait PortfolioSolver<T>
where
    T: PrimInt + Signed,
{
    fn solve<'a>(&mut self, context: PortfolioSolverContext<'a, T>) -> PortfolioSolverResult<T>;
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembly(len: usize, sidelined: usize) -> Assembly<i64> {
        let cars = (0..len).rev().map(|w| w as i64).collect();
        Assembly::new(cars, sidelined)
    }

    #[test]
    fn test_optimal_result_shape() {
        let res = PortfolioSolverResult::optimal(assembly(4, 0));
        assert!(matches!(res.result(), SolverResult::Optimal(_)));
        assert_eq!(
            *res.termination_reason(),
            TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_aborted_with_assembly_is_feasible() {
        let res = PortfolioSolverResult::aborted(Some(assembly(2, 3)), "time limit reached");
        match res.result() {
            SolverResult::Feasible(a) => assert_eq!(a.len(), 2),
            other => panic!("expected Feasible, got {:?}", other),
        }
        match res.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_aborted_without_assembly_is_unknown() {
        let res = PortfolioSolverResult::<i64>::aborted(None, "interrupted");
        assert!(matches!(res.result(), SolverResult::Unknown));
    }
}
