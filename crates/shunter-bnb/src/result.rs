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

use crate::stats::SequencerStatistics;
use num_traits::{PrimInt, Signed};
use shunter_model::assembly::Assembly;
use shunter_search::{
    portfolio::PortfolioSolverResult,
    result::{SolverResult, TerminationReason},
};

/// Result of the sequencer after termination.
#[derive(Debug, Clone)]
pub struct SequencerOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: SequencerStatistics,
}

impl<T> SequencerOutcome<T> {
    #[inline]
    pub fn optimal(assembly: Assembly<T>, statistics: SequencerStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(assembly),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(
        assembly: Option<Assembly<T>>,
        reason: R,
        statistics: SequencerStatistics,
    ) -> Self
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
            statistics,
        }
    }

    /// Returns the sequencer result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the sequencer statistics.
    #[inline]
    pub fn statistics(&self) -> &SequencerStatistics {
        &self.statistics
    }
}

impl<T> From<SequencerOutcome<T>> for PortfolioSolverResult<T>
where
    T: PrimInt + Signed,
{
    fn from(val: SequencerOutcome<T>) -> Self {
        match val.termination_reason {
            TerminationReason::OptimalityProven => {
                assert!(
                    matches!(val.result, SolverResult::Optimal(_)),
                    "called `SequencerOutcome::into()` with inconsistent state: termination reason is OptimalityProven but result is not Optimal"
                );
                if let SolverResult::Optimal(assembly) = val.result {
                    PortfolioSolverResult::optimal(assembly)
                } else {
                    unreachable!("checked by the assertion above")
                }
            }
            TerminationReason::Aborted(reason) => match val.result {
                SolverResult::Feasible(assembly) => {
                    PortfolioSolverResult::aborted(Some(assembly), reason)
                }
                _ => PortfolioSolverResult::aborted(None, reason),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type I = i64;

    fn assembly(len: usize, sidelined: usize) -> Assembly<I> {
        let cars = (0..len).rev().map(|w| w as I).collect();
        Assembly::new(cars, sidelined)
    }

    fn stats() -> SequencerStatistics {
        SequencerStatistics::default()
    }

    #[test]
    fn test_optimal_outcome_shape() {
        let outcome = SequencerOutcome::optimal(assembly(4, 0), stats());
        assert!(matches!(outcome.result(), SolverResult::Optimal(_)));
        assert_eq!(
            *outcome.termination_reason(),
            TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_into_portfolio_optimal_maps_correctly() {
        let outcome = SequencerOutcome::optimal(assembly(4, 1), stats());
        let portfolio: PortfolioSolverResult<I> = outcome.into();

        match portfolio.result() {
            SolverResult::Optimal(a) => assert_eq!(a.len(), 4),
            other => panic!("expected Optimal, got {:?}", other),
        }
    }

    #[test]
    fn test_into_portfolio_aborted_with_assembly_maps_to_feasible() {
        let outcome =
            SequencerOutcome::aborted(Some(assembly(3, 2)), "time limit reached", stats());
        let portfolio: PortfolioSolverResult<I> = outcome.into();

        assert!(matches!(portfolio.result(), SolverResult::Feasible(_)));
        match portfolio.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit reached"),
            _ => panic!("expected Aborted termination reason"),
        }
    }

    #[test]
    fn test_into_portfolio_aborted_without_assembly_maps_to_unknown() {
        let outcome = SequencerOutcome::<I>::aborted(None, "interrupted", stats());
        let portfolio: PortfolioSolverResult<I> = outcome.into();

        assert!(matches!(portfolio.result(), SolverResult::Unknown));
    }

    #[test]
    #[should_panic(expected = "termination reason is OptimalityProven but result is not Optimal")]
    fn test_into_portfolio_optimality_invariant_panics_on_inconsistent_state() {
        // Construct an inconsistent outcome: termination says
        // OptimalityProven, but the result is not Optimal.
        let inconsistent = SequencerOutcome::<I> {
            result: SolverResult::Unknown,
            termination_reason: TerminationReason::OptimalityProven,
            statistics: stats(),
        };
        let _portfolio: PortfolioSolverResult<I> = inconsistent.into();
    }
}
