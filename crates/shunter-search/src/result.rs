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

use crate::stats::SolverStatistics;
use num_traits::{PrimInt, Signed};
use shunter_model::assembly::Assembly;

/// The result of a sequencing run.
///
/// Every non-empty manifest admits an assembly of length at least one (a
/// single car is trivially non-increasing), so there is no infeasible case:
/// a run either proves the optimum, surrenders a feasible assembly when
/// aborted, or knows nothing because it was stopped before reaching any
/// leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// We have found an assembly and proven its optimality.
    Optimal(Assembly<T>),
    /// We have found a valid assembly, but not proven its optimality.
    Feasible(Assembly<T>),
    /// The solver terminated without finding any assembly.
    Unknown,
}

impl<T> SolverResult<T> {
    /// Returns the contained assembly, if any.
    #[inline]
    pub fn assembly(&self) -> Option<&Assembly<T>> {
        match self {
            SolverResult::Optimal(assembly) | SolverResult::Feasible(assembly) => Some(assembly),
            SolverResult::Unknown => None,
        }
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(assembly) => {
                write!(
                    f,
                    "Optimal(len={}, sidelined={})",
                    assembly.len(),
                    assembly.num_sidelined()
                )
            }
            SolverResult::Feasible(assembly) => {
                write!(
                    f,
                    "Feasible(len={}, sidelined={})",
                    assembly.len(),
                    assembly.num_sidelined()
                )
            }
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The solver found and proved optimality of an assembly.
    OptimalityProven,
    /// The solver aborted due to a search limit (time, solutions, etc.).
    /// The string contains information about the reason for abortion.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", *reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    pub result: SolverResult<T>,
    pub reason: TerminationReason,
    pub statistics: SolverStatistics,
}

impl<T> SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new(
        result: SolverResult<T>,
        reason: TerminationReason,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn optimal(assembly: Assembly<T>, statistics: SolverStatistics) -> Self {
        Self::new(
            SolverResult::Optimal(assembly),
            TerminationReason::OptimalityProven,
            statistics,
        )
    }

    #[inline]
    pub fn feasible<R>(assembly: Assembly<T>, reason: R, statistics: SolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self::new(
            SolverResult::Feasible(assembly),
            TerminationReason::Aborted(reason.into()),
            statistics,
        )
    }

    #[inline]
    pub fn unknown<R>(reason: R, statistics: SolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self::new(
            SolverResult::Unknown,
            TerminationReason::Aborted(reason.into()),
            statistics,
        )
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn has_assembly(&self) -> bool {
        matches!(
            self.result,
            SolverResult::Optimal(_) | SolverResult::Feasible(_)
        )
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolverOutcome(result: {}, reason: {})",
            self.result, self.reason
        )
    }
}
