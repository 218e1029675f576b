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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use num_traits::{PrimInt, Signed};
use shunter_model::{assembly::Assembly, manifest::Manifest};
use std::sync::atomic::{AtomicU64, Ordering};

/// A monitor that terminates the search when a specified number of
/// assemblies has been found. The counter is shared so several portfolio
/// threads contribute to one global budget.
#[derive(Debug)]
pub struct SolutionLimitMonitor<'a, T> {
    solutions_found: &'a AtomicU64,
    solution_limit: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<'a, T> SolutionLimitMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `SolutionLimitMonitor`.
    #[inline]
    pub fn new(solutions_found: &'a AtomicU64, solution_limit: u64) -> Self {
        Self {
            solutions_found,
            solution_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Checks if the solution limit has been reached.
    #[inline]
    fn reached_limit(&self) -> bool {
        self.solutions_found.load(Ordering::Relaxed) >= self.solution_limit
    }
}

impl<'a, T> SearchMonitor<T> for SolutionLimitMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self, _manifest: &Manifest<T>) {}

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _assembly: &Assembly<T>) {
        self.solutions_found.fetch_add(1, Ordering::Relaxed);
    }

    fn on_step(&mut self) {}

    fn search_command(&self) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("global solution limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolutionLimitMonitor;
    use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
    use shunter_model::assembly::Assembly;
    use std::sync::atomic::AtomicU64;

    fn dummy_assembly() -> Assembly<i64> {
        Assembly::new(vec![3, 2, 1], 0)
    }

    #[test]
    fn test_continue_before_limit_and_terminate_at_limit() {
        let counter = AtomicU64::new(0);
        let limit = 3;
        let mut monitor = SolutionLimitMonitor::<i64>::new(&counter, limit);

        assert!(matches!(monitor.search_command(), SearchCommand::Continue));

        monitor.on_solution_found(&dummy_assembly());
        assert!(matches!(monitor.search_command(), SearchCommand::Continue));

        monitor.on_solution_found(&dummy_assembly());
        assert!(matches!(monitor.search_command(), SearchCommand::Continue));

        monitor.on_solution_found(&dummy_assembly());
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));

        // Further calls still report Terminate
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_multiple_monitors_share_global_counter() {
        let counter = AtomicU64::new(0);
        let limit = 4;

        let mut m1 = SolutionLimitMonitor::<i64>::new(&counter, limit);
        let mut m2 = SolutionLimitMonitor::<i64>::new(&counter, limit);

        m1.on_solution_found(&dummy_assembly());
        m1.on_solution_found(&dummy_assembly());
        m2.on_solution_found(&dummy_assembly());
        assert!(matches!(m1.search_command(), SearchCommand::Continue));
        assert!(matches!(m2.search_command(), SearchCommand::Continue));

        m2.on_solution_found(&dummy_assembly());
        assert!(matches!(m1.search_command(), SearchCommand::Terminate(_)));
        assert!(matches!(m2.search_command(), SearchCommand::Terminate(_)));
    }
}
