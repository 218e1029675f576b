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

use crate::monitor::{
    search_monitor::{SearchCommand, SearchMonitor},
    MonitorIndex,
};
use num_traits::{PrimInt, Signed};
use shunter_model::{assembly::Assembly, manifest::Manifest};

/// A composite monitor that aggregates multiple monitors and forwards events
/// to all of them. The first `Terminate` command returned by any aggregated
/// monitor wins.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
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

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
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

        write!(f, "CompositeMonitor([{}])", monitors_str)
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

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor to the composite monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
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

    /// Returns a reference to the monitor at the specified index.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `monitor_index` is out of bounds.
    #[inline]
    pub fn monitor(&'a self, monitor_index: MonitorIndex) -> &'a dyn SearchMonitor<T> {
        let index = monitor_index.get();
        debug_assert!(
            index < self.monitors.len(),
            "called `CompositeMonitor::monitor` with monitor index out of bounds: the len is {} but the index is {}",
            self.monitors.len(),
            index
        );

        self.monitors[index].as_ref()
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, manifest: &Manifest<T>) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_search(manifest);
        }
    }

    fn on_exit_search(&mut self) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_search();
        }
    }

    fn on_solution_found(&mut self, assembly: &Assembly<T>) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_solution_found(assembly);
        }
    }

    #[inline]
    fn on_step(&mut self) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_step();
        }
    }

    #[inline]
    fn search_command(&self) -> SearchCommand {
        for monitor in self.monitors.iter() {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::interrupt::InterruptMonitor;
    use shunter_model::manifest::Manifest;
    use std::sync::atomic::{AtomicBool, Ordering};

    type IntegerType = i64;

    /// A monitor that counts events and optionally terminates.
    struct CountingMonitor {
        steps: u64,
        solutions: u64,
        entered: bool,
        exited: bool,
        terminate: bool,
    }

    impl CountingMonitor {
        fn new(terminate: bool) -> Self {
            Self {
                steps: 0,
                solutions: 0,
                entered: false,
                exited: false,
                terminate,
            }
        }
    }

    impl SearchMonitor<IntegerType> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_enter_search(&mut self, _manifest: &Manifest<IntegerType>) {
            self.entered = true;
        }

        fn on_exit_search(&mut self) {
            self.exited = true;
        }

        fn on_solution_found(&mut self, _assembly: &Assembly<IntegerType>) {
            self.solutions += 1;
        }

        fn on_step(&mut self) {
            self.steps += 1;
        }

        fn search_command(&self) -> SearchCommand {
            if self.terminate {
                SearchCommand::Terminate("counting monitor says stop".to_string())
            } else {
                SearchCommand::Continue
            }
        }
    }

    #[test]
    fn test_empty_composite_continues() {
        let composite = CompositeMonitor::<IntegerType>::new();
        assert!(composite.is_empty());
        assert!(matches!(composite.search_command(), SearchCommand::Continue));
    }

    #[test]
    fn test_events_are_forwarded_to_all_monitors() {
        let mut composite = CompositeMonitor::<IntegerType>::with_capacity(2);
        composite.add_monitor(CountingMonitor::new(false));
        composite.add_monitor(CountingMonitor::new(false));
        assert_eq!(composite.len(), 2);

        let manifest = Manifest::new(vec![3i64, 2, 1]).unwrap();
        composite.on_enter_search(&manifest);
        composite.on_step();
        composite.on_step();
        composite.on_solution_found(&Assembly::new(vec![3, 2, 1], 0));
        composite.on_exit_search();

        // The composite owns the monitors; observe forwarding through the
        // search command of a terminating member below instead.
        assert!(matches!(composite.search_command(), SearchCommand::Continue));
    }

    #[test]
    fn test_first_terminate_wins() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(CountingMonitor::new(false));
        composite.add_monitor(CountingMonitor::new(true));

        match composite.search_command() {
            SearchCommand::Terminate(reason) => {
                assert_eq!(reason, "counting monitor says stop");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_composite_with_interrupt_monitor() {
        let flag = AtomicBool::new(false);
        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(InterruptMonitor::new(&flag));

        assert!(matches!(composite.search_command(), SearchCommand::Continue));
        flag.store(true, Ordering::Relaxed);
        assert!(matches!(
            composite.search_command(),
            SearchCommand::Terminate(_)
        ));
    }
}
