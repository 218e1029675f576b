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

//! Incumbent management for the sequencer
//!
//! Declares `IncumbentStore<T>`, a minimal interface to read/update the best
//! known sidelined-car count and publish new assemblies during search. This
//! abstracts over local (single-threaded) and shared (portfolio) use.
//!
//! Implementations
//! - `NoSharedIncumbent<T>`: local only. `initial_best_sidelined` is
//!   `usize::MAX`, `tighten(x) = x`, and `on_solution_found` is a no-op.
//! - `SharedIncumbentAdapter<'a, T>`: wraps
//!   `shunter_search::incumbent::SharedIncumbent<T>`;
//!   `initial_best_sidelined()` mirrors the shared value, `tighten(x)`
//!   returns `min(shared, x)`, and `on_solution_found` attempts
//!   installation.

use shunter_model::assembly::Assembly;
use shunter_search::incumbent::SharedIncumbent;
use std::marker::PhantomData;

/// Trait for managing incumbent assemblies in the sequencer. This is
/// particularly useful in portfolio scenarios, where multiple engine
/// instances share and update the best-known assembly and its bound.
pub trait IncumbentStore<T> {
    /// Returns the initial sidelined-count bound.
    fn initial_best_sidelined(&self) -> usize;
    /// Synchronizes the current local bound with the shared incumbent.
    fn tighten(&self, current_local_best: usize) -> usize;
    /// Notifies the backing that a new assembly has been found.
    fn on_solution_found(&self, assembly: &Assembly<T>);
}

/// An `IncumbentStore` implementation that does not share the incumbent
/// between engine instances. Use this for single-threaded or isolated runs.
#[repr(transparent)]
pub struct NoSharedIncumbent<T>(PhantomData<T>);

impl<T> Default for NoSharedIncumbent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NoSharedIncumbent<T> {
    /// Creates a new `NoSharedIncumbent` instance.
    #[inline(always)]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> IncumbentStore<T> for NoSharedIncumbent<T> {
    #[inline(always)]
    fn initial_best_sidelined(&self) -> usize {
        usize::MAX
    }

    #[inline(always)]
    fn tighten(&self, current_local_best: usize) -> usize {
        current_local_best
    }

    #[inline(always)]
    fn on_solution_found(&self, _: &Assembly<T>) {}
}

/// An `IncumbentStore` implementation that shares the incumbent between
/// engine instances using a `SharedIncumbent`.
#[repr(transparent)]
#[derive(Debug)]
pub struct SharedIncumbentAdapter<'a, T> {
    inner: &'a SharedIncumbent<T>,
}

impl<'a, T> SharedIncumbentAdapter<'a, T> {
    /// Creates a new `SharedIncumbentAdapter` that wraps the given
    /// `SharedIncumbent`.
    #[inline(always)]
    pub fn new(inner: &'a SharedIncumbent<T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> IncumbentStore<T> for SharedIncumbentAdapter<'a, T>
where
    T: Clone,
{
    #[inline(always)]
    fn initial_best_sidelined(&self) -> usize {
        self.inner.best_sidelined()
    }

    #[inline(always)]
    fn tighten(&self, current_local_best: usize) -> usize {
        self.inner.best_sidelined().min(current_local_best)
    }

    #[inline(always)]
    fn on_solution_found(&self, assembly: &Assembly<T>) {
        self.inner.try_install(assembly);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembly(len: usize, sidelined: usize) -> Assembly<i64> {
        let cars = (0..len).rev().map(|w| w as i64).collect();
        Assembly::new(cars, sidelined)
    }

    #[test]
    fn test_no_shared_incumbent_is_inert() {
        let store = NoSharedIncumbent::<i64>::new();
        assert_eq!(store.initial_best_sidelined(), usize::MAX);
        assert_eq!(store.tighten(3), 3);
        // Publishing is a no-op; nothing observable, just must not panic.
        store.on_solution_found(&assembly(4, 1));
    }

    #[test]
    fn test_shared_adapter_mirrors_backing() {
        let shared = SharedIncumbent::<i64>::new();
        let store = SharedIncumbentAdapter::new(&shared);

        assert_eq!(store.initial_best_sidelined(), usize::MAX);

        store.on_solution_found(&assembly(5, 2));
        assert_eq!(shared.best_sidelined(), 2);
        assert_eq!(store.initial_best_sidelined(), 2);

        // tighten picks the smaller of local and shared.
        assert_eq!(store.tighten(7), 2);
        assert_eq!(store.tighten(1), 1);
    }

    #[test]
    fn test_shared_adapter_does_not_install_worse_assemblies() {
        let shared = SharedIncumbent::<i64>::new();
        let store = SharedIncumbentAdapter::new(&shared);

        store.on_solution_found(&assembly(6, 1));
        store.on_solution_found(&assembly(3, 4));

        assert_eq!(shared.best_sidelined(), 1);
        assert_eq!(shared.snapshot().unwrap().len(), 6);
    }
}
