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

//! The mutable per-session search state.
//!
//! `SearchState<T>` holds the train under assembly as a double-ended buffer.
//! Descending into a child couples one car to an end; returning detaches it
//! again, restoring the parent state exactly. Siding decisions leave the
//! buffer untouched. This in-place-mutate-and-undo discipline avoids copying
//! the assembly prefix at every branch of the recursion.

use num_traits::{PrimInt, Signed};
use shunter_core::num::ops::saturating_arithmetic::SaturatingSubVal;
use shunter_model::assembly::Assembly;
use std::collections::VecDeque;

/// The train under assembly, front of the train at the head of the deque.
///
/// Invariant: callers only couple a car to an end when the non-increasing
/// order is preserved, so the buffer content is a valid assembly at every
/// point of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState<T> {
    train: VecDeque<T>,
}

impl<T> Default for SearchState<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchState<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty search state.
    #[inline]
    pub fn new() -> Self {
        Self {
            train: VecDeque::new(),
        }
    }

    /// Creates a new search state with preallocated storage for the given
    /// number of cars, so the buffer never reallocates during the search.
    #[inline]
    pub fn preallocated(num_cars: usize) -> Self {
        Self {
            train: VecDeque::with_capacity(num_cars),
        }
    }

    /// Makes sure the buffer can hold `num_cars` cars without reallocating.
    #[inline]
    pub fn ensure_capacity(&mut self, num_cars: usize) {
        if self.train.capacity() < num_cars {
            self.train.reserve(num_cars - self.train.len());
        }
    }

    /// Returns the number of cars currently coupled.
    #[inline]
    pub fn assembly_len(&self) -> usize {
        self.train.len()
    }

    /// Returns `true` if no car has been coupled yet.
    #[inline]
    pub fn is_assembly_empty(&self) -> bool {
        self.train.is_empty()
    }

    /// Returns the weight of the front car, if any.
    #[inline]
    pub fn front(&self) -> Option<T> {
        self.train.front().copied()
    }

    /// Returns the weight of the rear car, if any.
    #[inline]
    pub fn rear(&self) -> Option<T> {
        self.train.back().copied()
    }

    /// Returns how many cars have been sidelined by the decisions taken so
    /// far, given that `position` cars have been decided.
    #[inline]
    pub fn num_sidelined(&self, position: usize) -> usize {
        debug_assert!(
            position >= self.assembly_len(),
            "called `SearchState::num_sidelined` with position {} smaller than the assembly length {}",
            position,
            self.assembly_len()
        );

        position.saturating_sub_val(self.assembly_len())
    }

    /// Couples a car to the front of the train.
    #[inline]
    pub fn attach_front(&mut self, weight: T) {
        self.train.push_front(weight);
    }

    /// Couples a car to the rear of the train.
    #[inline]
    pub fn attach_rear(&mut self, weight: T) {
        self.train.push_back(weight);
    }

    /// Undoes an `attach_front`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the train is empty.
    #[inline]
    pub fn detach_front(&mut self) {
        let detached = self.train.pop_front();
        debug_assert!(
            detached.is_some(),
            "called `SearchState::detach_front` on an empty train"
        );
    }

    /// Undoes an `attach_rear`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the train is empty.
    #[inline]
    pub fn detach_rear(&mut self) {
        let detached = self.train.pop_back();
        debug_assert!(
            detached.is_some(),
            "called `SearchState::detach_rear` on an empty train"
        );
    }

    /// Snapshots the current train into an owned `Assembly`.
    #[inline]
    pub fn to_assembly(&self, num_sidelined: usize) -> Assembly<T> {
        Assembly::new(self.train.iter().copied().collect(), num_sidelined)
    }

    /// Resets the state, keeping the allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.train.clear();
    }
}

impl<T> std::fmt::Display for SearchState<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchState(train: [")?;
        for (i, w) in self.train.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", w)?;
        }
        write!(f, "])")
    }
}
