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

//! # Shared Incumbent (Best Assembly Holder)
//!
//! A concurrent container for the best assembly discovered so far during
//! search. It exposes a fast, lock-free sidelined-count bound via an atomic
//! and stores the actual `Assembly<T>` behind a `Mutex` as the source of
//! truth. Designed for portfolio runs where multiple threads propose
//! improvements over the same manifest.
//!
//! ## Motivation
//!
//! - Fast heuristic checks: a cheap atomic bound short-circuits attempts to
//!   install obviously worse candidates without locking.
//! - Correctness by locking: the authoritative incumbent is protected by a
//!   `Mutex`, ensuring consistent updates even under contention.
//! - Simple sentinel: the bound starts at `usize::MAX` meaning "no incumbent
//!   yet."
//!
//! ## Usage
//!
//! ```rust
//! use shunter_search::incumbent::SharedIncumbent;
//! use shunter_model::assembly::Assembly;
//!
//! let inc: SharedIncumbent<i64> = SharedIncumbent::new();
//! let candidate = Assembly::new(vec![9, 5, 2], 1);
//!
//! if inc.try_install(&candidate) {
//!     // Installed as new best
//! }
//!
//! let bound = inc.best_sidelined();  // fast atomic read
//! let snap = inc.snapshot();         // optional cloned assembly
//! # assert_eq!(bound, 1);
//! # assert!(snap.is_some());
//! ```

use shunter_model::assembly::Assembly;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// A concurrent holder for the best (incumbent) assembly found during search.
///
/// This structure maintains:
/// - an `AtomicUsize` sidelined-count bound for fast, lock-free reads, and
/// - a `Mutex<Option<Assembly<T>>>` for the actual assembly, which is the
///   source of truth.
///
/// Concurrency and memory ordering:
/// - The bound is loaded/stored with `Ordering::Relaxed`. This is sufficient
///   because it serves as a heuristic to short-circuit work (e.g., avoid
///   locking when a candidate is obviously worse). All correctness-sensitive
///   state (the assembly and its sidelined count) is synchronized via the
///   `Mutex`.
///
/// Sentinel initialization:
/// - The bound is initialized to `usize::MAX` to represent "no assembly
///   installed yet." We minimize the sidelined count and no manifest can
///   sideline `usize::MAX` cars, so the sentinel is both simple and
///   effective.
#[derive(Debug)]
pub struct SharedIncumbent<T> {
    /// Sidelined-car count of the incumbent assembly.
    best_sidelined: AtomicUsize,

    /// The incumbent assembly, protected by a mutex for safe concurrent
    /// access.
    assembly: Mutex<Option<Assembly<T>>>,
}

impl<T> Default for SharedIncumbent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for SharedIncumbent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Incumbent(best_sidelined: {})", self.best_sidelined())
    }
}

impl<T> SharedIncumbent<T> {
    /// Creates a new shared incumbent with no assembly installed.
    /// The initial bound is `usize::MAX`.
    #[inline]
    pub fn new() -> Self {
        SharedIncumbent {
            best_sidelined: AtomicUsize::new(usize::MAX),
            assembly: Mutex::new(None),
        }
    }

    /// Returns the current sidelined-count bound.
    #[inline]
    pub fn best_sidelined(&self) -> usize {
        self.best_sidelined.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of the current incumbent assembly, if any.
    #[inline]
    pub fn snapshot(&self) -> Option<Assembly<T>>
    where
        T: Clone,
    {
        let guard = self.assembly.lock().unwrap();
        guard.clone()
    }

    /// Attempts to install the given candidate assembly as the new
    /// incumbent. Returns `true` if the candidate was installed, `false`
    /// otherwise.
    #[inline]
    pub fn try_install(&self, candidate: &Assembly<T>) -> bool
    where
        T: Clone,
    {
        let candidate_sidelined = candidate.num_sidelined();
        let current_bound = self.best_sidelined();

        // We are minimizing, so lower is better.
        if candidate_sidelined >= current_bound {
            return false;
        }

        let mut guard = self.assembly.lock().unwrap();
        // Another thread might have updated the assembly while we were
        // waiting for the lock. We must compare against the *actual* assembly
        // in the Mutex, not the atomic hint we read earlier.
        if let Some(current_assembly) = guard.as_ref() {
            if candidate_sidelined >= current_assembly.num_sidelined() {
                return false;
            }
        }

        *guard = Some(candidate.clone());
        self.best_sidelined
            .store(candidate_sidelined, Ordering::Relaxed);

        true
    }
}
