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

use crate::branching::{decision::Attachment, BranchPolicy};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Explores the two couplings in random order, then the siding.
///
/// Randomizing the coupling order diversifies a portfolio: a shuffled
/// member walks a different path through ties than the deterministic
/// policies and can install an improving incumbent sooner on some
/// instances. The siding stays last so the search keeps diving towards
/// long trains first.
#[derive(Clone, Debug)]
pub struct ShuffledPolicy {
    rng: StdRng,
}

impl ShuffledPolicy {
    /// Creates a new `ShuffledPolicy` seeded from system entropy.
    #[inline]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `ShuffledPolicy` with a fixed seed, for reproducible
    /// runs.
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ShuffledPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchPolicy for ShuffledPolicy {
    fn name(&self) -> &str {
        "ShuffledPolicy"
    }

    #[inline]
    fn exploration_order(&mut self) -> [Attachment; 3] {
        let mut couplings = [Attachment::Front, Attachment::Rear];
        couplings.shuffle(&mut self.rng);
        [couplings[0], couplings[1], Attachment::Siding]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_siding_is_always_last() {
        let mut policy = ShuffledPolicy::with_seed(42);
        for _ in 0..64 {
            let order = policy.exploration_order();
            assert_eq!(order[2], Attachment::Siding);
        }
    }

    #[test]
    fn test_couplings_always_present() {
        let mut policy = ShuffledPolicy::with_seed(1);
        for _ in 0..64 {
            let order = policy.exploration_order();
            assert!(order.contains(&Attachment::Front));
            assert!(order.contains(&Attachment::Rear));
        }
    }

    #[test]
    fn test_seeded_policy_is_reproducible() {
        let mut a = ShuffledPolicy::with_seed(99);
        let mut b = ShuffledPolicy::with_seed(99);
        for _ in 0..32 {
            assert_eq!(a.exploration_order(), b.exploration_order());
        }
    }

    #[test]
    fn test_both_orders_eventually_occur() {
        let mut policy = ShuffledPolicy::with_seed(3);
        let mut seen_front_first = false;
        let mut seen_rear_first = false;
        for _ in 0..256 {
            match policy.exploration_order()[0] {
                Attachment::Front => seen_front_first = true,
                Attachment::Rear => seen_rear_first = true,
                Attachment::Siding => unreachable!("siding must stay last"),
            }
        }
        assert!(seen_front_first && seen_rear_first);
    }
}
