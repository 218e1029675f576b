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

//! Branching for the sequencer.
//!
//! Every arriving car admits at most three decisions: couple it to the
//! front of the train, couple it to the rear, or route it to the siding.
//! Admissibility (the non-increasing order of the train) is decided by
//! `decision::Decision::try_new`; a `BranchPolicy` only chooses the ORDER
//! in which the three decisions are explored. The order never changes the
//! optimal length, only which equally-long assembly is found first — which
//! makes distinct policies useful as diverse members of a portfolio run.

use crate::branching::decision::Attachment;

pub mod decision;
pub mod front_first;
pub mod rear_first;
pub mod shuffled;

/// Chooses the exploration order of the three decisions for the next car.
///
/// Implementations must return every `Attachment` exactly once; dropping one
/// would silently cut valid assemblies out of the search.
pub trait BranchPolicy {
    /// Returns the name of the policy.
    fn name(&self) -> &str;

    /// Returns the order in which the three decisions for the next car are
    /// explored.
    fn exploration_order(&mut self) -> [Attachment; 3];
}

#[cfg(test)]
mod tests {
    use super::decision::Attachment;
    use super::front_first::FrontFirstPolicy;
    use super::rear_first::RearFirstPolicy;
    use super::shuffled::ShuffledPolicy;
    use super::BranchPolicy;

    fn assert_is_permutation(order: [Attachment; 3]) {
        assert!(order.contains(&Attachment::Front));
        assert!(order.contains(&Attachment::Rear));
        assert!(order.contains(&Attachment::Siding));
    }

    #[test]
    fn test_every_policy_yields_a_permutation() {
        assert_is_permutation(FrontFirstPolicy::new().exploration_order());
        assert_is_permutation(RearFirstPolicy::new().exploration_order());

        let mut shuffled = ShuffledPolicy::with_seed(7);
        for _ in 0..32 {
            assert_is_permutation(shuffled.exploration_order());
        }
    }

    #[test]
    fn test_policy_names_are_distinct() {
        let names = [
            FrontFirstPolicy::new().name().to_string(),
            RearFirstPolicy::new().name().to_string(),
            ShuffledPolicy::with_seed(0).name().to_string(),
        ];
        assert_eq!(
            names.len(),
            names
                .iter()
                .collect::<std::collections::HashSet<_>>()
                .len()
        );
    }
}
