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

/// Explores front coupling first, then rear coupling, then the siding.
///
/// Couplings before the siding means the search dives towards long trains
/// early, which installs a tight incumbent quickly and feeds the bound cut.
/// This is the default policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrontFirstPolicy;

impl FrontFirstPolicy {
    /// Creates a new `FrontFirstPolicy`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl BranchPolicy for FrontFirstPolicy {
    fn name(&self) -> &str {
        "FrontFirstPolicy"
    }

    #[inline]
    fn exploration_order(&mut self) -> [Attachment; 3] {
        [Attachment::Front, Attachment::Rear, Attachment::Siding]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_front_rear_siding() {
        let mut policy = FrontFirstPolicy::new();
        assert_eq!(
            policy.exploration_order(),
            [Attachment::Front, Attachment::Rear, Attachment::Siding]
        );
    }

    #[test]
    fn test_order_is_stable_across_calls() {
        let mut policy = FrontFirstPolicy::new();
        let first = policy.exploration_order();
        let second = policy.exploration_order();
        assert_eq!(first, second);
    }
}
