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

/// Explores rear coupling first, then front coupling, then the siding.
///
/// The mirror image of `FrontFirstPolicy`; it reaches a different
/// equally-long assembly first on instances with ties, which makes the pair
/// useful as diverse portfolio members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RearFirstPolicy;

impl RearFirstPolicy {
    /// Creates a new `RearFirstPolicy`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl BranchPolicy for RearFirstPolicy {
    fn name(&self) -> &str {
        "RearFirstPolicy"
    }

    #[inline]
    fn exploration_order(&mut self) -> [Attachment; 3] {
        [Attachment::Rear, Attachment::Front, Attachment::Siding]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_rear_front_siding() {
        let mut policy = RearFirstPolicy::new();
        assert_eq!(
            policy.exploration_order(),
            [Attachment::Rear, Attachment::Front, Attachment::Siding]
        );
    }
}
