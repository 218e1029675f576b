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

use crate::state::SearchState;
use num_traits::{PrimInt, Signed};
use shunter_model::{index::CarIndex, manifest::Manifest};

/// Where the next car goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// Couple the car to the front of the train.
    Front,
    /// Couple the car to the rear of the train.
    Rear,
    /// Route the car to the siding; it is excluded for good.
    Siding,
}

impl std::fmt::Display for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attachment::Front => write!(f, "Front"),
            Attachment::Rear => write!(f, "Rear"),
            Attachment::Siding => write!(f, "Siding"),
        }
    }
}

/// An admissible decision for one car: its identity, its weight, and where
/// it goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decision<T> {
    /// The weight of the car being decided.
    weight: T,
    /// The arrival position of the car being decided.
    car_index: CarIndex,
    /// Where the car goes.
    attachment: Attachment,
}

impl<T> std::fmt::Display for Decision<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decision(car: {}, weight: {}, attachment: {})",
            self.car_index, self.weight, self.attachment
        )
    }
}

impl<T> Decision<T>
where
    T: PrimInt + Signed,
{
    /// Tries to create a new `Decision` routing the specified car to the
    /// specified attachment point, given the current state of the train.
    ///
    /// A coupling is admissible only if it preserves the non-increasing
    /// order of the train: a front coupling requires a weight at least the
    /// current front, a rear coupling a weight at most the current rear.
    /// Routing to the siding is always admissible.
    ///
    /// # Symmetry
    ///
    /// Coupling to the rear of an EMPTY train yields exactly the state that
    /// coupling to the front yields, so every subtree below it is a
    /// duplicate. `try_new` refuses the rear coupling in that case; the
    /// front coupling covers the shared state.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `car_index` is out of bounds for the
    /// manifest.
    #[inline]
    pub fn try_new(
        car_index: CarIndex,
        attachment: Attachment,
        manifest: &Manifest<T>,
        state: &SearchState<T>,
    ) -> Option<Self> {
        debug_assert!(
            car_index.get() < manifest.num_cars(),
            "called `Decision::try_new` with car index out of bounds: the len is {} but the index is {}",
            manifest.num_cars(),
            car_index.get()
        );

        let weight = manifest.car_weight(car_index);

        let admissible = match attachment {
            Attachment::Front => state.front().is_none_or(|front| weight >= front),
            Attachment::Rear => match state.rear() {
                Some(rear) => weight <= rear,
                None => false,
            },
            Attachment::Siding => true,
        };

        admissible.then_some(Self {
            weight,
            car_index,
            attachment,
        })
    }

    /// Returns the weight of the car being decided.
    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Returns the arrival position of the car being decided.
    #[inline]
    pub fn car_index(&self) -> CarIndex {
        self.car_index
    }

    /// Returns where the car goes.
    #[inline]
    pub fn attachment(&self) -> Attachment {
        self.attachment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest<i64> {
        Manifest::new(vec![8, 5, 9, 5]).unwrap()
    }

    fn state_with(train: &[i64]) -> SearchState<i64> {
        let mut state = SearchState::new();
        for &w in train {
            state.attach_rear(w);
        }
        state
    }

    #[test]
    fn test_siding_is_always_admissible() {
        let manifest = manifest();
        let empty = state_with(&[]);
        let full = state_with(&[9, 5]);

        assert!(Decision::try_new(CarIndex::new(0), Attachment::Siding, &manifest, &empty).is_some());
        assert!(Decision::try_new(CarIndex::new(1), Attachment::Siding, &manifest, &full).is_some());
    }

    #[test]
    fn test_front_requires_weight_at_least_current_front() {
        let manifest = manifest();
        let state = state_with(&[8, 5]);

        // Car 2 weighs 9 >= 8: admissible.
        let decision =
            Decision::try_new(CarIndex::new(2), Attachment::Front, &manifest, &state).unwrap();
        assert_eq!(decision.weight(), 9);
        assert_eq!(decision.attachment(), Attachment::Front);

        // Car 1 weighs 5 < 8: would break the order.
        assert!(Decision::try_new(CarIndex::new(1), Attachment::Front, &manifest, &state).is_none());
    }

    #[test]
    fn test_rear_requires_weight_at_most_current_rear() {
        let manifest = manifest();
        let state = state_with(&[9, 8]);

        // Car 1 weighs 5 <= 8: admissible.
        assert!(Decision::try_new(CarIndex::new(1), Attachment::Rear, &manifest, &state).is_some());

        // Car 2 weighs 9 > 8: would break the order.
        assert!(Decision::try_new(CarIndex::new(2), Attachment::Rear, &manifest, &state).is_none());
    }

    #[test]
    fn test_equal_weights_are_admissible_at_both_ends() {
        let manifest = manifest();
        let state = state_with(&[5]);

        // Car 3 weighs 5, equal to both ends.
        assert!(Decision::try_new(CarIndex::new(3), Attachment::Front, &manifest, &state).is_some());
        assert!(Decision::try_new(CarIndex::new(3), Attachment::Rear, &manifest, &state).is_some());
    }

    #[test]
    fn test_empty_train_accepts_front_but_not_symmetric_rear() {
        let manifest = manifest();
        let state = state_with(&[]);

        assert!(Decision::try_new(CarIndex::new(0), Attachment::Front, &manifest, &state).is_some());
        // Rear coupling to an empty train is the same state; refused.
        assert!(Decision::try_new(CarIndex::new(0), Attachment::Rear, &manifest, &state).is_none());
    }

    #[test]
    fn test_display() {
        let manifest = manifest();
        let state = state_with(&[]);
        let decision =
            Decision::try_new(CarIndex::new(0), Attachment::Front, &manifest, &state).unwrap();
        assert_eq!(
            format!("{}", decision),
            "Decision(car: CarIndex(0), weight: 8, attachment: Front)"
        );
    }
}
