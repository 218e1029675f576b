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

//! The immutable data model describing one incoming car stream.
//!
//! A `Manifest<T>` is the validated, ordered list of car weights as they will
//! roll into the yard. It is fixed for the lifetime of one search: sequencers
//! borrow it, never mutate it, and index it through `CarIndex`. Construction
//! goes through `Manifest::new` (already-stripped weight list) or
//! `Manifest::from_framed` (leading-count framing convention), both of which
//! reject malformed input before any search work begins.
//!
//! `Complexity` reports the size of the unpruned decision tree in log10
//! space. Every arrival admits three decisions (front, rear, siding), so the
//! tree has `sum_{k=0..N} 3^k` nodes, which overflows any primitive integer
//! long before realistic stream lengths are reached.

use crate::index::CarIndex;
use num_traits::{PrimInt, Signed};

/// Represents the theoretical search space size of a sequencing instance.
///
/// Every car admits a three-way decision, so the unpruned search tree over
/// `N` cars contains `sum_{k=0..N} 3^k` nodes. Since this exceeds standard
/// integer limits for modest `N`, this struct stores the value in
/// **Logarithmic Space** (log10).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    /// The base-10 logarithm of the total node count.
    log_val: f64,
}

impl Complexity {
    /// Calculates the complexity for the given number of cars.
    pub fn new(num_cars: usize) -> Self {
        // Helper to compute log10(10^a + 10^b) without leaving log space.
        let log10_add = |a: f64, b: f64| -> f64 {
            let max = a.max(b);
            let min = a.min(b);
            max + (1.0 + 10.0_f64.powf(min - max)).log10()
        };

        let branching_log = 3.0_f64.log10();

        // Level 0 is the root: one node, log10(1) = 0.
        let mut current_level_log = 0.0;
        let mut total_sum_log = 0.0;

        for _ in 1..=num_cars {
            current_level_log += branching_log;
            total_sum_log = log10_add(total_sum_log, current_level_log);
        }

        Complexity {
            log_val: total_sum_log,
        }
    }

    /// Returns the percentage of the search space that was actually explored.
    /// Returns `None` if the node count degenerates to zero.
    pub fn coverage(&self, nodes_explored: u64) -> Option<f64> {
        if self.log_val > 15.0 {
            return Some(0.0);
        }

        let total_size = 10.0_f64.powf(self.log_val);
        if total_size == 0.0 {
            return None;
        }

        Some((nodes_explored as f64 / total_size) * 100.0)
    }

    /// Returns the exponent (order of magnitude).
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw log10 value.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(log10={:.4})", self.log_val)
    }
}

/// The error type for manifest validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidManifestError {
    /// The car stream contains no cars at all.
    Empty,
    /// The declared car count does not match the number of supplied weights.
    CountMismatch {
        /// The count announced by the input framing.
        declared: usize,
        /// The number of weights actually supplied.
        actual: usize,
    },
}

impl std::fmt::Display for InvalidManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Car stream must contain at least one car"),
            Self::CountMismatch { declared, actual } => write!(
                f,
                "Declared car count {} does not match the {} weights supplied",
                declared, actual
            ),
        }
    }
}

impl std::error::Error for InvalidManifestError {}

/// The immutable, validated incoming car stream.
///
/// Weights are stored in arrival order; `weights[i]` is the weight of the
/// i-th car to roll in. A manifest is never empty.
///
/// # Examples
///
/// ```rust
/// # use shunter_model::manifest::Manifest;
/// # use shunter_model::index::CarIndex;
///
/// let manifest = Manifest::new(vec![4i64, 5, 2, 1]).unwrap();
/// assert_eq!(manifest.num_cars(), 4);
/// assert_eq!(manifest.car_weight(CarIndex::new(1)), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest<T>
where
    T: PrimInt + Signed,
{
    weights: Vec<T>, // len = num_cars, arrival order
}

impl<T> Manifest<T>
where
    T: PrimInt + Signed,
{
    /// Creates a manifest from an already-stripped weight list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidManifestError::Empty` if `weights` is empty.
    pub fn new(weights: Vec<T>) -> Result<Self, InvalidManifestError> {
        if weights.is_empty() {
            return Err(InvalidManifestError::Empty);
        }
        Ok(Self { weights })
    }

    /// Creates a manifest from the framed input convention, where the raw
    /// stream reserves its first element as a redundant car count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidManifestError::CountMismatch` if `declared` differs
    /// from `weights.len()`, and `InvalidManifestError::Empty` for an empty
    /// weight list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_model::manifest::{InvalidManifestError, Manifest};
    ///
    /// let manifest = Manifest::from_framed(4, vec![4i64, 5, 2, 1]).unwrap();
    /// assert_eq!(manifest.num_cars(), 4);
    ///
    /// let err = Manifest::from_framed(3, vec![4i64, 5, 2, 1]).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     InvalidManifestError::CountMismatch { declared: 3, actual: 4 }
    /// );
    /// ```
    pub fn from_framed(declared: usize, weights: Vec<T>) -> Result<Self, InvalidManifestError> {
        if declared != weights.len() {
            return Err(InvalidManifestError::CountMismatch {
                declared,
                actual: weights.len(),
            });
        }
        Self::new(weights)
    }

    /// Returns the number of cars in the manifest.
    #[inline]
    pub fn num_cars(&self) -> usize {
        self.weights.len()
    }

    /// Returns the weight of the car at the given arrival position.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `car_index` is out of bounds.
    #[inline]
    pub fn car_weight(&self, car_index: CarIndex) -> T {
        debug_assert!(
            car_index.get() < self.num_cars(),
            "called `Manifest::car_weight` with car index out of bounds: the len is {} but the index is {}",
            self.num_cars(),
            car_index.get()
        );

        self.weights[car_index.get()]
    }

    /// Returns all car weights in arrival order.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Returns the complexity of the instance's unpruned decision tree.
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.num_cars())
    }
}

impl<T> std::fmt::Display for Manifest<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Manifest(num_cars: {}, weights: [", self.num_cars())?;
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", w)?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_stream() {
        let res = Manifest::<i64>::new(Vec::new());
        assert_eq!(res.unwrap_err(), InvalidManifestError::Empty);
    }

    #[test]
    fn test_new_and_accessors() {
        let manifest = Manifest::new(vec![10i64, 5, 6, 4]).unwrap();

        assert_eq!(manifest.num_cars(), 4);
        assert_eq!(manifest.weights(), &[10, 5, 6, 4]);
        assert_eq!(manifest.car_weight(CarIndex::new(0)), 10);
        assert_eq!(manifest.car_weight(CarIndex::new(3)), 4);
    }

    #[test]
    fn test_from_framed_accepts_matching_count() {
        let manifest = Manifest::from_framed(4, vec![4i64, 5, 2, 1]).unwrap();
        assert_eq!(manifest.num_cars(), 4);
    }

    #[test]
    fn test_from_framed_rejects_count_mismatch() {
        let err = Manifest::from_framed(5, vec![4i64, 5, 2, 1]).unwrap_err();
        assert_eq!(
            err,
            InvalidManifestError::CountMismatch {
                declared: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn test_from_framed_rejects_empty_stream() {
        let err = Manifest::<i64>::from_framed(0, Vec::new()).unwrap_err();
        assert_eq!(err, InvalidManifestError::Empty);
    }

    #[test]
    fn test_complexity_single_car() {
        // One car: root plus three children, 4 nodes total.
        let c = Complexity::new(1);
        assert!((10.0_f64.powf(c.raw()) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_grows_with_stream_length() {
        let small = Complexity::new(5);
        let large = Complexity::new(20);
        assert!(large.raw() > small.raw());

        // 20 cars: about (3^21 - 1) / 2 ≈ 5.2e9 nodes.
        assert_eq!(large.exponent(), 9);
    }

    #[test]
    fn test_complexity_coverage_full_for_tiny_instance() {
        let c = Complexity::new(1);
        let coverage = c.coverage(4).expect("coverage must be Some");
        assert!((coverage - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_display_formats() {
        let manifest = Manifest::new(vec![3i64, 2, 1]).unwrap();
        let rendered = format!("{}", manifest);
        assert!(rendered.contains("num_cars: 3"));
        assert!(rendered.contains("[3, 2, 1]"));

        let err = InvalidManifestError::CountMismatch {
            declared: 2,
            actual: 3,
        };
        assert!(format!("{}", err).contains("Declared car count 2"));
    }
}
