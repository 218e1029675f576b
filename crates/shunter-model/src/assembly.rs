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

use num_traits::{PrimInt, Signed};

/// A candidate outgoing train: the solution type of a sequencing search.
///
/// Car weights are stored front-to-back; a valid assembly is non-increasing
/// in that order (`cars[i] >= cars[i + 1]`). The number of sidelined cars is
/// carried alongside, so the objective is readable without knowing the
/// originating manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assembly<T> {
    /// Car weights, front of the train first.
    cars: Vec<T>,

    /// How many cars of the originating stream were routed to the siding.
    num_sidelined: usize,
}

impl<T> Assembly<T> {
    /// Constructs a new `Assembly` from front-to-back car weights and the
    /// number of cars that were sidelined to obtain it.
    #[inline]
    pub fn new(cars: Vec<T>, num_sidelined: usize) -> Self {
        Self {
            cars,
            num_sidelined,
        }
    }

    /// Returns the number of cars coupled into the train.
    #[inline]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Returns `true` if the train contains no cars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Returns the number of sidelined (discarded) cars.
    #[inline]
    pub fn num_sidelined(&self) -> usize {
        self.num_sidelined
    }

    /// Returns the car weights, front of the train first.
    #[inline]
    pub fn cars(&self) -> &[T] {
        &self.cars
    }
}

impl<T> Assembly<T>
where
    T: PrimInt + Signed,
{
    /// Checks the ordering invariant: weights must not increase from front
    /// to rear.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_model::assembly::Assembly;
    ///
    /// let valid = Assembly::new(vec![9i64, 7, 7, 2], 0);
    /// assert!(valid.is_non_increasing());
    ///
    /// let invalid = Assembly::new(vec![9i64, 7, 8], 0);
    /// assert!(!invalid.is_non_increasing());
    /// ```
    #[inline]
    pub fn is_non_increasing(&self) -> bool {
        self.cars.windows(2).all(|pair| pair[0] >= pair[1])
    }
}

impl<T> std::fmt::Display for Assembly<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assembly Summary")?;
        writeln!(f, "   Coupled Cars:   {}", self.len())?;
        writeln!(f, "   Sidelined Cars: {}", self.num_sidelined)?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (No cars coupled)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Position", "Weight")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (position, weight) in self.cars.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<10}", position, weight)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_basic_accessors() {
        let assembly = Assembly::new(vec![13i64, 12, 5, 1], 3);

        assert_eq!(assembly.len(), 4);
        assert!(!assembly.is_empty());
        assert_eq!(assembly.num_sidelined(), 3);
        assert_eq!(assembly.cars(), &[13, 12, 5, 1]);
    }

    #[test]
    fn test_empty_assembly() {
        let assembly = Assembly::<i64>::new(Vec::new(), 0);
        assert_eq!(assembly.len(), 0);
        assert!(assembly.is_empty());
        // An empty sequence is vacuously non-increasing.
        assert!(assembly.is_non_increasing());
    }

    #[test]
    fn test_single_car_is_non_increasing() {
        let assembly = Assembly::new(vec![42i64], 0);
        assert!(assembly.is_non_increasing());
    }

    #[test]
    fn test_order_check_accepts_equal_neighbors() {
        let assembly = Assembly::new(vec![7i64, 7, 7], 0);
        assert!(assembly.is_non_increasing());
    }

    #[test]
    fn test_order_check_rejects_increase() {
        let assembly = Assembly::new(vec![5i64, 4, 6], 0);
        assert!(!assembly.is_non_increasing());

        // Violation at the very front.
        let assembly = Assembly::new(vec![1i64, 2], 0);
        assert!(!assembly.is_non_increasing());
    }

    #[test]
    fn test_display_lists_positions_and_weights() {
        let assembly = Assembly::new(vec![9i64, 3], 1);
        let rendered = format!("{}", assembly);

        assert!(rendered.contains("Coupled Cars:   2"));
        assert!(rendered.contains("Sidelined Cars: 1"));
        assert!(rendered.contains("Position"));
        assert!(rendered.contains("Weight"));
    }

    #[test]
    fn test_display_empty() {
        let assembly = Assembly::<i64>::new(Vec::new(), 0);
        let rendered = format!("{}", assembly);
        assert!(rendered.contains("(No cars coupled)"));
    }
}
