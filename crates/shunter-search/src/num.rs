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

//! # Car Numeric Trait
//!
//! Unified numeric bounds for car weight types. The sequencing pipeline
//! stays generic over the weight representation while the objective (the
//! sidelined-car count) is always a `usize`, so weights only need ordering,
//! formatting, and thread-safety capabilities — no arithmetic is performed
//! on them.
//!
//! Note: `i128` is intentionally excluded for performance reasons.

use num_traits::{PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for numeric types usable as car weights.
/// These are usually the signed integer types `i8`, `i16`, `i32`, `i64`
/// and `isize`.
pub trait CarNumeric:
    PrimInt + Signed + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync
{
}

impl<T> CarNumeric for T where
    T: PrimInt + Signed + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync
{
}
