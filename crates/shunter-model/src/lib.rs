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

//! Shunter-Model: the data model for railway-yard sequencing.
//!
//! The problem: freight cars arrive one at a time in a fixed order, and each
//! car is either coupled to the FRONT of the outgoing train, coupled to the
//! REAR, or routed to a siding and excluded for good. The outgoing train must
//! be non-increasing in car weight from front to rear; the objective is to
//! sideline as few cars as possible.
//!
//! Module map
//! - `manifest`: `Manifest<T>`, the validated, immutable incoming car stream,
//!   plus `Complexity`, the size of the unpruned ternary decision tree.
//! - `assembly`: `Assembly<T>`, a candidate outgoing train (the solution type).
//! - `index`: `CarIndex`, a typed index into a manifest.
//! - `loading`: `ManifestLoader`, turning framed whitespace-delimited text
//!   (leading car count, then the weights) into a validated manifest.

pub mod assembly;
pub mod index;
pub mod loading;
pub mod manifest;
