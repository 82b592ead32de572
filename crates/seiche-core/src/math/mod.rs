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

//! # Math Primitives
//!
//! Foundational mathematical structures for sequence-scanning logic. This
//! module currently focuses on closed-open span math, designed to integrate
//! cleanly with Rust's range and iterator ecosystem.
//!
//! ## Submodules
//!
//! - `span`: A generic `[start, end)` span type with validation, queries
//!   (length, emptiness, point containment), the monotone window mutators
//!   used by the scanning kernels, and iteration support (`Iterator`,
//!   `ExactSizeIterator`, `FusedIterator`). Includes conversions to/from
//!   `std::ops::Range`.
//!
//! ## Motivation
//!
//! Window-based scanning routinely manipulates contiguous index ranges whose
//! bounds only move forward. Closed-open spans are robust against off-by-one
//! errors and compose well with standard ranges and iterators.
//!
//! Refer to the `span` module for detailed APIs and examples.

pub mod span;
