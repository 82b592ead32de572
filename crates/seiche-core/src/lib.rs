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

//! # Seiche Core
//!
//! Foundational utilities, numerics, and math primitives for the seiche
//! sequence-scanning kernels. This crate consolidates reusable building
//! blocks focused on performance, correctness, and ergonomic APIs that
//! underpin the scanning and propagation crates.
//!
//! ## Modules
//!
//! - `math`: Closed-open span `[start, end)` primitives with validation,
//!   monotone window mutators, measurements, iteration (`Iterator`,
//!   `ExactSizeIterator`, `FusedIterator`), and conversions to/from
//!   `std::ops::Range`.
//! - `num`: Integer-centric utilities including the associated constant
//!   trait `MinusOne` (sentinel encodings) and by-value saturating
//!   arithmetic for counters.
//! - `transform`: Trivial single-pass sequence transforms
//!   (`product_except_self`, `fizzbuzz`) that need none of the window
//!   machinery.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`).
//!
//! ## Purpose
//!
//! These primitives enable robust, generic code in the scanning pipelines,
//! reducing accidental bugs (e.g., index mixing, off-by-one window bounds)
//! while keeping runtime overhead minimal.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
pub mod transform;
pub mod utils;
