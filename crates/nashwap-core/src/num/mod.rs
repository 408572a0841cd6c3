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

//! # Welfare Numeric Trait
//!
//! Unified numeric bounds for welfare evaluation and the allocation engine.
//! `WelfareNumeric` specifies the floating-point capabilities required by the
//! Nash social welfare computation: intrinsic traits (`Float`), conversions
//! from integer utility counts (`FromPrimitive`), and formatting bounds for
//! reporting.
//!
//! ## Motivation
//!
//! The engine should remain generic over the welfare type (e.g., `f64` for
//! production runs, `f32` where memory or FFI constraints demand it) while
//! retaining predictable arithmetic semantics. This trait collects the
//! necessary bounds into a single alias, simplifying generic signatures
//! across the selector, engine, and outcome types.

use num_traits::{Float, FromPrimitive};

/// A trait alias for floating-point types that can carry welfare values.
///
/// These are usually `f32` and `f64`. Every bound is satisfied by both
/// standard float types; the blanket impl below makes the alias automatic.
pub trait WelfareNumeric:
    Float + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
    /// Converts an integer utility count into the welfare domain.
    #[inline]
    fn from_count(count: u64) -> Self {
        // `from_u64` is total for float targets; the fallback is unreachable.
        Self::from_u64(count).unwrap_or_else(Self::max_value)
    }
}

impl<T> WelfareNumeric for T where
    T: Float + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
