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

//! # Nash Social Welfare Evaluation
//!
//! The Nash social welfare (NSW) of an allocation is the geometric mean of
//! the agents' utilities: `(∏ u_i)^(1/n)`. Under binary valuations the
//! utilities are plain item counts, so the raw product can overflow the
//! dynamic range of a float long before the rooted result would.
//!
//! ## Numerical design
//!
//! [`chunked_nash_welfare`] multiplies the counts in fixed-size chunks of
//! [`CHUNK_LEN`] values, roots each chunk product by `1/n`, and multiplies
//! the partial roots together. Since
//! `(∏ u_i)^(1/n) = ∏_j (chunk_product_j)^(1/n)`, the result equals the
//! unchunked geometric mean while every intermediate stays bounded by
//! `max(u)^CHUNK_LEN`.
//!
//! [`direct_nash_welfare`] is the unchunked reference formula. It is suitable
//! for small instances and is used by tests to cross-check the chunked
//! variant.
//!
//! A zero utility for any agent drives the welfare to exactly zero. This is
//! a valid (if extreme) state, not an error: `0^(1/n)` is `0` for every
//! positive root, and no agent is ever excluded from the product.

use crate::num::WelfareNumeric;

/// Number of utility counts multiplied together before a partial root is taken.
pub const CHUNK_LEN: usize = 20;

/// Computes the Nash social welfare of `counts` with bounded intermediates.
///
/// Returns the geometric mean `(∏ counts)^(1/counts.len())`, computed chunk
/// by chunk so that large instances neither overflow nor underflow. An empty
/// slice yields `1` (the empty product).
///
/// # Examples
///
/// ```rust
/// use nashwap_core::math::welfare::chunked_nash_welfare;
///
/// let welfare: f64 = chunked_nash_welfare(&[2, 2, 2]);
/// assert!((welfare - 2.0).abs() < 1e-12);
///
/// // A single empty-handed agent zeroes the whole welfare.
/// let zeroed: f64 = chunked_nash_welfare(&[3, 0, 5]);
/// assert_eq!(zeroed, 0.0);
/// ```
pub fn chunked_nash_welfare<W>(counts: &[u64]) -> W
where
    W: WelfareNumeric,
{
    if counts.is_empty() {
        return W::one();
    }

    let root = W::from_count(counts.len() as u64).recip();
    let mut partial = W::one();
    let mut rooted = W::one();

    for (position, &count) in counts.iter().enumerate() {
        partial = partial * W::from_count(count);

        if (position + 1) % CHUNK_LEN == 0 {
            rooted = rooted * partial.powf(root);
            partial = W::one();
        }
    }

    // The trailing chunk may be shorter than CHUNK_LEN; rooting a leftover
    // partial of one is a no-op.
    rooted * partial.powf(root)
}

/// Computes the Nash social welfare of `counts` with a single product.
///
/// Reference formula `(∏ counts)^(1/counts.len())` without chunking. Only
/// safe for small instances where the raw product stays representable; use
/// [`chunked_nash_welfare`] everywhere else.
pub fn direct_nash_welfare<W>(counts: &[u64]) -> W
where
    W: WelfareNumeric,
{
    if counts.is_empty() {
        return W::one();
    }

    let root = W::from_count(counts.len() as u64).recip();
    let product = counts
        .iter()
        .fold(W::one(), |acc, &count| acc * W::from_count(count));

    product.powf(root)
}
