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

//! Engine configuration.
//!
//! All run parameters travel through an explicit, immutable configuration
//! value; the engine keeps no ambient state. The only tunable today is the
//! iteration cap, which defaults to the proven worst-case bound of the
//! augmenting-path heuristic.

/// Returns the proven iteration bound `round(2 · n · (m+1) · ln(n·m))` for
/// an instance with `num_agents` agents and `num_items` items.
///
/// The bound is floored at one iteration: `ln(1) = 0` would otherwise give
/// a 1×1 instance a cap of zero, and an already-optimal allocation would be
/// reported as budget-exhausted instead of converged.
///
/// # Examples
///
/// ```rust
/// use nashwap_engine::config::iteration_budget;
///
/// // 2 · 7 · 17 · ln(112) ≈ 1122.6
/// assert_eq!(iteration_budget(7, 16), 1123);
/// assert_eq!(iteration_budget(1, 1), 1);
/// ```
pub fn iteration_budget(num_agents: usize, num_items: usize) -> u64 {
    let n = num_agents as f64;
    let m = num_items as f64;
    let bound = 2.0 * n * (m + 1.0) * (n * m).ln();
    (bound.max(0.0).round() as u64).max(1)
}

/// Immutable configuration for a single engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Overrides the iteration cap; `None` uses [`iteration_budget`].
    pub iteration_cap: Option<u64>,
}

impl EngineConfig {
    /// Creates a configuration with the default (proven) iteration cap.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit iteration cap.
    #[inline]
    pub fn with_iteration_cap(mut self, cap: u64) -> Self {
        self.iteration_cap = Some(cap);
        self
    }

    /// Resolves the effective cap for an n×m instance.
    #[inline]
    pub fn resolve_cap(&self, num_agents: usize, num_items: usize) -> u64 {
        self.iteration_cap
            .unwrap_or_else(|| iteration_budget(num_agents, num_items))
    }
}
