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

//! Statistics reporting for engine runs.
//!
//! A lightweight container for aggregate run metrics: iteration count,
//! executed swaps, and total elapsed time. Updates use saturating
//! arithmetic so the hot loop can account events without overflow traps;
//! the result feeds monitors and the final engine outcome.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EngineStatistics {
    /// Number of loop iterations performed (including the converging one).
    pub iterations: u64,

    /// Number of swaps executed, i.e. iterations that improved the
    /// allocation.
    pub swaps_executed: u64,

    /// Total time taken by the run.
    pub time_total: Duration,
}

impl Default for EngineStatistics {
    fn default() -> Self {
        Self {
            iterations: 0,
            swaps_executed: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl EngineStatistics {
    /// Called at each iteration of the loop.
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// Called when a swap is executed.
    #[inline]
    pub fn on_swap(&mut self) {
        self.swaps_executed = self.swaps_executed.saturating_add(1);
    }

    /// Sets the total time taken by the run.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Iterations that found no improving path.
    #[inline]
    pub fn unimproved_iterations(&self) -> u64 {
        self.iterations.saturating_sub(self.swaps_executed)
    }
}

impl std::fmt::Display for EngineStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Nashwap Engine Statistics:")?;
        writeln!(f, "   Iterations:      {}", self.iterations)?;
        writeln!(f, "   Swaps Executed:  {}", self.swaps_executed)?;
        writeln!(f, "   Total Time:      {:?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = EngineStatistics::default();
        stats.on_iteration();
        stats.on_iteration();
        stats.on_swap();

        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.swaps_executed, 1);
        assert_eq!(stats.unimproved_iterations(), 1);
    }

    #[test]
    fn test_display_contains_counters() {
        let mut stats = EngineStatistics::default();
        stats.on_iteration();
        let rendered = format!("{}", stats);
        assert!(rendered.contains("Iterations:      1"));
    }
}
