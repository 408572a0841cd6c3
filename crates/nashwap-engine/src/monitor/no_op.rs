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

use crate::{
    monitor::engine_monitor::EngineMonitor, stats::EngineStatistics, swap::SwapRecord,
};
use nashwap_core::num::WelfareNumeric;
use nashwap_model::allocation::Allocation;

/// A monitor that observes nothing. Default choice for benchmarks and
/// embedding the engine where no progress reporting is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor<W> {
    _phantom: std::marker::PhantomData<W>,
}

impl<W> NoOpMonitor<W> {
    /// Creates a new no-op monitor.
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<W> EngineMonitor<W> for NoOpMonitor<W>
where
    W: WelfareNumeric,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_start(&mut self, _allocation: &Allocation) {}

    fn on_swap(&mut self, _swap: &SwapRecord, _welfare: W, _statistics: &EngineStatistics) {}

    fn on_iteration(&mut self, _allocation: &Allocation, _statistics: &EngineStatistics) {}

    fn on_end(&mut self, _allocation: &Allocation, _statistics: &EngineStatistics) {}
}
