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

use crate::{stats::EngineStatistics, swap::SwapRecord};
use nashwap_core::num::WelfareNumeric;
use nashwap_model::allocation::Allocation;

/// Observer interface for the optimization loop.
pub trait EngineMonitor<W>
where
    W: WelfareNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the first iteration, with the initial allocation.
    fn on_start(&mut self, allocation: &Allocation);

    /// Called after a swap was executed. `welfare` is the welfare of the
    /// allocation after the swap.
    fn on_swap(&mut self, swap: &SwapRecord, welfare: W, statistics: &EngineStatistics);

    /// Called at the end of every iteration that did not converge.
    fn on_iteration(&mut self, allocation: &Allocation, statistics: &EngineStatistics);

    /// Called once after the loop terminated, with the final allocation.
    fn on_end(&mut self, allocation: &Allocation, statistics: &EngineStatistics);
}

impl<W> std::fmt::Debug for dyn EngineMonitor<W> + '_
where
    W: WelfareNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EngineMonitor({})", self.name())
    }
}

impl<W> std::fmt::Display for dyn EngineMonitor<W> + '_
where
    W: WelfareNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EngineMonitor({})", self.name())
    }
}
