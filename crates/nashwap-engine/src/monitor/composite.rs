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

/// Fans every hook out to a list of monitors, in insertion order.
#[derive(Default)]
pub struct CompositeEngineMonitor<'a, W>
where
    W: WelfareNumeric,
{
    monitors: Vec<Box<dyn EngineMonitor<W> + 'a>>,
}

impl<'a, W> CompositeEngineMonitor<'a, W>
where
    W: WelfareNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: EngineMonitor<W> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline]
    pub fn add_boxed_monitor(&mut self, monitor: Box<dyn EngineMonitor<W> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn add_boxed_monitors<I>(&mut self, monitors: I)
    where
        I: IntoIterator<Item = Box<dyn EngineMonitor<W> + 'a>>,
    {
        self.monitors.extend(monitors);
    }

    #[inline]
    pub fn monitors(&self) -> &[Box<dyn EngineMonitor<W> + 'a>] {
        &self.monitors
    }
}

impl<'a, W> EngineMonitor<W> for CompositeEngineMonitor<'a, W>
where
    W: WelfareNumeric,
{
    fn name(&self) -> &str {
        "CompositeEngineMonitor"
    }

    fn on_start(&mut self, allocation: &Allocation) {
        for m in &mut self.monitors {
            m.on_start(allocation);
        }
    }

    fn on_swap(&mut self, swap: &SwapRecord, welfare: W, statistics: &EngineStatistics) {
        for m in &mut self.monitors {
            m.on_swap(swap, welfare, statistics);
        }
    }

    fn on_iteration(&mut self, allocation: &Allocation, statistics: &EngineStatistics) {
        for m in &mut self.monitors {
            m.on_iteration(allocation, statistics);
        }
    }

    fn on_end(&mut self, allocation: &Allocation, statistics: &EngineStatistics) {
        for m in &mut self.monitors {
            m.on_end(allocation, statistics);
        }
    }
}
