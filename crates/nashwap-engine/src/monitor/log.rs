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
use std::time::{Duration, Instant};

/// Prints a progress table to stdout.
///
/// Every executed swap is logged immediately; quiet iterations are logged
/// at most once per `log_interval` to keep large runs readable.
#[derive(Debug, Clone)]
pub struct LogMonitor<W>
where
    W: WelfareNumeric,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    best_welfare: Option<W>,
}

impl<W> LogMonitor<W>
where
    W: WelfareNumeric,
{
    pub fn new(log_interval: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            best_welfare: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<12} | {:<7} | {:<14} | {:<24}",
            "Elapsed", "Iterations", "Swaps", "Welfare", "Last Swap"
        );
        println!("{}", "-".repeat(76));
    }

    #[inline(always)]
    fn log_line(&mut self, stats: &EngineStatistics, last_swap: Option<&SwapRecord>) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let welfare_str = if let Some(w) = &self.best_welfare {
            format!("{:.6}", w)
        } else {
            "-".to_string()
        };

        let swap_str = if let Some(record) = last_swap {
            format!("{}", record.path())
        } else {
            "-".to_string()
        };

        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<12} | {:<7} | {:<14} | {:<24}",
            elapsed_field, stats.iterations, stats.swaps_executed, welfare_str, swap_str
        );

        self.last_log_time = now;
    }
}

impl<W> Default for LogMonitor<W>
where
    W: WelfareNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl<W> std::fmt::Display for LogMonitor<W>
where
    W: WelfareNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s)",
            self.log_interval.as_secs()
        )
    }
}

impl<W> EngineMonitor<W> for LogMonitor<W>
where
    W: WelfareNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, allocation: &Allocation) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_welfare = None; // Reset
        println!(
            "Optimizing allocation of {} agents.",
            allocation.num_agents()
        );
        self.print_header();
    }

    fn on_swap(&mut self, swap: &SwapRecord, welfare: W, statistics: &EngineStatistics) {
        self.best_welfare = Some(welfare);
        self.log_line(statistics, Some(swap));
    }

    fn on_iteration(&mut self, _allocation: &Allocation, statistics: &EngineStatistics) {
        if self.last_log_time.elapsed() >= self.log_interval {
            self.log_line(statistics, None);
        }
    }

    fn on_end(&mut self, _allocation: &Allocation, statistics: &EngineStatistics) {
        println!("{}", "-".repeat(76));
        println!("Engine finished. {}", statistics);
    }
}
