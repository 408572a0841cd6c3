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

//! Augmenting-path driver for Nash welfare maximization.
//!
//! The engine orchestrates one iteration pipeline until fixed point: build
//! the envy graph from the current allocation, compute all-pairs shortest
//! paths over it, select the strictly-best improving path, and execute it as
//! a chain of single-item transfers. Convergence is reached when no path
//! improves the welfare; a proven iteration bound caps runaway instances.
//! Monitors observe every stage, and the final outcome bundles the reached
//! allocation with the full swap history, welfare, statistics, and a clear
//! termination reason.

use crate::{
    config::EngineConfig,
    envy::EnvyGraph,
    error::EngineError,
    executor::execute_swap,
    monitor::engine_monitor::EngineMonitor,
    result::EngineOutcome,
    selector::select_best_path,
    stats::EngineStatistics,
    swap::SwapRecord,
};
use nashwap_core::{math::welfare::chunked_nash_welfare, num::WelfareNumeric};
use nashwap_model::{allocation::Allocation, preferences::Preferences};
use std::time::Instant;

use crate::apsp::ApspSolver;

/// Augmenting-path engine for binary fair division.
///
/// The `NashSwapEngine` coordinates the control flow of a run. It keeps the
/// reusable APSP scratch buffers alive across iterations and runs to avoid
/// allocation churn.
#[derive(Debug, Clone, Default)]
pub struct NashSwapEngine<W>
where
    W: WelfareNumeric,
{
    /// Persistent BFS buffers, reused across iterations and `run` calls.
    apsp: ApspSolver,
    _welfare: std::marker::PhantomData<W>,
}

impl<W> NashSwapEngine<W>
where
    W: WelfareNumeric,
{
    /// Creates a new engine.
    #[inline]
    pub fn new() -> Self {
        Self {
            apsp: ApspSolver::new(),
            _welfare: std::marker::PhantomData,
        }
    }

    /// Runs the heuristic to a fixed point or until the iteration cap.
    ///
    /// Each iteration either executes exactly one welfare-improving swap
    /// chain or detects convergence and stops. The welfare is therefore
    /// strictly increasing over the swap history.
    ///
    /// Takes the initial allocation by value; the returned outcome owns the
    /// final one. A run that hits the iteration cap still returns a valid
    /// (merely possibly suboptimal) allocation, flagged as budget-exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingTransferItem`] if a selected path
    /// contains a hop without a transferable item. This indicates an
    /// internal inconsistency, not a property of the instance.
    ///
    /// # Panics
    ///
    /// Panics if `preferences` and `allocation` disagree on dimensions.
    pub fn run<M>(
        &mut self,
        preferences: &Preferences,
        mut allocation: Allocation,
        config: &EngineConfig,
        monitor: &mut M,
    ) -> Result<EngineOutcome<W>, EngineError>
    where
        M: EngineMonitor<W>,
    {
        assert_eq!(
            preferences.num_agents(),
            allocation.num_agents(),
            "called `NashSwapEngine::run` with inconsistent agent counts: preferences have {}, allocation has {}",
            preferences.num_agents(),
            allocation.num_agents()
        );
        assert_eq!(
            preferences.num_items(),
            allocation.num_items(),
            "called `NashSwapEngine::run` with inconsistent item counts: preferences have {}, allocation has {}",
            preferences.num_items(),
            allocation.num_items()
        );

        let start_time = Instant::now();
        let mut statistics = EngineStatistics::default();
        let mut history: Vec<SwapRecord> = Vec::new();

        let cap = config.resolve_cap(preferences.num_agents(), preferences.num_items());

        monitor.on_start(&allocation);

        let mut converged = false;
        for _ in 0..cap {
            statistics.on_iteration();

            let graph = EnvyGraph::build(preferences, &allocation);
            let table = self.apsp.solve(&graph);

            let Some(selected) = select_best_path::<W>(&table, &allocation) else {
                converged = true;
                break;
            };

            let record = execute_swap(selected.path(), &mut allocation, preferences)?;
            statistics.on_swap();
            monitor.on_swap(&record, selected.welfare(), &statistics);
            history.push(record);

            monitor.on_iteration(&allocation, &statistics);
        }

        statistics.set_total_time(start_time.elapsed());

        let welfare: W = chunked_nash_welfare(&allocation.utility_counts());
        monitor.on_end(&allocation, &statistics);

        let outcome = if converged {
            EngineOutcome::converged(allocation, history, welfare, statistics)
        } else {
            EngineOutcome::budget_exhausted(allocation, history, welfare, statistics)
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{monitor::no_op::NoOpMonitor, result::TerminationReason};
    use nashwap_model::index::{AgentIndex, ItemIndex};
    use nashwap_model::preferences::PreferencesBuilder;

    fn ai(i: usize) -> AgentIndex {
        AgentIndex::new(i)
    }

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn run_f64(
        preferences: &Preferences,
        allocation: Allocation,
        config: &EngineConfig,
    ) -> EngineOutcome<f64> {
        let mut engine = NashSwapEngine::new();
        let mut monitor = NoOpMonitor::new();
        engine
            .run(preferences, allocation, config, &mut monitor)
            .expect("every envy edge is backed by an item")
    }

    /// Each item lands with an agent that likes it. Every transfer would
    /// zero out a donor, so no path improves and the engine converges on
    /// the first iteration.
    #[test]
    fn test_converges_immediately_on_balanced_instance() {
        let preferences = PreferencesBuilder::new(3, 3)
            .like(ai(0), ii(0))
            .like(ai(1), ii(1))
            .like_all(ai(2))
            .build();
        let allocation = Allocation::new(vec![ai(0), ai(1), ai(2)], 3);

        let outcome = run_f64(&preferences, allocation.clone(), &EngineConfig::new());

        assert!(outcome.is_converged());
        assert_eq!(outcome.statistics().iterations, 1);
        assert_eq!(outcome.statistics().swaps_executed, 0);
        assert!(outcome.history().is_empty());
        assert_eq!(outcome.allocation(), &allocation);
        assert!((outcome.welfare() - 1.0).abs() < 1e-12);
    }

    /// Counts [0, 2] have welfare zero; a single transfer reaches the
    /// optimum [1, 1].
    #[test]
    fn test_single_swap_reaches_optimum() {
        let preferences = PreferencesBuilder::new(2, 2)
            .like_all(ai(0))
            .like_all(ai(1))
            .build();
        let allocation = Allocation::new(vec![ai(1), ai(1)], 2);

        let outcome = run_f64(&preferences, allocation, &EngineConfig::new());

        assert_eq!(outcome.termination_reason(), TerminationReason::Converged);
        assert_eq!(outcome.statistics().swaps_executed, 1);
        assert_eq!(outcome.statistics().iterations, 2);
        assert_eq!(outcome.history().len(), 1);

        // The first item agent 1 owns that agent 0 likes is item 0.
        let record = &outcome.history()[0];
        assert_eq!(record.transfers()[0].item, ii(0));
        assert_eq!(outcome.allocation().owner_of(ii(0)), ai(0));
        assert_eq!(outcome.allocation().owner_of(ii(1)), ai(1));
        assert!((outcome.welfare() - 1.0).abs() < 1e-12);
    }

    /// A 1×1 instance has nothing to improve; the default budget must
    /// still grant the single iteration that detects convergence.
    #[test]
    fn test_degenerate_instance_reports_convergence() {
        let preferences = PreferencesBuilder::new(1, 1).like_all(ai(0)).build();
        let allocation = Allocation::new(vec![ai(0)], 1);

        let outcome = run_f64(&preferences, allocation, &EngineConfig::new());

        assert_eq!(outcome.termination_reason(), TerminationReason::Converged);
        assert_eq!(outcome.statistics().iterations, 1);
        assert_eq!(outcome.statistics().swaps_executed, 0);
    }

    /// Re-running on a converged allocation changes nothing.
    #[test]
    fn test_fixed_point_is_idempotent() {
        let preferences = PreferencesBuilder::new(2, 2)
            .like_all(ai(0))
            .like_all(ai(1))
            .build();
        let allocation = Allocation::new(vec![ai(1), ai(1)], 2);

        let first = run_f64(&preferences, allocation, &EngineConfig::new());
        let second = run_f64(&preferences, first.allocation().clone(), &EngineConfig::new());

        assert!(second.is_converged());
        assert_eq!(second.statistics().swaps_executed, 0);
        assert_eq!(second.allocation(), first.allocation());
    }

    /// A cap of one iteration stops the run after the first swap even
    /// though more improvement exists.
    #[test]
    fn test_iteration_cap_is_respected() {
        // Counts [0, 0, 4]: the optimum needs several transfers.
        let preferences = PreferencesBuilder::new(3, 4)
            .like_all(ai(0))
            .like_all(ai(1))
            .like_all(ai(2))
            .build();
        let allocation = Allocation::new(vec![ai(2), ai(2), ai(2), ai(2)], 3);

        let config = EngineConfig::new().with_iteration_cap(1);
        let outcome = run_f64(&preferences, allocation, &config);

        assert_eq!(
            outcome.termination_reason(),
            TerminationReason::BudgetExhausted
        );
        assert_eq!(outcome.statistics().iterations, 1);
        assert_eq!(outcome.statistics().swaps_executed, 1);
    }

    /// Seeded random instances: the outcome must keep every item owned by
    /// exactly one agent and must never lose welfare.
    #[test]
    fn test_random_instances_preserve_partition_and_welfare() {
        use nashwap_instance::generator::{self, InstanceConfig};
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        for seed in 0..8u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let instance_config = InstanceConfig::default();
            let preferences = generator::generate_preferences(&instance_config, &mut rng);
            let allocation = generator::random_allocation(&preferences, &mut rng);

            let initial_welfare: f64 = chunked_nash_welfare(&allocation.utility_counts());
            let cap = EngineConfig::new()
                .resolve_cap(preferences.num_agents(), preferences.num_items());

            let outcome = run_f64(&preferences, allocation, &EngineConfig::new());

            assert!(outcome.statistics().iterations <= cap);
            assert!(outcome.welfare() >= initial_welfare);
            assert_eq!(
                outcome.history().len() as u64,
                outcome.statistics().swaps_executed
            );

            // Partition invariant: every item owned by exactly one agent.
            let mut items: Vec<ItemIndex> = outcome
                .allocation()
                .possessions()
                .into_iter()
                .flatten()
                .collect();
            items.sort_unstable();
            let expected: Vec<ItemIndex> =
                (0..preferences.num_items()).map(ItemIndex::new).collect();
            assert_eq!(items, expected);
        }
    }

    /// The skewed generator piles items on few agents; the engine must
    /// still strictly improve and stay within the cap.
    #[test]
    fn test_skewed_start_improves_welfare() {
        use nashwap_instance::generator::{self, InstanceConfig};
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let instance_config = InstanceConfig::default();
        let preferences = generator::generate_preferences(&instance_config, &mut rng);
        let allocation = generator::skewed_allocation(&preferences, &mut rng);

        let initial_welfare: f64 = chunked_nash_welfare(&allocation.utility_counts());
        let outcome = run_f64(&preferences, allocation, &EngineConfig::new());

        assert!(outcome.welfare() >= initial_welfare);
        for pair in outcome.history().windows(1) {
            // Each recorded swap moves at least one item.
            assert!(!pair[0].transfers().is_empty());
        }
    }
}
