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

//! Augmenting path selection.
//!
//! The selector evaluates every shortest path in the APSP table against the
//! current allocation and returns the single best strictly-improving one, if
//! any. The hypothetical welfare of a path is cheap to compute: only the two
//! endpoints change their utility count by ±1, intermediate agents net zero,
//! so one chunked-welfare evaluation per path suffices.
//!
//! Determinism: sources and targets are scanned in ascending index order and
//! a candidate replaces the incumbent only when it is *strictly* better, so
//! the first path achieving the maximum wins.

use crate::{apsp::ShortestPathTable, path::AugmentingPath};
use nashwap_core::{math::welfare::chunked_nash_welfare, num::WelfareNumeric};
use nashwap_model::{allocation::Allocation, index::AgentIndex};

/// A strictly-improving path together with its hypothetical welfare.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPath<W> {
    path: AugmentingPath,
    welfare: W,
}

impl<W> SelectedPath<W>
where
    W: WelfareNumeric,
{
    /// The selected path.
    #[inline]
    pub fn path(&self) -> &AugmentingPath {
        &self.path
    }

    /// The welfare the allocation reaches once the path is executed.
    #[inline]
    pub fn welfare(&self) -> W {
        self.welfare
    }

    /// Consumes the selection and returns the path.
    #[inline]
    pub fn into_path(self) -> AugmentingPath {
        self.path
    }
}

/// Evaluates every table entry and returns the best strictly-improving path.
///
/// Returns `None` when no path beats the welfare of the current allocation;
/// the loop interprets that as convergence.
///
/// # Panics
///
/// Panics if the table and allocation disagree on the number of agents.
pub fn select_best_path<W>(
    table: &ShortestPathTable,
    allocation: &Allocation,
) -> Option<SelectedPath<W>>
where
    W: WelfareNumeric,
{
    assert_eq!(
        table.num_agents(),
        allocation.num_agents(),
        "called `select_best_path` with inconsistent agent counts: table has {}, allocation has {}",
        table.num_agents(),
        allocation.num_agents()
    );

    let mut counts = allocation.utility_counts();
    let baseline: W = chunked_nash_welfare(&counts);

    let num_agents = table.num_agents();
    let mut best: Option<SelectedPath<W>> = None;

    for source in 0..num_agents {
        for target in 0..num_agents {
            let source = AgentIndex::new(source);
            let target = AgentIndex::new(target);

            let Some(tail) = table.path(source, target) else {
                continue;
            };

            // Only the endpoints move: the source gains one item, the
            // target loses one. A real envy edge guarantees the target
            // holds at least one item.
            debug_assert!(
                counts[target.get()] > 0,
                "called `select_best_path` with a donor holding no items: agent {}",
                target.get()
            );

            counts[source.get()] += 1;
            counts[target.get()] -= 1;
            let hypothetical: W = chunked_nash_welfare(&counts);
            counts[source.get()] -= 1;
            counts[target.get()] += 1;

            let strictly_better = match &best {
                None => true,
                Some(incumbent) => hypothetical > incumbent.welfare,
            };
            if strictly_better {
                best = Some(SelectedPath {
                    path: AugmentingPath::new(source, tail),
                    welfare: hypothetical,
                });
            }
        }
    }

    best.filter(|selected| selected.welfare > baseline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai(i: usize) -> AgentIndex {
        AgentIndex::new(i)
    }

    /// Builds an allocation with the given per-agent item counts; item
    /// indices are handed out densely in agent order.
    fn allocation_with_counts(counts: &[usize]) -> Allocation {
        let mut owners = Vec::new();
        for (agent, &count) in counts.iter().enumerate() {
            owners.extend(std::iter::repeat_n(ai(agent), count));
        }
        Allocation::new(owners, counts.len())
    }

    fn table_from_entries(num_agents: usize, entries: Vec<Vec<AgentIndex>>) -> ShortestPathTable {
        ShortestPathTable {
            entries,
            num_agents,
        }
    }

    #[test]
    fn test_balanced_counts_reject_endpoint_shift() {
        // Counts [2, 2, 2]; the path 0 <- 2 would yield [3, 2, 1], whose
        // welfare (6^(1/3)) is below the baseline (8^(1/3)). Nothing is
        // selected.
        let allocation = allocation_with_counts(&[2, 2, 2]);
        let mut entries = vec![Vec::new(); 9];
        entries[0 * 3 + 2] = vec![ai(2)];
        let table = table_from_entries(3, entries);

        let selected = select_best_path::<f64>(&table, &allocation);
        assert!(selected.is_none());
    }

    #[test]
    fn test_unbalanced_counts_select_improving_path() {
        // Counts [0, 2]: welfare 0. Shifting one item along 0 <- 1 yields
        // [1, 1] with welfare 1.
        let allocation = allocation_with_counts(&[0, 2]);
        let mut entries = vec![Vec::new(); 4];
        entries[0 * 2 + 1] = vec![ai(1)];
        let table = table_from_entries(2, entries);

        let selected = select_best_path::<f64>(&table, &allocation).expect("path must improve");
        assert_eq!(selected.path().receiver(), ai(0));
        assert_eq!(selected.path().donor(), ai(1));
        assert!((selected.welfare() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_break_keeps_first_discovered() {
        // Counts [1, 3, 3]: both 0 <- 1 and 0 <- 2 reach the same welfare
        // (2·2·3 vs 2·3·2). The entry with the lower target index comes
        // first in scan order and must win.
        let allocation = allocation_with_counts(&[1, 3, 3]);
        let mut entries = vec![Vec::new(); 9];
        entries[0 * 3 + 1] = vec![ai(1)];
        entries[0 * 3 + 2] = vec![ai(2)];
        let table = table_from_entries(3, entries);

        let selected = select_best_path::<f64>(&table, &allocation).expect("paths improve");
        assert_eq!(selected.path().donor(), ai(1));
        assert!((selected.welfare() - 12.0f64.cbrt()).abs() < 1e-12);
    }

    #[test]
    fn test_tie_break_prefers_lower_source() {
        // Counts [1, 1, 3, 3]: 0 <- 2 yields [2, 1, 2, 3] and 1 <- 3 yields
        // [1, 2, 3, 2], both with product 12. Sources are scanned before
        // targets, so the path from agent 0 is discovered first and must
        // win over the equal-welfare path from agent 1.
        let allocation = allocation_with_counts(&[1, 1, 3, 3]);
        let mut entries = vec![Vec::new(); 16];
        entries[0 * 4 + 2] = vec![ai(2)];
        entries[1 * 4 + 3] = vec![ai(3)];
        let table = table_from_entries(4, entries);

        let selected = select_best_path::<f64>(&table, &allocation).expect("paths improve");
        assert_eq!(selected.path().receiver(), ai(0));
        assert_eq!(selected.path().donor(), ai(2));
        assert!((selected.welfare() - 12.0f64.powf(0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_multi_hop_path_only_moves_endpoints() {
        // Counts [1, 2, 3]: the two-hop path 0 <- 1 <- 2 yields [2, 2, 2],
        // leaving the intermediate agent untouched.
        let allocation = allocation_with_counts(&[1, 2, 3]);
        let mut entries = vec![Vec::new(); 9];
        entries[0 * 3 + 2] = vec![ai(1), ai(2)];
        let table = table_from_entries(3, entries);

        let selected = select_best_path::<f64>(&table, &allocation).expect("path improves");
        assert_eq!(selected.path().agents(), &[ai(0), ai(1), ai(2)]);
        assert!((selected.welfare() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_table_converges() {
        let allocation = allocation_with_counts(&[1, 1]);
        let table = table_from_entries(2, vec![Vec::new(); 4]);

        assert!(select_best_path::<f64>(&table, &allocation).is_none());
    }
}
