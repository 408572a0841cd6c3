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

//! All-pairs shortest paths over the envy graph.
//!
//! The envy graph is unweighted, so all-pairs shortest paths reduce to one
//! breadth-first search per source agent (n invocations of O(n + E)). Each
//! table entry stores the path as the node sequence *after* the source,
//! ending at the target; the source itself is re-prepended when the entry is
//! turned into an [`crate::path::AugmentingPath`]. An empty entry means the
//! target is unreachable (or is the source itself).
//!
//! Tie-breaking is fixed by construction: adjacency lists are sorted
//! ascending and the FIFO queue expands lowest agent indices first within a
//! level, so the first-discovered shortest path wins deterministically.
//!
//! The solver keeps its queue and visited bitset alive across sources and
//! runs to avoid churning allocations in the engine loop.

use crate::envy::EnvyGraph;
use fixedbitset::FixedBitSet;
use nashwap_model::index::AgentIndex;
use std::collections::VecDeque;

/// Shortest-path table for every ordered agent pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTable {
    /// Row-major n×n entries; `entries[source * n + target]` is the path
    /// tail (source excluded, target included), empty if unreachable.
    pub(crate) entries: Vec<Vec<AgentIndex>>,
    pub(crate) num_agents: usize,
}

impl ShortestPathTable {
    #[inline(always)]
    fn flatten(&self, source: AgentIndex, target: AgentIndex) -> usize {
        source.get() * self.num_agents + target.get()
    }

    /// Returns the number of agents covered by the table.
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Returns the shortest path tail from `source` to `target`, or `None`
    /// if the target is unreachable or equal to the source.
    ///
    /// The tail lists the agents after the source in traversal order and
    /// ends at the target, so its length equals the graph distance.
    #[inline]
    pub fn path(&self, source: AgentIndex, target: AgentIndex) -> Option<&[AgentIndex]> {
        debug_assert!(
            source.get() < self.num_agents && target.get() < self.num_agents,
            "called `ShortestPathTable::path` with index out of bounds: the len is {} but the indices are {} and {}",
            self.num_agents,
            source.get(),
            target.get()
        );

        if source == target {
            return None;
        }

        let entry = &self.entries[self.flatten(source, target)];
        if entry.is_empty() {
            None
        } else {
            Some(entry)
        }
    }
}

/// BFS-based APSP solver with reusable scratch buffers.
#[derive(Debug, Clone, Default)]
pub struct ApspSolver {
    queue: VecDeque<usize>,
    visited: FixedBitSet,
}

impl ApspSolver {
    /// Creates a new solver with empty scratch buffers.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes shortest paths from every agent to every other agent.
    pub fn solve(&mut self, graph: &EnvyGraph) -> ShortestPathTable {
        let num_agents = graph.num_agents();
        let mut entries = vec![Vec::new(); num_agents * num_agents];

        for source in 0..num_agents {
            let row = &mut entries[source * num_agents..(source + 1) * num_agents];
            self.bfs(graph, source, row);
        }

        ShortestPathTable {
            entries,
            num_agents,
        }
    }

    /// Single-source BFS writing path tails into `row`.
    ///
    /// `row[target]` becomes the node sequence after `source` ending at
    /// `target`; `row[source]` stays empty, which doubles as the "no path to
    /// itself" convention.
    fn bfs(&mut self, graph: &EnvyGraph, source: usize, row: &mut [Vec<AgentIndex>]) {
        self.queue.clear();
        self.visited.clear();
        self.visited.grow(graph.num_agents());

        self.visited.insert(source);
        self.queue.push_back(source);

        while let Some(node) = self.queue.pop_front() {
            for &next in graph.neighbors(AgentIndex::new(node)) {
                let next_raw = next.get();
                if self.visited.contains(next_raw) {
                    continue;
                }
                self.visited.insert(next_raw);

                // Tail to the neighbor = tail to the current node plus the
                // neighbor itself. For direct neighbors of the source the
                // current tail is empty, so the entry starts right after it.
                let mut tail = row[node].clone();
                tail.push(next);
                row[next_raw] = tail;

                self.queue.push_back(next_raw);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai(i: usize) -> AgentIndex {
        AgentIndex::new(i)
    }

    fn chain_graph() -> EnvyGraph {
        // 0 → 1 → 2
        EnvyGraph::from_adjacency(vec![vec![ai(1)], vec![ai(2)], vec![]])
    }

    #[test]
    fn test_paths_on_a_chain() {
        let mut solver = ApspSolver::new();
        let table = solver.solve(&chain_graph());

        assert_eq!(table.num_agents(), 3);
        assert_eq!(table.path(ai(0), ai(1)), Some(&[ai(1)][..]));
        assert_eq!(table.path(ai(0), ai(2)), Some(&[ai(1), ai(2)][..]));
        assert_eq!(table.path(ai(1), ai(2)), Some(&[ai(2)][..]));
    }

    #[test]
    fn test_sink_has_no_outgoing_paths() {
        let mut solver = ApspSolver::new();
        let table = solver.solve(&chain_graph());

        assert_eq!(table.path(ai(2), ai(0)), None);
        assert_eq!(table.path(ai(2), ai(1)), None);
        assert_eq!(table.path(ai(1), ai(0)), None);
    }

    #[test]
    fn test_no_path_to_self() {
        let mut solver = ApspSolver::new();
        // A 2-cycle still yields no self-path even though 0 is reachable
        // from itself through 1.
        let table = solver.solve(&EnvyGraph::from_adjacency(vec![vec![ai(1)], vec![ai(0)]]));

        assert_eq!(table.path(ai(0), ai(0)), None);
        assert_eq!(table.path(ai(0), ai(1)), Some(&[ai(1)][..]));
        assert_eq!(table.path(ai(1), ai(0)), Some(&[ai(0)][..]));
    }

    #[test]
    fn test_tie_break_prefers_lowest_index_first_discovered() {
        // Two shortest routes from 0 to 3: via 1 and via 2. The BFS expands
        // sorted adjacency in FIFO order, so the route through 1 is
        // discovered first and must be kept.
        let graph = EnvyGraph::from_adjacency(vec![
            vec![ai(1), ai(2)],
            vec![ai(3)],
            vec![ai(3)],
            vec![],
        ]);

        let mut solver = ApspSolver::new();
        let table = solver.solve(&graph);

        assert_eq!(table.path(ai(0), ai(3)), Some(&[ai(1), ai(3)][..]));
    }

    #[test]
    fn test_path_length_matches_distance() {
        // 0 → 1 → 2 → 3 plus a shortcut 0 → 2.
        let graph = EnvyGraph::from_adjacency(vec![
            vec![ai(1), ai(2)],
            vec![ai(2)],
            vec![ai(3)],
            vec![],
        ]);

        let mut solver = ApspSolver::new();
        let table = solver.solve(&graph);

        assert_eq!(table.path(ai(0), ai(2)), Some(&[ai(2)][..]));
        assert_eq!(table.path(ai(0), ai(3)), Some(&[ai(2), ai(3)][..]));
    }

    #[test]
    fn test_solver_reuse_across_graphs() {
        let mut solver = ApspSolver::new();
        let first = solver.solve(&chain_graph());
        assert_eq!(first.path(ai(0), ai(2)), Some(&[ai(1), ai(2)][..]));

        // A smaller, disconnected graph afterwards must not see stale state.
        let second = solver.solve(&EnvyGraph::from_adjacency(vec![vec![], vec![]]));
        assert_eq!(second.path(ai(0), ai(1)), None);
        assert_eq!(second.path(ai(1), ai(0)), None);
    }
}
