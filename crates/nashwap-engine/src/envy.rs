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

//! Envy graph construction.
//!
//! The envy graph is a directed graph over agents derived from the current
//! allocation: an edge `a → b` exists iff agent `a` likes some item that `b`
//! currently owns. The raw relation is a multigraph (several liked items can
//! map to the same owner); adjacency lists are sorted ascending and
//! deduplicated, which both collapses it to a simple graph and fixes the
//! BFS tie-breaking order downstream.
//!
//! The graph carries no state of its own. It is rebuilt from scratch every
//! engine iteration in O(n·m).

use nashwap_model::{allocation::Allocation, index::AgentIndex, preferences::Preferences};

/// Directed envy relation over agents, as sorted, duplicate-free adjacency
/// lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvyGraph {
    adjacency: Vec<Vec<AgentIndex>>,
}

impl EnvyGraph {
    /// Derives the envy graph from preferences and the current allocation.
    ///
    /// Self-loops are impossible by construction: an agent cannot envy
    /// itself for an item it already owns.
    ///
    /// # Panics
    ///
    /// Panics if the allocation and preferences disagree on dimensions.
    pub fn build(preferences: &Preferences, allocation: &Allocation) -> Self {
        assert_eq!(
            preferences.num_agents(),
            allocation.num_agents(),
            "called `EnvyGraph::build` with inconsistent agent counts: preferences have {}, allocation has {}",
            preferences.num_agents(),
            allocation.num_agents()
        );
        assert_eq!(
            preferences.num_items(),
            allocation.num_items(),
            "called `EnvyGraph::build` with inconsistent item counts: preferences have {}, allocation has {}",
            preferences.num_items(),
            allocation.num_items()
        );

        let num_agents = preferences.num_agents();
        let mut adjacency = vec![Vec::new(); num_agents];

        for (raw, envied) in adjacency.iter_mut().enumerate() {
            let agent = AgentIndex::new(raw);

            for item in preferences.liked_items(agent) {
                let owner = allocation.owner_of(item);
                if owner != agent {
                    envied.push(owner);
                }
            }

            envied.sort_unstable();
            envied.dedup();
        }

        Self { adjacency }
    }

    /// Builds a graph directly from adjacency lists.
    ///
    /// Intended for tests and benchmarks; production callers derive the
    /// graph via [`EnvyGraph::build`].
    ///
    /// # Panics
    ///
    /// Panics in debug builds if any list is unsorted, contains duplicates,
    /// or references an agent out of bounds.
    pub fn from_adjacency(adjacency: Vec<Vec<AgentIndex>>) -> Self {
        #[cfg(debug_assertions)]
        {
            let num_agents = adjacency.len();
            for (agent, envied) in adjacency.iter().enumerate() {
                debug_assert!(
                    envied.windows(2).all(|w| w[0] < w[1]),
                    "called `EnvyGraph::from_adjacency` with unsorted or duplicated neighbors for agent {}",
                    agent
                );
                debug_assert!(
                    envied.iter().all(|n| n.get() < num_agents),
                    "called `EnvyGraph::from_adjacency` with neighbor out of bounds for agent {}",
                    agent
                );
            }
        }

        Self { adjacency }
    }

    /// Returns the number of agents (nodes).
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the agents envied by `agent`, sorted ascending.
    #[inline]
    pub fn neighbors(&self, agent: AgentIndex) -> &[AgentIndex] {
        debug_assert!(
            agent.get() < self.num_agents(),
            "called `EnvyGraph::neighbors` with agent index out of bounds: the len is {} but the index is {}",
            self.num_agents(),
            agent.get()
        );

        &self.adjacency[agent.get()]
    }

    /// Returns the total number of directed edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns whether the graph has no edges at all.
    ///
    /// An edgeless envy graph means no agent wants anything another agent
    /// holds; the allocation is already a fixed point.
    #[inline]
    pub fn is_edgeless(&self) -> bool {
        self.adjacency.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nashwap_model::index::ItemIndex;

    fn ai(i: usize) -> AgentIndex {
        AgentIndex::new(i)
    }

    #[test]
    fn test_build_collapses_duplicates_and_sorts() {
        // Agent 0 likes items 1, 2, 3; agent 2 owns items 1 and 3, agent 1
        // owns item 2. The raw envy relation of agent 0 is [2, 1, 2].
        let preferences = Preferences::from_rows(&[
            &[false, true, true, true],
            &[false, false, false, false],
            &[false, false, false, false],
        ]);
        let allocation = Allocation::new(vec![ai(0), ai(2), ai(1), ai(2)], 3);

        let graph = EnvyGraph::build(&preferences, &allocation);

        assert_eq!(graph.neighbors(ai(0)), &[ai(1), ai(2)]);
        assert_eq!(graph.neighbors(ai(1)), &[]);
        assert_eq!(graph.neighbors(ai(2)), &[]);
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_no_self_loops() {
        // Agent 0 likes everything but owns everything.
        let preferences = Preferences::from_rows(&[&[true, true], &[false, false]]);
        let allocation = Allocation::new(vec![ai(0), ai(0)], 2);

        let graph = EnvyGraph::build(&preferences, &allocation);
        assert!(graph.is_edgeless());
    }

    #[test]
    fn test_contented_agents_have_no_out_edges() {
        let preferences = Preferences::from_rows(&[
            &[true, false, false],
            &[false, true, false],
            &[true, true, true],
        ]);
        let allocation = Allocation::new(vec![ai(0), ai(1), ai(2)], 3);

        let graph = EnvyGraph::build(&preferences, &allocation);
        // Agent 2 likes items 0 and 1 held by others, so it envies them;
        // agents 0 and 1 are content.
        assert_eq!(graph.neighbors(ai(0)), &[]);
        assert_eq!(graph.neighbors(ai(1)), &[]);
        assert_eq!(graph.neighbors(ai(2)), &[ai(0), ai(1)]);
    }

    #[test]
    fn test_liked_item_of_own_basket_is_ignored() {
        let preferences = Preferences::from_rows(&[&[true, true], &[true, true]]);
        let allocation = Allocation::new(vec![ai(0), ai(1)], 2);

        let graph = EnvyGraph::build(&preferences, &allocation);
        assert_eq!(graph.neighbors(ai(0)), &[ai(1)]);
        assert_eq!(graph.neighbors(ai(1)), &[ai(0)]);
    }

    #[test]
    #[should_panic(expected = "called `EnvyGraph::build` with inconsistent item counts")]
    fn test_build_panics_on_dimension_mismatch() {
        let preferences = Preferences::from_rows(&[&[true, true], &[true, true]]);
        let allocation = Allocation::new(vec![ai(0)], 2);
        let _ = EnvyGraph::build(&preferences, &allocation);
    }
}
