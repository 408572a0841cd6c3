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

//! Augmenting paths with an explicit transfer direction.
//!
//! An augmenting path is a shortest envy-graph path whose chain of item
//! transfers strictly increases the Nash social welfare. The transfer
//! direction is a named property of the type, never inferred positionally:
//! the sequence is receiver-first, donor-last, and every consecutive pair
//! `(receiver, giver)` is one single-item hop. Only the two endpoints change
//! their utility count by ±1; intermediate agents pass an item on and
//! receive one of equal value, netting zero.

use nashwap_model::index::AgentIndex;
use smallvec::SmallVec;

/// An envy-graph path in transfer order: the overall receiver first, the
/// overall donor last.
///
/// Paths are short in practice (bounded by the envy-graph diameter), so the
/// agent sequence is stored inline up to eight entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AugmentingPath {
    agents: SmallVec<[AgentIndex; 8]>,
}

impl AugmentingPath {
    /// Builds a path from a BFS source and the table tail that starts right
    /// after it.
    ///
    /// # Panics
    ///
    /// Panics if `tail` is empty: a path needs at least one hop.
    pub fn new(source: AgentIndex, tail: &[AgentIndex]) -> Self {
        assert!(
            !tail.is_empty(),
            "called `AugmentingPath::new` with an empty tail for source {}",
            source.get()
        );

        let mut agents = SmallVec::with_capacity(1 + tail.len());
        agents.push(source);
        agents.extend_from_slice(tail);

        Self { agents }
    }

    /// The agent whose utility count increases by one: the path's first
    /// element.
    #[inline]
    pub fn receiver(&self) -> AgentIndex {
        self.agents[0]
    }

    /// The agent whose utility count decreases by one: the path's last
    /// element.
    #[inline]
    pub fn donor(&self) -> AgentIndex {
        self.agents[self.agents.len() - 1]
    }

    /// The full agent sequence, receiver-first.
    #[inline]
    pub fn agents(&self) -> &[AgentIndex] {
        &self.agents
    }

    /// Number of single-item transfers the path induces.
    #[inline]
    pub fn num_hops(&self) -> usize {
        self.agents.len() - 1
    }

    /// Iterates over the `(receiver, giver)` pairs of the path, one per hop.
    #[inline]
    pub fn hops(&self) -> impl Iterator<Item = (AgentIndex, AgentIndex)> + '_ {
        self.agents.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl std::fmt::Display for AugmentingPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Items flow right to left: the donor feeds the chain, the receiver
        // ends up one item richer.
        let rendered = self
            .agents
            .iter()
            .map(|agent| agent.get().to_string())
            .collect::<Vec<_>>()
            .join(" <- ");
        write!(f, "{}", rendered)
    }
}
