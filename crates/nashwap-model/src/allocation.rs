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

//! Item-to-owner allocation.
//!
//! An [`Allocation`] maps every item to exactly one owning agent. The layout
//! is a single owner vector indexed by item, which makes the allocation
//! total and exclusive by construction: an item can never be unowned or
//! owned twice, so the partition invariant over agent possessions holds at
//! all times.
//!
//! Agent-side views (possession lists, utility counts) are derived on
//! demand; only the reallocation executor mutates the owner vector.

use crate::index::{AgentIndex, ItemIndex};

/// A total, exclusive assignment of items to agents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// `owners[item]` is the agent currently holding the item.
    owners: Vec<AgentIndex>,
    num_agents: usize,
}

impl Allocation {
    /// Constructs a new `Allocation` from an owner-per-item vector.
    ///
    /// # Panics
    ///
    /// Panics if `num_agents` is zero or any owner index is out of bounds.
    pub fn new(owners: Vec<AgentIndex>, num_agents: usize) -> Self {
        assert!(
            num_agents > 0,
            "called `Allocation::new` with zero agents"
        );
        for (item, owner) in owners.iter().enumerate() {
            assert!(
                owner.get() < num_agents,
                "called `Allocation::new` with owner index out of bounds: item {} is owned by agent {} but there are only {} agents",
                item,
                owner.get(),
                num_agents
            );
        }

        Self { owners, num_agents }
    }

    /// Returns the number of items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.owners.len()
    }

    /// Returns the number of agents.
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Returns the agent currently owning `item`.
    #[inline]
    pub fn owner_of(&self, item: ItemIndex) -> AgentIndex {
        debug_assert!(
            item.get() < self.num_items(),
            "called `Allocation::owner_of` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item.get()
        );

        self.owners[item.get()]
    }

    /// Reassigns `item` to `agent`.
    ///
    /// The previous owner implicitly loses the item; the allocation stays a
    /// partition at every point.
    #[inline]
    pub fn assign(&mut self, item: ItemIndex, agent: AgentIndex) {
        debug_assert!(
            item.get() < self.num_items(),
            "called `Allocation::assign` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item.get()
        );
        debug_assert!(
            agent.get() < self.num_agents,
            "called `Allocation::assign` with agent index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            agent.get()
        );

        self.owners[item.get()] = agent;
    }

    /// Returns a slice of owners, indexed by item.
    #[inline]
    pub fn owners(&self) -> &[AgentIndex] {
        &self.owners
    }

    /// Returns the binary utility count of every agent, i.e. how many items
    /// each agent currently holds.
    pub fn utility_counts(&self) -> Vec<u64> {
        let mut counts = vec![0u64; self.num_agents];
        for owner in &self.owners {
            counts[owner.get()] += 1;
        }
        counts
    }

    /// Returns the derived possession view: for every agent, the items it
    /// currently holds in ascending item order.
    pub fn possessions(&self) -> Vec<Vec<ItemIndex>> {
        let mut possessions = vec![Vec::new(); self.num_agents];
        for (item, owner) in self.owners.iter().enumerate() {
            possessions[owner.get()].push(ItemIndex::new(item));
        }
        possessions
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Allocation Summary")?;
        writeln!(f, "   {:<10} | {:<30}", "Agent", "Items")?;
        writeln!(f, "   {:-<10}-+-{:-<30}", "", "")?;
        for (agent, items) in self.possessions().iter().enumerate() {
            let rendered = items
                .iter()
                .map(|item| item.get().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "   {:<10} | {:<30}", agent, rendered)?;
        }
        Ok(())
    }
}
