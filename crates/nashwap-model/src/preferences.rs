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

//! Binary like/dislike preferences over items.
//!
//! The preference matrix is the immutable input of a fair-division run: for
//! every (agent, item) pair it records whether the agent likes the item. The
//! matrix is stored as a single flattened bitset, so an n×m instance costs
//! `n·m` bits and a lookup is a single bit test.
//!
//! Construction goes through [`PreferencesBuilder`], which validates
//! dimensions up front and exposes both chainable and in-place setters. A
//! well-formed instance designates a catch-all agent who likes every item
//! (see [`Preferences::is_catch_all`]); this guarantees every item is
//! assignable to someone who wants it.

use crate::index::{AgentIndex, ItemIndex};
use fixedbitset::FixedBitSet;

/// The immutable n×m like/dislike matrix of a fair-division instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Flattened row-major bit matrix; bit `agent * num_items + item` is set
    /// iff the agent likes the item.
    bits: FixedBitSet,
    num_agents: usize,
    num_items: usize,
}

impl Preferences {
    #[inline(always)]
    fn flatten(num_items: usize, agent: AgentIndex, item: ItemIndex) -> usize {
        agent.get() * num_items + item.get()
    }

    /// Builds preferences from one boolean row per agent.
    ///
    /// Convenience for tests and small hand-written instances.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not all of the same length or if there are no
    /// agents or items.
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        assert!(
            !rows.is_empty(),
            "called `Preferences::from_rows` with zero agent rows"
        );
        let num_items = rows[0].len();

        let mut builder = PreferencesBuilder::new(rows.len(), num_items);
        for (agent, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                num_items,
                "called `Preferences::from_rows` with ragged rows: row 0 has {} items, row {} has {}",
                num_items,
                agent,
                row.len()
            );
            for (item, &liked) in row.iter().enumerate() {
                if liked {
                    builder.set(AgentIndex::new(agent), ItemIndex::new(item));
                }
            }
        }
        builder.build()
    }

    /// Returns the number of agents.
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Returns the number of items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Returns whether `agent` likes `item`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either index is out of bounds.
    #[inline]
    pub fn likes(&self, agent: AgentIndex, item: ItemIndex) -> bool {
        debug_assert!(
            agent.get() < self.num_agents,
            "called `Preferences::likes` with agent index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            agent.get()
        );
        debug_assert!(
            item.get() < self.num_items,
            "called `Preferences::likes` with item index out of bounds: the len is {} but the index is {}",
            self.num_items,
            item.get()
        );

        self.bits.contains(Self::flatten(self.num_items, agent, item))
    }

    /// Iterates over the items `agent` likes, in ascending item order.
    #[inline]
    pub fn liked_items(&self, agent: AgentIndex) -> impl Iterator<Item = ItemIndex> + '_ {
        debug_assert!(
            agent.get() < self.num_agents,
            "called `Preferences::liked_items` with agent index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            agent.get()
        );

        let num_items = self.num_items;
        (0..num_items)
            .map(ItemIndex::new)
            .filter(move |&item| self.bits.contains(Self::flatten(num_items, agent, item)))
    }

    /// Returns how many items `agent` likes.
    #[inline]
    pub fn num_liked_items(&self, agent: AgentIndex) -> usize {
        self.liked_items(agent).count()
    }

    /// Returns whether `agent` likes every item.
    ///
    /// A well-formed instance has at least one such agent, guaranteeing
    /// every item can be assigned without waste.
    #[inline]
    pub fn is_catch_all(&self, agent: AgentIndex) -> bool {
        self.num_liked_items(agent) == self.num_items
    }
}

/// Builder for [`Preferences`].
///
/// # Examples
///
/// ```rust
/// use nashwap_model::index::{AgentIndex, ItemIndex};
/// use nashwap_model::preferences::PreferencesBuilder;
///
/// let preferences = PreferencesBuilder::new(2, 3)
///     .like(AgentIndex::new(0), ItemIndex::new(1))
///     .like_all(AgentIndex::new(1))
///     .build();
///
/// assert!(preferences.likes(AgentIndex::new(0), ItemIndex::new(1)));
/// assert!(!preferences.likes(AgentIndex::new(0), ItemIndex::new(0)));
/// assert!(preferences.is_catch_all(AgentIndex::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct PreferencesBuilder {
    bits: FixedBitSet,
    num_agents: usize,
    num_items: usize,
}

impl PreferencesBuilder {
    /// Creates a builder for an n×m all-dislike matrix.
    ///
    /// # Panics
    ///
    /// Panics if `num_agents` or `num_items` is zero.
    pub fn new(num_agents: usize, num_items: usize) -> Self {
        assert!(
            num_agents > 0 && num_items > 0,
            "called `PreferencesBuilder::new` with degenerate dimensions: {} agents, {} items",
            num_agents,
            num_items
        );

        Self {
            bits: FixedBitSet::with_capacity(num_agents * num_items),
            num_agents,
            num_items,
        }
    }

    /// Marks `item` as liked by `agent` (in place).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, agent: AgentIndex, item: ItemIndex) {
        assert!(
            agent.get() < self.num_agents,
            "called `PreferencesBuilder::set` with agent index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            agent.get()
        );
        assert!(
            item.get() < self.num_items,
            "called `PreferencesBuilder::set` with item index out of bounds: the len is {} but the index is {}",
            self.num_items,
            item.get()
        );

        self.bits
            .insert(Preferences::flatten(self.num_items, agent, item));
    }

    /// Marks `item` as liked by `agent` (chainable).
    #[inline]
    pub fn like(mut self, agent: AgentIndex, item: ItemIndex) -> Self {
        self.set(agent, item);
        self
    }

    /// Marks every item as liked by `agent`, making it a catch-all agent.
    pub fn like_all(mut self, agent: AgentIndex) -> Self {
        for item in 0..self.num_items {
            self.set(agent, ItemIndex::new(item));
        }
        self
    }

    /// In-place variant of [`PreferencesBuilder::like_all`].
    pub fn set_all(&mut self, agent: AgentIndex) {
        for item in 0..self.num_items {
            self.set(agent, ItemIndex::new(item));
        }
    }

    /// Finalizes the immutable preference matrix.
    #[inline]
    pub fn build(self) -> Preferences {
        Preferences {
            bits: self.bits,
            num_agents: self.num_agents,
            num_items: self.num_items,
        }
    }
}
