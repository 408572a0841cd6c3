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

//! Audit records for executed reallocations.
//!
//! Every engine iteration that improves the allocation produces one
//! [`SwapRecord`]: the augmenting path that was applied and the concrete
//! item transfers, one per hop, in path order. The records form the run
//! history handed to reporting layers; the engine itself never replays
//! them.

use crate::path::AugmentingPath;
use nashwap_model::index::{AgentIndex, ItemIndex};

/// A single item changing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    /// The item that moved.
    pub item: ItemIndex,
    /// The agent that gave the item away.
    pub from: AgentIndex,
    /// The agent that received the item.
    pub to: AgentIndex,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "item {}: {} -> {}",
            self.item.get(),
            self.from.get(),
            self.to.get()
        )
    }
}

/// One executed reallocation: the path and the items moved along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRecord {
    path: AugmentingPath,
    transfers: Vec<Transfer>,
}

impl SwapRecord {
    /// Creates a new record.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the number of transfers does not match the
    /// number of hops.
    pub fn new(path: AugmentingPath, transfers: Vec<Transfer>) -> Self {
        debug_assert_eq!(
            path.num_hops(),
            transfers.len(),
            "called `SwapRecord::new` with inconsistent hop count: path has {} hops but {} transfers were recorded",
            path.num_hops(),
            transfers.len()
        );

        Self { path, transfers }
    }

    /// The augmenting path that was executed.
    #[inline]
    pub fn path(&self) -> &AugmentingPath {
        &self.path
    }

    /// The item transfers, one per hop, in path order.
    #[inline]
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }
}

impl std::fmt::Display for SwapRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .transfers
            .iter()
            .map(|transfer| transfer.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "path [{}]: {}", self.path, rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai(i: usize) -> AgentIndex {
        AgentIndex::new(i)
    }

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_record_accessors_and_display() {
        let path = AugmentingPath::new(ai(0), &[ai(2)]);
        let record = SwapRecord::new(
            path.clone(),
            vec![Transfer {
                item: ii(5),
                from: ai(2),
                to: ai(0),
            }],
        );

        assert_eq!(record.path(), &path);
        assert_eq!(record.transfers().len(), 1);
        assert_eq!(format!("{}", record), "path [0 <- 2]: item 5: 2 -> 0");
    }
}
