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

//! Reallocation execution.
//!
//! Executes a selected augmenting path as a chain of single-item transfers.
//! Item selection happens first, against the possession view of the
//! *unmodified* allocation: for each hop `(receiver, giver)` the first item
//! in the giver's possession list (ascending item order) that the receiver
//! likes is picked. Since a shortest path visits each agent at most once,
//! no giver is consulted twice and the pre-selected items stay valid when
//! the transfers are applied in a second step.
//!
//! A hop without a transferable item would mean an envy edge without a
//! backing item. That cannot happen for paths derived from a freshly built
//! envy graph, so it is reported as [`EngineError::MissingTransferItem`]
//! rather than being papered over.

use crate::{
    error::EngineError,
    path::AugmentingPath,
    swap::{SwapRecord, Transfer},
};
use nashwap_model::{allocation::Allocation, preferences::Preferences};

/// Applies `path` to `allocation`, moving one item per hop.
///
/// On success the allocation reflects the full chain of transfers and the
/// returned [`SwapRecord`] documents them. On failure the allocation is
/// untouched: items are selected before anything is reassigned.
///
/// # Panics
///
/// Panics if the allocation and preferences disagree on dimensions.
pub fn execute_swap(
    path: &AugmentingPath,
    allocation: &mut Allocation,
    preferences: &Preferences,
) -> Result<SwapRecord, EngineError> {
    assert_eq!(
        preferences.num_agents(),
        allocation.num_agents(),
        "called `execute_swap` with inconsistent agent counts: preferences have {}, allocation has {}",
        preferences.num_agents(),
        allocation.num_agents()
    );
    assert_eq!(
        preferences.num_items(),
        allocation.num_items(),
        "called `execute_swap` with inconsistent item counts: preferences have {}, allocation has {}",
        preferences.num_items(),
        allocation.num_items()
    );

    let possessions = allocation.possessions();
    let mut transfers = Vec::with_capacity(path.num_hops());

    for (receiver, giver) in path.hops() {
        let item = possessions[giver.get()]
            .iter()
            .copied()
            .find(|&item| preferences.likes(receiver, item))
            .ok_or(EngineError::MissingTransferItem { receiver, giver })?;

        transfers.push(Transfer {
            item,
            from: giver,
            to: receiver,
        });
    }

    for transfer in &transfers {
        allocation.assign(transfer.item, transfer.to);
    }

    Ok(SwapRecord::new(path.clone(), transfers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nashwap_model::index::{AgentIndex, ItemIndex};

    fn ai(i: usize) -> AgentIndex {
        AgentIndex::new(i)
    }

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_single_hop_transfer() {
        let preferences = Preferences::from_rows(&[&[true, true], &[true, true]]);
        let mut allocation = Allocation::new(vec![ai(1), ai(1)], 2);

        let path = AugmentingPath::new(ai(0), &[ai(1)]);
        let record = execute_swap(&path, &mut allocation, &preferences).expect("hop is backed");

        // Agent 1 owned items 0 and 1; item 0 is the first one agent 0
        // likes, so it moves.
        assert_eq!(
            record.transfers(),
            &[Transfer {
                item: ii(0),
                from: ai(1),
                to: ai(0),
            }]
        );
        assert_eq!(allocation.owner_of(ii(0)), ai(0));
        assert_eq!(allocation.owner_of(ii(1)), ai(1));
    }

    #[test]
    fn test_first_liked_item_in_index_order_is_picked() {
        // The giver owns items 0, 2, 3; the receiver likes 2 and 3. Item 2
        // comes first in the possession list.
        let preferences = Preferences::from_rows(&[
            &[false, false, true, true],
            &[true, true, true, true],
        ]);
        let mut allocation = Allocation::new(vec![ai(1), ai(0), ai(1), ai(1)], 2);

        let path = AugmentingPath::new(ai(0), &[ai(1)]);
        let record = execute_swap(&path, &mut allocation, &preferences).expect("hop is backed");

        assert_eq!(record.transfers()[0].item, ii(2));
        assert_eq!(allocation.owner_of(ii(2)), ai(0));
    }

    #[test]
    fn test_two_hop_chain_moves_one_item_per_hop() {
        // Path 0 <- 1 <- 2: agent 1 gives item 1 to agent 0, agent 2 gives
        // item 2 to agent 1. Net counts change only at the endpoints.
        let preferences = Preferences::from_rows(&[
            &[false, true, false],
            &[false, false, true],
            &[true, true, true],
        ]);
        let mut allocation = Allocation::new(vec![ai(0), ai(1), ai(2)], 3);
        let counts_before = allocation.utility_counts();

        let path = AugmentingPath::new(ai(0), &[ai(1), ai(2)]);
        let record = execute_swap(&path, &mut allocation, &preferences).expect("hops are backed");

        assert_eq!(record.transfers().len(), 2);
        assert_eq!(allocation.owner_of(ii(1)), ai(0));
        assert_eq!(allocation.owner_of(ii(2)), ai(1));

        let counts_after = allocation.utility_counts();
        assert_eq!(counts_after[0], counts_before[0] + 1);
        assert_eq!(counts_after[1], counts_before[1]);
        assert_eq!(counts_after[2], counts_before[2] - 1);
    }

    #[test]
    fn test_partition_invariant_survives_execution() {
        let preferences = Preferences::from_rows(&[
            &[true, true, false, false],
            &[false, true, true, false],
            &[true, true, true, true],
        ]);
        let mut allocation = Allocation::new(vec![ai(2), ai(2), ai(2), ai(2)], 3);

        let path = AugmentingPath::new(ai(0), &[ai(2)]);
        execute_swap(&path, &mut allocation, &preferences).expect("hop is backed");

        let counts = allocation.utility_counts();
        assert_eq!(counts.iter().sum::<u64>() as usize, allocation.num_items());
    }

    #[test]
    fn test_unbacked_hop_is_an_invariant_violation() {
        // Agent 1 owns only item 1, which agent 0 dislikes.
        let preferences = Preferences::from_rows(&[&[true, false], &[true, true]]);
        let mut allocation = Allocation::new(vec![ai(0), ai(1)], 2);
        let before = allocation.clone();

        let path = AugmentingPath::new(ai(0), &[ai(1)]);
        let error = execute_swap(&path, &mut allocation, &preferences).unwrap_err();

        assert_eq!(
            error,
            EngineError::MissingTransferItem {
                receiver: ai(0),
                giver: ai(1),
            }
        );
        // Nothing was applied.
        assert_eq!(allocation, before);
    }
}
