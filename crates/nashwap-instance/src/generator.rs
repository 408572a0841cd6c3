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

//! Instance generators.
//!
//! Preference matrices are filled by independent biased coin flips; the last
//! agent always likes every item. That catch-all agent keeps every instance
//! solvable: any item nobody else likes can still be assigned without waste.
//! The price is that the last agent may be unreachable in the envy graph
//! when the liking probability is low.
//!
//! Starting allocations come in two flavors with identical structure. Stage
//! one hands each agent the first still-unowned item it likes. Stage two
//! assigns every remaining item by randomly probing agents until one likes
//! it, falling back to the catch-all agent after n² failed tries. The
//! flavors differ only in the probing pool: [`random_allocation`] draws from
//! all agents but the last, [`skewed_allocation`] from roughly the first
//! fifth, which piles items up and gives the engine real work.

use nashwap_model::{
    allocation::Allocation,
    index::{AgentIndex, ItemIndex},
    preferences::{Preferences, PreferencesBuilder},
};
use rand::Rng;

/// Shape parameters for a random instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceConfig {
    pub num_agents: usize,
    pub num_items: usize,

    /// Probability that an agent likes any given item.
    pub liking_probability: f64,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            num_agents: 7,
            num_items: 16,
            liking_probability: 0.5,
        }
    }
}

/// Generates a coin-flip preference matrix with a catch-all last agent.
///
/// # Panics
///
/// Panics if the configured dimensions are zero or the probability is
/// outside `[0, 1]`.
pub fn generate_preferences<R>(config: &InstanceConfig, rng: &mut R) -> Preferences
where
    R: Rng + ?Sized,
{
    assert!(
        (0.0..=1.0).contains(&config.liking_probability),
        "called `generate_preferences` with liking probability out of range: {}",
        config.liking_probability
    );

    let mut builder = PreferencesBuilder::new(config.num_agents, config.num_items);

    for agent in 0..config.num_agents - 1 {
        for item in 0..config.num_items {
            if rng.random_bool(config.liking_probability) {
                builder.set(AgentIndex::new(agent), ItemIndex::new(item));
            }
        }
    }
    builder.set_all(AgentIndex::new(config.num_agents - 1));

    builder.build()
}

/// Stage one: each agent, in index order, claims the first still-unowned
/// item it likes. Returns the partial owner map.
fn seed_one_item_each(preferences: &Preferences) -> Vec<Option<AgentIndex>> {
    let mut owners: Vec<Option<AgentIndex>> = vec![None; preferences.num_items()];

    for agent in 0..preferences.num_agents() {
        let agent = AgentIndex::new(agent);
        for item in preferences.liked_items(agent) {
            if owners[item.get()].is_none() {
                owners[item.get()] = Some(agent);
                break;
            }
        }
    }

    owners
}

/// Stage two: assigns every still-unowned item by probing `pick_agent`
/// until the picked agent likes the item, with the catch-all agent as
/// fallback after n² failed tries.
fn assign_leftovers<R, F>(
    preferences: &Preferences,
    owners: Vec<Option<AgentIndex>>,
    rng: &mut R,
    mut pick_agent: F,
) -> Allocation
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> AgentIndex,
{
    let num_agents = preferences.num_agents();
    let fallback = AgentIndex::new(num_agents - 1);
    let max_tries = (num_agents * num_agents) as u64;

    let owners = owners
        .into_iter()
        .enumerate()
        .map(|(raw, owner)| {
            if let Some(agent) = owner {
                return agent;
            }
            let item = ItemIndex::new(raw);

            let mut tries = 0u64;
            loop {
                if tries > max_tries {
                    break fallback;
                }
                tries += 1;

                let candidate = pick_agent(rng);
                if preferences.likes(candidate, item) {
                    break candidate;
                }
            }
        })
        .collect();

    Allocation::new(owners, num_agents)
}

/// Generates a random non-wasteful allocation.
///
/// Leftover items are probed uniformly over all agents except the
/// catch-all one, so items spread roughly evenly.
pub fn random_allocation<R>(preferences: &Preferences, rng: &mut R) -> Allocation
where
    R: Rng + ?Sized,
{
    let num_agents = preferences.num_agents();
    let owners = seed_one_item_each(preferences);

    if num_agents == 1 {
        // Single catch-all agent owns everything.
        let owners = owners
            .into_iter()
            .map(|owner| owner.unwrap_or(AgentIndex::new(0)))
            .collect();
        return Allocation::new(owners, 1);
    }

    assign_leftovers(preferences, owners, rng, |rng| {
        AgentIndex::new(rng.random_range(0..num_agents - 1))
    })
}

/// Generates a non-wasteful but deliberately uneven allocation.
///
/// Leftover items are probed only among roughly the first fifth of the
/// agents, concentrating ownership there.
pub fn skewed_allocation<R>(preferences: &Preferences, rng: &mut R) -> Allocation
where
    R: Rng + ?Sized,
{
    let num_agents = preferences.num_agents();
    let owners = seed_one_item_each(preferences);

    let pool_max = ((num_agents as f64 / 5.0).round() as usize).min(num_agents - 1);

    assign_leftovers(preferences, owners, rng, |rng| {
        AgentIndex::new(rng.random_range(0..=pool_max))
    })
}

/// Returns whether every item is owned by an agent that likes it.
pub fn is_non_wasteful(preferences: &Preferences, allocation: &Allocation) -> bool {
    (0..allocation.num_items())
        .map(ItemIndex::new)
        .all(|item| preferences.likes(allocation.owner_of(item), item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ai(i: usize) -> AgentIndex {
        AgentIndex::new(i)
    }

    #[test]
    fn test_last_agent_is_catch_all() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = InstanceConfig {
            num_agents: 5,
            num_items: 12,
            liking_probability: 0.1,
        };
        let preferences = generate_preferences(&config, &mut rng);

        assert!(preferences.is_catch_all(ai(4)));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let config = InstanceConfig::default();

        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);

        let preferences_a = generate_preferences(&config, &mut rng_a);
        let preferences_b = generate_preferences(&config, &mut rng_b);
        assert_eq!(preferences_a, preferences_b);

        let allocation_a = random_allocation(&preferences_a, &mut rng_a);
        let allocation_b = random_allocation(&preferences_b, &mut rng_b);
        assert_eq!(allocation_a, allocation_b);
    }

    #[test]
    fn test_random_allocation_is_non_wasteful() {
        for seed in 0..16u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let config = InstanceConfig {
                num_agents: 6,
                num_items: 20,
                liking_probability: 0.3,
            };
            let preferences = generate_preferences(&config, &mut rng);
            let allocation = random_allocation(&preferences, &mut rng);

            assert!(is_non_wasteful(&preferences, &allocation));
        }
    }

    #[test]
    fn test_skewed_allocation_is_non_wasteful() {
        for seed in 0..16u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let config = InstanceConfig::default();
            let preferences = generate_preferences(&config, &mut rng);
            let allocation = skewed_allocation(&preferences, &mut rng);

            assert!(is_non_wasteful(&preferences, &allocation));
        }
    }

    #[test]
    fn test_stage_one_gives_first_liked_item() {
        // Agent 0 likes items 1 and 2; it must claim item 1. Agent 1 (the
        // catch-all) then claims item 0, the first one left.
        let preferences = PreferencesBuilder::new(2, 3)
            .like(ai(0), ItemIndex::new(1))
            .like(ai(0), ItemIndex::new(2))
            .like_all(ai(1))
            .build();

        let owners = seed_one_item_each(&preferences);
        assert_eq!(owners[1], Some(ai(0)));
        assert_eq!(owners[0], Some(ai(1)));
        assert_eq!(owners[2], None);
    }

    #[test]
    fn test_single_agent_owns_everything() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = InstanceConfig {
            num_agents: 1,
            num_items: 4,
            liking_probability: 0.5,
        };
        let preferences = generate_preferences(&config, &mut rng);
        let allocation = random_allocation(&preferences, &mut rng);

        for item in 0..4 {
            assert_eq!(allocation.owner_of(ItemIndex::new(item)), ai(0));
        }
    }
}
