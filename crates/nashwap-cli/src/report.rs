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

//! Human-readable instance and outcome tables.

use nashwap_core::num::WelfareNumeric;
use nashwap_engine::{envy::EnvyGraph, result::EngineOutcome};
use nashwap_model::{allocation::Allocation, index::AgentIndex, preferences::Preferences};

fn format_indices<I>(indices: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let rendered: Vec<String> = indices.into_iter().map(|i| i.to_string()).collect();
    if rendered.is_empty() {
        "-".to_string()
    } else {
        rendered.join(", ")
    }
}

/// Prints which items each agent likes.
pub fn print_preferences(preferences: &Preferences) {
    println!("Preferences ({} agents, {} items):", preferences.num_agents(), preferences.num_items());
    println!("{:<8} | {:<40}", "Agent", "Liked Items");
    println!("{}", "-".repeat(51));
    for agent in 0..preferences.num_agents() {
        let agent = AgentIndex::new(agent);
        let items = format_indices(preferences.liked_items(agent).map(|i| i.get()));
        println!("{:<8} | {:<40}", agent.get(), items);
    }
    println!();
}

/// Prints which items each agent currently owns.
pub fn print_possessions(allocation: &Allocation) {
    println!("Possessions:");
    println!("{:<8} | {:<40}", "Agent", "Owned Items");
    println!("{}", "-".repeat(51));
    for (agent, items) in allocation.possessions().into_iter().enumerate() {
        let items = format_indices(items.into_iter().map(|i| i.get()));
        println!("{:<8} | {:<40}", agent, items);
    }
    println!();
}

/// Prints the envy relation derived from the current allocation.
pub fn print_envy(graph: &EnvyGraph) {
    println!("Envy relation ({} edges):", graph.num_edges());
    println!("{:<8} | {:<40}", "Agent", "Envies");
    println!("{}", "-".repeat(51));
    for agent in 0..graph.num_agents() {
        let agent = AgentIndex::new(agent);
        let envied = format_indices(graph.neighbors(agent).iter().map(|n| n.get()));
        println!("{:<8} | {:<40}", agent.get(), envied);
    }
    println!();
}

/// Prints the final result: termination, welfare, swap history, and the
/// reached possessions.
pub fn print_outcome<W>(outcome: &EngineOutcome<W>)
where
    W: WelfareNumeric,
{
    println!("Termination: {}", outcome.termination_reason());
    println!("Nash social welfare: {:.6}", outcome.welfare());
    println!();

    if outcome.history().is_empty() {
        println!("No swaps were necessary.");
    } else {
        println!("Executed swaps:");
        for (step, record) in outcome.history().iter().enumerate() {
            println!("  {:>4}: {}", step + 1, record);
        }
    }
    println!();

    print_possessions(outcome.allocation());
    print!("{}", outcome.statistics());
}
