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

//! Command line front end.
//!
//! Generates a random instance, prints it, solves it with the
//! augmenting-path engine, and reports the result. Usage:
//!
//! ```text
//! nashwap [num_agents] [num_items] [liking_probability] [seed]
//! ```
//!
//! Omitted arguments fall back to the default instance shape; without a
//! seed the run is randomized from the OS.

mod report;

use nashwap_engine::{
    config::EngineConfig, engine::NashSwapEngine, envy::EnvyGraph, monitor::log::LogMonitor,
};
use nashwap_instance::generator::{self, InstanceConfig};
use rand::{SeedableRng, rngs::StdRng};
use std::error::Error;

struct CliArgs {
    instance: InstanceConfig,
    seed: Option<u64>,
}

fn parse_args() -> Result<CliArgs, Box<dyn Error>> {
    let mut instance = InstanceConfig::default();
    let mut seed = None;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 4 {
        return Err(format!(
            "expected at most 4 arguments (num_agents, num_items, liking_probability, seed), got {}",
            args.len()
        )
        .into());
    }

    if let Some(raw) = args.first() {
        instance.num_agents = raw
            .parse()
            .map_err(|e| format!("invalid agent count {:?}: {}", raw, e))?;
    }
    if let Some(raw) = args.get(1) {
        instance.num_items = raw
            .parse()
            .map_err(|e| format!("invalid item count {:?}: {}", raw, e))?;
    }
    if let Some(raw) = args.get(2) {
        instance.liking_probability = raw
            .parse()
            .map_err(|e| format!("invalid liking probability {:?}: {}", raw, e))?;
    }
    if let Some(raw) = args.get(3) {
        seed = Some(
            raw.parse()
                .map_err(|e| format!("invalid seed {:?}: {}", raw, e))?,
        );
    }

    if instance.num_agents == 0 || instance.num_items == 0 {
        return Err("instance dimensions must be positive".into());
    }
    if !(0.0..=1.0).contains(&instance.liking_probability) {
        return Err("liking probability must be within [0, 1]".into());
    }

    Ok(CliArgs { instance, seed })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Instance parameters: n = {}, m = {}, p = {}",
        args.instance.num_agents, args.instance.num_items, args.instance.liking_probability
    );
    println!();

    let preferences = generator::generate_preferences(&args.instance, &mut rng);
    let allocation = generator::random_allocation(&preferences, &mut rng);

    report::print_preferences(&preferences);
    report::print_possessions(&allocation);
    report::print_envy(&EnvyGraph::build(&preferences, &allocation));

    let mut engine = NashSwapEngine::<f64>::new();
    let mut monitor = LogMonitor::default();
    let outcome = engine.run(&preferences, allocation, &EngineConfig::new(), &mut monitor)?;

    println!();
    report::print_outcome(&outcome);

    Ok(())
}
