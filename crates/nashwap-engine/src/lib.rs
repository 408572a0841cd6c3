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

//! # Nashwap Engine
//!
//! The iterative optimization core for approximate Nash-social-welfare
//! maximization under binary preferences. Each iteration rebuilds the envy
//! graph over agents, solves all-pairs shortest paths by repeated BFS,
//! evaluates every shortest path's hypothetical welfare gain, and executes
//! the best strictly-improving chain of single-item transfers. The loop
//! terminates when no improving path exists (convergence to a local-search
//! fixed point) or when the proven iteration budget
//! `2 · n · (m+1) · ln(n·m)` is exhausted.
//!
//! The engine is single-threaded, deterministic, and performs no I/O;
//! progress observation goes through the [`monitor`] hooks, and the final
//! [`result::EngineOutcome`] bundles the allocation, the audit history of
//! executed swaps, run statistics, and the termination reason.

pub mod apsp;
pub mod config;
pub mod engine;
pub mod envy;
pub mod error;
pub mod executor;
pub mod monitor;
pub mod path;
pub mod result;
pub mod selector;
pub mod stats;
pub mod swap;
