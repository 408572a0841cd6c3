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

//! Engine outcome and termination reporting.
//!
//! The final result of a run is a single transport object for downstream
//! consumers: the allocation the loop ended on, the audit history of
//! executed swaps, the reached welfare, aggregate statistics, and a concise
//! termination reason. Budget exhaustion is a reported outcome with a
//! weaker guarantee, not an error — callers decide how to treat it.

use crate::{stats::EngineStatistics, swap::SwapRecord};
use nashwap_core::num::WelfareNumeric;
use nashwap_model::allocation::Allocation;

/// Why the optimization loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// No strictly-improving augmenting path exists; the allocation is a
    /// local-search fixed point.
    Converged,

    /// The iteration cap was reached before convergence. The returned
    /// allocation is valid but possibly suboptimal.
    BudgetExhausted,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Converged => write!(f, "Converged"),
            TerminationReason::BudgetExhausted => write!(f, "Budget Exhausted"),
        }
    }
}

/// Result of the engine after termination.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutcome<W> {
    termination_reason: TerminationReason,
    allocation: Allocation,
    history: Vec<SwapRecord>,
    welfare: W,
    statistics: EngineStatistics,
}

impl<W> EngineOutcome<W>
where
    W: WelfareNumeric,
{
    /// Creates a converged outcome.
    #[inline]
    pub fn converged(
        allocation: Allocation,
        history: Vec<SwapRecord>,
        welfare: W,
        statistics: EngineStatistics,
    ) -> Self {
        Self {
            termination_reason: TerminationReason::Converged,
            allocation,
            history,
            welfare,
            statistics,
        }
    }

    /// Creates a budget-exhausted outcome.
    #[inline]
    pub fn budget_exhausted(
        allocation: Allocation,
        history: Vec<SwapRecord>,
        welfare: W,
        statistics: EngineStatistics,
    ) -> Self {
        Self {
            termination_reason: TerminationReason::BudgetExhausted,
            allocation,
            history,
            welfare,
            statistics,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> TerminationReason {
        self.termination_reason
    }

    /// Returns whether the run converged to a fixed point.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.termination_reason == TerminationReason::Converged
    }

    /// Returns the final allocation.
    #[inline]
    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Returns the executed swaps in order.
    #[inline]
    pub fn history(&self) -> &[SwapRecord] {
        &self.history
    }

    /// Returns the Nash social welfare of the final allocation.
    #[inline]
    pub fn welfare(&self) -> W {
        self.welfare
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &EngineStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the final allocation.
    #[inline]
    pub fn into_allocation(self) -> Allocation {
        self.allocation
    }
}
