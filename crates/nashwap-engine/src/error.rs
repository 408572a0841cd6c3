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

//! Engine error taxonomy.
//!
//! Only genuine invariant violations surface as errors. A zero utility
//! count is a valid state handled by the welfare math, and an exhausted
//! iteration budget is a reported outcome, not a failure — see
//! [`crate::result::TerminationReason`].

use nashwap_model::index::AgentIndex;

/// The error type for the optimization engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A hop of a selected path has no backing item: the giver owns nothing
    /// the receiver likes, even though the path was derived from real envy
    /// edges. Indicates a bug in graph construction or allocation state.
    MissingTransferItem {
        /// The agent that should have received an item on this hop.
        receiver: AgentIndex,
        /// The agent that should have given an item on this hop.
        giver: AgentIndex,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::MissingTransferItem { receiver, giver } => write!(
                f,
                "no transferable item for hop: agent {} owns nothing agent {} likes",
                giver.get(),
                receiver.get()
            ),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_both_agents() {
        let error = EngineError::MissingTransferItem {
            receiver: AgentIndex::new(0),
            giver: AgentIndex::new(3),
        };
        let rendered = format!("{}", error);
        assert!(rendered.contains("agent 3"));
        assert!(rendered.contains("agent 0"));
    }
}
