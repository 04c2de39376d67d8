//! Grouper entry point
//!
//! Holds the grouping configuration and exposes the one operation consumers
//! call: turning the current message list into display-ready groups. Designed
//! to be created once per thread view and reused across recomputations.

use std::collections::HashMap;

use crate::error::{Result, ThreadviewError};
use crate::partition;
use crate::types::{ChatMessage, DeliveryStatus, GrouperConfig, MessageGroup};

/// Partitions chronologically ordered message lists into visual groups.
///
/// `group` is a pure function of its arguments: no I/O, no shared state, no
/// suspension points. Callers recompute the full grouping on every mutation
/// of the message list and replace the previous result wholesale.
pub struct MessageGrouper {
    config: GrouperConfig,
}

impl MessageGrouper {
    /// Create a new grouper with default configuration
    pub fn new() -> Self {
        Self::with_config(GrouperConfig::default())
    }

    /// Create a new grouper with custom configuration
    pub fn with_config(config: GrouperConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &GrouperConfig {
        &self.config
    }

    /// Partitions `messages` into ordered groups and annotates each message
    /// with its in-group position.
    ///
    /// The input must be sorted ascending by `created_at`; this is a caller
    /// precondition, not a checked error. Unsorted input still partitions
    /// mechanically by adjacency, with undefined grouping quality. Debug
    /// builds assert monotonicity, release builds log a warning.
    ///
    /// Calling this twice on the same input yields structurally identical
    /// output.
    pub fn group(&self, messages: &[ChatMessage], current_user_id: &str) -> Vec<MessageGroup> {
        if self.config.enable_debug_logging {
            tracing::debug!(
                "Grouping {} messages (current user: {})",
                messages.len(),
                current_user_id
            );
        }

        debug_assert!(
            first_unsorted_index(messages).is_none(),
            "message list handed to group() is not sorted by created_at"
        );
        if let Some(index) = first_unsorted_index(messages) {
            tracing::warn!("Message list is not sorted by created_at (index {index})");
        }

        partition::partition_messages(messages, current_user_id, &self.config)
    }

    /// Checks the caller-side invariants of a message list: timestamps sorted
    /// ascending, and no sender's delivery status stepping back down the
    /// ladder chronologically (no `Sent` after a `Seen` from the same
    /// sender).
    ///
    /// Intended for integration tests and debug tooling; `group` never runs
    /// these checks on its own.
    pub fn validate_thread(&self, messages: &[ChatMessage]) -> Result<()> {
        if let Some(index) = first_unsorted_index(messages) {
            return Err(ThreadviewError::UnsortedInput { index });
        }

        let mut latest_status: HashMap<Option<&str>, DeliveryStatus> = HashMap::new();
        for (index, message) in messages.iter().enumerate() {
            let key = message.sender.as_ref().map(|s| s.id.as_str());
            if let Some(previous) = latest_status.get(&key)
                && message.status < *previous
            {
                return Err(ThreadviewError::StatusRegression { index });
            }
            latest_status.insert(key, message.status);
        }

        Ok(())
    }
}

impl Default for MessageGrouper {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the first message older than its predecessor, if any.
fn first_unsorted_index(messages: &[ChatMessage]) -> Option<usize> {
    messages
        .windows(2)
        .position(|pair| pair[1].created_at < pair[0].created_at)
        .map(|i| i + 1)
}
