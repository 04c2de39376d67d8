//! Authorship classification
//!
//! Resolves each message to a closed authorship enum and defines the
//! equivalence relation that decides which adjacent messages may share a
//! visual group. Senderless (system) messages render as agent messages, so
//! they are compatible with agent groups but never with customer or
//! self-authored ones.

use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, SenderRole};

/// Who a message is attributed to, relative to the viewing user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Authorship {
    /// Authored by the viewing user
    CurrentUser,

    /// Authored by a business/support-side participant other than the viewer
    Agent,

    /// Authored by an end-user participant other than the viewer
    Customer,

    /// System-originated (no sender); displayed as an agent message
    System,
}

impl Authorship {
    /// Whether this classification counts as the viewing user's own.
    pub fn is_current_user(&self) -> bool {
        matches!(self, Authorship::CurrentUser)
    }
}

/// Resolves a message to its authorship classification.
///
/// Pure: depends only on the message's own sender field and the explicitly
/// passed current user id, never on ambient session state.
pub fn classify(message: &ChatMessage, current_user_id: &str) -> Authorship {
    match &message.sender {
        None => Authorship::System,
        Some(sender) if sender.id == current_user_id => Authorship::CurrentUser,
        Some(sender) => match sender.role {
            SenderRole::Agent => Authorship::Agent,
            SenderRole::Customer => Authorship::Customer,
        },
    }
}

/// Decides whether two chronologically adjacent messages belong to the same
/// visual group.
///
/// Compatible iff the classifications match and, for two distinct-party
/// messages that both carry a sender, the sender identity matches as well;
/// additionally a system message pairs with an agent message in either order.
pub(crate) fn same_party(a: &ChatMessage, b: &ChatMessage, current_user_id: &str) -> bool {
    let class_a = classify(a, current_user_id);
    let class_b = classify(b, current_user_id);

    match (class_a, class_b) {
        (Authorship::System, Authorship::System) => true,
        (Authorship::System, Authorship::Agent) | (Authorship::Agent, Authorship::System) => true,
        (Authorship::CurrentUser, Authorship::CurrentUser) => true,
        (Authorship::Agent, Authorship::Agent) | (Authorship::Customer, Authorship::Customer) => {
            // Two agents (or two customers) only group when they are the
            // same person.
            match (&a.sender, &b.sender) {
                (Some(sa), Some(sb)) => sa.id == sb.id,
                _ => false,
            }
        }
        _ => false,
    }
}
