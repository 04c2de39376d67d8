use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::authorship::Authorship;

/// Delivery status of a message, as reported by the transport layer.
///
/// The variants form a strictly increasing ladder (`Sent < Delivered < Seen`),
/// which the derived `Ord` reflects; they are not independently combinable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Accepted by the transport but not yet delivered to the other party
    Sent,

    /// Delivered to the other party's device
    Delivered,

    /// Seen by the other party
    Seen,
}

/// Role of a message sender within the conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    /// A business/support-side participant
    Agent,

    /// An end-user participant
    Customer,
}

/// A message author as reported by the chat session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sender {
    /// Stable, case-sensitive identifier, unique within a thread
    pub id: String,

    /// Display name for name labels (None if the session provided none)
    pub display_name: Option<String>,

    /// Agent or customer role
    pub role: SenderRole,
}

impl Sender {
    pub fn new(id: impl Into<String>, role: SenderRole) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            role,
        }
    }
}

/// A single typed content item within a message.
///
/// Grouping never inspects content; this enum exists so a rendered message can
/// carry its payload through the grouping pass untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MessageContent {
    Text(String),
    Image { url: String },
    Video { url: String },
    Audio { url: String },
    LinkPreview { url: String, title: Option<String> },
    /// Structured rich content (forms, carousels, etc.), passed through opaquely
    Custom(serde_json::Value),
}

/// A single chat message as supplied by the session layer.
///
/// Message lists handed to the grouper are expected to be sorted ascending by
/// `created_at`; the grouper partitions by adjacency and never re-sorts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Stable, case-sensitive identifier, unique within a thread
    pub id: String,

    /// Author of the message; `None` marks a system-originated message,
    /// which renders as an agent message
    pub sender: Option<Sender>,

    /// Typed content items; opaque to grouping
    pub content: Vec<MessageContent>,

    /// Creation time, second resolution or better
    pub created_at: DateTime<Utc>,

    /// Delivery status reported for this message
    pub status: DeliveryStatus,
}

/// Position of a message within its group, used for corner-radius styling
/// and for deciding which message carries the avatar or status footer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupPosition {
    /// The only message of a size-1 group
    Single,

    /// First message of a group with more than one message
    First,

    /// Neither first nor last in a group with more than two messages
    Inside,

    /// Last message of a group with more than one message
    Last,
}

impl GroupPosition {
    /// Computes the position from an index within a group of `len` messages.
    pub fn from_index(index: usize, len: usize) -> Self {
        if len == 1 {
            GroupPosition::Single
        } else if index == 0 {
            GroupPosition::First
        } else if index == len - 1 {
            GroupPosition::Last
        } else {
            GroupPosition::Inside
        }
    }
}

/// A message paired with its computed in-group position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupedMessage {
    pub message: ChatMessage,

    pub position: GroupPosition,
}

/// A visually coherent run of adjacent messages from one party, ready for
/// rendering as a single block with shared avatar, header, and footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageGroup {
    /// Classification shared by every message in the group
    pub authorship: Authorship,

    /// The common sender, when the group's messages carry one (a group of
    /// system messages has none)
    pub sender: Option<Sender>,

    /// Timestamp of the first message, used for the date header
    pub date: DateTime<Utc>,

    /// Delivery status of the last message, shown as the group's single
    /// trailing status glyph
    pub status: DeliveryStatus,

    /// The group's messages in input order, each tagged with its position
    pub messages: Vec<GroupedMessage>,

    /// Whether to attach an avatar to the last message (non-self groups only)
    pub show_avatar: bool,

    /// Whether to attach a status footer to the last message (self groups only)
    pub show_footer: bool,

    /// Whether a sender name label may be shown above the group (non-self
    /// groups only; multi-party suppression happens at the rendering layer)
    pub show_sender_name: bool,
}

impl MessageGroup {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Configuration for the message grouper.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GrouperConfig {
    /// Maximum elapsed time between consecutive messages of one group.
    /// `None` (the default) disables the check, so grouping is driven purely
    /// by sender continuity.
    pub max_gap: Option<Duration>,

    /// Whether to enable detailed logging of grouping steps
    pub enable_debug_logging: bool,
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            max_gap: None,
            enable_debug_logging: false,
        }
    }
}
