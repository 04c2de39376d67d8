//! Message grouping and chronological layout engine for chat thread UIs.
//!
//! This crate takes the flat, chronologically ordered message list a chat
//! session produces and partitions it into visually coherent groups: runs of
//! adjacent messages from the same party collapse into one block with a
//! shared avatar, date header, name label, and trailing status glyph. Each
//! message is tagged with its position inside its group, which also drives
//! the bubble corner-radius styling.
//!
//! The engine is a pure, synchronous leaf component. It never re-sorts its
//! input, never inspects message content, and recomputes the full grouping
//! from scratch on every call; callers replace the previous result wholesale
//! after each mutation of the message list.
//!
//! ```
//! use threadview::{ChatMessage, DeliveryStatus, MessageGrouper, Sender, SenderRole};
//! use chrono::{TimeZone, Utc};
//!
//! let grouper = MessageGrouper::new();
//! let messages = vec![ChatMessage {
//!     id: "m1".to_string(),
//!     sender: Some(Sender::new("alice", SenderRole::Customer)),
//!     content: vec![],
//!     created_at: Utc.timestamp_opt(0, 0).unwrap(),
//!     status: DeliveryStatus::Sent,
//! }];
//!
//! let groups = grouper.group(&messages, "me");
//! assert_eq!(groups.len(), 1);
//! ```

mod authorship;
mod corners;
mod error;
mod grouper;
mod partition;
mod types;


pub use authorship::{Authorship, classify};
pub use corners::{CornerRadii, CornerRadius, bubble_corners};
pub use error::{Result, ThreadviewError};
pub use grouper::MessageGrouper;
pub use types::{
    ChatMessage, DeliveryStatus, GroupPosition, GroupedMessage, GrouperConfig, MessageContent,
    MessageGroup, Sender, SenderRole,
};
