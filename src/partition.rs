//! Core grouping logic
//!
//! Implements the stateless partitioning pass that turns a chronologically
//! ordered message list into MessageGroup values: runs of adjacent messages
//! from the same party are collected, each message is tagged with its
//! in-group position, and group-level display metadata is derived.

use crate::authorship::{Authorship, classify, same_party};
use crate::types::{ChatMessage, GroupPosition, GroupedMessage, GrouperConfig, MessageGroup};

/// Partitions `messages` into groups.
///
/// The input is consumed by adjacency in order; the concatenation of the
/// returned groups' messages reconstructs the input exactly.
pub(crate) fn partition_messages(
    messages: &[ChatMessage],
    current_user_id: &str,
    config: &GrouperConfig,
) -> Vec<MessageGroup> {
    if messages.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<MessageGroup> = Vec::new();
    let mut run: Vec<&ChatMessage> = vec![&messages[0]];

    for pair in messages.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);

        if extends_run(prev, next, current_user_id, config) {
            run.push(next);
        } else {
            groups.push(build_group(&run, current_user_id));
            run = vec![next];
        }
    }
    groups.push(build_group(&run, current_user_id));

    if config.enable_debug_logging {
        tracing::debug!(
            "Partitioned {} messages into {} groups",
            messages.len(),
            groups.len()
        );
    }

    groups
}

/// Whether `next` continues the run ending at `prev`: the two must resolve to
/// compatible parties and, when a max gap is configured, lie close enough in
/// time.
fn extends_run(
    prev: &ChatMessage,
    next: &ChatMessage,
    current_user_id: &str,
    config: &GrouperConfig,
) -> bool {
    if !same_party(prev, next, current_user_id) {
        return false;
    }

    match config.max_gap {
        Some(max_gap) => {
            // Unsorted input yields a negative delta; to_std then fails and
            // the gap is treated as zero, keeping partitioning mechanical.
            let elapsed = (next.created_at - prev.created_at)
                .to_std()
                .unwrap_or_default();
            elapsed <= max_gap
        }
        None => true,
    }
}

/// Builds one group from a non-empty run of adjacent messages.
fn build_group(run: &[&ChatMessage], current_user_id: &str) -> MessageGroup {
    debug_assert!(!run.is_empty(), "group runs are never empty");

    let authorship = group_authorship(run, current_user_id);
    let is_self = authorship.is_current_user();

    let first = run[0];
    let last = run[run.len() - 1];
    let sender = run.iter().find_map(|m| m.sender.clone());

    let messages = run
        .iter()
        .enumerate()
        .map(|(index, message)| GroupedMessage {
            message: (*message).clone(),
            position: GroupPosition::from_index(index, run.len()),
        })
        .collect();

    MessageGroup {
        authorship,
        sender,
        date: first.created_at,
        status: last.status,
        messages,
        show_avatar: !is_self,
        show_footer: is_self,
        show_sender_name: !is_self,
    }
}

/// Classification shared by a run: the first sender-carrying message decides;
/// a run of only system messages stays System.
fn group_authorship(run: &[&ChatMessage], current_user_id: &str) -> Authorship {
    run.iter()
        .map(|m| classify(m, current_user_id))
        .find(|class| *class != Authorship::System)
        .unwrap_or(Authorship::System)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeliveryStatus, Sender, SenderRole};
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    fn message(id: &str, sender: Option<Sender>, secs: i64) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            sender,
            content: vec![],
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
            status: DeliveryStatus::Sent,
        }
    }

    fn customer(id: &str, who: &str, secs: i64) -> ChatMessage {
        message(id, Some(Sender::new(who, SenderRole::Customer)), secs)
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let groups = partition_messages(&[], "me", &GrouperConfig::default());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_single_run_single_group() {
        let messages = vec![
            customer("m1", "alice", 0),
            customer("m2", "alice", 1),
            customer("m3", "alice", 2),
        ];

        let groups = partition_messages(&messages, "me", &GrouperConfig::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn test_sender_switch_breaks_run() {
        let messages = vec![
            customer("m1", "alice", 0),
            customer("m2", "bob", 1),
            customer("m3", "alice", 2),
        ];

        let groups = partition_messages(&messages, "me", &GrouperConfig::default());

        assert_eq!(groups.len(), 3);
        for group in &groups {
            assert_eq!(group.messages[0].position, GroupPosition::Single);
        }
    }

    #[test]
    fn test_no_gap_break_by_default() {
        // An hour of silence does not split a run when max_gap is unset.
        let messages = vec![customer("m1", "alice", 0), customer("m2", "alice", 3600)];

        let groups = partition_messages(&messages, "me", &GrouperConfig::default());
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_max_gap_breaks_run() {
        let config = GrouperConfig {
            max_gap: Some(Duration::from_secs(300)),
            ..Default::default()
        };
        let messages = vec![
            customer("m1", "alice", 0),
            customer("m2", "alice", 200),
            customer("m3", "alice", 600),
        ];

        let groups = partition_messages(&messages, "me", &config);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn test_gap_exactly_at_threshold_keeps_run() {
        let config = GrouperConfig {
            max_gap: Some(Duration::from_secs(300)),
            ..Default::default()
        };
        let messages = vec![customer("m1", "alice", 0), customer("m2", "alice", 300)];

        let groups = partition_messages(&messages, "me", &config);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_system_run_keeps_system_authorship() {
        let messages = vec![message("m1", None, 0), message("m2", None, 1)];

        let groups = partition_messages(&messages, "me", &GrouperConfig::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].authorship, Authorship::System);
        assert!(groups[0].sender.is_none());
        assert!(groups[0].show_avatar);
        assert!(!groups[0].show_footer);
    }

    #[test]
    fn test_system_then_agent_adopts_agent_sender() {
        let messages = vec![
            message("m1", None, 0),
            message("m2", Some(Sender::new("bob", SenderRole::Agent)), 1),
        ];

        let groups = partition_messages(&messages, "me", &GrouperConfig::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].authorship, Authorship::Agent);
        assert_eq!(groups[0].sender.as_ref().map(|s| s.id.as_str()), Some("bob"));
    }

    #[test]
    fn test_group_date_and_status_fields() {
        let mut first = customer("m1", "me", 10);
        let mut last = customer("m2", "me", 20);
        first.status = DeliveryStatus::Seen;
        last.status = DeliveryStatus::Delivered;

        let groups = partition_messages(&[first, last], "me", &GrouperConfig::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].date, Utc.timestamp_opt(10, 0).unwrap());
        assert_eq!(groups[0].status, DeliveryStatus::Delivered);
        assert!(groups[0].show_footer);
        assert!(!groups[0].show_avatar);
        assert!(!groups[0].show_sender_name);
    }
}
