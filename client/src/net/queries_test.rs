use super::*;

#[test]
fn channel_messages_query_filters_on_the_channel_pointer() {
    let query = channel_messages_query(&ChannelRef { id: "c1".to_owned() });
    assert_eq!(query.class, "message");
    assert_eq!(
        query.equals.get("channel"),
        Some(&serde_json::json!({ "class": "channel", "object_id": "c1" }))
    );
}

#[test]
fn channel_messages_query_orders_by_creation_time() {
    let query = channel_messages_query(&ChannelRef { id: "c1".to_owned() });
    assert_eq!(query.ascending.as_deref(), Some("created_at"));
}

#[test]
fn channel_messages_query_expands_referenced_records() {
    let query = channel_messages_query(&ChannelRef { id: "c1".to_owned() });
    assert!(query.include_all);
}

#[test]
fn queries_for_different_channels_are_independent() {
    let first = channel_messages_query(&ChannelRef { id: "c1".to_owned() });
    let second = channel_messages_query(&ChannelRef { id: "c2".to_owned() });
    assert_ne!(first, second);
    assert!(first.matches(&serde_json::json!({
        "channel": { "class": "channel", "object_id": "c1" }
    })));
    assert!(!second.matches(&serde_json::json!({
        "channel": { "class": "channel", "object_id": "c1" }
    })));
}
