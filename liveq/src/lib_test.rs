use super::*;

fn channel_query() -> Query {
    Query::new("message")
        .equal_to_pointer("channel", &Pointer::new("channel", "c1"))
        .ascending("created_at")
        .include_all()
}

#[test]
fn query_builder_accumulates_constraints() {
    let query = channel_query();
    assert_eq!(query.class, "message");
    assert_eq!(query.ascending.as_deref(), Some("created_at"));
    assert!(query.include_all);
    assert_eq!(
        query.equals.get("channel"),
        Some(&serde_json::json!({ "class": "channel", "object_id": "c1" }))
    );
}

#[test]
fn query_with_no_constraints_matches_any_record() {
    let query = Query::new("message");
    assert!(query.matches(&serde_json::json!({ "object_id": "m1" })));
}

#[test]
fn query_matches_flat_equality() {
    let query = Query::new("message").equal_to("text", "hello");
    assert!(query.matches(&serde_json::json!({ "text": "hello" })));
    assert!(!query.matches(&serde_json::json!({ "text": "other" })));
    assert!(!query.matches(&serde_json::json!({})));
}

#[test]
fn query_pointer_constraint_matches_bare_pointer() {
    let record = serde_json::json!({
        "object_id": "m1",
        "channel": { "class": "channel", "object_id": "c1" }
    });
    assert!(channel_query().matches(&record));
}

#[test]
fn query_pointer_constraint_matches_expanded_record() {
    let record = serde_json::json!({
        "object_id": "m1",
        "channel": { "class": "channel", "object_id": "c1", "name": "general" }
    });
    assert!(channel_query().matches(&record));
}

#[test]
fn query_pointer_constraint_rejects_other_channel() {
    let record = serde_json::json!({
        "object_id": "m1",
        "channel": { "class": "channel", "object_id": "c2" }
    });
    assert!(!channel_query().matches(&record));
}

#[test]
fn client_subscribe_round_trips() {
    let message = ClientMessage::Subscribe {
        subscription_id: "s1".to_owned(),
        query: channel_query(),
    };
    let text = encode_client(&message);
    let decoded = decode_client(&text).expect("decode should succeed");
    assert_eq!(decoded, message);
}

#[test]
fn client_messages_encode_with_snake_case_op_tag() {
    let text = encode_client(&ClientMessage::Unsubscribe { subscription_id: "s1".to_owned() });
    let value: serde_json::Value = serde_json::from_str(&text).expect("frame should be json");
    assert_eq!(value.get("op"), Some(&serde_json::json!("unsubscribe")));
}

#[test]
fn server_snapshot_round_trips() {
    let message = ServerMessage::Snapshot {
        subscription_id: "s1".to_owned(),
        records: vec![serde_json::json!({ "object_id": "m1", "text": "hi" })],
    };
    let decoded = decode_server(&encode_server(&message)).expect("decode should succeed");
    assert_eq!(decoded, message);
}

#[test]
fn server_deleted_round_trips() {
    let message = ServerMessage::Deleted {
        subscription_id: "s1".to_owned(),
        object_id: "m1".to_owned(),
    };
    let decoded = decode_server(&encode_server(&message)).expect("decode should succeed");
    assert_eq!(decoded, message);
}

#[test]
fn server_error_defaults_missing_subscription_id_to_none() {
    let decoded = decode_server(r#"{"op":"error","message":"boom"}"#).expect("decode should succeed");
    assert_eq!(
        decoded,
        ServerMessage::Error { subscription_id: None, message: "boom".to_owned() }
    );
}

#[test]
fn decode_server_rejects_malformed_text() {
    let err = decode_server("{not json").expect_err("frame should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn decode_server_rejects_unknown_op() {
    let err = decode_server(r#"{"op":"drop_table","subscription_id":"s1"}"#)
        .expect_err("op should be unknown");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn encode_client_outputs_non_empty_frame() {
    let text = encode_client(&ClientMessage::Unsubscribe { subscription_id: "s1".to_owned() });
    assert!(!text.is_empty());
}
