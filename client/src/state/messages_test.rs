use super::*;
use liveq::Query;

fn message(id: &str, created_at: i64) -> Message {
    Message {
        id: id.to_owned(),
        text: format!("text-{id}"),
        channel_id: "c1".to_owned(),
        author: None,
        created_at,
    }
}

#[test]
fn default_state_has_no_subscription_and_no_results() {
    let state = MessagesState::default();
    assert!(state.subscription_id.is_none());
    assert!(state.channel_id.is_none());
    assert!(state.query.is_none());
    assert!(!state.loading);
    assert!(state.results.is_none());
    assert!(state.error.is_none());
}

#[test]
fn prepare_clears_previous_channel_data() {
    let mut state = MessagesState::default();
    state.begin("s1", "c1", Query::new("message"));
    state.results = Some(vec![message("m1", 1)]);
    state.error = Some("old failure".to_owned());

    state.prepare("c2");

    assert!(state.subscription_id.is_none());
    assert_eq!(state.channel_id.as_deref(), Some("c2"));
    assert!(state.loading);
    assert!(state.results.is_none());
    assert!(state.error.is_none());
}

#[test]
fn begin_replaces_the_active_subscription() {
    let mut state = MessagesState::default();
    state.begin("s1", "c1", Query::new("message"));
    state.begin("s2", "c2", Query::new("message"));

    assert!(state.is_active("s2"));
    assert!(!state.is_active("s1"));
    assert_eq!(state.channel_id.as_deref(), Some("c2"));
    assert!(state.loading);
    assert!(state.results.is_none());
}

#[test]
fn clear_returns_to_default() {
    let mut state = MessagesState::default();
    state.begin("s1", "c1", Query::new("message"));
    state.results = Some(vec![message("m1", 1)]);

    state.clear();

    assert_eq!(state, MessagesState::default());
}

#[test]
fn is_active_is_false_with_no_subscription() {
    assert!(!MessagesState::default().is_active("s1"));
}

#[test]
fn sorted_results_orders_by_creation_time_then_id() {
    let mut state = MessagesState::default();
    state.results = Some(vec![
        message("m3", 30),
        message("m2", 10),
        message("m1", 10),
    ]);

    let sorted = state.sorted_results().expect("results should be present");
    let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["m1", "m2", "m3"]);
}

#[test]
fn sorted_results_is_none_before_the_snapshot() {
    assert!(MessagesState::default().sorted_results().is_none());
}

#[test]
fn sort_messages_is_ascending_regardless_of_input_order() {
    let mut messages = vec![message("m1", 50), message("m2", 20), message("m3", 40)];
    sort_messages(&mut messages);
    let stamps: Vec<i64> = messages.iter().map(|m| m.created_at).collect();
    assert_eq!(stamps, [20, 40, 50]);
}
