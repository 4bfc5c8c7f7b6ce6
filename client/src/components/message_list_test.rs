use super::*;

fn message(id: &str, created_at: i64) -> Message {
    Message {
        id: id.to_owned(),
        text: "hi".to_owned(),
        channel_id: "c1".to_owned(),
        author: None,
        created_at,
    }
}

#[test]
fn channel_heading_prefixes_the_name_with_a_hash() {
    assert_eq!(channel_heading("general"), "#general");
}

#[test]
fn placeholder_shows_only_for_an_empty_snapshot() {
    let mut state = MessagesState::default();
    assert!(!show_placeholder(&state));

    state.results = Some(Vec::new());
    assert!(show_placeholder(&state));

    state.results = Some(vec![message("m1", 10)]);
    assert!(!show_placeholder(&state));
}

#[test]
fn placeholder_never_shows_while_the_snapshot_is_pending() {
    let mut state = MessagesState::default();
    state.prepare("c1");
    assert!(state.loading);
    assert!(!show_placeholder(&state));
}
