use super::*;

#[test]
fn seeded_feed_has_two_unread() {
    let state = NotificationsState::default();
    assert_eq!(state.items.len(), 6);
    assert_eq!(state.unread_count(), 2);
    assert_eq!(state.items[0].kind, NoticeKind::Urgent);
}

#[test]
fn mark_all_read_clears_badge() {
    let mut state = NotificationsState::default();
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
    assert_eq!(state.items.len(), 6);
}
