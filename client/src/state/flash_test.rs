use super::*;

#[test]
fn show_sets_message_and_bumps_seq() {
    let mut flash = FlashState::default();
    let seq = flash.show("Saved", FlashTone::Success);
    assert_eq!(seq, 1);
    assert_eq!(flash.message.as_deref(), Some("Saved"));
}

#[test]
fn dismiss_clears_current_message() {
    let mut flash = FlashState::default();
    let seq = flash.show("Saved", FlashTone::Success);
    flash.dismiss(seq);
    assert_eq!(flash.message, None);
}

#[test]
fn stale_dismiss_keeps_newer_message() {
    let mut flash = FlashState::default();
    let first = flash.show("Saved", FlashTone::Success);
    flash.show("record not found: 9", FlashTone::Warning);
    flash.dismiss(first);
    assert_eq!(flash.message.as_deref(), Some("record not found: 9"));
    assert_eq!(flash.tone, FlashTone::Warning);
}
