use super::*;

// =============================================================
// save_message
// =============================================================

#[test]
fn save_success_names_the_entity() {
    let (text, tone) = save_message("Equipment", &Ok(RecordId::from("7")));
    assert_eq!(text, "Equipment saved");
    assert_eq!(tone, FlashTone::Success);
}

#[test]
fn missing_field_names_the_field() {
    let (text, tone) = save_message("Task", &Err(FormError::MissingField("Task Title")));
    assert_eq!(text, "Task Title is required");
    assert_eq!(tone, FlashTone::Warning);
}

#[test]
fn store_failure_is_a_warning_with_the_id() {
    let err = FormError::Store(StoreError::NotFound { id: RecordId::from("9") });
    let (text, tone) = save_message("Category", &Err(err));
    assert_eq!(text, "Could not save category: record not found: 9");
    assert_eq!(tone, FlashTone::Warning);
}

// =============================================================
// delete_message
// =============================================================

#[test]
fn nothing_pending_shows_nothing() {
    let result: Result<Option<Record<u8>>, StoreError> = Ok(None);
    assert_eq!(delete_message("Task", &result), None);
}

#[test]
fn removed_record_is_announced() {
    let result = Ok(Some(Record { id: RecordId::from("1"), fields: 0_u8 }));
    assert_eq!(delete_message("Task", &result), Some(("Task deleted".to_owned(), FlashTone::Success)));
}

#[test]
fn vanished_record_is_a_warning() {
    let result: Result<Option<Record<u8>>, StoreError> = Err(StoreError::NotFound { id: RecordId::from("4") });
    let (text, tone) = delete_message("Team member", &result).unwrap();
    assert_eq!(text, "Could not delete team member: record not found: 4");
    assert_eq!(tone, FlashTone::Warning);
}
