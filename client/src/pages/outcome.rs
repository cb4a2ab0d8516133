//! Banner text and logging for the result of a save or delete.
//!
//! Store failures never surface as panics or dialogs: they are logged at
//! `warn` and shown as a warning banner, and the store is left as it was.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use leptos::prelude::*;
use records::{FormError, Record, RecordId, StoreError};

use crate::components::flash_banner::flash;
use crate::state::flash::{FlashState, FlashTone};

/// Banner for a submit result.
pub fn save_message(noun: &str, result: &Result<RecordId, FormError>) -> (String, FlashTone) {
    match result {
        Ok(_) => (format!("{noun} saved"), FlashTone::Success),
        Err(FormError::MissingField(field)) => (format!("{field} is required"), FlashTone::Warning),
        Err(FormError::Closed) => (format!("No {} form is open", noun.to_lowercase()), FlashTone::Warning),
        Err(FormError::Store(err)) => (format!("Could not save {}: {err}", noun.to_lowercase()), FlashTone::Warning),
    }
}

/// Banner for a confirmed delete; `None` when nothing was pending.
pub fn delete_message<F>(noun: &str, result: &Result<Option<Record<F>>, StoreError>) -> Option<(String, FlashTone)> {
    match result {
        Ok(None) => None,
        Ok(Some(_)) => Some((format!("{noun} deleted"), FlashTone::Success)),
        Err(err) => Some((format!("Could not delete {}: {err}", noun.to_lowercase()), FlashTone::Warning)),
    }
}

/// Log and announce a submit result. `None` means a signal was disposed.
pub fn settle_save(banner: RwSignal<FlashState>, noun: &str, result: Option<Result<RecordId, FormError>>) {
    let Some(result) = result else {
        return;
    };
    match &result {
        Ok(id) => log::debug!("{noun} {id} saved"),
        Err(FormError::MissingField(_)) => {}
        Err(err) => log::warn!("{noun} save failed: {err}"),
    }
    let (text, tone) = save_message(noun, &result);
    flash(banner, text, tone);
}

/// Log and announce a delete result.
pub fn settle_delete<F>(banner: RwSignal<FlashState>, noun: &str, result: Option<Result<Option<Record<F>>, StoreError>>) {
    let Some(result) = result else {
        return;
    };
    match &result {
        Ok(Some(record)) => log::debug!("{noun} {} deleted", record.id),
        Ok(None) => {}
        Err(err) => log::warn!("{noun} delete failed: {err}"),
    }
    if let Some((text, tone)) = delete_message(noun, &result) {
        flash(banner, text, tone);
    }
}

/// Log a store error from an in-place edit (move, open-for-edit).
pub fn settle_store(banner: RwSignal<FlashState>, action: &str, result: Option<Result<(), StoreError>>) {
    if let Some(Err(err)) = result {
        log::warn!("{action} failed: {err}");
        flash(banner, format!("Could not {action}: {err}"), FlashTone::Warning);
    }
}
