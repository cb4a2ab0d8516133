//! Light/dark theme preference.
//!
//! Reads the stored preference from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Setting a theme writes it back.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and native test
//! builds no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gearguard_theme";

/// Read the stored theme, falling back to the system preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set the `data-theme` attribute on `<html>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if el.set_attribute("data-theme", theme_name(dark)).is_err() {
                log::warn!("could not set data-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Apply `dark` and persist it.
pub fn set(dark: bool) -> bool {
    apply(dark);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, theme_name(dark));
        }
    }
    dark
}

/// Flip the theme and persist the new value.
pub fn toggle(current: bool) -> bool {
    set(!current)
}

#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}
