use crate::core::theme::{Theme, THEME_STORAGE_KEY};
use web_sys as web;

/// Stored theme preference; any storage failure (disabled, quota, privacy
/// mode) silently yields the default.
pub fn load_theme() -> Theme {
    let stored = web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::parse(stored.as_deref())
}

pub fn store_theme(theme: Theme) {
    if let Some(storage) = web::window().and_then(|w| w.local_storage().ok().flatten()) {
        _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Reflect the theme on the document root; styling keys off the `light`
/// class.
pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let cl = root.class_list();
        match theme {
            Theme::Light => _ = cl.add_1("light"),
            Theme::Dark => _ = cl.remove_1("light"),
        }
    }
}

/// Theme currently applied to the document root.
pub fn current_theme(document: &web::Document) -> Theme {
    let light = document
        .document_element()
        .map(|root| root.class_list().contains("light"))
        .unwrap_or(false);
    Theme::from_applied(light)
}

pub fn root_is_light() -> bool {
    crate::dom::window_document()
        .map(|d| current_theme(&d) == Theme::Light)
        .unwrap_or(false)
}

/// Flip, apply and best-effort persist the theme. The current value comes
/// from the applied DOM state, not storage, so toggling keeps alternating
/// when localStorage is unavailable.
pub fn toggle_theme(document: &web::Document) -> Theme {
    let next = current_theme(document).toggled();
    store_theme(next);
    apply_theme(document, next);
    log::info!("[theme] switched to {}", next.as_str());
    next
}
