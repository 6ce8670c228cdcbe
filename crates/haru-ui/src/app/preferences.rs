//! Persistence helpers for theme, session, and navigation preferences.

use crate::core::auth::Session;
use crate::core::menu::{self, MenuItem};
use crate::core::theme::{CustomThemeSettings, ThemeId};
use crate::core::tokens::ColorName;
use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, SessionStorage, Storage};
use serde::Serialize;

pub(crate) const THEME_KEY: &str = "theme";
pub(crate) const CUSTOM_SETTINGS_KEY: &str = "customThemeSettings";
pub(crate) const CUSTOM_COLOR_KEY: &str = "customThemeColor";
pub(crate) const LOGGED_IN_KEY: &str = "isLoggedIn";
pub(crate) const USER_EMAIL_KEY: &str = "userEmail";
pub(crate) const MENU_ORDER_KEY: &str = "menuOrder";
pub(crate) const DEFAULT_PAGE_KEY: &str = "defaultPage";
pub(crate) const REDIRECTED_KEY: &str = "hasDefaultRedirected";

pub(crate) fn load_theme() -> ThemeId {
    if let Ok(value) = LocalStorage::get::<String>(THEME_KEY) {
        if let Some(theme) = ThemeId::from_name(&value) {
            return theme;
        }
    }
    ThemeId::Default
}

pub(crate) fn persist_theme(theme: ThemeId) {
    set_storage(THEME_KEY, theme.as_str());
}

/// Manual custom-theme record, or absent when missing or malformed.
///
/// A record that fails to parse is logged and treated as absent so the
/// resolution engine falls through to the auto tier.
pub(crate) fn load_custom_settings() -> Option<CustomThemeSettings> {
    match LocalStorage::get::<CustomThemeSettings>(CUSTOM_SETTINGS_KEY) {
        Ok(settings) => Some(settings),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            console::error!(
                "failed to parse stored custom theme settings",
                err.to_string()
            );
            None
        }
    }
}

pub(crate) fn persist_custom_settings(settings: &CustomThemeSettings) {
    set_storage(CUSTOM_SETTINGS_KEY, settings);
}

pub(crate) fn clear_custom_settings() {
    delete_storage(CUSTOM_SETTINGS_KEY);
}

pub(crate) fn load_auto_color() -> Option<ColorName> {
    let value = LocalStorage::get::<String>(CUSTOM_COLOR_KEY).ok()?;
    ColorName::from_name(&value)
}

pub(crate) fn persist_auto_color(color: ColorName) {
    set_storage(CUSTOM_COLOR_KEY, color.as_str());
}

pub(crate) fn load_session() -> Option<Session> {
    let logged_in = LocalStorage::get::<bool>(LOGGED_IN_KEY).unwrap_or(false);
    if !logged_in {
        return None;
    }
    let email = LocalStorage::get::<String>(USER_EMAIL_KEY).unwrap_or_default();
    Some(Session { email })
}

pub(crate) fn persist_session(session: &Session) {
    set_storage(LOGGED_IN_KEY, true);
    set_storage(USER_EMAIL_KEY, &session.email);
}

pub(crate) fn clear_session() {
    delete_storage(LOGGED_IN_KEY);
    delete_storage(USER_EMAIL_KEY);
}

pub(crate) fn load_menu() -> Vec<MenuItem> {
    let saved = LocalStorage::get::<Vec<String>>(MENU_ORDER_KEY).unwrap_or_default();
    menu::ordered(&saved)
}

pub(crate) fn persist_menu_order(items: &[MenuItem]) {
    set_storage(MENU_ORDER_KEY, menu::order_ids(items));
}

pub(crate) fn load_default_page() -> Option<String> {
    LocalStorage::get::<String>(DEFAULT_PAGE_KEY).ok()
}

pub(crate) fn persist_default_page(page: &str) {
    set_storage(DEFAULT_PAGE_KEY, page);
}

pub(crate) fn has_redirected() -> bool {
    SessionStorage::get::<bool>(REDIRECTED_KEY).unwrap_or(false)
}

pub(crate) fn mark_redirected() {
    if let Err(err) = SessionStorage::set(REDIRECTED_KEY, true) {
        log_storage_error("set", REDIRECTED_KEY, &err.to_string());
    }
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
