//! Rendered component tree (wasm only).

pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod settings;
pub(crate) mod theme_checkbox;
pub(crate) mod theme_settings;
