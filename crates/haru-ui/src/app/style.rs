//! Document-level application of resolved theme styling.

use crate::app::preferences::{load_auto_color, load_custom_settings, persist_theme};
use crate::core::theme::{self, STYLE_VARS, StyleSheet, ThemeId};
use crate::core::tokens::TokenSource;
use gloo::utils::{body, document, window};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Token source backed by the document's computed styles.
///
/// Resolves `--color-{name}-{shade}` against the document root; absent
/// tokens and missing rendering surfaces both yield `None`.
pub(crate) struct DocumentTokens;

impl TokenSource for DocumentTokens {
    fn resolve(&self, name: &str, shade: u16) -> Option<String> {
        let root = document().document_element()?;
        let style = window().get_computed_style(&root).ok()??;
        let value = style
            .get_property_value(&format!("--color-{name}-{shade}"))
            .ok()?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Persist `theme` and rebuild the document's style variables from it.
///
/// Every invocation performs a full clear-then-set pass over the fixed
/// variable set, so successive applications cannot leave stale custom
/// styling behind and re-applying the same theme is idempotent.
pub(crate) fn apply_theme(theme: ThemeId) {
    persist_theme(theme);
    let Some(root) = document()
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());

    let sheet = theme::resolve(
        theme,
        load_custom_settings(),
        load_auto_color(),
        &DocumentTokens,
    );
    apply_sheet(&root, &sheet);
}

fn apply_sheet(root: &HtmlElement, sheet: &StyleSheet) {
    let root_style = root.style();
    for name in STYLE_VARS {
        let _ = root_style.remove_property(name);
    }
    let _ = root_style.remove_property("background");
    let _ = root_style.remove_property("background-color");
    let body_style = body().style();
    let _ = body_style.remove_property("font-family");
    let _ = body_style.remove_property("font-size");

    for (name, value) in &sheet.vars {
        let _ = root_style.set_property(name, value);
    }
    if let Some(background) = &sheet.background {
        let _ = root_style.set_property("background", background);
    }
    if let Some(color) = &sheet.background_color {
        let _ = root_style.set_property("background-color", color);
    }
    if let Some(family) = &sheet.font_family {
        let _ = body_style.set_property("font-family", family);
    }
    if let Some(size) = &sheet.font_size {
        let _ = body_style.set_property("font-size", size);
    }
}
