//! Theme identity and the custom-theme resolution engine.
//!
//! # Design
//! - Resolution is a pure function from persisted state to a [`StyleSheet`];
//!   the DOM apply pass lives in the wasm layer and always clears the full
//!   variable set before writing, so no partial patching can leave stale
//!   styling behind.
//! - A manual settings record always beats the auto palette name; the two
//!   tiers are never merged.

use serde::{Deserialize, Serialize};

use crate::core::color::adjust_brightness;
use crate::core::tokens::{ColorName, TokenSource};

/// Active theme selection persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeId {
    /// Built-in warm default theme.
    #[default]
    Default,
    /// Light preset.
    Light,
    /// Dark preset.
    Dark,
    /// User-configured custom theme.
    Custom,
}

impl ThemeId {
    /// Identifier used in storage and in the `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Custom => "custom",
        }
    }

    /// Parse a persisted identifier; unknown values are absent.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "default" => Some(Self::Default),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// All selectable themes in presentation order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Default, Self::Light, Self::Dark, Self::Custom]
    }
}

/// Persisted manual custom-theme record.
///
/// Field names mirror the wire format written by the customization flow, so
/// records persisted before this crate keep parsing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomThemeSettings {
    /// Seed color the accent/border/background shades derive from.
    pub base_color: Option<String>,
    /// Optional gradient background replacing the flat background.
    pub gradient: Option<GradientSettings>,
    /// Optional text styling overrides.
    pub text: Option<TextSettings>,
    /// Palette sourcing the secondary/muted text shades; defaults to slate.
    pub text_color_name: Option<String>,
}

impl CustomThemeSettings {
    /// Palette name used for secondary and muted text shades.
    #[must_use]
    pub fn text_palette(&self) -> &str {
        self.text_color_name.as_deref().unwrap_or("slate")
    }
}

/// Linear-gradient background description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientSettings {
    /// Whether the gradient replaces the flat background.
    pub enabled: bool,
    /// CSS gradient direction (e.g. `to right`).
    pub dir: String,
    /// Start color stop.
    pub start: String,
    /// Start stop position in percent.
    pub start_pos: f64,
    /// End color stop.
    pub end: String,
    /// End stop position in percent.
    pub end_pos: f64,
}

impl GradientSettings {
    /// CSS `background` shorthand for this gradient.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "linear-gradient({}, {} {}%, {} {}%)",
            self.dir, self.start, self.start_pos, self.end, self.end_pos
        )
    }
}

/// Text styling overrides within a manual custom theme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextSettings {
    /// Primary text color.
    pub computed_color: Option<String>,
    /// Body font family.
    pub font_family: Option<String>,
    /// Body font size in pixels.
    pub font_size: Option<f64>,
}

/// Custom properties the engine may set, in the order the clear pass removes
/// them.
pub const STYLE_VARS: [&str; 10] = [
    "--bg-primary",
    "--bg-secondary",
    "--text-primary",
    "--text-secondary",
    "--text-muted",
    "--accent-primary",
    "--accent-hover",
    "--border-color",
    "--nav-bg",
    "--button-hover-bg",
];

/// Application font defaults restored when the auto tier applies.
pub const DEFAULT_FONT_FAMILY: &str = "'Noto Sans KR', sans-serif";
/// Application base font size restored when the auto tier applies.
pub const DEFAULT_FONT_SIZE: &str = "16px";

/// Fully resolved projection of document-level styling for one theme state.
///
/// The empty sheet is meaningful: it tells the apply pass to clear every
/// dynamic variable and let the static stylesheet rules take over.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    /// `(custom property, value)` pairs to set after the clear pass.
    pub vars: Vec<(&'static str, String)>,
    /// Root `background` shorthand carrying a gradient.
    pub background: Option<String>,
    /// Root `background-color` fallback behind the variables.
    pub background_color: Option<String>,
    /// Body font family override.
    pub font_family: Option<String>,
    /// Body font size override.
    pub font_size: Option<String>,
}

impl StyleSheet {
    /// Whether resolution produced no writes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
            && self.background.is_none()
            && self.background_color.is_none()
            && self.font_family.is_none()
            && self.font_size.is_none()
    }

    /// Value resolved for a custom property, if any.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| value.as_str())
    }

    fn set(&mut self, name: &'static str, value: String) {
        self.vars.push((name, value));
    }

    fn set_token(&mut self, name: &'static str, tokens: &dyn TokenSource, palette: &str, shade: u16) {
        if let Some(value) = tokens.resolve(palette, shade) {
            self.set(name, value);
        }
    }
}

/// Precedence tier backing a `custom` theme resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum CustomSource {
    /// A manual settings record exists and wins outright.
    Manual(CustomThemeSettings),
    /// No manual record; the simplified palette selection applies.
    Auto(ColorName),
    /// Neither record exists; custom resolves to the empty sheet.
    Unconfigured,
}

/// Pick the configuration tier for the custom theme.
#[must_use]
pub fn custom_source(
    manual: Option<CustomThemeSettings>,
    auto: Option<ColorName>,
) -> CustomSource {
    match (manual, auto) {
        (Some(settings), _) => CustomSource::Manual(settings),
        (None, Some(color)) => CustomSource::Auto(color),
        (None, None) => CustomSource::Unconfigured,
    }
}

/// Compute the full style projection for a theme selection.
///
/// Preset themes resolve to the empty sheet. For `custom`, a manual record
/// takes precedence over the auto palette name; with neither present the
/// result is again empty and the document keeps its stylesheet defaults.
#[must_use]
pub fn resolve(
    theme: ThemeId,
    manual: Option<CustomThemeSettings>,
    auto: Option<ColorName>,
    tokens: &dyn TokenSource,
) -> StyleSheet {
    if theme != ThemeId::Custom {
        return StyleSheet::default();
    }
    match custom_source(manual, auto) {
        CustomSource::Manual(settings) => resolve_manual(&settings, tokens),
        CustomSource::Auto(color) => resolve_auto(color, tokens),
        CustomSource::Unconfigured => StyleSheet::default(),
    }
}

/// The three optional sub-blocks (base color, background, text) apply
/// independently; a record without a base color still applies its gradient
/// and text settings.
fn resolve_manual(settings: &CustomThemeSettings, tokens: &dyn TokenSource) -> StyleSheet {
    let mut sheet = StyleSheet::default();

    if let Some(base) = &settings.base_color {
        sheet.set("--accent-primary", base.clone());
        sheet.set("--accent-hover", adjust_brightness(base, -0.10));
        sheet.set("--border-color", adjust_brightness(base, 0.40));
        sheet.set("--button-hover-bg", adjust_brightness(base, 0.85));
        sheet.set_token("--text-secondary", tokens, settings.text_palette(), 600);
        sheet.set_token("--text-muted", tokens, settings.text_palette(), 400);
    }

    // Gradient and flat background are mutually exclusive renderings: the
    // flat variable must not occlude an enabled gradient.
    match (&settings.gradient, &settings.base_color) {
        (Some(gradient), _) if gradient.enabled => {
            sheet.background = Some(gradient.css());
            sheet.set("--bg-primary", "transparent".to_string());
            sheet.background_color = Some("transparent".to_string());
        }
        (_, Some(base)) => {
            let solid = adjust_brightness(base, 0.90);
            sheet.set("--bg-primary", solid.clone());
            sheet.background_color = Some(solid);
        }
        _ => {}
    }

    if let Some(text) = &settings.text {
        if let Some(color) = &text.computed_color {
            sheet.set("--text-primary", color.clone());
        }
        if let Some(family) = &text.font_family {
            sheet.font_family = Some(family.clone());
        }
        if let Some(size) = text.font_size {
            sheet.font_size = Some(format!("{size}px"));
        }
    }

    sheet
}

fn resolve_auto(color: ColorName, tokens: &dyn TokenSource) -> StyleSheet {
    let mut sheet = StyleSheet::default();
    let name = color.as_str();
    sheet.set_token("--bg-primary", tokens, name, 50);
    sheet.set("--bg-secondary", "rgb(255 255 255)".to_string());
    sheet.set("--text-primary", "rgb(0 0 0)".to_string());
    sheet.set_token("--text-secondary", tokens, name, 600);
    sheet.set_token("--text-muted", tokens, name, 400);
    sheet.set_token("--accent-primary", tokens, name, 500);
    sheet.set_token("--accent-hover", tokens, name, 600);
    sheet.set_token("--border-color", tokens, name, 300);
    sheet.set_token("--button-hover-bg", tokens, name, 100);
    sheet.font_family = Some(DEFAULT_FONT_FAMILY.to_string());
    sheet.font_size = Some(DEFAULT_FONT_SIZE.to_string());
    sheet
}

/// Inline background fallback for full-screen overlays.
///
/// Custom themes with an enabled gradient need the gradient repeated on the
/// overlay since it covers the document root; other themes (dark excepted,
/// which styles itself via `data-theme` rules) fall back to the flat
/// background variable.
#[must_use]
pub fn screen_background(theme: ThemeId, manual: Option<&CustomThemeSettings>) -> Option<String> {
    match theme {
        ThemeId::Dark => None,
        ThemeId::Custom => {
            let gradient = manual
                .and_then(|settings| settings.gradient.as_ref())
                .filter(|gradient| gradient.enabled);
            Some(gradient.map_or_else(|| "var(--bg-primary)".to_string(), GradientSettings::css))
        }
        ThemeId::Default | ThemeId::Light => Some("var(--bg-primary)".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CustomSource, CustomThemeSettings, GradientSettings, StyleSheet, TextSettings, ThemeId,
        custom_source, resolve, screen_background,
    };
    use crate::core::color::adjust_brightness;
    use crate::core::tokens::{ColorName, StaticTokens};

    fn tokens() -> StaticTokens {
        StaticTokens::new([
            (("emerald", 50), "#ecfdf5"),
            (("emerald", 100), "#d1fae5"),
            (("emerald", 300), "#6ee7b7"),
            (("emerald", 400), "#34d399"),
            (("emerald", 500), "#10b981"),
            (("emerald", 600), "#059669"),
            (("slate", 400), "#94a3b8"),
            (("slate", 600), "#475569"),
        ])
    }

    fn manual_base() -> CustomThemeSettings {
        CustomThemeSettings {
            base_color: Some("#ff8800".to_string()),
            ..CustomThemeSettings::default()
        }
    }

    #[test]
    fn theme_id_round_trips() {
        for theme in ThemeId::all() {
            assert_eq!(ThemeId::from_name(theme.as_str()), Some(theme));
        }
        assert_eq!(ThemeId::from_name("sepia"), None);
    }

    #[test]
    fn settings_parse_wire_format() {
        let raw = r##"{
            "baseColor": "#ff8800",
            "gradient": {"enabled": true, "dir": "to right", "start": "#ffffff", "startPos": 0, "end": "#000000", "endPos": 100},
            "text": {"computedColor": "#222222", "fontFamily": "serif", "fontSize": 18},
            "textColorName": "emerald"
        }"##;
        let settings: CustomThemeSettings = serde_json::from_str(raw).unwrap();
        assert_eq!(settings.base_color.as_deref(), Some("#ff8800"));
        assert_eq!(settings.text_palette(), "emerald");
        let gradient = settings.gradient.unwrap();
        assert!(gradient.enabled);
        assert_eq!(gradient.css(), "linear-gradient(to right, #ffffff 0%, #000000 100%)");
        let text = settings.text.unwrap();
        assert_eq!(text.font_size, Some(18.0));
    }

    #[test]
    fn malformed_records_fail_to_parse() {
        assert!(serde_json::from_str::<CustomThemeSettings>("not json").is_err());
        assert!(serde_json::from_str::<CustomThemeSettings>(r#"{"gradient": 3}"#).is_err());
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let settings: CustomThemeSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CustomThemeSettings::default());
        assert_eq!(settings.text_palette(), "slate");
    }

    #[test]
    fn presets_resolve_to_the_empty_sheet() {
        let tokens = tokens();
        for theme in [ThemeId::Default, ThemeId::Light, ThemeId::Dark] {
            let sheet = resolve(theme, Some(manual_base()), Some(ColorName::Emerald), &tokens);
            assert!(sheet.is_empty());
        }
    }

    #[test]
    fn manual_base_color_derives_accent_family() {
        let sheet = resolve(ThemeId::Custom, Some(manual_base()), None, &tokens());
        assert_eq!(sheet.var("--accent-primary"), Some("#ff8800"));
        assert_eq!(
            sheet.var("--accent-hover").unwrap(),
            adjust_brightness("#ff8800", -0.10)
        );
        assert_eq!(
            sheet.var("--border-color").unwrap(),
            adjust_brightness("#ff8800", 0.40)
        );
        assert_eq!(
            sheet.var("--button-hover-bg").unwrap(),
            adjust_brightness("#ff8800", 0.85)
        );
        assert_eq!(sheet.var("--text-secondary"), Some("#475569"));
        assert_eq!(sheet.var("--text-muted"), Some("#94a3b8"));
    }

    #[test]
    fn manual_flat_background_is_a_light_tint() {
        let sheet = resolve(ThemeId::Custom, Some(manual_base()), None, &tokens());
        let tint = adjust_brightness("#ff8800", 0.90);
        assert_eq!(sheet.var("--bg-primary").unwrap(), tint);
        assert_eq!(sheet.background_color.as_deref(), Some(tint.as_str()));
        assert_eq!(sheet.background, None);
    }

    #[test]
    fn enabled_gradient_neutralizes_flat_background() {
        let mut settings = manual_base();
        settings.gradient = Some(GradientSettings {
            enabled: true,
            dir: "to right".to_string(),
            start: "#ffffff".to_string(),
            start_pos: 0.0,
            end: "#000000".to_string(),
            end_pos: 100.0,
        });
        let sheet = resolve(ThemeId::Custom, Some(settings), None, &tokens());
        assert_eq!(
            sheet.background.as_deref(),
            Some("linear-gradient(to right, #ffffff 0%, #000000 100%)")
        );
        assert_eq!(sheet.var("--bg-primary"), Some("transparent"));
        assert_eq!(sheet.background_color.as_deref(), Some("transparent"));
    }

    #[test]
    fn disabled_gradient_keeps_flat_background() {
        let mut settings = manual_base();
        settings.gradient = Some(GradientSettings::default());
        let sheet = resolve(ThemeId::Custom, Some(settings), None, &tokens());
        assert_eq!(sheet.background, None);
        assert_eq!(
            sheet.var("--bg-primary").unwrap(),
            adjust_brightness("#ff8800", 0.90)
        );
    }

    #[test]
    fn partial_manual_record_applies_only_present_blocks() {
        let settings = CustomThemeSettings {
            text: Some(TextSettings {
                computed_color: Some("#333333".to_string()),
                font_family: Some("serif".to_string()),
                font_size: Some(18.0),
            }),
            ..CustomThemeSettings::default()
        };
        let sheet = resolve(ThemeId::Custom, Some(settings), None, &tokens());
        assert_eq!(sheet.var("--accent-primary"), None);
        assert_eq!(sheet.var("--bg-primary"), None);
        assert_eq!(sheet.var("--text-primary"), Some("#333333"));
        assert_eq!(sheet.font_family.as_deref(), Some("serif"));
        assert_eq!(sheet.font_size.as_deref(), Some("18px"));
    }

    #[test]
    fn manual_record_beats_auto_color() {
        let sheet = resolve(
            ThemeId::Custom,
            Some(manual_base()),
            Some(ColorName::Emerald),
            &tokens(),
        );
        assert_eq!(sheet.var("--accent-primary"), Some("#ff8800"));
        assert!(matches!(
            custom_source(Some(manual_base()), Some(ColorName::Emerald)),
            CustomSource::Manual(_)
        ));
    }

    #[test]
    fn auto_color_derives_fixed_shade_offsets() {
        let sheet = resolve(ThemeId::Custom, None, Some(ColorName::Emerald), &tokens());
        assert_eq!(sheet.var("--bg-primary"), Some("#ecfdf5"));
        assert_eq!(sheet.var("--bg-secondary"), Some("rgb(255 255 255)"));
        assert_eq!(sheet.var("--text-primary"), Some("rgb(0 0 0)"));
        assert_eq!(sheet.var("--text-secondary"), Some("#059669"));
        assert_eq!(sheet.var("--text-muted"), Some("#34d399"));
        assert_eq!(sheet.var("--accent-primary"), Some("#10b981"));
        assert_eq!(sheet.var("--accent-hover"), Some("#059669"));
        assert_eq!(sheet.var("--border-color"), Some("#6ee7b7"));
        assert_eq!(sheet.var("--button-hover-bg"), Some("#d1fae5"));
        assert_eq!(sheet.font_family.as_deref(), Some(super::DEFAULT_FONT_FAMILY));
        assert_eq!(sheet.font_size.as_deref(), Some(super::DEFAULT_FONT_SIZE));
        assert_eq!(sheet.background, None);
    }

    #[test]
    fn missing_tokens_skip_their_variables() {
        let sheet = resolve(ThemeId::Custom, None, Some(ColorName::Rose), &tokens());
        assert_eq!(sheet.var("--bg-primary"), None);
        assert_eq!(sheet.var("--accent-primary"), None);
        // The token-independent writes still apply.
        assert_eq!(sheet.var("--bg-secondary"), Some("rgb(255 255 255)"));
    }

    #[test]
    fn unconfigured_custom_resolves_empty() {
        let sheet = resolve(ThemeId::Custom, None, None, &tokens());
        assert!(sheet.is_empty());
        assert_eq!(custom_source(None, None), CustomSource::Unconfigured);
    }

    #[test]
    fn resolution_is_idempotent_for_fixed_inputs() {
        let tokens = tokens();
        let first = resolve(
            ThemeId::Custom,
            Some(manual_base()),
            Some(ColorName::Emerald),
            &tokens,
        );
        let second = resolve(
            ThemeId::Custom,
            Some(manual_base()),
            Some(ColorName::Emerald),
            &tokens,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn empty_sheet_reports_no_writes() {
        assert!(StyleSheet::default().is_empty());
    }

    #[test]
    fn screen_background_prefers_enabled_gradients() {
        let mut settings = manual_base();
        settings.gradient = Some(GradientSettings {
            enabled: true,
            dir: "to bottom".to_string(),
            start: "#fff".to_string(),
            start_pos: 0.0,
            end: "#000".to_string(),
            end_pos: 100.0,
        });
        assert_eq!(
            screen_background(ThemeId::Custom, Some(&settings)).unwrap(),
            settings.gradient.as_ref().unwrap().css()
        );
        settings.gradient = None;
        assert_eq!(
            screen_background(ThemeId::Custom, Some(&settings)).as_deref(),
            Some("var(--bg-primary)")
        );
        assert_eq!(screen_background(ThemeId::Dark, None), None);
        assert_eq!(
            screen_background(ThemeId::Light, None).as_deref(),
            Some("var(--bg-primary)")
        );
    }
}
