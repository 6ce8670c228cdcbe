//! Design-token lookup shared by the theme resolution engine.

/// Palette names selectable in the custom-theme flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorName {
    /// Rose palette.
    Rose,
    /// Orange palette.
    Orange,
    /// Yellow palette.
    Yellow,
    /// Lime palette.
    Lime,
    /// Emerald palette.
    Emerald,
    /// Indigo palette.
    Indigo,
    /// Purple palette.
    Purple,
    /// Pink palette.
    Pink,
    /// Slate palette, also the default source for secondary text shades.
    Slate,
}

impl ColorName {
    /// Identifier used in storage and in CSS token names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rose => "rose",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Emerald => "emerald",
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Slate => "slate",
        }
    }

    /// Parse a persisted palette name; unknown names are absent.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|name| name.as_str() == value)
    }

    /// All supported palettes in presentation order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Rose,
            Self::Orange,
            Self::Yellow,
            Self::Lime,
            Self::Emerald,
            Self::Indigo,
            Self::Purple,
            Self::Pink,
            Self::Slate,
        ]
    }
}

/// Source of themeable color values keyed by palette name and numeric shade.
///
/// Missing tokens are a silent, valid result: `None` makes the engine skip
/// the corresponding style variable instead of erroring.
pub trait TokenSource {
    /// Resolve the concrete value behind `--color-{name}-{shade}`.
    fn resolve(&self, name: &str, shade: u16) -> Option<String>;
}

/// Fixed in-memory token table, used where no rendering surface exists.
#[derive(Clone, Debug, Default)]
pub struct StaticTokens {
    entries: Vec<(String, String)>,
}

impl StaticTokens {
    /// Build a table from `((name, shade), value)` style entries.
    #[must_use]
    pub fn new<I, N, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = ((N, u16), V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|((name, shade), value)| (format!("{}-{shade}", name.into()), value.into()))
                .collect(),
        }
    }
}

impl TokenSource for StaticTokens {
    fn resolve(&self, name: &str, shade: u16) -> Option<String> {
        let key = format!("{name}-{shade}");
        self.entries
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, value)| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorName, StaticTokens, TokenSource};

    #[test]
    fn palette_names_round_trip() {
        for name in ColorName::all() {
            assert_eq!(ColorName::from_name(name.as_str()), Some(name));
        }
        assert_eq!(ColorName::from_name("mauve"), None);
    }

    #[test]
    fn static_tokens_resolve_deterministically() {
        let tokens = StaticTokens::new([(("emerald", 500), "#10b981")]);
        assert_eq!(tokens.resolve("emerald", 500).as_deref(), Some("#10b981"));
        assert_eq!(tokens.resolve("emerald", 500), tokens.resolve("emerald", 500));
        assert_eq!(tokens.resolve("emerald", 50), None);
        assert_eq!(tokens.resolve("rose", 500), None);
    }
}
