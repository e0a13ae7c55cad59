//! The assembled theme value and its CSS forms.
//!
//! A [`Theme`] is a name, a color scheme, and an ordered map from [`Token`]
//! to a string value. Because `Token`'s ordering is the canonical emission
//! order, serializers simply walk the map.
//!
//! Three text forms:
//!
//! - [`Theme::to_css`]: `--color-base-100:oklch(...);--color-base-200:...`
//!   on one line, for inline `style` attributes.
//! - [`Theme::to_plugin_css`]: a daisyUI `@plugin "daisyui/theme"` block.
//! - [`Theme::from_css`]: the inverse of either, tolerant of junk.

use std::collections::BTreeMap;
use std::fmt;

use hue_color::Color;

use crate::schema::Token;
use crate::text::{TextColorOptions, generate_accessible_text_color};

/// Light or dark, as emitted in `color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse `light`/`dark`, quoted or not.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().trim_matches('"') {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Guess the scheme from a base-100 color: below 50% lightness is dark.
    fn infer(base100: Option<&str>) -> Self {
        base100
            .and_then(|v| Color::parse(v).ok())
            .map_or(Self::Light, |c| Self::from_dark(c.l < 0.5))
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated or hand-edited theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub color_scheme: ColorScheme,
    tokens: BTreeMap<Token, String>,
}

impl Theme {
    /// An empty theme.
    #[must_use]
    pub fn new(name: impl Into<String>, color_scheme: ColorScheme) -> Self {
        Self {
            name: name.into(),
            color_scheme,
            tokens: BTreeMap::new(),
        }
    }

    /// Value of a token, if set.
    #[must_use]
    pub fn get(&self, token: Token) -> Option<&str> {
        self.tokens.get(&token).map(String::as_str)
    }

    /// Value by string key (`--color-primary`, `primary`, `--radius-box`).
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&str> {
        Token::from_key(key).and_then(|t| self.get(t))
    }

    pub(crate) fn insert(&mut self, token: Token, value: impl Into<String>) {
        self.tokens.insert(token, value.into());
    }

    /// Set one token verbatim.
    #[must_use]
    pub fn with_token(mut self, token: Token, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    /// Set a color token. If it is a background, its content token is
    /// recomputed for readability. Only base-100 drives `base-content`;
    /// editing base-200 or base-300 leaves it alone.
    #[must_use]
    pub fn with_color(mut self, token: Token, value: impl Into<String>) -> Self {
        let value = value.into();
        let content = match token {
            Token::Base200 | Token::Base300 => None,
            other => other.content(),
        };
        if let Some(content) = content {
            let text = generate_accessible_text_color(&value, &TextColorOptions::default());
            self.insert(content, text);
        }
        self.insert(token, value);
        self
    }

    /// Set tokens in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> {
        self.tokens.iter().map(|(t, v)| (*t, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Schema tokens this theme does not set, in canonical order.
    #[must_use]
    pub fn missing_tokens(&self) -> Vec<Token> {
        Token::ALL
            .into_iter()
            .filter(|t| !self.tokens.contains_key(t))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tokens.len() == Token::ALL.len()
    }

    // -----------------------------------------------------------------------
    // CSS
    // -----------------------------------------------------------------------

    /// Inline custom-property declarations, canonical order, no whitespace.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(t, v)| format!("{}:{v};", t.css_var()))
            .collect()
    }

    /// A daisyUI theme plugin block.
    #[must_use]
    pub fn to_plugin_css(&self, default: bool, prefers_dark: bool) -> String {
        let mut out = String::from("@plugin \"daisyui/theme\" {\n");
        out.push_str(&format!("  name: \"{}\";\n", escape_css_string(&self.name)));
        out.push_str(&format!("  default: {default};\n"));
        out.push_str(&format!("  prefersdark: {prefers_dark};\n"));
        out.push_str(&format!("  color-scheme: \"{}\";\n", self.color_scheme));
        for (token, value) in self.iter() {
            out.push_str(&format!("  {}: {value};\n", token.css_var()));
        }
        out.push_str("}\n");
        out
    }

    /// Parse declarations from either CSS form.
    ///
    /// Unknown keys and malformed declarations are skipped. The scheme comes
    /// from a `color-scheme` declaration when present, else from base-100.
    #[must_use]
    pub fn from_css(name: impl Into<String>, css: &str) -> Self {
        let mut tokens = BTreeMap::new();
        let mut scheme = None;

        for decl in css.split(';') {
            // Drop any `@plugin ... {` prefix or closing brace.
            let decl = decl
                .rsplit('{')
                .next()
                .unwrap_or(decl)
                .trim_matches(|c: char| c == '}' || c.is_whitespace());
            let Some((key, value)) = decl.split_once(':') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            if value.is_empty() {
                continue;
            }
            if key == "color-scheme" {
                scheme = ColorScheme::parse(value).or(scheme);
            } else if let Some(token) = Token::from_key(key) {
                tokens.insert(token, value.to_owned());
            }
        }

        let color_scheme = scheme
            .unwrap_or_else(|| ColorScheme::infer(tokens.get(&Token::Base100).map(String::as_str)));
        Self {
            name: name.into(),
            color_scheme,
            tokens,
        }
    }
}

/// Escape `"` and `\` for a double-quoted CSS string.
fn escape_css_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

// ---------------------------------------------------------------------------
// serde: flat object { "name", "color-scheme", "--color-base-100", ... }
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl serde::Serialize for Theme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.tokens.len() + 2))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("color-scheme", self.color_scheme.as_str())?;
        for (token, value) in &self.tokens {
            map.serialize_entry(token.css_var(), value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let mut raw = <BTreeMap<String, String> as serde::Deserialize>::deserialize(deserializer)?;
        let name = raw.remove("name").ok_or_else(|| D::Error::missing_field("name"))?;
        let scheme = match raw.remove("color-scheme") {
            Some(s) => Some(
                ColorScheme::parse(&s)
                    .ok_or_else(|| D::Error::unknown_variant(&s, &["light", "dark"]))?,
            ),
            None => None,
        };

        let tokens: BTreeMap<Token, String> = raw
            .into_iter()
            .filter_map(|(k, v)| Token::from_key(&k).map(|t| (t, v)))
            .collect();
        let color_scheme = scheme
            .unwrap_or_else(|| ColorScheme::infer(tokens.get(&Token::Base100).map(String::as_str)));

        Ok(Self {
            name,
            color_scheme,
            tokens,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
