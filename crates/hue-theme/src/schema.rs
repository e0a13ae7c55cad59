//! Theme token schema: the closed set of keys a theme can carry.
//!
//! The CSS contract is a flat list of custom properties
//! (`--color-base-100`, `--radius-box`, ...). Consumers match on those exact
//! strings and on their order, so both live here and nowhere else:
//! [`Token::ALL`] is the canonical emission order and [`Token::css_var`] the
//! canonical key.
//!
//! Colors come in background/content pairs. The three base surfaces share a
//! single `base-content`, so 11 pairs cover 20 color tokens.

/// Every key a theme can hold, in canonical CSS order.
///
/// The derived `Ord` follows declaration order, so a `BTreeMap<Token, _>`
/// iterates in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Base100,
    Base200,
    Base300,
    BaseContent,
    Primary,
    PrimaryContent,
    Secondary,
    SecondaryContent,
    Accent,
    AccentContent,
    Neutral,
    NeutralContent,
    Info,
    InfoContent,
    Success,
    SuccessContent,
    Warning,
    WarningContent,
    Error,
    ErrorContent,
    RadiusSelector,
    RadiusField,
    RadiusBox,
    SizeSelector,
    SizeField,
    Border,
    Depth,
    Noise,
}

impl Token {
    /// All tokens in canonical order.
    pub const ALL: [Self; 28] = [
        Self::Base100,
        Self::Base200,
        Self::Base300,
        Self::BaseContent,
        Self::Primary,
        Self::PrimaryContent,
        Self::Secondary,
        Self::SecondaryContent,
        Self::Accent,
        Self::AccentContent,
        Self::Neutral,
        Self::NeutralContent,
        Self::Info,
        Self::InfoContent,
        Self::Success,
        Self::SuccessContent,
        Self::Warning,
        Self::WarningContent,
        Self::Error,
        Self::ErrorContent,
        Self::RadiusSelector,
        Self::RadiusField,
        Self::RadiusBox,
        Self::SizeSelector,
        Self::SizeField,
        Self::Border,
        Self::Depth,
        Self::Noise,
    ];

    /// Short name without the CSS prefix: `base-100`, `radius-box`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base100 => "base-100",
            Self::Base200 => "base-200",
            Self::Base300 => "base-300",
            Self::BaseContent => "base-content",
            Self::Primary => "primary",
            Self::PrimaryContent => "primary-content",
            Self::Secondary => "secondary",
            Self::SecondaryContent => "secondary-content",
            Self::Accent => "accent",
            Self::AccentContent => "accent-content",
            Self::Neutral => "neutral",
            Self::NeutralContent => "neutral-content",
            Self::Info => "info",
            Self::InfoContent => "info-content",
            Self::Success => "success",
            Self::SuccessContent => "success-content",
            Self::Warning => "warning",
            Self::WarningContent => "warning-content",
            Self::Error => "error",
            Self::ErrorContent => "error-content",
            Self::RadiusSelector => "radius-selector",
            Self::RadiusField => "radius-field",
            Self::RadiusBox => "radius-box",
            Self::SizeSelector => "size-selector",
            Self::SizeField => "size-field",
            Self::Border => "border",
            Self::Depth => "depth",
            Self::Noise => "noise",
        }
    }

    /// Full custom-property name: `--color-base-100`, `--radius-box`.
    #[must_use]
    pub const fn css_var(self) -> &'static str {
        match self {
            Self::Base100 => "--color-base-100",
            Self::Base200 => "--color-base-200",
            Self::Base300 => "--color-base-300",
            Self::BaseContent => "--color-base-content",
            Self::Primary => "--color-primary",
            Self::PrimaryContent => "--color-primary-content",
            Self::Secondary => "--color-secondary",
            Self::SecondaryContent => "--color-secondary-content",
            Self::Accent => "--color-accent",
            Self::AccentContent => "--color-accent-content",
            Self::Neutral => "--color-neutral",
            Self::NeutralContent => "--color-neutral-content",
            Self::Info => "--color-info",
            Self::InfoContent => "--color-info-content",
            Self::Success => "--color-success",
            Self::SuccessContent => "--color-success-content",
            Self::Warning => "--color-warning",
            Self::WarningContent => "--color-warning-content",
            Self::Error => "--color-error",
            Self::ErrorContent => "--color-error-content",
            Self::RadiusSelector => "--radius-selector",
            Self::RadiusField => "--radius-field",
            Self::RadiusBox => "--radius-box",
            Self::SizeSelector => "--size-selector",
            Self::SizeField => "--size-field",
            Self::Border => "--border",
            Self::Depth => "--depth",
            Self::Noise => "--noise",
        }
    }

    /// Resolve a key in any accepted spelling: `--color-primary`,
    /// `color-primary`, `primary`, `--radius-box`, `radius-box`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        let bare = key.strip_prefix("--").unwrap_or(key);
        let bare = bare.strip_prefix("color-").unwrap_or(bare);
        Self::ALL.into_iter().find(|t| t.name() == bare)
    }

    /// Whether this token holds a color.
    #[must_use]
    pub const fn is_color(self) -> bool {
        (self as u8) <= (Self::ErrorContent as u8)
    }

    /// Whether this token is a background (the first half of a pair).
    #[must_use]
    pub fn is_background(self) -> bool {
        COLOR_PAIRS.iter().any(|p| p.background == self)
    }

    /// Content token paired with this background, if it is one.
    #[must_use]
    pub fn content(self) -> Option<Self> {
        COLOR_PAIRS
            .iter()
            .find(|p| p.background == self)
            .map(|p| p.content)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Pairs and groups
// ---------------------------------------------------------------------------

/// A background token and the token holding its text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub background: Token,
    pub content: Token,
}

const fn pair(background: Token, content: Token) -> ColorPair {
    ColorPair { background, content }
}

/// The 11 background/content pairs, in generation order.
pub const COLOR_PAIRS: [ColorPair; 11] = [
    pair(Token::Base100, Token::BaseContent),
    pair(Token::Base200, Token::BaseContent),
    pair(Token::Base300, Token::BaseContent),
    pair(Token::Primary, Token::PrimaryContent),
    pair(Token::Secondary, Token::SecondaryContent),
    pair(Token::Accent, Token::AccentContent),
    pair(Token::Neutral, Token::NeutralContent),
    pair(Token::Info, Token::InfoContent),
    pair(Token::Success, Token::SuccessContent),
    pair(Token::Warning, Token::WarningContent),
    pair(Token::Error, Token::ErrorContent),
];

/// Editor grouping of color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGroup {
    pub name: &'static str,
    pub tokens: &'static [Token],
}

/// Color tokens grouped the way a theme editor lays them out.
pub const COLOR_GROUPS: [ColorGroup; 4] = [
    ColorGroup {
        name: "Base",
        tokens: &[Token::Base100, Token::Base200, Token::Base300, Token::BaseContent],
    },
    ColorGroup {
        name: "Brand",
        tokens: &[
            Token::Primary,
            Token::PrimaryContent,
            Token::Secondary,
            Token::SecondaryContent,
            Token::Accent,
            Token::AccentContent,
        ],
    },
    ColorGroup {
        name: "Neutral",
        tokens: &[Token::Neutral, Token::NeutralContent],
    },
    ColorGroup {
        name: "Status",
        tokens: &[
            Token::Info,
            Token::InfoContent,
            Token::Success,
            Token::SuccessContent,
            Token::Warning,
            Token::WarningContent,
            Token::Error,
            Token::ErrorContent,
        ],
    },
];

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Step on the base surface ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseStep {
    B100,
    B200,
    B300,
}

/// Product-identity colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandRole {
    Primary,
    Secondary,
    Accent,
}

/// Fixed-meaning status colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    Info,
    Success,
    Warning,
    Error,
}

/// How the assembler picks a background color for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Near-neutral surface ramp.
    Base(BaseStep),
    /// Hue-derived brand color.
    Brand(BrandRole),
    /// Hue-derived status color.
    Semantic(SemanticRole),
    /// Near-gray at the primary hue.
    Neutral,
    /// No rule; drawn from the caller's palette.
    Other,
}

impl ColorRole {
    /// Classify a token.
    #[must_use]
    pub const fn of(token: Token) -> Self {
        match token {
            Token::Base100 => Self::Base(BaseStep::B100),
            Token::Base200 => Self::Base(BaseStep::B200),
            Token::Base300 => Self::Base(BaseStep::B300),
            Token::Primary => Self::Brand(BrandRole::Primary),
            Token::Secondary => Self::Brand(BrandRole::Secondary),
            Token::Accent => Self::Brand(BrandRole::Accent),
            Token::Neutral => Self::Neutral,
            Token::Info => Self::Semantic(SemanticRole::Info),
            Token::Success => Self::Semantic(SemanticRole::Success),
            Token::Warning => Self::Semantic(SemanticRole::Warning),
            Token::Error => Self::Semantic(SemanticRole::Error),
            _ => Self::Other,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
