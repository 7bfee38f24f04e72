//! Source prefix dispatch.

use super::binding::SourceBinding;

/// Tokens reserved for the built-in template sources.
pub const BUILTIN_PREFIXES: [&str; 4] = ["gh", "ghg", "ghc", "tt"];

/// The source a template reference points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePrefix {
    /// `gh:` github/gitignore, repository root.
    Gh,
    /// `ghg:` github/gitignore, `Global` directory.
    Ghg,
    /// `ghc:` github/gitignore, `community` directory.
    Ghc,
    /// `tt:` toptal/gitignore, `templates` directory.
    Tt,
    /// A user-registered repository alias.
    Custom(String),
}

impl SourcePrefix {
    /// Classify a prefix token. Built-in tokens are matched case-sensitively.
    pub fn parse(token: &str) -> Self {
        match token {
            "gh" => Self::Gh,
            "ghg" => Self::Ghg,
            "ghc" => Self::Ghc,
            "tt" => Self::Tt,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The token as written on the command line.
    pub fn token(&self) -> &str {
        match self {
            Self::Gh => "gh",
            Self::Ghg => "ghg",
            Self::Ghc => "ghc",
            Self::Tt => "tt",
            Self::Custom(alias) => alias,
        }
    }

    /// Label shown in banners.
    pub fn label(&self) -> String {
        self.token().to_uppercase()
    }

    /// Fixed coordinates for the built-in sources.
    pub fn builtin_binding(&self) -> Option<SourceBinding> {
        match self {
            Self::Gh => Some(SourceBinding::new("github", "gitignore", "")),
            Self::Ghg => Some(SourceBinding::new("github", "gitignore", "Global")),
            Self::Ghc => Some(SourceBinding::new("github", "gitignore", "community")),
            Self::Tt => Some(SourceBinding::new("toptal", "gitignore", "templates")),
            Self::Custom(_) => None,
        }
    }

    /// Whether this is one of the built-in sources.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl std::fmt::Display for SourcePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
