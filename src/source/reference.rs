//! Template reference parsing.

/// Separator between a source prefix and a template name.
pub const PREFIX_SEPARATOR: char = ':';

/// A template as requested on the command line.
///
/// `gh:Go` has the prefix `gh` and the name `Go`. A reference without a
/// separator has no prefix and names a template in the local store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReference {
    raw: String,
    prefix: Option<String>,
    name: String,
}

impl TemplateReference {
    /// Parse a raw command-line argument.
    ///
    /// Only the first separator splits; any later `:` stays in the name.
    /// Every string is a syntactically valid reference.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(PREFIX_SEPARATOR) {
            Some((prefix, name)) => Self {
                raw: raw.to_string(),
                prefix: Some(prefix.trim().to_string()),
                name: name.trim().to_string(),
            },
            None => Self {
                raw: raw.to_string(),
                prefix: None,
                name: raw.trim().to_string(),
            },
        }
    }

    /// The argument exactly as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The source prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this reference targets the local template store.
    pub fn is_local(&self) -> bool {
        self.prefix.is_none()
    }
}

impl std::fmt::Display for TemplateReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
