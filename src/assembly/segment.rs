//! Resolved templates and the pure assembly fold.

use super::banner::{banner_title, render_banner};

/// Separator appended after every template's content.
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// One successfully resolved template, ready to be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The argument as given on the command line.
    pub reference: String,
    /// Source label shown in the banner (`GH`, `TT`, `LOCAL`, ...).
    pub source_label: String,
    /// Fetched template content.
    pub content: String,
}

impl Segment {
    /// Create a segment.
    pub fn new(
        reference: impl Into<String>,
        source_label: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            source_label: source_label.into(),
            content: content.into(),
        }
    }

    /// Banner, content and trailing separator for this segment.
    pub fn render(&self) -> String {
        let mut out = render_banner(&banner_title(&self.reference, &self.source_label));
        out.push_str(&self.content);
        out.push_str(SEGMENT_SEPARATOR);
        out
    }
}

/// Merge segments, in order, into the final `.gitignore` text.
///
/// No deduplication: a template requested twice appears twice.
pub fn assemble(segments: &[Segment]) -> String {
    segments.iter().fold(String::new(), |mut out, segment| {
        out.push_str(&segment.render());
        out
    })
}
