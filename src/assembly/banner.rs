//! Banner headers placed above each merged template.
//!
//! ```text
//! # *---------------------*
//! # |                     |
//! # | GH:GO Template (GH) |
//! # |                     |
//! # *---------------------*
//! ```
//!
//! Every line is a gitignore comment so the border never acts as a pattern.

const COMMENT: &str = "# ";
const CORNER: char = '*';
const HORIZONTAL: char = '-';
const VERTICAL: char = '|';
const PADDING_X: usize = 1;
const PADDING_Y: usize = 1;

/// Title text for a template: `"{RAW} Template ({SOURCE})"`.
pub fn banner_title(raw: &str, source_label: &str) -> String {
    format!(
        "{} Template ({})",
        raw.trim().to_uppercase(),
        source_label.to_uppercase()
    )
}

/// Render `title` inside the decorative border, one line per row, each
/// terminated by `\n`.
pub fn render_banner(title: &str) -> String {
    let inner_width = title.chars().count() + 2 * PADDING_X;
    let edge = format!(
        "{COMMENT}{CORNER}{}{CORNER}\n",
        HORIZONTAL.to_string().repeat(inner_width)
    );
    let blank = format!("{COMMENT}{VERTICAL}{}{VERTICAL}\n", " ".repeat(inner_width));
    let pad = " ".repeat(PADDING_X);

    let mut banner = edge.clone();
    for _ in 0..PADDING_Y {
        banner.push_str(&blank);
    }
    banner.push_str(&format!("{COMMENT}{VERTICAL}{pad}{title}{pad}{VERTICAL}\n"));
    for _ in 0..PADDING_Y {
        banner.push_str(&blank);
    }
    banner.push_str(&edge);
    banner
}
