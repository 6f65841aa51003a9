//! Text records and their stock renderer.
//!
//! A [`Record`] is the simplest list entry: a stable numeric id and the text
//! to show. [`generate`] builds the deterministic demo data set and
//! [`RecordDelegate`] draws one record per line.
//!
//! ```rust
//! use bubbletea_flatlist::record::{self, RecordDelegate};
//! use bubbletea_flatlist::flatlist::Model;
//!
//! let data = record::generate(1000);
//! let list = Model::new(data, record::key_of, RecordDelegate::new(), 80, 20);
//! assert_eq!(list.len(), 1000);
//! ```

use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

use crate::flatlist::{Collection, ItemDelegate};

/// Number of records in the demo data set.
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique, stable identifier.
    pub id: u64,
    /// Text shown in the row.
    pub text: String,
}

impl Record {
    /// Creates a record.
    pub fn new(id: u64, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Builds `n` records with ids `0..n` and text `"Item {id}"`.
///
/// Call it once and keep the returned collection; the list relies on the
/// records keeping their identity between frames.
pub fn generate(n: usize) -> Collection<Record> {
    (0..n as u64)
        .map(|id| Record::new(id, &format!("Item {}", id)))
        .collect()
}

/// Key extractor for records: the id in decimal.
pub fn key_of(record: &Record) -> String {
    record.id.to_string()
}

/// Renders a record's text on a single line.
#[derive(Debug, Clone)]
pub struct RecordDelegate {
    /// Style of the row.
    pub style: Style,
}

impl Default for RecordDelegate {
    fn default() -> Self {
        Self {
            style: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1A1A1A",
                    Dark: "#DDDDDD",
                })
                .padding_left(1),
        }
    }
}

impl RecordDelegate {
    /// Creates a delegate with the default row style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the row style (builder pattern).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl ItemDelegate<Record> for RecordDelegate {
    fn render(&self, item: &Record, width: usize) -> String {
        // leave room for the one-column left padding
        let text = truncate_to_width(&item.text, width.saturating_sub(1));
        self.style.render(&text)
    }
}

/// Cuts `s` to at most `width` display columns, ending with `…` when cut.
pub(crate) fn truncate_to_width(s: &str, width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        // reserve one column for the ellipsis
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
