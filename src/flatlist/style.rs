//! Styling for the list container and its stock separator.
//!
//! Colors are `AdaptiveColor`s so the defaults read well on light and dark
//! terminals. Rows are styled by their delegate, not here.
//!
//! ```rust
//! use bubbletea_flatlist::flatlist::{FlatListStyles, LineSeparator};
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = FlatListStyles::default();
//! styles.no_items = Style::new().italic(true);
//!
//! let separator = LineSeparator::new().with_rune("┈");
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

use super::types::Separator;

/// Box-drawing rule used by the default separator.
pub const SEPARATOR_RUNE: &str = "─";

/// Styles for the parts of the list the container draws itself.
#[derive(Debug, Clone)]
pub struct FlatListStyles {
    /// Empty-state text shown when the collection has no items.
    pub no_items: Style,
    /// Help line shown under the rows when enabled.
    pub help: Style,
}

impl Default for FlatListStyles {
    fn default() -> Self {
        Self {
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
        }
    }
}

impl FlatListStyles {
    /// Styles that add no escape codes, for tests and plain output.
    pub fn plain() -> Self {
        Self {
            no_items: Style::new(),
            help: Style::new(),
        }
    }
}

/// A thin horizontal rule spanning the row width.
#[derive(Debug, Clone)]
pub struct LineSeparator {
    /// Style applied to the rule.
    pub style: Style,
    rune: String,
}

impl Default for LineSeparator {
    fn default() -> Self {
        Self {
            style: Style::new().foreground(AdaptiveColor {
                Light: "#EEEEEE",
                Dark: "#3C3C3C",
            }),
            rune: SEPARATOR_RUNE.to_string(),
        }
    }
}

impl LineSeparator {
    /// Creates the default faint `─` rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `rune` instead of `─` (builder pattern).
    pub fn with_rune(mut self, rune: &str) -> Self {
        self.rune = rune.to_string();
        self
    }

    /// Replaces the rule's style (builder pattern).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Separator for LineSeparator {
    fn render(&self, width: usize) -> String {
        let rune_width = lipgloss::width_visible(&self.rune).max(1);
        self.style.render(&self.rune.repeat(width / rune_width))
    }
}
