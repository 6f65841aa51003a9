//! Frame rendering.
//!
//! A frame realizes the rows in the realized window, joins them with
//! separators into one strip of lines, and cuts the viewport out of that strip.
//! Rows come from the row cache when their item is unchanged; afterwards the
//! cache is pruned to the realized keys so it never outgrows the window.

use std::collections::HashSet;

use tracing::trace;

use super::Model;
use crate::key;

impl<I: Send + Sync + 'static> Model<I> {
    /// Renders the visible part of the list.
    ///
    /// An empty list renders its empty-state text and no rows or separators.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();

        if self.is_empty() {
            sections.push(self.styles.no_items.render(&self.empty_text));
        } else {
            let rows = self.view_rows();
            if !rows.is_empty() {
                sections.push(rows);
            }
        }

        if self.show_help && self.height > 0 {
            sections.push(self.view_help());
        }

        sections.join("\n")
    }

    /// Renders the rows and separators inside the viewport.
    pub(super) fn view_rows(&self) -> String {
        let geometry = self.geometry();
        let window = self.window();
        let width = self.width;

        let mut frame = self.frame.lock();
        let state = &mut *frame;
        state.stats.frames += 1;

        let mut lines: Vec<String> = Vec::new();
        let mut realized_keys: HashSet<String> = HashSet::with_capacity(window.realized.len());

        for index in window.realized.clone() {
            let item = &self.data[index];

            if index > window.realized.start {
                if let Some(separator) = &self.separator {
                    lines.extend(fit_lines(&separator.render(width), separator.height()));
                    state.stats.separator_renders += 1;
                }
            }

            let key = (self.key_extractor)(&**item);
            let (row, hit) = state.cache.get_or_render(&key, item, width, || {
                fit_lines(&self.delegate.render(item, width), geometry.row_height)
            });
            lines.extend_from_slice(row);

            if hit {
                state.stats.cache_hits += 1;
            } else {
                state.stats.item_renders += 1;
            }
            realized_keys.insert(key);
        }

        state.cache.retain(&realized_keys);
        state.stats.realized_rows = window.realized.len();
        state.stats.peak_realized = state.stats.peak_realized.max(window.realized.len());
        trace!(
            visible = ?window.visible,
            realized = ?window.realized,
            cached = state.cache.len(),
            "rendered list frame"
        );

        let offset = self.y_offset.min(self.max_y_offset());
        let skip = offset.saturating_sub(window.realized.start * geometry.stride());
        lines
            .into_iter()
            .skip(skip)
            .take(geometry.viewport_height)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the one-line key help.
    pub(super) fn view_help(&self) -> String {
        self.styles.help.render(&key::short_help_view(&self.keymap))
    }
}

/// Splits `s` into exactly `height` lines, padding with empty lines or
/// dropping the excess.
fn fit_lines(s: &str, height: usize) -> Vec<String> {
    let mut lines: Vec<String> = s.lines().take(height).map(str::to_string).collect();
    lines.resize(height, String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::fit_lines;

    #[test]
    fn test_fit_lines() {
        assert_eq!(fit_lines("a", 1), vec!["a"]);
        assert_eq!(fit_lines("a\nb\nc", 2), vec!["a", "b"]);
        assert_eq!(fit_lines("a", 3), vec!["a", "", ""]);
        assert_eq!(fit_lines("", 1), vec![""]);
        assert!(fit_lines("a", 0).is_empty());
    }
}
