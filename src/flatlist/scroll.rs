//! Scrolling: line, page and programmatic navigation.
//!
//! The scroll position is a line offset into the content. Every operation
//! clamps it to `0..=content_height - viewport_height`, so the last row never
//! scrolls above the bottom edge.

use bubbletea_rs::KeyMsg;

use super::types::ScrollAlign;
use super::Model;
use crate::error::{FlatListError, Result};

impl<I: Send + Sync + 'static> Model<I> {
    /// Current scroll position in lines.
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// Scrolls to line `n`, clamped to the valid range.
    pub fn set_y_offset(&mut self, n: usize) {
        self.y_offset = n.min(self.max_y_offset());
    }

    /// Returns true if the first line is at the top of the viewport.
    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    /// Returns true if the last line is at the bottom of the viewport.
    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Scroll progress from 0.0 (top) to 1.0 (bottom).
    ///
    /// Content that fits the viewport reports 1.0.
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_y_offset();
        if max == 0 {
            return 1.0;
        }
        (self.y_offset as f64 / max as f64).clamp(0.0, 1.0)
    }

    /// Scrolls down `n` lines.
    pub fn scroll_down(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_add(n));
    }

    /// Scrolls up `n` lines.
    pub fn scroll_up(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_sub(n));
    }

    /// Scrolls down one viewport.
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height().max(1));
    }

    /// Scrolls up one viewport.
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height().max(1));
    }

    /// Scrolls down half a viewport.
    pub fn half_page_down(&mut self) {
        self.scroll_down((self.viewport_height() / 2).max(1));
    }

    /// Scrolls up half a viewport.
    pub fn half_page_up(&mut self) {
        self.scroll_up((self.viewport_height() / 2).max(1));
    }

    /// Scrolls to the first row.
    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    /// Scrolls so the last row sits at the bottom.
    pub fn goto_bottom(&mut self) {
        self.y_offset = self.max_y_offset();
    }

    /// Scrolls the row at `index` into view.
    ///
    /// The final position is clamped, so rows near the ends of the list may
    /// not land exactly where `align` asks.
    ///
    /// # Errors
    ///
    /// [`FlatListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_flatlist::flatlist::{Model, ScrollAlign};
    /// use bubbletea_flatlist::record::{self, RecordDelegate};
    ///
    /// let mut list = Model::new(record::generate(100), record::key_of, RecordDelegate::new(), 40, 10);
    /// list.scroll_to_index(50, ScrollAlign::Start).unwrap();
    /// assert_eq!(list.visible_range().start, 50);
    ///
    /// assert!(list.scroll_to_index(100, ScrollAlign::Start).is_err());
    /// ```
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> Result<()> {
        let layout = self.item_layout(index).ok_or(FlatListError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        let viewport = self.viewport_height();

        let target = match align {
            ScrollAlign::Start => layout.offset,
            ScrollAlign::Center => (layout.offset + layout.length / 2).saturating_sub(viewport / 2),
            ScrollAlign::End => (layout.offset + layout.length).saturating_sub(viewport),
        };
        self.set_y_offset(target);
        Ok(())
    }

    /// Scrolls the row whose item has `key` into view.
    ///
    /// # Errors
    ///
    /// [`FlatListError::KeyNotFound`] if no item has this key.
    pub fn scroll_to_key(&mut self, key: &str, align: ScrollAlign) -> Result<()> {
        let index = self
            .index_of_key(key)
            .ok_or_else(|| FlatListError::KeyNotFound(key.to_string()))?;
        self.scroll_to_index(index, align)
    }

    /// Applies a key press to the scroll position.
    ///
    /// Returns true if the key matched one of the list's bindings.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> bool {
        if self.keymap.line_down.matches(key_msg) {
            self.scroll_down(1);
        } else if self.keymap.line_up.matches(key_msg) {
            self.scroll_up(1);
        } else if self.keymap.page_down.matches(key_msg) {
            self.page_down();
        } else if self.keymap.page_up.matches(key_msg) {
            self.page_up();
        } else if self.keymap.half_page_down.matches(key_msg) {
            self.half_page_down();
        } else if self.keymap.half_page_up.matches(key_msg) {
            self.half_page_up();
        } else if self.keymap.go_to_top.matches(key_msg) {
            self.goto_top();
        } else if self.keymap.go_to_bottom.matches(key_msg) {
            self.goto_bottom();
        } else {
            return false;
        }
        true
    }
}
