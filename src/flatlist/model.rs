//! The list model: data, geometry, configuration and accessors.

use std::collections::HashMap;
use std::ops::Range;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use super::cache::RowCache;
use super::collection::Collection;
use super::keys::FlatListKeyMap;
use super::style::{FlatListStyles, LineSeparator};
use super::types::{ItemDelegate, ItemLayout, KeyExtractor, RenderStats, Separator};
use super::window::{Geometry, Window};

/// Rows realized above and below the viewport by default.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Work shared between frames. `view` takes `&self`, so it lives behind a lock.
pub(super) struct FrameState<I> {
    pub cache: RowCache<I>,
    pub stats: RenderStats,
}

/// A virtualized list that renders only the rows near its viewport.
///
/// The list holds its data as a [`Collection`] reference and never copies or
/// rebuilds it. Each row is identified by the key the key extractor returns
/// for its item, and a rendered row is reused as long as the item behind that
/// key is the same `Arc`. Rows outside the viewport plus `overscan` rows on
/// either side are neither rendered nor kept.
///
/// # Examples
///
/// ```
/// use bubbletea_flatlist::flatlist::Model;
/// use bubbletea_flatlist::record::{self, RecordDelegate};
///
/// let data = record::generate(1000);
/// let mut list = Model::new(data, record::key_of, RecordDelegate::new(), 40, 10)
///     .with_overscan(2);
///
/// list.page_down();
/// assert!(list.visible_range().start > 0);
/// let _frame = list.view();
/// assert!(list.cached_rows() <= 1000);
/// ```
pub struct Model<I> {
    pub(super) data: Collection<I>,
    pub(super) key_extractor: KeyExtractor<I>,
    pub(super) delegate: Box<dyn ItemDelegate<I> + Send + Sync>,
    pub(super) separator: Option<Box<dyn Separator + Send + Sync>>,
    /// First index of every key, rebuilt when the data changes.
    pub(super) key_index: HashMap<String, usize>,

    pub(super) width: usize,
    pub(super) height: usize,
    /// Scroll position in lines from the top of the content.
    pub(super) y_offset: usize,
    pub(super) overscan: usize,
    pub(super) maintain_visible_position: bool,
    pub(super) show_help: bool,
    pub(super) empty_text: String,

    /// Styles for the empty state and help line.
    pub styles: FlatListStyles,
    /// Key bindings used by `handle_key`.
    pub keymap: FlatListKeyMap,

    pub(super) frame: Mutex<FrameState<I>>,
}

impl<I: Send + Sync + 'static> Model<I> {
    /// Creates a list over `data`.
    ///
    /// # Arguments
    ///
    /// * `data` - The collection to show; held by reference
    /// * `key_extractor` - Returns the stable identity of an item
    /// * `delegate` - Renders one item into a row
    /// * `width` - Row width in columns
    /// * `height` - Total height in lines
    ///
    /// The list starts at the top with a [`LineSeparator`] between rows and
    /// [`DEFAULT_OVERSCAN`] buffer rows.
    pub fn new<K, D>(data: Collection<I>, key_extractor: K, delegate: D, width: usize, height: usize) -> Self
    where
        K: Fn(&I) -> String + Send + Sync + 'static,
        D: ItemDelegate<I> + Send + Sync + 'static,
    {
        let mut model = Self {
            data,
            key_extractor: Box::new(key_extractor),
            delegate: Box::new(delegate),
            separator: Some(Box::new(LineSeparator::new())),
            key_index: HashMap::new(),
            width,
            height,
            y_offset: 0,
            overscan: DEFAULT_OVERSCAN,
            maintain_visible_position: false,
            show_help: false,
            empty_text: "No items.".to_string(),
            styles: FlatListStyles::default(),
            keymap: FlatListKeyMap::default(),
            frame: Mutex::new(FrameState {
                cache: RowCache::default(),
                stats: RenderStats::default(),
            }),
        };
        model.rebuild_key_index();
        model
    }

    /// Sets how many rows are realized beyond each edge of the viewport.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Draws `separator` between adjacent rows.
    pub fn with_separator<S>(mut self, separator: S) -> Self
    where
        S: Separator + Send + Sync + 'static,
    {
        self.separator = Some(Box::new(separator));
        self.clamp_offset();
        self
    }

    /// Places rows directly below each other.
    pub fn without_separator(mut self) -> Self {
        self.separator = None;
        self.clamp_offset();
        self
    }

    /// Replaces the container styles.
    pub fn with_styles(mut self, styles: FlatListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: FlatListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Sets the text shown when the collection is empty.
    pub fn with_empty_text(mut self, text: &str) -> Self {
        self.empty_text = text.to_string();
        self
    }

    /// Keeps the first visible row in place when the data changes.
    ///
    /// The row is found again by key, so inserting records above the viewport
    /// does not shift what the user is looking at.
    pub fn with_maintain_visible_position(mut self, enabled: bool) -> Self {
        self.maintain_visible_position = enabled;
        self
    }

    /// Shows a one-line key help under the rows, taking one line of height.
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self.clamp_offset();
        self
    }

    /// Replaces the data with a new collection.
    ///
    /// Passing the collection the list already holds does nothing. Rows whose
    /// item is still the same `Arc` under the same key keep their cached
    /// output; every other row is rendered again the next time it is realized.
    pub fn set_data(&mut self, data: Collection<I>) {
        if Collection::ptr_eq(&self.data, &data) {
            trace!(len = data.len(), "list data unchanged");
            return;
        }

        let anchor = if self.maintain_visible_position {
            self.top_anchor()
        } else {
            None
        };

        debug!(old_len = self.data.len(), new_len = data.len(), "replacing list data");
        self.data = data;
        self.rebuild_key_index();

        if let Some((key, old_row_offset)) = anchor {
            if let Some(&index) = self.key_index.get(&key) {
                let new_row_offset = self.geometry().layout(index).offset;
                self.y_offset = (new_row_offset + self.y_offset).saturating_sub(old_row_offset);
            }
        }
        self.clamp_offset();
    }

    /// The collection currently shown.
    pub fn data(&self) -> &Collection<I> {
        &self.data
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resizes the list.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    /// Row width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total height in lines, help line included.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Lines available for rows.
    pub fn viewport_height(&self) -> usize {
        if self.show_help {
            self.height.saturating_sub(1)
        } else {
            self.height
        }
    }

    /// Key of the item at `index`.
    pub fn key_at(&self, index: usize) -> Option<String> {
        self.data.get(index).map(|item| (self.key_extractor)(&**item))
    }

    /// Index of the first item with `key`.
    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.key_index.get(key).copied()
    }

    /// Position of the row at `index`, without rendering anything.
    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        (index < self.len()).then(|| self.geometry().layout(index))
    }

    /// Total lines of all rows and separators.
    pub fn content_height(&self) -> usize {
        self.geometry().content_height(self.len())
    }

    /// Rows with a line or an adjacent separator on screen.
    pub fn visible_range(&self) -> Range<usize> {
        self.window().visible
    }

    /// Rows realized for the current frame: visible rows plus overscan.
    pub fn realized_range(&self) -> Range<usize> {
        self.window().realized
    }

    /// Upper bound on rows realized in any frame at the current size.
    pub fn max_realized(&self) -> usize {
        self.geometry().max_realized()
    }

    /// Keys of the rows that have at least one of their own lines on screen.
    pub fn viewable_keys(&self) -> Vec<String> {
        let geometry = self.geometry();
        let top = self.y_offset;
        let bottom = top + geometry.viewport_height;
        self.visible_range()
            .filter(|&index| {
                let layout = geometry.layout(index);
                layout.offset < bottom && layout.offset + layout.length > top
            })
            .filter_map(|index| self.key_at(index))
            .collect()
    }

    /// Rendering counters accumulated since creation or the last reset.
    pub fn stats(&self) -> RenderStats {
        self.frame.lock().stats
    }

    /// Zeroes the rendering counters.
    pub fn reset_stats(&self) {
        self.frame.lock().stats = RenderStats::default();
    }

    /// Number of rendered rows currently held in the cache.
    pub fn cached_rows(&self) -> usize {
        self.frame.lock().cache.len()
    }

    /// Drops every cached row so the next frame renders from scratch.
    pub fn clear_cache(&self) {
        self.frame.lock().cache.clear();
    }

    pub(super) fn geometry(&self) -> Geometry {
        let separator_height = self.separator.as_ref().map_or(0, |s| s.height());
        Geometry::new(
            self.delegate.height(),
            separator_height,
            self.viewport_height(),
            self.overscan,
        )
    }

    pub(super) fn window(&self) -> Window {
        self.geometry().window(self.len(), self.y_offset)
    }

    pub(super) fn max_y_offset(&self) -> usize {
        self.geometry().max_offset(self.len())
    }

    pub(super) fn clamp_offset(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }

    /// Key and offset of the row at the top of the viewport.
    fn top_anchor(&self) -> Option<(String, usize)> {
        let index = self.visible_range().start;
        let key = self.key_at(index)?;
        Some((key, self.geometry().layout(index).offset))
    }

    fn rebuild_key_index(&mut self) {
        self.key_index.clear();
        self.key_index.reserve(self.data.len());
        for (index, item) in self.data.iter().enumerate() {
            let key = (self.key_extractor)(&**item);
            if let Some(&first) = self.key_index.get(&key) {
                // rows sharing a key evict each other and re-render every frame
                warn!(%key, first, second = index, "duplicate list key");
                continue;
            }
            self.key_index.insert(key, index);
        }
    }
}
