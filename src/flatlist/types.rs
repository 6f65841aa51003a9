//! Core traits and value types for the list component.
//!
//! - `ItemDelegate` renders one item into a row
//! - `Separator` renders the divider between two rows
//! - `ItemLayout`, `ScrollAlign` and `RenderStats` describe geometry, scroll
//!   targets and rendering work

/// Extracts the stable identity of an item.
///
/// The list uses the key, not the item's position, to find the cached row of a
/// record after the collection changes.
pub type KeyExtractor<I> = Box<dyn Fn(&I) -> String + Send + Sync>;

/// Renders items into rows.
///
/// `render` must be a pure function of its arguments: the list calls it only
/// when the item reference or the width changed since the row was last
/// rendered, and reuses the previous output otherwise.
///
/// # Examples
///
/// ```
/// use bubbletea_flatlist::flatlist::ItemDelegate;
///
/// struct Bulleted;
///
/// impl ItemDelegate<String> for Bulleted {
///     fn render(&self, item: &String, _width: usize) -> String {
///         format!("• {}", item)
///     }
/// }
///
/// assert_eq!(Bulleted.render(&"milk".to_string(), 80), "• milk");
/// assert_eq!(ItemDelegate::<String>::height(&Bulleted), 1);
/// ```
pub trait ItemDelegate<I> {
    /// Renders `item` as a row at most `width` columns wide.
    fn render(&self, item: &I, width: usize) -> String;

    /// Height of every row in terminal lines.
    ///
    /// Rendered rows are padded or cut to this height so the list can compute
    /// row offsets without rendering anything. Zero is treated as one.
    fn height(&self) -> usize {
        1
    }
}

/// Renders the divider placed between two adjacent rows.
///
/// Separators are stateless. The list calls `render` once per gap between
/// consecutive realized rows and never before the first or after the last row.
pub trait Separator {
    /// Renders a divider for a row of `width` columns.
    fn render(&self, width: usize) -> String;

    /// Height of the divider in terminal lines.
    fn height(&self) -> usize {
        1
    }
}

/// Position and size of one row, in lines from the top of the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLayout {
    /// Row index in the collection.
    pub index: usize,
    /// First line of the row.
    pub offset: usize,
    /// Number of lines the row occupies, separator excluded.
    pub length: usize,
}

/// Where a row should land in the viewport after a programmatic scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Row at the top of the viewport.
    #[default]
    Start,
    /// Row centered in the viewport.
    Center,
    /// Row at the bottom of the viewport.
    End,
}

/// Counters describing the rendering work done by the list.
///
/// Counters accumulate across frames until [`reset_stats`](super::Model::reset_stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Number of frames rendered.
    pub frames: usize,
    /// Calls made to the item delegate.
    pub item_renders: usize,
    /// Rows served from the cache without calling the delegate.
    pub cache_hits: usize,
    /// Calls made to the separator.
    pub separator_renders: usize,
    /// Rows realized in the most recent frame.
    pub realized_rows: usize,
    /// Largest number of rows realized in a single frame.
    pub peak_realized: usize,
}
