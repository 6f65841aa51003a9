//! Virtualized list with stable keys and memoized rows.
//!
//! `Model<I>` shows a large [`Collection`] of items while only ever rendering
//! the rows near its viewport.
//!
//! ## Architecture Overview
//!
//! - **Keys, not positions**: a key extractor maps each item to a string. The
//!   row cache is keyed by it, so inserting or reordering records keeps the
//!   cached rows of every record that did not change.
//! - **Identity memoization**: a cached row is reused while its item is the
//!   same `Arc`. Replacing one record in the collection re-renders that row
//!   and nothing else.
//! - **Virtualization**: rows share one height, so the visible window is pure
//!   arithmetic on the scroll offset. The list realizes the visible rows plus
//!   `overscan` rows on each side and drops every other cached row after each
//!   frame.
//! - **Separators**: drawn once per gap between two realized rows, never
//!   before the first row or after the last one.
//!
//! ## Example
//!
//! ```
//! use bubbletea_flatlist::flatlist::{Model, Separator};
//! use bubbletea_flatlist::record::{self, Record};
//! use bubbletea_flatlist::flatlist::ItemDelegate;
//!
//! struct Plain;
//! impl ItemDelegate<Record> for Plain {
//!     fn render(&self, item: &Record, _width: usize) -> String {
//!         item.text.clone()
//!     }
//! }
//!
//! struct Dashes;
//! impl Separator for Dashes {
//!     fn render(&self, _width: usize) -> String {
//!         "--".to_string()
//!     }
//! }
//!
//! let data = record::generate(2);
//! let list = Model::new(data, record::key_of, Plain, 20, 10).with_separator(Dashes);
//! assert_eq!(list.view(), "Item 0\n--\nItem 1");
//! ```

mod cache;
mod collection;
mod keys;
mod model;
mod rendering;
mod scroll;
mod style;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use collection::Collection;
pub use keys::FlatListKeyMap;
pub use model::{Model, DEFAULT_OVERSCAN};
pub use style::{FlatListStyles, LineSeparator, SEPARATOR_RUNE};
pub use types::{ItemDelegate, ItemLayout, KeyExtractor, RenderStats, ScrollAlign, Separator};

use crate::record::{self, Record, RecordDelegate};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl BubbleTeaModel for Model<Record> {
    /// Creates the demo list: [`record::DEFAULT_RECORD_COUNT`] records in an
    /// 80×24 area.
    fn init() -> (Self, Option<Cmd>) {
        let data = record::generate(record::DEFAULT_RECORD_COUNT);
        let model = Self::new(data, record::key_of, RecordDelegate::new(), 80, 24);
        (model, None)
    }

    /// Scrolls on key presses; ignores other messages.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
