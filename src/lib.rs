#![warn(missing_docs)]

//! # bubbletea-flatlist
//!
//! A virtualized list component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! terminal applications, built for long lists of records.
//!
//! ## Overview
//!
//! The list follows the Elm Architecture like every bubbletea-rs component:
//! state lives in a model, key messages go through `update`, and `view` returns
//! the frame as a string. It keeps rendering cost bounded no matter how many
//! records it holds:
//!
//! - **Stable keys**: every item maps to a string key, and rendered rows are
//!   matched to items by that key rather than by position
//! - **Memoized rows**: a row is rendered again only when its item is replaced
//!   by a new allocation or the width changes
//! - **Virtualization**: only the rows in the viewport plus a small overscan
//!   buffer are realized per frame
//! - **Separators**: a stateless divider drawn between adjacent rows
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `flatlist` | The list model, its collection type, delegates and styles |
//! | `record` | Id + text records, the demo data source and their renderer |
//! | `key` | Key bindings with help text |
//! | `error` | Errors of programmatic list operations |
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_flatlist::prelude::*;
//!
//! // Build the data once and keep it; the list only holds a reference.
//! let data = record::generate(1000);
//! let mut list = FlatList::new(data, record::key_of, RecordDelegate::new(), 80, 20);
//!
//! list.scroll_to_index(500, ScrollAlign::Center).unwrap();
//! let frame = list.view();
//! assert!(frame.contains("Item 500"));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_flatlist::prelude::*;
//! use bubbletea_rs::{Cmd, KeyMsg, Model, Msg};
//!
//! struct App {
//!     list: FlatList<Record>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let data = record::generate(1000);
//!         let list = FlatList::new(data, record::key_of, RecordDelegate::new(), 80, 24);
//!         (Self { list }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
//!             self.list.handle_key(key_msg);
//!         }
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```

pub mod error;
pub mod flatlist;
pub mod key;
pub mod record;

pub use error::{FlatListError, Result};
pub use flatlist::Model as FlatList;
pub use flatlist::{
    Collection, FlatListKeyMap, FlatListStyles, ItemDelegate, ItemLayout, LineSeparator,
    RenderStats, ScrollAlign, Separator,
};
pub use key::{Binding, KeyMap, KeyPress};
pub use record::{Record, RecordDelegate};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_flatlist::prelude::*;
///
/// let list = FlatList::new(record::generate(3), record::key_of, RecordDelegate::new(), 40, 10);
/// assert_eq!(list.len(), 3);
/// ```
pub mod prelude {
    pub use crate::error::FlatListError;
    pub use crate::flatlist::Model as FlatList;
    pub use crate::flatlist::{
        Collection, FlatListKeyMap, FlatListStyles, ItemDelegate, ItemLayout, LineSeparator,
        RenderStats, ScrollAlign, Separator,
    };
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::record::{self, Record, RecordDelegate};
}
