//! Rendering, memoization and virtualization tests for the list container.

#[cfg(test)]
mod flatlist_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel};
    use crossterm::event::{KeyCode, KeyModifiers};
    use lipgloss_extras::lipgloss;

    use crate::error::FlatListError;
    use crate::flatlist::{
        Collection, FlatListStyles, ItemDelegate, Model, ScrollAlign, Separator,
    };
    use crate::record::{self, Record};

    /// Renders the record text and counts every call.
    #[derive(Clone, Default)]
    struct CountingDelegate {
        calls: Arc<AtomicUsize>,
    }

    impl CountingDelegate {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ItemDelegate<Record> for CountingDelegate {
        fn render(&self, item: &Record, _width: usize) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            item.text.clone()
        }
    }

    struct TwoLineDelegate;

    impl ItemDelegate<Record> for TwoLineDelegate {
        fn render(&self, item: &Record, _width: usize) -> String {
            format!("{}\n#{}\nthis line is cut", item.text, item.id)
        }

        fn height(&self) -> usize {
            2
        }
    }

    struct Dashes;

    impl Separator for Dashes {
        fn render(&self, _width: usize) -> String {
            "--".to_string()
        }
    }

    fn plain_list(data: Collection<Record>, height: usize) -> (Model<Record>, CountingDelegate) {
        let delegate = CountingDelegate::default();
        let list = Model::new(data, record::key_of, delegate.clone(), 20, height)
            .with_separator(Dashes)
            .with_styles(FlatListStyles::plain());
        (list, delegate)
    }

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_two_records_render_with_single_separator() {
        let data = Collection::new(vec![Record::new(0, "Item 0"), Record::new(1, "Item 1")]);
        let (list, _) = plain_list(data, 10);

        assert_eq!(list.view(), "Item 0\n--\nItem 1");
        let stats = list.stats();
        assert_eq!(stats.item_renders, 2);
        assert_eq!(stats.separator_renders, 1);
    }

    #[test]
    fn test_empty_collection_renders_nothing() {
        let (list, delegate) = plain_list(Collection::default(), 10);

        assert_eq!(lipgloss::strip_ansi(&list.view()), "No items.");
        assert_eq!(delegate.calls(), 0);
        let stats = list.stats();
        assert_eq!(stats.item_renders, 0);
        assert_eq!(stats.separator_renders, 0);
        assert_eq!(list.visible_range(), 0..0);
        assert_eq!(list.content_height(), 0);
    }

    #[test]
    fn test_custom_empty_text() {
        let (list, _) = plain_list(Collection::default(), 10);
        let list = list.with_empty_text("Nothing here");
        assert_eq!(lipgloss::strip_ansi(&list.view()), "Nothing here");
    }

    #[test]
    fn test_redraw_with_same_data_skips_item_renderer() {
        let data = record::generate(1000);
        let (mut list, delegate) = plain_list(data.clone(), 10);

        list.view();
        let first = delegate.calls();
        assert!(first > 0);

        list.set_data(data);
        list.view();
        list.view();
        assert_eq!(delegate.calls(), first);
        assert_eq!(list.stats().frames, 3);
    }

    #[test]
    fn test_replacing_one_record_rerenders_only_that_row() {
        let data = record::generate(1000);
        let (mut list, delegate) = plain_list(data.clone(), 10);
        list.view();
        let before = delegate.calls();

        let updated = data.with_replaced(2, Record::new(2, "Item two"));
        list.set_data(updated);
        let view = list.view();

        assert_eq!(delegate.calls(), before + 1);
        assert!(view.contains("Item two"));
        assert!(!view.contains("Item 2\n"));
    }

    #[test]
    fn test_equal_but_new_record_still_rerenders() {
        let data = record::generate(10);
        let (mut list, delegate) = plain_list(data.clone(), 10);
        list.view();
        let before = delegate.calls();

        list.set_data(data.with_replaced(0, Record::new(0, "Item 0")));
        list.view();
        assert_eq!(delegate.calls(), before + 1);
    }

    #[test]
    fn test_insert_at_front_reuses_rows_by_key() {
        let data = record::generate(50);
        let (mut list, delegate) = plain_list(data.clone(), 9);
        list.view();
        let before = delegate.calls();

        list.set_data(data.with_inserted(0, Record::new(5000, "New item")));
        let view = list.view();

        // every other row moved down one position but kept its key and record
        assert_eq!(delegate.calls(), before + 1);
        assert!(view.starts_with("New item\n--\nItem 0"));
    }

    #[test]
    fn test_reorder_reuses_rows_by_key() {
        let data = record::generate(4);
        let (mut list, delegate) = plain_list(data.clone(), 10);
        list.view();

        let reversed: Vec<Arc<Record>> = data.iter().rev().cloned().collect();
        list.set_data(Collection::from_shared(reversed));
        let view = list.view();

        assert_eq!(delegate.calls(), 4);
        assert_eq!(view, "Item 3\n--\nItem 2\n--\nItem 1\n--\nItem 0");
    }

    #[test]
    fn test_width_change_rerenders() {
        let data = record::generate(3);
        let (mut list, delegate) = plain_list(data, 10);
        list.view();
        assert_eq!(delegate.calls(), 3);

        list.set_size(40, 10);
        list.view();
        assert_eq!(delegate.calls(), 6);
    }

    #[test]
    fn test_virtualization_bounds_realized_rows() {
        let data = record::generate(1000);
        let delegate = CountingDelegate::default();
        let mut list = Model::new(data, record::key_of, delegate.clone(), 20, 12)
            .with_separator(Dashes)
            .with_overscan(3);
        let bound = list.max_realized();

        list.view();
        assert!(delegate.calls() <= bound);

        while !list.at_bottom() {
            list.half_page_down();
            list.view();
            assert!(list.cached_rows() <= bound);
        }

        let stats = list.stats();
        assert!(stats.peak_realized <= bound, "peak {} bound {}", stats.peak_realized, bound);
        assert!(stats.realized_rows <= bound);
        assert!(list.view().ends_with("Item 999"));
        // each row is rendered at most once while scrolling in one direction
        assert!(delegate.calls() <= 1000);
    }

    #[test]
    fn test_separator_count_matches_realized_gaps() {
        let data = record::generate(1000);
        let (list, _) = plain_list(data, 10);
        let list = list.with_overscan(0);

        list.view();
        let realized = list.realized_range().len();
        assert_eq!(list.stats().separator_renders, realized - 1);
    }

    #[test]
    fn test_viewport_output_height() {
        let data = record::generate(1000);
        let (mut list, _) = plain_list(data, 7);

        for _ in 0..20 {
            assert_eq!(list.view().lines().count(), 7);
            list.scroll_down(3);
        }
        list.goto_bottom();
        assert_eq!(list.view().lines().count(), 7);
    }

    #[test]
    fn test_view_starting_on_separator() {
        let data = record::generate(10);
        let (mut list, _) = plain_list(data, 3);

        list.set_y_offset(1);
        assert_eq!(list.view(), "--\nItem 1\n--");
    }

    #[test]
    fn test_without_separator() {
        let data = record::generate(5);
        let delegate = CountingDelegate::default();
        let list = Model::new(data, record::key_of, delegate, 20, 3).without_separator();

        assert_eq!(list.view(), "Item 0\nItem 1\nItem 2");
        assert_eq!(list.content_height(), 5);
        assert_eq!(list.stats().separator_renders, 0);
    }

    #[test]
    fn test_multi_line_rows_are_fitted() {
        let data = record::generate(3);
        let list = Model::new(data, record::key_of, TwoLineDelegate, 20, 20)
            .with_separator(Dashes);

        assert_eq!(list.view(), "Item 0\n#0\n--\nItem 1\n#1\n--\nItem 2\n#2");
        assert_eq!(list.item_layout(2).map(|l| l.offset), Some(6));
        assert_eq!(list.item_layout(2).map(|l| l.length), Some(2));
        assert!(list.item_layout(3).is_none());
    }

    #[test]
    fn test_scroll_to_index() {
        let data = record::generate(1000);
        let (mut list, _) = plain_list(data, 10);

        list.scroll_to_index(500, ScrollAlign::Start).unwrap();
        assert_eq!(list.y_offset(), 1000);
        assert!(list.view().starts_with("Item 500"));

        list.scroll_to_index(500, ScrollAlign::End).unwrap();
        assert!(list.view().ends_with("Item 500"));

        list.scroll_to_index(500, ScrollAlign::Center).unwrap();
        assert_eq!(list.y_offset(), 995);

        list.scroll_to_index(999, ScrollAlign::Start).unwrap();
        assert!(list.at_bottom());

        assert_eq!(
            list.scroll_to_index(1000, ScrollAlign::Start),
            Err(FlatListError::IndexOutOfRange {
                index: 1000,
                len: 1000
            })
        );
    }

    #[test]
    fn test_scroll_to_key() {
        let data = record::generate(100);
        let (mut list, _) = plain_list(data, 10);

        list.scroll_to_key("42", ScrollAlign::Start).unwrap();
        assert_eq!(list.visible_range().start, 42);
        assert_eq!(list.viewable_keys().first().map(String::as_str), Some("42"));

        assert_eq!(
            list.scroll_to_key("nope", ScrollAlign::Start),
            Err(FlatListError::KeyNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_scroll_clamping() {
        let data = record::generate(10);
        let (mut list, _) = plain_list(data, 5);

        assert!(list.at_top());
        list.scroll_up(3);
        assert_eq!(list.y_offset(), 0);

        list.scroll_down(usize::MAX);
        assert_eq!(list.y_offset(), 19 - 5);
        assert!(list.at_bottom());
        assert_eq!(list.scroll_percent(), 1.0);

        list.goto_top();
        assert_eq!(list.scroll_percent(), 0.0);
    }

    #[test]
    fn test_short_list_does_not_scroll() {
        let data = record::generate(2);
        let (mut list, _) = plain_list(data, 10);
        list.page_down();
        assert_eq!(list.y_offset(), 0);
        assert!(list.at_top() && list.at_bottom());
        assert_eq!(list.scroll_percent(), 1.0);
    }

    #[test]
    fn test_shrinking_data_clamps_offset() {
        let data = record::generate(100);
        let (mut list, _) = plain_list(data, 10);
        list.goto_bottom();

        list.set_data(record::generate(3));
        assert_eq!(list.y_offset(), 0);
        assert_eq!(list.view(), "Item 0\n--\nItem 1\n--\nItem 2");
    }

    #[test]
    fn test_maintain_visible_position() {
        let data = record::generate(100);
        let (list, _) = plain_list(data.clone(), 10);
        let mut list = list.with_maintain_visible_position(true);

        list.scroll_to_index(20, ScrollAlign::Start).unwrap();
        let updated = data
            .with_inserted(0, Record::new(1000, "New A"))
            .with_inserted(0, Record::new(1001, "New B"));
        list.set_data(updated);

        assert_eq!(list.visible_range().start, 22);
        assert!(list.view().starts_with("Item 20"));
    }

    #[test]
    fn test_position_not_maintained_by_default() {
        let data = record::generate(100);
        let (mut list, _) = plain_list(data.clone(), 10);

        list.scroll_to_index(20, ScrollAlign::Start).unwrap();
        list.set_data(data.with_inserted(0, Record::new(1000, "New A")));
        assert!(list.view().starts_with("Item 19"));
    }

    #[test]
    fn test_duplicate_keys_degrade_without_failing() {
        let data = Collection::new(vec![
            Record::new(1, "first"),
            Record::new(1, "second"),
            Record::new(2, "third"),
        ]);
        let (list, delegate) = plain_list(data.clone(), 10);

        assert_eq!(list.view(), "first\n--\nsecond\n--\nthird");
        list.view();
        // the two rows sharing key "1" keep evicting each other
        assert!(delegate.calls() > 3);
        assert_eq!(list.index_of_key("1"), Some(0));
        assert!(data.check_unique_keys(record::key_of).is_err());
    }

    #[test]
    fn test_handle_key() {
        let data = record::generate(100);
        let (mut list, _) = plain_list(data, 10);

        assert!(list.handle_key(&key(KeyCode::Char('j'))));
        assert_eq!(list.y_offset(), 1);
        assert!(list.handle_key(&key(KeyCode::Char('k'))));
        assert_eq!(list.y_offset(), 0);

        list.handle_key(&key(KeyCode::PageDown));
        assert_eq!(list.y_offset(), 10);
        list.handle_key(&key(KeyCode::Char('d')));
        assert_eq!(list.y_offset(), 15);
        list.handle_key(&key(KeyCode::Char('u')));
        assert_eq!(list.y_offset(), 10);
        list.handle_key(&key(KeyCode::PageUp));
        assert_eq!(list.y_offset(), 0);

        list.handle_key(&KeyMsg {
            key: KeyCode::Char('G'),
            modifiers: KeyModifiers::SHIFT,
        });
        assert!(list.at_bottom());
        list.handle_key(&key(KeyCode::Home));
        assert!(list.at_top());

        assert!(!list.handle_key(&key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_help_line_takes_one_row() {
        let data = record::generate(100);
        let (list, _) = plain_list(data, 5);
        let list = list.with_help(true);

        assert_eq!(list.viewport_height(), 4);
        let view = list.view();
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[4].contains("↓/j down"));
    }

    #[test]
    fn test_zero_height_draws_nothing() {
        let data = record::generate(10);
        let (list, delegate) = plain_list(data, 0);
        let list = list.with_help(true);

        assert_eq!(list.view(), "");
        assert_eq!(delegate.calls(), 0);
    }

    #[test]
    fn test_page_down_help_names_every_key() {
        let list = plain_list(record::generate(1), 5).0;
        let page_down = &list.keymap.page_down;
        assert_eq!(page_down.help().key, "f/pgdn/space");
        assert!(page_down.matches(&key(KeyCode::Char(' '))));
        assert!(page_down.matches(&key(KeyCode::Char('f'))));
        assert!(page_down.matches(&key(KeyCode::PageDown)));
    }

    #[test]
    fn test_huge_overscan_renders_whole_list() {
        let data = record::generate(10);
        let (list, delegate) = plain_list(data, 5);
        let list = list.with_overscan(usize::MAX);

        assert_eq!(list.view(), "Item 0\n--\nItem 1\n--\nItem 2");
        assert_eq!(list.realized_range(), 0..10);
        assert_eq!(delegate.calls(), 10);
    }

    #[test]
    fn test_clear_cache_forces_rerender() {
        let data = record::generate(3);
        let (list, delegate) = plain_list(data, 10);
        list.view();
        list.clear_cache();
        assert_eq!(list.cached_rows(), 0);
        list.view();
        assert_eq!(delegate.calls(), 6);

        list.reset_stats();
        assert_eq!(list.stats().frames, 0);
    }

    #[test]
    fn test_bubbletea_model_init() {
        let (mut list, cmd) = Model::<Record>::init();
        assert!(cmd.is_none());
        assert_eq!(list.len(), record::DEFAULT_RECORD_COUNT);

        let first = lipgloss::strip_ansi(&list.view());
        assert!(first.contains("Item 0"));

        let cmd = BubbleTeaModel::update(&mut list, Box::new(key(KeyCode::End)));
        assert!(cmd.is_none());
        let last = lipgloss::strip_ansi(&BubbleTeaModel::view(&list));
        assert!(last.contains("Item 999"));
        assert!(list.stats().peak_realized <= list.max_realized());
    }
}
