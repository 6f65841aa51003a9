//! Scrolls through 1000 records in a virtualized list.
//!
//! Keys: j/k or arrows scroll by line, space/b by page, g/G jump to the ends,
//! q or ctrl+c quits.

use bubbletea_flatlist::prelude::*;
use bubbletea_rs::{Cmd, KeyMsg, Model, Msg, Program, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::{Color, Style};

const STATUS_HEIGHT: usize = 1;

struct App {
    list: FlatList<Record>,
    status_style: Style,
}

impl App {
    fn status_line(&self) -> String {
        let visible = self.list.visible_range();
        let stats = self.list.stats();
        let text = format!(
            "rows {}-{} of {} · {:.0}% · rendered {} · cached {}",
            visible.start,
            visible.end.saturating_sub(1),
            self.list.len(),
            self.list.scroll_percent() * 100.0,
            stats.item_renders,
            self.list.cached_rows(),
        );
        self.status_style.render(&text)
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let data = record::generate(record::DEFAULT_RECORD_COUNT);
        let list = FlatList::new(data, record::key_of, RecordDelegate::new(), 80, 24 - STATUS_HEIGHT)
            .with_help(true);
        let app = App {
            list,
            status_style: Style::new().foreground(Color::from("#626262")),
        };
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.list.set_size(
                size.width as usize,
                (size.height as usize).saturating_sub(STATUS_HEIGHT),
            );
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let quit = key_msg.key == KeyCode::Char('q')
                || (key_msg.key == KeyCode::Char('c')
                    && key_msg.modifiers.contains(KeyModifiers::CONTROL));
            if quit {
                return Some(bubbletea_rs::quit());
            }
            self.list.handle_key(key_msg);
        }
        None
    }

    fn view(&self) -> String {
        format!("{}\n{}", self.list.view(), self.status_line())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
