pub mod app;
pub mod blog;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod terminal;
pub mod theme;

use crate::model::ArticleStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::time::Duration;

/// Run the UI until the user quits.
///
/// Every iteration redraws the full view from current state; all state
/// transitions happen synchronously between draws, so the renderer never
/// observes a partial update.
pub fn run(store: ArticleStore, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(store);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => input::handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {
                // Redraw happens at the top of the loop with the new size.
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
