// Terminal front end for a story session
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
pub use rendering::{ERROR_TEXT, LOADING_TEXT};
use terminal::TerminalManager;

use crate::session::Session;
use crate::storage::KeyValueStore;

/// Run the interactive TUI on an activated session until the user quits
pub fn run_interactive<S: KeyValueStore>(session: Session<S>) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(session);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
