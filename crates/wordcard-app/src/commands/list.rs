use std::io;

use crate::state::AppState;
use crate::ui;

pub fn run(state: &AppState, unknown_only: bool) -> anyhow::Result<()> {
    let store = state.open_store()?;
    let mut out = io::stdout().lock();

    if unknown_only {
        ui::render_list(&mut out, store.unknown(), store.progress())?;
    } else {
        ui::render_list(&mut out, store.records(), store.progress())?;
    }
    Ok(())
}
