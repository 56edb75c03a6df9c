use std::io::{self, Write};

use super::confirm;
use crate::state::AppState;

pub fn reset(state: &AppState, yes: bool) -> anyhow::Result<()> {
    let mut store = state.open_store()?;
    let prompt = format!("Mark all {} words as unknown?", store.len());
    if !yes && !ask(&prompt)? {
        println!("Nothing changed");
        return Ok(());
    }

    store.reset_all()?;
    tracing::info!("Reset {} words", store.len());
    println!("All {} words marked unknown", store.len());
    Ok(())
}

pub fn clear(state: &AppState, yes: bool) -> anyhow::Result<()> {
    let mut store = state.open_store()?;
    let prompt = format!("Delete all {} words?", store.len());
    if !yes && !ask(&prompt)? {
        println!("Nothing changed");
        return Ok(());
    }

    let removed = store.len();
    store.clear()?;
    tracing::info!("Cleared {} words", removed);
    println!("Deleted {removed} words");
    Ok(())
}

fn ask(prompt: &str) -> anyhow::Result<bool> {
    let mut out = io::stdout().lock();
    let confirmed = confirm(&mut io::stdin().lock(), &mut out, prompt)?;
    out.flush()?;
    Ok(confirmed)
}
