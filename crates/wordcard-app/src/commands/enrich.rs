use std::path::Path;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use wordcard_io::WordList;
use wordcard_lang_english::derive_definition;

use super::{cancel_on_ctrl_c, progress_printer};
use crate::state::AppState;

pub async fn run(
    state: &AppState,
    csv: &Path,
    output: Option<&Path>,
    remote: bool,
) -> anyhow::Result<()> {
    let mut list = WordList::read(csv)?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel_on_ctrl_c(cancel.clone());
    let result = enrich(
        state,
        &mut list,
        remote,
        &cancel,
        progress_printer("Looking up"),
    )
    .await;
    ctrl_c.abort();
    let defined = result?;

    let target = output.unwrap_or(csv);
    list.write(target)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("Wrote definitions for {} words to {}", defined, target.display());
    Ok(())
}

/// Fill the definition column of every row with a word. Returns how many
/// rows were defined. Cancelling leaves `list` unchanged.
pub async fn enrich<F>(
    state: &AppState,
    list: &mut WordList,
    remote: bool,
    cancel: &CancellationToken,
    on_progress: F,
) -> anyhow::Result<usize>
where
    F: FnMut(usize, usize),
{
    let mut definitions = Vec::new();
    let mut pending = Vec::new();

    for row in list.rows().filter(|row| !row.word().is_empty()) {
        let word = state.processor.normalize(row.word());
        let local = state
            .glossary
            .get(&word)
            .cloned()
            .or_else(|| derive_definition(row.meaning()));

        match local {
            Some(definition) => definitions.push((row.index(), definition)),
            None => pending.push((row.index(), word)),
        }
    }

    if !pending.is_empty() {
        let words: Vec<String> = pending.iter().map(|(_, word)| word.clone()).collect();
        let records = state
            .fetcher(remote)
            .fetch_all_cancellable(&words, cancel, on_progress)
            .await?;
        definitions.extend(
            pending
                .iter()
                .zip(records)
                .map(|((index, _), record)| (*index, record.definition)),
        );
    }

    let defined = definitions.len();
    for (index, definition) in definitions {
        list.set_definition(index, definition);
    }
    Ok(defined)
}
