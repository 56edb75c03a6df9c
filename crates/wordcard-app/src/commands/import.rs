use std::path::Path;

use anyhow::{Context, bail};
use tokio_util::sync::CancellationToken;
use wordcard_core::candidates::select_candidates;
use wordcard_core::store::WordStore;
use wordcard_io::wordlist::DEFAULT_CHAPTER;
use wordcard_io::{Document, WordList};
use wordcard_types::{ImportSource, WordRecord};

use super::{cancel_on_ctrl_c, local_definition, progress_printer};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Words found in the source
    pub found: usize,
    /// Words that were new to the store
    pub added: usize,
    /// Store size afterwards
    pub total: usize,
}

pub async fn run(state: &AppState, path: &Path, chapter: Option<&str>) -> anyhow::Result<()> {
    let mut store = state.open_store()?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel_on_ctrl_c(cancel.clone());
    let result = import_file(
        state,
        &mut store,
        path,
        chapter,
        &cancel,
        progress_printer("Fetching definitions"),
    )
    .await;
    ctrl_c.abort();

    let summary = result?;
    println!(
        "Imported {} new of {} words ({} in total)",
        summary.added, summary.found, summary.total
    );
    Ok(())
}

/// Read a source file, define its words and merge them into `store`.
/// Nothing is merged when reading fails or the fetch is cancelled.
pub async fn import_file<F>(
    state: &AppState,
    store: &mut WordStore,
    path: &Path,
    chapter: Option<&str>,
    cancel: &CancellationToken,
    on_progress: F,
) -> anyhow::Result<ImportSummary>
where
    F: FnMut(usize, usize),
{
    let kind = ImportSource::from_path(path)
        .with_context(|| format!("Unsupported file type: {}", path.display()))?;

    let records = match kind {
        ImportSource::Csv => {
            let list = WordList::read(path)?;
            records_from_word_list(state, &list, chapter, cancel, on_progress).await?
        }
        ImportSource::Yaml | ImportSource::Json => {
            if chapter.is_some() {
                tracing::warn!("--chapter only applies to CSV word lists, ignoring it");
            }
            let document = Document::load(path)?;
            records_from_text(state, &document.text(), cancel, on_progress).await?
        }
    };

    let found = records.len();
    let added = store.merge(records).context("Failed to save imported words")?;
    tracing::info!("Merged {} of {} words from {}", added, found, path.display());

    Ok(ImportSummary {
        found,
        added,
        total: store.len(),
    })
}

/// Pick the most frequent words of `text` and define each of them
pub async fn records_from_text<F>(
    state: &AppState,
    text: &str,
    cancel: &CancellationToken,
    on_progress: F,
) -> anyhow::Result<Vec<WordRecord>>
where
    F: FnMut(usize, usize),
{
    let candidates = select_candidates(
        state.processor.as_ref(),
        text,
        state.config.extract.max_candidates,
    );
    if candidates.is_empty() {
        bail!("No candidate words found");
    }
    tracing::info!("Defining {} candidate words", candidates.len());

    let records = state
        .fetcher(true)
        .fetch_all_cancellable(&candidates, cancel, on_progress)
        .await?;
    Ok(records)
}

/// Rows of a word list as records, in file order. Rows with nothing usable
/// locally go through the resolver chain.
pub async fn records_from_word_list<F>(
    state: &AppState,
    list: &WordList,
    chapter: Option<&str>,
    cancel: &CancellationToken,
    on_progress: F,
) -> anyhow::Result<Vec<WordRecord>>
where
    F: FnMut(usize, usize),
{
    let rows: Vec<_> = list
        .rows()
        .filter(|row| !row.word().is_empty())
        .filter(|row| {
            chapter.is_none_or(|wanted| {
                row.title()
                    .unwrap_or(DEFAULT_CHAPTER)
                    .eq_ignore_ascii_case(wanted)
            })
        })
        .collect();

    if rows.is_empty() {
        match chapter {
            Some(title) => bail!("No words in chapter '{}'", title),
            None => bail!("The word list has no words"),
        }
    }

    let mut slots: Vec<Option<WordRecord>> = Vec::with_capacity(rows.len());
    let mut pending = Vec::new();
    for row in &rows {
        let word = state.processor.normalize(row.word());
        match local_definition(state, row, &word) {
            Some(definition) => slots.push(Some(WordRecord::new(word, definition))),
            None => {
                pending.push(word);
                slots.push(None);
            }
        }
    }

    let mut resolved = if pending.is_empty() {
        Vec::new()
    } else {
        tracing::info!("Looking up {} words without a meaning", pending.len());
        state
            .fetcher(true)
            .fetch_all_cancellable(&pending, cancel, on_progress)
            .await?
    }
    .into_iter();

    Ok(slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| resolved.next()))
        .collect())
}
