use std::collections::HashSet;
use std::sync::Arc;

use wordcard_types::WordRecord;

use crate::error::StoreError;
use crate::language::generic_definition;
use crate::persistence::PersistenceClient;

/// Mastery summary of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub known: usize,
    pub total: usize,
}

impl Progress {
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.known as f32 / self.total as f32 * 100.0
        }
    }
}

/// The persisted, deduplicated word list, sorted case-insensitively by word.
///
/// Every mutation is computed on a copy, written through the persistence
/// client, and only then committed, so a failed write leaves the store as it was.
pub struct WordStore {
    records: Vec<WordRecord>,
    persistence: Arc<dyn PersistenceClient>,
}

impl WordStore {
    /// Read the persisted slot, an absent slot gives an empty store
    pub fn load(persistence: Arc<dyn PersistenceClient>) -> Result<Self, StoreError> {
        let stored = persistence.load()?.unwrap_or_default();
        let loaded = stored.len();

        let mut records = Vec::with_capacity(loaded);
        append_new(&mut records, stored);
        sort_records(&mut records);

        if records.len() != loaded {
            tracing::warn!(
                "Dropped {} duplicate or blank records from stored list",
                loaded - records.len()
            );
        }
        tracing::info!("Loaded {} words", records.len());

        Ok(Self {
            records,
            persistence,
        })
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        let key = normalize_key(word);
        self.records.iter().find(|r| r.word == key)
    }

    /// Read-only view in store order
    pub fn filtered<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a WordRecord> + 'a
    where
        P: Fn(&WordRecord) -> bool + 'a,
    {
        self.records.iter().filter(move |r| predicate(r))
    }

    pub fn unknown(&self) -> impl Iterator<Item = &WordRecord> {
        self.filtered(|r| !r.known)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            known: self.records.iter().filter(|r| r.known).count(),
            total: self.records.len(),
        }
    }

    /// Add records whose word is not present yet; existing records win.
    /// Returns how many were added.
    pub fn merge(&mut self, incoming: Vec<WordRecord>) -> Result<usize, StoreError> {
        let mut candidate = self.records.clone();
        let added = append_new(&mut candidate, incoming);

        if added == 0 {
            tracing::debug!("Merge added nothing");
            return Ok(0);
        }

        sort_records(&mut candidate);
        self.commit(candidate)?;
        tracing::info!("Merged {} new words, {} total", added, self.records.len());

        Ok(added)
    }

    /// Set the learning flag of one word
    pub fn mark_known(&mut self, word: &str, known: bool) -> Result<(), StoreError> {
        let key = normalize_key(word);
        let position = self
            .records
            .iter()
            .position(|r| r.word == key)
            .ok_or_else(|| StoreError::WordNotFound(word.to_string()))?;

        let mut candidate = self.records.clone();
        candidate[position].known = known;
        self.commit(candidate)
    }

    /// Forget all learning progress
    pub fn reset_all(&mut self) -> Result<(), StoreError> {
        let mut candidate = self.records.clone();
        candidate.iter_mut().for_each(|r| r.known = false);
        self.commit(candidate)?;
        tracing::info!("Reset progress of {} words", self.records.len());
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(Vec::new())?;
        tracing::info!("Cleared word list");
        Ok(())
    }

    fn commit(&mut self, candidate: Vec<WordRecord>) -> Result<(), StoreError> {
        self.persistence.save(&candidate)?;
        self.records = candidate;
        Ok(())
    }
}

fn normalize_key(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Append records with unseen keys, normalizing word and definition
fn append_new(records: &mut Vec<WordRecord>, incoming: Vec<WordRecord>) -> usize {
    let mut seen: HashSet<String> = records.iter().map(WordRecord::key).collect();
    let before = records.len();

    for mut record in incoming {
        record.word = normalize_key(&record.word);
        if record.word.is_empty() || !seen.insert(record.word.clone()) {
            continue;
        }
        if record.definition.trim().is_empty() {
            record.definition = generic_definition(&record.word);
        }
        records.push(record);
    }

    records.len() - before
}

fn sort_records(records: &mut [WordRecord]) {
    records.sort_by_cached_key(WordRecord::key);
}
