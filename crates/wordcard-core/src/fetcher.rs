use std::sync::Arc;

use futures_util::future::join_all;
use tokio_util::sync::CancellationToken;
use wordcard_types::WordRecord;

use crate::error::FetchError;
use crate::resolver::DefinitionResolver;

/// Concurrent lookups per batch
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Drives the resolver over a word list in small sequential batches
pub struct DefinitionBatchFetcher {
    resolver: Arc<DefinitionResolver>,
    batch_size: usize,
}

impl DefinitionBatchFetcher {
    pub fn new(resolver: Arc<DefinitionResolver>) -> Self {
        Self::with_batch_size(resolver, DEFAULT_BATCH_SIZE)
    }

    pub fn with_batch_size(resolver: Arc<DefinitionResolver>, batch_size: usize) -> Self {
        Self {
            resolver,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Resolve every word, output order matches input order.
    /// `on_progress(completed, total)` runs after each batch.
    pub async fn fetch_all<F>(&self, words: &[String], mut on_progress: F) -> Vec<WordRecord>
    where
        F: FnMut(usize, usize),
    {
        let total = words.len();
        let mut records = Vec::with_capacity(total);

        for batch in words.chunks(self.batch_size) {
            records.extend(self.fetch_batch(batch).await);
            on_progress(records.len(), total);
        }

        records
    }

    /// Like [`fetch_all`](Self::fetch_all), but stops when `cancel` fires.
    /// The in-flight batch is dropped along with its per-word timeouts.
    pub async fn fetch_all_cancellable<F>(
        &self,
        words: &[String],
        cancel: &CancellationToken,
        mut on_progress: F,
    ) -> Result<Vec<WordRecord>, FetchError>
    where
        F: FnMut(usize, usize),
    {
        let total = words.len();
        let mut records = Vec::with_capacity(total);

        for batch in words.chunks(self.batch_size) {
            let batch_records = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                batch_records = self.fetch_batch(batch) => Some(batch_records),
            };

            let Some(batch_records) = batch_records else {
                tracing::info!("Definition fetch cancelled at {}/{}", records.len(), total);
                return Err(FetchError::Cancelled {
                    completed: records.len(),
                    total,
                });
            };

            records.extend(batch_records);
            on_progress(records.len(), total);
        }

        Ok(records)
    }

    async fn fetch_batch(&self, batch: &[String]) -> Vec<WordRecord> {
        join_all(batch.iter().map(|word| self.resolver.resolve(word))).await
    }
}
