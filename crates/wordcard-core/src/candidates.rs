use std::collections::HashMap;

use crate::language::LanguageProcessor;

/// Upper bound on candidates per import, each one costs a remote lookup
pub const DEFAULT_MAX_CANDIDATES: usize = 100;

/// Rank the non-stop-words of `text` by frequency and keep the top `max_count`.
/// Ties keep the order in which words first appeared.
pub fn select_candidates(
    processor: &dyn LanguageProcessor,
    text: &str,
    max_count: usize,
) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in processor.tokenize(text) {
        match index.get(&token.normalized) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(token.normalized.clone(), counts.len());
                counts.push((token.normalized, 1));
            }
        }
    }

    counts.retain(|(word, _)| !processor.is_stop_word(word));
    // Stable sort keeps first-occurrence order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::debug!(
        "{} distinct candidates, keeping at most {}",
        counts.len(),
        max_count
    );

    counts
        .into_iter()
        .take(max_count)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProcessor;

    #[test]
    fn ranks_by_frequency_then_first_seen() {
        let text = "delta alpha beta alpha gamma beta alpha";
        let candidates = select_candidates(&FakeProcessor, text, DEFAULT_MAX_CANDIDATES);
        assert_eq!(candidates, vec!["alpha", "beta", "delta", "gamma"]);
    }

    #[test]
    fn counts_case_insensitively_and_drops_stop_words() {
        let text = "The Storm and the storm; THE STORM with thunder";
        let candidates = select_candidates(&FakeProcessor, text, DEFAULT_MAX_CANDIDATES);
        assert_eq!(candidates, vec!["storm", "thunder"]);
    }

    #[test]
    fn truncates_to_max_count() {
        let text = "one1 three four five six seven eight";
        let candidates = select_candidates(&FakeProcessor, text, 3);
        assert_eq!(candidates, vec!["one", "three", "four"]);
    }

    #[test]
    fn nothing_survives() {
        assert!(select_candidates(&FakeProcessor, "a an to 12 the", 10).is_empty());
        assert!(select_candidates(&FakeProcessor, "", 10).is_empty());
    }
}
