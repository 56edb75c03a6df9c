use std::collections::HashSet;
use std::sync::LazyLock;

/// Common words that carry no study value
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old",
    "see", "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too",
    "use", "this", "that", "with", "have", "from", "they", "what", "been", "more", "when",
    "will", "would", "there", "their", "which", "about", "could", "these", "first", "other",
    "than", "then", "them", "some", "time", "very", "were", "said", "each", "tell", "does",
    "must", "upon", "also", "into", "many", "most", "over", "such", "take", "only", "year",
    "come", "work", "made", "make", "well", "back", "call", "came", "down", "even", "find",
    "give", "good", "just", "keep", "know", "last", "left", "like", "long", "look", "much",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Expects a lowercase word
pub fn is_stop_word(word: &str) -> bool {
    STOP_SET.contains(word)
}
