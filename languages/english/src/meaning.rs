use std::sync::LazyLock;

use regex::Regex;

use crate::simplify::simplify_definition;

static POS_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?i)([a-z]+)\.\s*").ok());

/// Clause separators, including the full-width forms common in bilingual lists
const CLAUSE_SEPARATORS: &[char] = &[';', ',', '；', '，'];

/// Build a simple definition from a word list's meaning column, e.g.
/// `"v. to burst out; to explode"` gives `"To burst out"`.
/// None when the meaning carries nothing usable.
pub fn derive_definition(meaning: &str) -> Option<String> {
    let meaning = meaning.trim();
    if meaning.is_empty() {
        return None;
    }

    let (pos, rest) = split_part_of_speech(meaning);
    let clause = rest
        .split(CLAUSE_SEPARATORS)
        .map(str::trim)
        .find(|c| !c.is_empty())?;

    let templated = match pos.as_deref() {
        Some("n") => format!("A thing or concept related to: {clause}"),
        Some("v" | "vt" | "vi") => format!("To {}", clause.strip_prefix("to ").unwrap_or(clause)),
        Some("adj" | "a") => format!("Having the quality of: {clause}"),
        Some("adv" | "ad") => format!("In a way that: {clause}"),
        _ => format!("Meaning: {clause}"),
    };

    Some(simplify_definition(&templated)).filter(|d| !d.is_empty())
}

fn split_part_of_speech(meaning: &str) -> (Option<String>, &str) {
    let Some(prefix) = POS_PREFIX.as_ref() else {
        return (None, meaning);
    };

    match prefix.captures(meaning) {
        Some(captures) => {
            let tag = captures.get(1).map(|m| m.as_str().to_lowercase());
            let end = captures.get(0).map_or(0, |m| m.end());
            (tag, &meaning[end..])
        }
        None => (None, meaning),
    }
}
