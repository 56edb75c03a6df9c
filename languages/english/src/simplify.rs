use std::sync::LazyLock;

use regex::Regex;

/// Longest definition kept before truncation
pub const MAX_DEFINITION_CHARS: usize = 120;

/// Verbose or Latinate phrasing and its plain replacement, applied in order
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("pertaining to", "about"),
    ("relating to", "about"),
    ("regarding", "about"),
    ("concerning", "about"),
    ("associated with", "connected to"),
    ("characterized by", "having"),
    ("possessing", "having"),
    ("utilize", "use"),
    ("obtain", "get"),
    ("acquire", "get"),
    ("demonstrate", "show"),
    ("indicate", "show"),
    ("represent", "show"),
    ("constitute", "make up"),
    ("comprise", "include"),
    ("facilitate", "help"),
    ("implement", "do"),
    ("execute", "do"),
    ("perform", "do"),
    ("conduct", "do"),
    ("establish", "set up"),
    ("designate", "name"),
    ("denote", "mean"),
    ("signify", "mean"),
    ("exemplify", "show"),
    ("illustrate", "show"),
    ("manifest", "show"),
    ("exhibit", "show"),
];

static REPLACEMENT_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    REPLACEMENTS
        .iter()
        .filter_map(|(phrase, plain)| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
                .ok()
                .map(|re| (re, *plain))
        })
        .collect()
});

static PARENTHESIZED: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\(.*?\)").ok());

/// Rewrite a dictionary definition into short plain English.
///
/// Phrases from [`REPLACEMENTS`] are swapped case-insensitively, parenthesized
/// spans and everything after the first semicolon are dropped, the first
/// letter is capitalized, and anything longer than [`MAX_DEFINITION_CHARS`]
/// is cut with a trailing `...`.
pub fn simplify_definition(definition: &str) -> String {
    let mut simplified = definition.to_string();

    for (pattern, plain) in REPLACEMENT_PATTERNS.iter() {
        simplified = pattern.replace_all(&simplified, *plain).into_owned();
    }

    if let Some(parenthesized) = PARENTHESIZED.as_ref() {
        simplified = parenthesized.replace_all(&simplified, "").into_owned();
    }

    if let Some(end) = simplified.find(';') {
        simplified.truncate(end);
    }

    let simplified = simplified.split_whitespace().collect::<Vec<_>>().join(" ");
    let simplified = capitalize_first(&simplified);

    if simplified.chars().count() > MAX_DEFINITION_CHARS {
        let cut: String = simplified.chars().take(MAX_DEFINITION_CHARS).collect();
        format!("{}...", cut.trim_end())
    } else {
        simplified
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_verbose_phrasing() {
        assert_eq!(
            simplify_definition("to utilize something PERTAINING TO the sea"),
            "To use something about the sea"
        );
        assert_eq!(
            simplify_definition("used to facilitate trade and demonstrate value"),
            "Used to help trade and show value"
        );
    }

    #[test]
    fn whole_phrases_only() {
        assert_eq!(
            simplify_definition("a performance of executed steps"),
            "A performance of executed steps"
        );
    }

    #[test]
    fn strips_parentheses_and_trailing_clauses() {
        assert_eq!(
            simplify_definition("a large bay (of the ocean) partly enclosed; a chasm"),
            "A large bay partly enclosed"
        );
    }

    #[test]
    fn truncates_long_definitions() {
        let long = "word ".repeat(40);
        let simplified = simplify_definition(&long);
        assert!(simplified.ends_with("..."));
        assert!(simplified.chars().count() <= MAX_DEFINITION_CHARS + 3);
        assert!(simplified.starts_with("Word word"));
    }

    #[test]
    fn can_come_out_empty() {
        assert_eq!(simplify_definition("(archaic)"), "");
        assert_eq!(simplify_definition("; see below"), "");
        assert_eq!(simplify_definition(""), "");
    }

    #[test]
    fn capitalizes_non_ascii() {
        assert_eq!(simplify_definition("élan and style"), "Élan and style");
    }
}
