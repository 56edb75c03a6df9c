use wordcard_core::language::generic_definition;

/// Suffix templates, tested in order after the verb forms
pub const SUFFIX_PATTERNS: &[(&str, &str)] = &[
    ("tion", "The act or result of doing something"),
    ("sion", "The act or result of doing something"),
    ("ment", "The state or result of something"),
    ("ness", "The quality of being something"),
    ("able", "Can be done or is possible"),
    ("ible", "Can be done or is possible"),
    ("ful", "Full of this quality"),
    ("less", "Without this quality"),
    ("ize", "To make or become something"),
    ("ise", "To make or become something"),
    ("ify", "To make something into this"),
    ("ly", "In this kind of way"),
    ("er", "A person or thing that does this"),
    ("or", "A person who does this"),
    ("ist", "A person who does or studies this"),
    ("ism", "A belief or system about this"),
    ("ive", "Related to or tending to do this"),
    ("ous", "Having this quality"),
    ("al", "Related to this"),
    ("ic", "Related to or like this"),
];

/// Guess a definition from the shape of a word. Never empty.
///
/// Stems are cut naively: "running" gives "runn".
pub fn pattern_definition(word: &str) -> String {
    let lower = word.to_lowercase();

    if let Some(stem) = lower.strip_suffix("ing") {
        return format!("Doing the action of {stem}");
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        return format!("Did the action of {stem} in the past");
    }

    if let Some((_, template)) = SUFFIX_PATTERNS
        .iter()
        .find(|(suffix, _)| lower.ends_with(suffix))
    {
        return template.to_string();
    }

    if lower.ends_with('s') && lower.chars().count() > 3 {
        return "More than one of something".to_string();
    }

    generic_definition(word)
}
