/// Namespace prefix stripped from characteristic keys before parsing.
pub const NAMESPACE_PREFIX: &str = "android.";

/// Short words kept in title case instead of being upper-cased by the
/// length-3 acronym heuristic.
const FORCE_LOWERCASE: &[&str] = &[
    "Hot", "Map", "Max", "Min", "Pre", "Big", "Pro", "App", "Far", "Num", "Is",
];

/// Words upper-cased regardless of length.
const FORCE_UPPERCASE: &[&str] = &["Jpeg"];

/// Parse a dotted characteristic key into its humanized `(section, label)`
/// pair: first segment after the namespace is the section, last segment the
/// field label.
pub fn split_key(key: &str) -> (String, String) {
    let trimmed = key.strip_prefix(NAMESPACE_PREFIX).unwrap_or(key);
    let segments: Vec<&str> = trimmed.split('.').collect();
    let section = divide_camel_case(segments.first().copied().unwrap_or_default());
    let label = divide_camel_case(segments.last().copied().unwrap_or_default());
    (section, label)
}

/// Split a camelCase identifier into space-separated words and apply the
/// acronym casing rules.
///
/// Word boundaries: lowercase-to-uppercase, digit-to-letter, the last
/// uppercase of an uppercase run when a lowercase follows (so "ISOSensitivity"
/// yields "ISO" + "Sensitivity"), plus literal `-` and `_` separators. Words
/// of three characters or fewer are upper-cased unless exempted; words on the
/// force list are upper-cased no matter their length.
pub fn divide_camel_case(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (index, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            let prev = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_ascii_digit() && c.is_alphabetic())
                || (prev.is_alphabetic() && c.is_ascii_digit())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .into_iter()
        .map(|w| apply_casing(&capitalize(&w)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn apply_casing(word: &str) -> String {
    let force_upper = FORCE_UPPERCASE.contains(&word);
    let short_acronym = word.chars().count() <= 3 && !FORCE_LOWERCASE.contains(&word);
    if force_upper || short_acronym {
        word.to_uppercase()
    } else {
        word.to_string()
    }
}
