//! English inflection for resource and component names
//!
//! Only the rules needed to turn field stems into resource names
//! (`author` -> `authors`) and resource names into component names
//! (`categories` -> `Category`) are covered.

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "moose",
    "deer",
    "news",
    "data",
    "metadata",
    "media",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
];

/// Split a word into a prefix and its last word segment
///
/// `blogPost` -> (`blog`, `Post`), `post_comment` -> (`post_`, `comment`).
fn split_last_word(word: &str) -> (&str, &str) {
    let boundary = word
        .char_indices()
        .rev()
        .find(|(i, c)| *i > 0 && (c.is_uppercase() || *c == '_' || *c == '-'))
        .map(|(i, c)| if c.is_uppercase() { i } else { i + c.len_utf8() })
        .unwrap_or(0);
    word.split_at(boundary)
}

/// Swap an irregular or uncountable last word, keeping the leading case
fn lookup_irregular(last: &str, to_plural: bool) -> Option<String> {
    let lower = last.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return Some(last.to_string());
    }

    let replacement = IRREGULAR.iter().find_map(|(singular, plural)| {
        let (from, to) = if to_plural {
            (singular, plural)
        } else {
            (plural, singular)
        };
        (lower == *from).then_some(*to)
    })?;

    if last.chars().next().is_some_and(char::is_uppercase) {
        Some(capitalize(replacement))
    } else {
        Some(replacement.to_string())
    }
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    match (chars.next(), chars.next()) {
        (Some('y'), Some(c)) => !"aeiou".contains(c.to_ascii_lowercase()),
        _ => false,
    }
}

/// Pluralize an English word
///
/// Words already ending in `s` are left alone, except for `ss` and `us`
/// endings which take `es`.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let (prefix, last) = split_last_word(word);
    if let Some(replacement) = lookup_irregular(last, true) {
        return format!("{}{}", prefix, replacement);
    }

    let lower = word.to_lowercase();
    if lower.ends_with("ss")
        || lower.ends_with("us")
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        format!("{}es", word)
    } else if lower.ends_with('s') {
        word.to_string()
    } else if ends_with_consonant_y(&lower) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{}s", word)
    }
}

/// Singularize an English word
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let (prefix, last) = split_last_word(word);
    if let Some(replacement) = lookup_irregular(last, false) {
        return format!("{}{}", prefix, replacement);
    }

    let lower = word.to_lowercase();
    let strip = |n: usize| word[..word.len() - n].to_string();

    if lower.ends_with("ies") && word.len() > 3 {
        format!("{}y", strip(3))
    } else if lower.ends_with("sses")
        || lower.ends_with("statuses")
        || lower.ends_with("aliases")
        || lower.ends_with("buses")
        || lower.ends_with("xes")
        || lower.ends_with("zes")
        || lower.ends_with("ches")
        || lower.ends_with("shes")
    {
        strip(2)
    } else if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        word.to_string()
    } else if lower.ends_with('s') && word.len() > 1 {
        strip(1)
    } else {
        word.to_string()
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
