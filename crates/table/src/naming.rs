//! Column titles generated from field identifiers.

use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// Splits an identifier into words at underscores, camel-case humps,
/// acronym ends and letter/digit changes.
///
/// `HTTPServer` splits into `HTTP` and `Server`; `address2` into
/// `address` and `2`.
pub fn split_words(ident: &str) -> Vec<&str> {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut words = Vec::new();

    for part in ident.split(|c: char| c == '_' || c == '-' || c.is_whitespace()) {
        let chars: Vec<(usize, char)> = part.char_indices().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let prev = classify(chars[i - 1].1);
            let cur = classify(chars[i].1);
            if prev == cur {
                continue;
            }
            let (pos, _) = chars[i];
            match (prev, cur) {
                // "firstName": the upper letter starts a new word.
                (CharClass::Lower, CharClass::Upper) => {}
                // "HTTPServer": the last upper letter belongs to the next word.
                (CharClass::Upper, CharClass::Lower) => {
                    let (hump, _) = chars[i - 1];
                    if hump > start {
                        words.push(&part[start..hump]);
                        start = hump;
                    }
                    continue;
                }
                _ => {}
            }
            words.push(&part[start..pos]);
            start = pos;
        }
        if start < part.len() {
            words.push(&part[start..]);
        }
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Title for a field: first word capitalized, the rest lower-cased, joined
/// by single spaces. `firstName` and `first_name` both give `"First name"`.
pub fn display_name(ident: &str) -> String {
    split_words(ident)
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                capitalize(word)
            } else {
                word.to_lowercase()
            }
        })
        .join(" ")
}
