//! Final label pass for French text: whitespace, casing and articles.

use std::borrow::Cow;

/// Upper-case words kept as-is, route codes included.
const ACRONYMS: &[&str] = &[
    "AMT", "CHSLD", "CISSS", "CLSC", "CSSS", "IGA", "MRC", "RTM", "STL", "STM", "TACL", "UQO",
    "ZC", "ZN",
];

/// Articles and prepositions written in lower case inside a label.
const SMALL_WORDS: &[&str] = &[
    "à", "au", "aux", "de", "des", "du", "en", "et", "la", "le", "les", "sous", "sur",
];

/// Elided articles (`d'Youville`, `l'Inter`), straight and typographic apostrophe.
const ELISIONS: &[&str] = &["d'", "l'", "d\u{2019}", "l\u{2019}"];

/// Clean a French label.
///
/// Whitespace is collapsed, all-caps words are title-cased (acronyms
/// excepted), articles after the first word are lower-cased and the first
/// letter is capitalised.
pub fn clean_label_fr(label: &str) -> String {
    let mut out = String::with_capacity(label.len());

    for (i, word) in label.split_whitespace().enumerate() {
        let word = recase_upper_word(word);
        if i == 0 {
            out.push_str(&capitalize_first(&word));
        } else {
            out.push(' ');
            out.push_str(&lowercase_small_word(&word));
        }
    }

    out
}

/// Title-case a word written entirely in capitals.
///
/// The case of the first letter is not consulted, so `l'INTER` and
/// `L'INTER` recase alike whether or not the word was capitalised first.
fn recase_upper_word(word: &str) -> Cow<'_, str> {
    let letters: String = word.chars().filter(|c| c.is_alphabetic()).collect();
    let all_caps =
        letters.chars().count() >= 2 && letters.chars().skip(1).all(|c| !c.is_lowercase());
    if !all_caps || ACRONYMS.contains(&letters.as_str()) {
        return Cow::Borrowed(word);
    }

    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if prev.is_some_and(|p| p.is_alphanumeric()) {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev = Some(c);
    }
    Cow::Owned(out)
}

fn lowercase_small_word(word: &str) -> Cow<'_, str> {
    let lower = word.to_lowercase();
    if SMALL_WORDS.contains(&lower.as_str()) {
        return Cow::Owned(lower);
    }

    for &elision in ELISIONS {
        if lower.starts_with(elision) && lower.len() > elision.len() {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                let mut out: String = first.to_lowercase().collect();
                out.push_str(chars.as_str());
                return Cow::Owned(out);
            }
        }
    }

    Cow::Borrowed(word)
}

fn capitalize_first(word: &str) -> Cow<'_, str> {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(word),
    }
}
