//! Street type abbreviations, Québec French.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STREET_TYPES: Vec<(Regex, &'static str)> = [
        ("autoroute", "Aut"),
        ("avenue", "Av"),
        ("boulevard", "Boul"),
        ("chemin", "Ch"),
        ("croissant", "Crois"),
        ("montée", "Mtée"),
        ("rang", "Rg"),
        ("route", "Rte"),
        ("terrasse", "Tsse"),
    ]
    .into_iter()
    .map(|(word, abbrev)| {
        let re = Regex::new(&format!(r"(?i)\b{word}\b")).unwrap();
        (re, abbrev)
    })
    .collect();
}

/// Abbreviate whole-word street types (`Boulevard` → `Boul`).
pub fn clean_street_types_fr_ca(label: &str) -> String {
    let mut label = label.to_string();
    for (re, abbrev) in STREET_TYPES.iter() {
        label = re.replace_all(&label, *abbrev).into_owned();
    }
    label
}
