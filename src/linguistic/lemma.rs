//! Rule-based English lemmatizer
//!
//! Handles irregular forms from a fixed table and regular plurals by suffix
//! rules. Verb inflections outside the table are left untouched.

const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("been", "be"),
    ("being", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("had", "have"),
    ("has", "have"),
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("criteria", "criterion"),
    ("indices", "index"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("paid", "pay"),
    ("went", "go"),
    ("gone", "go"),
    ("took", "take"),
    ("taken", "take"),
    ("got", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("left", "leave"),
    ("sent", "send"),
    ("spent", "spend"),
];

/// Suffixes after which `-es` is a plural marker rather than part of the stem
const SIBILANT_ENDINGS: &[&str] = &["xes", "zes", "ches", "shes"];

/// Endings that look plural but belong to the singular form
const SINGULAR_S_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Return the lemma of a lower-cased word
pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
        return (*lemma).to_string();
    }

    let char_count = word.chars().count();
    if char_count <= 3 || !word.is_ascii() {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if char_count > 4 {
            return format!("{stem}y");
        }
    }

    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }

    if SIBILANT_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return word[..word.len() - 2].to_string();
    }

    if SINGULAR_S_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return word.to_string();
    }

    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}
