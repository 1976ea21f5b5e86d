//! Krovetz-style inflectional stemmer.
//!
//! Krovetz's stemmer removes inflectional endings only (plurals, past
//! tense, gerunds) and tries to return a real word, consulting a
//! dictionary for irregular forms and spelling recovery. This
//! implementation keeps that shape with a compact irregular-form table
//! and heuristic spelling recovery instead of a full dictionary: doubled
//! consonants are undoubled and a trailing `e` is restored where the
//! remaining letters demand one.
//!
//! Like the Porter implementation, matching is byte-exact on lowercase
//! ASCII suffixes; uppercase suffixes pass through untouched.

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::transform::stem::Stemmer;

/// Irregular forms that no suffix rule recovers.
static IRREGULAR_FORMS: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("calves", "calf"),
        ("children", "child"),
        ("dying", "die"),
        ("feet", "foot"),
        ("geese", "goose"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("lying", "lie"),
        ("men", "man"),
        ("mice", "mouse"),
        ("teeth", "tooth"),
        ("wives", "wife"),
        ("women", "woman"),
    ]
    .into_iter()
    .collect()
});

/// Krovetz-style inflectional stemmer.
#[derive(Clone, Copy, Debug, Default)]
pub struct KrovetzStemmer;

impl KrovetzStemmer {
    /// Create a new Krovetz stemmer.
    pub fn new() -> Self {
        KrovetzStemmer
    }

    fn is_vowel(b: u8) -> bool {
        matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
    }

    /// Undouble a doubled final consonant and restore a trailing `e`
    /// where the stem's final letter demands one.
    fn recover_spelling(mut stem: Vec<u8>) -> Vec<u8> {
        let n = stem.len();
        if n >= 3 && stem[n - 1] == stem[n - 2] && !Self::is_vowel(stem[n - 1]) {
            // "hopped" -> "hopp" -> "hop"; "ll" stays ("falling" -> "fall").
            if stem[n - 1] != b'l' && stem[n - 1] != b's' {
                stem.pop();
                return stem;
            }
        }
        // English words do not end in these letters without an e.
        if matches!(stem.last(), Some(b'v') | Some(b'c') | Some(b'u')) {
            stem.push(b'e');
        }
        stem
    }

    fn plural(w: &[u8]) -> Option<Vec<u8>> {
        let n = w.len();
        if n > 4 && w.ends_with(b"ies") {
            let mut stem = w[..n - 3].to_vec();
            stem.push(b'y');
            return Some(stem);
        }
        if w.ends_with(b"sses") || w.ends_with(b"xes") || w.ends_with(b"ches")
            || w.ends_with(b"shes") || w.ends_with(b"zes")
        {
            return Some(w[..n - 2].to_vec());
        }
        if n > 3 && w.ends_with(b"s") && !w.ends_with(b"ss") && !w.ends_with(b"us") {
            return Some(w[..n - 1].to_vec());
        }
        None
    }

    fn past(w: &[u8]) -> Option<Vec<u8>> {
        let n = w.len();
        if n > 4 && w.ends_with(b"ied") {
            let mut stem = w[..n - 3].to_vec();
            stem.push(b'y');
            return Some(stem);
        }
        if n > 4 && w.ends_with(b"eed") {
            return Some(w[..n - 1].to_vec());
        }
        if n > 3 && w.ends_with(b"ed") {
            let stem = w[..n - 2].to_vec();
            if stem.iter().any(|&b| Self::is_vowel(b)) {
                return Some(Self::recover_spelling(stem));
            }
        }
        None
    }

    fn gerund(w: &[u8]) -> Option<Vec<u8>> {
        let n = w.len();
        if n > 4 && w.ends_with(b"ing") {
            let stem = w[..n - 3].to_vec();
            if stem.iter().any(|&b| Self::is_vowel(b)) {
                return Some(Self::recover_spelling(stem));
            }
        }
        None
    }
}

impl Stemmer for KrovetzStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() < 3 || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return word.to_string();
        }
        if let Some(root) = IRREGULAR_FORMS.get(word) {
            return (*root).to_string();
        }

        let bytes = word.as_bytes();
        let stemmed = Self::plural(bytes)
            .or_else(|| Self::past(bytes))
            .or_else(|| Self::gerund(bytes));

        match stemmed {
            Some(stem) => String::from_utf8_lossy(&stem).into_owned(),
            None => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "krovetz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_forms() {
        let stemmer = KrovetzStemmer::new();
        assert_eq!(stemmer.stem("calves"), "calf");
        assert_eq!(stemmer.stem("women"), "woman");
        assert_eq!(stemmer.stem("dying"), "die");
    }

    #[test]
    fn test_plurals() {
        let stemmer = KrovetzStemmer::new();
        assert_eq!(stemmer.stem("ponies"), "pony");
        assert_eq!(stemmer.stem("boxes"), "box");
        assert_eq!(stemmer.stem("churches"), "church");
        assert_eq!(stemmer.stem("tables"), "table");
        assert_eq!(stemmer.stem("dogs"), "dog");
        assert_eq!(stemmer.stem("glass"), "glass");
        assert_eq!(stemmer.stem("census"), "census");
    }

    #[test]
    fn test_past_tense() {
        let stemmer = KrovetzStemmer::new();
        assert_eq!(stemmer.stem("carried"), "carry");
        assert_eq!(stemmer.stem("agreed"), "agree");
        assert_eq!(stemmer.stem("hopped"), "hop");
        assert_eq!(stemmer.stem("danced"), "dance");
        assert_eq!(stemmer.stem("loved"), "love");
        assert_eq!(stemmer.stem("red"), "red");
    }

    #[test]
    fn test_gerunds() {
        let stemmer = KrovetzStemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("falling"), "fall");
        assert_eq!(stemmer.stem("dancing"), "dance");
        assert_eq!(stemmer.stem("sing"), "sing");
    }

    #[test]
    fn test_unstemmed_forms() {
        let stemmer = KrovetzStemmer::new();
        // Derivational endings are out of scope for inflectional stemming.
        assert_eq!(stemmer.stem("relational"), "relational");
        assert_eq!(stemmer.stem("happiness"), "happiness");
    }

    #[test]
    fn test_case_sensitivity() {
        let stemmer = KrovetzStemmer::new();
        assert_eq!(stemmer.stem("RUNNING"), "RUNNING");
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(KrovetzStemmer::new().name(), "krovetz");
    }
}
