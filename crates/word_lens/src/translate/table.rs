//! Word-by-word substitution table

use std::collections::HashMap;

use super::dictionary::ENGLISH_TO_SPANISH;

/// Immutable source word → target string mapping
///
/// Built once at startup and shared by reference; there is no way to
/// change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Build a table from source/target pairs
    ///
    /// Later pairs override earlier ones with the same source word.
    pub fn from_pairs<S, T>(pairs: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(source, target)| (source.into(), target.into()))
                .collect(),
        }
    }

    /// The built-in English to Spanish table
    pub fn english_to_spanish() -> Self {
        Self::from_pairs(ENGLISH_TO_SPANISH.iter().copied())
    }

    /// Look up a word without falling back
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Translate a single word
    ///
    /// `word` is expected to be lowercased already. Unknown words come back
    /// lowercased with an `o` appended.
    pub fn translate(&self, word: &str) -> String {
        match self.get(word) {
            Some(target) => target.to_string(),
            None => {
                let mut fallback = word.to_lowercase();
                fallback.push('o');
                fallback
            }
        }
    }

    /// Translate a sequence of recognized words into the word list text
    ///
    /// Each word is lowercased, translated, and appended after a single
    /// space, so a non-empty result always starts with a space.
    pub fn translate_all<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> String {
        words.into_iter().fold(String::new(), |mut text, word| {
            text.push(' ');
            text.push_str(&self.translate(&word.to_lowercase()));
            text
        })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::english_to_spanish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_word() {
        let table = TranslationTable::english_to_spanish();
        assert_eq!(table.translate("hello"), "Hola");
        assert_eq!(table.translate("about"), "acerca de");
    }

    #[test]
    fn test_unknown_word_fallback() {
        let table = TranslationTable::english_to_spanish();
        assert_eq!(table.translate("zzznotaword"), "zzznotawordo");
        assert!(table.get("zzznotaword").is_none());
    }

    #[test]
    fn test_fallback_lowercases() {
        let table = TranslationTable::from_pairs([("cat", "gato")]);
        assert_eq!(table.translate("Dog"), "dogo");
        // lookup itself is exact
        assert_eq!(table.translate("Cat"), "cato");
    }

    #[test]
    fn test_builtin_table_is_complete() {
        let table = TranslationTable::default();
        assert_eq!(table.len(), ENGLISH_TO_SPANISH.len());
        assert_eq!(table.get("us"), Some("nos"));
    }

    #[test]
    fn test_repeated_lookup_is_idempotent() {
        let table = TranslationTable::english_to_spanish();
        let first = table.translate(&"Hello".to_lowercase());
        let second = table.translate(&"hello".to_lowercase());
        assert_eq!(first, second);
        assert_eq!(table, TranslationTable::english_to_spanish());
    }

    #[test]
    fn test_translate_all_builds_list_text() {
        let table = TranslationTable::from_pairs([("hello", "Hola"), ("world", "mundo")]);
        assert_eq!(table.translate_all(["Hello", "World", "xyz"]), " Hola mundo xyzo");
        assert_eq!(table.translate_all(std::iter::empty()), "");
    }
}
