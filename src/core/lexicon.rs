// --- File: src/core/lexicon.rs
use crate::core::types::{Region, SafetyLevel, SlangTerm};
use crate::data::builtin_lexicon;
use rand::seq::SliceRandom;
use rand::Rng;

/// Read-only access to the term records.
///
/// Lookups are linear scans in storage order; the table is small enough that
/// no index is kept.
#[derive(Debug, Clone)]
pub struct LexiconService {
    terms: Vec<SlangTerm>,
}

impl Default for LexiconService {
    fn default() -> Self {
        Self::new(builtin_lexicon())
    }
}

impl LexiconService {
    pub fn new(terms: Vec<SlangTerm>) -> Self {
        Self { terms }
    }

    /// Resolves a free-text query to a term.
    ///
    /// Stages, first hit wins:
    /// 1. exact word, case-insensitive
    /// 2. exact Bengali script, trimmed but not case-folded
    /// 3. word substring in either direction
    /// 4. meaning substring in either direction
    ///
    /// Stage 3 has no ranking, so a short query can land on an unrelated
    /// longer word before any meaning match is tried.
    pub fn find_term(&self, query: &str) -> Option<&SlangTerm> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        let normalized = trimmed.to_lowercase();

        if let Some(term) = self.terms.iter().find(|t| t.word.to_lowercase() == normalized) {
            log::debug!("'{}' matched word exactly", trimmed);
            return Some(term);
        }

        if let Some(term) = self.terms.iter().find(|t| t.bangla_script == trimmed) {
            log::debug!("'{}' matched script exactly", trimmed);
            return Some(term);
        }

        if let Some(term) = self
            .terms
            .iter()
            .find(|t| contains_either_way(&t.word.to_lowercase(), &normalized))
        {
            log::debug!("'{}' matched word '{}' by substring", trimmed, term.word);
            return Some(term);
        }

        let term = self
            .terms
            .iter()
            .find(|t| contains_either_way(&t.meaning.to_lowercase(), &normalized));
        match term {
            Some(t) => log::debug!("'{}' matched meaning of '{}'", trimmed, t.word),
            None => log::debug!("'{}' not found in lexicon", trimmed),
        }
        term
    }

    pub fn term_exists(&self, word: &str) -> bool {
        self.find_term(word).is_some()
    }

    /// Returns an owned copy of every record.
    pub fn all_terms(&self) -> Vec<SlangTerm> {
        self.terms.clone()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms_by_region(&self, region: Region) -> Vec<&SlangTerm> {
        self.terms.iter().filter(|t| t.regions.contains(&region)).collect()
    }

    pub fn terms_by_safety_level(&self, level: SafetyLevel) -> Vec<&SlangTerm> {
        self.terms.iter().filter(|t| t.safety_level == level).collect()
    }

    /// Substring search across meaning, usage and cultural context.
    pub fn search_by_meaning(&self, query: &str) -> Vec<&SlangTerm> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return vec![];
        }
        self.terms
            .iter()
            .filter(|t| {
                t.meaning.to_lowercase().contains(&normalized)
                    || t.usage.to_lowercase().contains(&normalized)
                    || t.cultural_context.to_lowercase().contains(&normalized)
            })
            .collect()
    }

    pub fn random_term<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&SlangTerm> {
        self.terms.choose(rng)
    }
}

fn contains_either_way(field: &str, query: &str) -> bool {
    field.contains(query) || query.contains(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn service() -> LexiconService {
        LexiconService::default()
    }

    #[test]
    fn exact_word_lookup_returns_stored_record_in_any_case() {
        let lexicon = service();
        for stored in lexicon.all_terms() {
            for query in [stored.word.clone(), stored.word.to_uppercase(), stored.word.to_lowercase()] {
                assert_eq!(lexicon.find_term(&query), Some(&stored), "query {query:?}");
            }
        }
    }

    #[test]
    fn script_lookup_returns_stored_record() {
        let lexicon = service();
        for stored in lexicon.all_terms() {
            let padded = format!("  {}  ", stored.bangla_script);
            assert_eq!(lexicon.find_term(&padded), Some(&stored));
        }
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs("\t\n")]
    fn blank_queries_miss(#[case] query: &str) {
        assert!(service().find_term(query).is_none());
    }

    #[rstest]
    #[case::word_contains_query("fata", "Fatafati")]
    #[case::query_contains_word("lyadh korbo", "Lyadh")]
    #[case::meaning_substring("laziness", "Lyadh")]
    #[case::meaning_other_direction("so awesome!", "Fatafati")]
    fn fuzzy_stages_resolve(#[case] query: &str, #[case] expected: &str) {
        let lexicon = service();
        assert_eq!(lexicon.find_term(query).map(|t| t.word.as_str()), Some(expected));
    }

    #[test]
    fn short_queries_take_the_first_word_substring_hit() {
        // "ha" is inside "Chap" before any meaning is consulted.
        let lexicon = service();
        assert_eq!(lexicon.find_term("ha").map(|t| t.word.as_str()), Some("Chap"));
    }

    #[test]
    fn unknown_query_misses() {
        assert!(service().find_term("xyzqwerty").is_none());
    }

    #[test]
    fn term_exists_agrees_with_find_term() {
        let lexicon = service();
        for query in ["lyadh", "ল্যাদ", "fata", "awesome", "xyzqwerty", "", "Gar"] {
            assert_eq!(lexicon.term_exists(query), lexicon.find_term(query).is_some());
        }
    }

    #[test]
    fn all_terms_is_a_copy() {
        let lexicon = service();
        let mut copy = lexicon.all_terms();
        copy.clear();
        assert_eq!(lexicon.all_terms().len(), lexicon.len());
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn filters_by_region_and_safety() {
        let lexicon = service();
        let kolkata = lexicon.terms_by_region(Region::Kolkata);
        assert!(kolkata.iter().all(|t| t.regions.contains(&Region::Kolkata)));
        assert!(kolkata.iter().any(|t| t.word == "Lyadh"));

        let roasts = lexicon.terms_by_safety_level(SafetyLevel::FriendlyRoast);
        let words: Vec<_> = roasts.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["Aantel", "Bari-ghora", "Mayya"]);
    }

    #[test]
    fn search_by_meaning_checks_usage_and_context() {
        let lexicon = service();
        let hits: Vec<_> = lexicon.search_by_meaning("tea stall").iter().map(|t| t.word.clone()).collect();
        assert_eq!(hits, vec!["Aantel".to_string()]);
        assert!(lexicon.search_by_meaning("  ").is_empty());
        assert!(lexicon
            .search_by_meaning("zamindar")
            .iter()
            .any(|t| t.word == "Bari-ghora"));
    }

    #[test]
    fn random_term_is_none_on_empty_store() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(LexiconService::new(vec![]).random_term(&mut rng).is_none());
        let lexicon = service();
        let picked = lexicon.random_term(&mut rng).unwrap();
        assert!(lexicon.term_exists(&picked.word));
    }
}
