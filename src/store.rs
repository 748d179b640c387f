// File: src/store.rs
use crate::core::types::SlangTerm;
use crate::error::LexiconError;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads a lexicon from a JSON array of term records and validates it.
pub fn load_from_disk(path: &Path) -> Result<Vec<SlangTerm>, LexiconError> {
    let file = File::open(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let terms: Vec<SlangTerm> =
        serde_json::from_reader(reader).map_err(|source| LexiconError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&terms)?;
    log::info!("loaded {} terms from {}", terms.len(), path.display());
    Ok(terms)
}

/// Checks the per-record invariants. Duplicate words are only logged: the
/// first one in storage order wins every exact lookup anyway.
pub fn validate(terms: &[SlangTerm]) -> Result<(), LexiconError> {
    if terms.is_empty() {
        log::warn!("lexicon is empty; every lookup will miss");
    }

    let mut seen = HashSet::new();
    for (index, term) in terms.iter().enumerate() {
        let required = [
            ("word", &term.word),
            ("bangla_script", &term.bangla_script),
            ("meaning", &term.meaning),
            ("usage", &term.usage),
            ("cultural_context", &term.cultural_context),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(LexiconError::InvalidRecord {
                index,
                word: term.word.clone(),
                reason: format!("empty {field}"),
            });
        }
        if term.regions.is_empty() {
            return Err(LexiconError::InvalidRecord {
                index,
                word: term.word.clone(),
                reason: "no regions".to_string(),
            });
        }
        if !seen.insert(term.word.to_lowercase()) {
            log::warn!("duplicate word '{}' at record #{}", term.word, index);
        }
    }
    Ok(())
}
