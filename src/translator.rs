// File: src/translator.rs
//! Public entry point: wires the lexicon, safety and regional services
//! together and exposes the command dispatcher used by the CLI.

use crate::config::Config;
use crate::core::engine::TranslationEngine;
use crate::core::lexicon::LexiconService;
use crate::core::types::{PersonalityElement, Region, SafetyLevel, SlangTerm, TranslationResult};
use crate::data::builtin_lexicon;
use crate::error::{LexiconError, TranslateError};
use crate::store::load_from_disk;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAFE_TERMS_SHOWN: usize = 10;

pub const HELP_TEXT: &str = "\
🗺️ The Local Guide - Bengali Slang Translator Commands:

translate <term> [region] - Translate a Bengali slang term
  Example: translate lyadh kolkata

search <meaning> - Search for terms by meaning
  Example: search lazy

random - Get a random term with explanation

safe-terms - List safe terms for learning

help - Show this help message

exit - Exit the translator

Regions: kolkata, bardhaman, tarakeswar";

pub const FAREWELL: &str = "Dhonnobad! Come back anytime to learn more Bengali slang!";

/// The translator facade. Owns its random source, so two translators built
/// with the same seed produce the same decorated output.
pub struct SlangTranslator {
    engine: TranslationEngine,
    rng: StdRng,
}

impl SlangTranslator {
    /// Built-in lexicon, entropy-seeded randomness.
    pub fn new() -> Self {
        Self::with_lexicon(LexiconService::new(builtin_lexicon()), StdRng::from_entropy())
    }

    /// Built-in lexicon with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_lexicon(LexiconService::new(builtin_lexicon()), StdRng::seed_from_u64(seed))
    }

    pub fn with_lexicon(lexicon: LexiconService, rng: StdRng) -> Self {
        Self { engine: TranslationEngine::new(lexicon), rng }
    }

    /// Builds a translator from runtime configuration. Only loading a custom
    /// lexicon file can fail.
    pub fn from_config(config: &Config) -> Result<Self, LexiconError> {
        let terms = match &config.lexicon_path {
            Some(path) => load_from_disk(path)?,
            None => builtin_lexicon(),
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut engine = TranslationEngine::new(LexiconService::new(terms));
        if let Some(max) = config.max_input_len {
            engine = engine.with_max_input_len(max);
        }
        Ok(Self { engine, rng })
    }

    pub fn lexicon(&self) -> &LexiconService {
        &self.engine.lexicon
    }

    /// Never fails: composition errors come back as a not-found result that
    /// names the input and the error.
    pub fn translate(&mut self, text: &str, region: Option<Region>) -> TranslationResult {
        match self.engine.translate_term(text, region, &mut self.rng) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("translation of {:?} failed: {}", text, err);
                error_result(text, &err)
            }
        }
    }

    pub fn translate_kolkata(&mut self, text: &str) -> TranslationResult {
        self.translate(text, Some(Region::Kolkata))
    }

    pub fn translate_bardhaman(&mut self, text: &str) -> TranslationResult {
        self.translate(text, Some(Region::Bardhaman))
    }

    pub fn translate_tarakeswar(&mut self, text: &str) -> TranslationResult {
        self.translate(text, Some(Region::TarakeswarHooghly))
    }

    pub fn formatted_response(&mut self, text: &str, region: Option<Region>) -> String {
        self.translate(text, region).formatted_response
    }

    pub fn term_exists(&self, word: &str) -> bool {
        self.lexicon().term_exists(word)
    }

    pub fn regional_terms(&self, region: Region) -> Vec<String> {
        words(self.lexicon().terms_by_region(region))
    }

    pub fn search_by_meaning(&self, query: &str) -> Vec<String> {
        words(self.lexicon().search_by_meaning(query))
    }

    pub fn random_term(&mut self) -> Option<String> {
        self.engine.lexicon.random_term(&mut self.rng).map(|t| t.word.clone())
    }

    /// Only the `Safe / Friendly` tier; roasts are left out.
    pub fn safe_terms(&self) -> Vec<String> {
        words(self.lexicon().terms_by_safety_level(SafetyLevel::SafeFriendly))
    }

    /// Splits `translate <term> [region]` into its term and region. Only the
    /// first argument is the term; an unknown alias means no region. `None`
    /// when the line is not a translate command or has no term.
    pub fn parse_translate(line: &str) -> Option<(&str, Option<Region>)> {
        let mut parts = line.split_whitespace();
        if !parts.next()?.eq_ignore_ascii_case("translate") {
            return None;
        }
        let term = parts.next()?;
        let region = parts.next().and_then(Region::from_alias);
        Some((term, region))
    }

    /// Runs one whitespace-tokenised command line and returns its output.
    pub fn run_command(&mut self, line: &str) -> String {
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            return "Invalid command. Type \"help\" for available commands.".to_string();
        };
        let cmd = first.to_lowercase();
        let args: Vec<&str> = parts.collect();
        log::debug!("command {:?} with {} argument(s)", cmd, args.len());

        match cmd.as_str() {
            "translate" => match Self::parse_translate(line) {
                Some((term, region)) => self.translate(term, region).formatted_response,
                None => "Dada, please provide a term to translate!".to_string(),
            },
            "search" => {
                if args.is_empty() {
                    return "Dada, please provide a meaning to search for!".to_string();
                }
                let query = args.join(" ");
                let found = self.search_by_meaning(&query);
                if found.is_empty() {
                    format!("No terms found for \"{}\". Try different keywords!", query)
                } else {
                    format!("Found terms: {}", found.join(", "))
                }
            }
            "random" => match self.random_term() {
                Some(word) => format!("Random term: {}", self.translate(&word, None).formatted_response),
                None => "No terms available!".to_string(),
            },
            "safe-terms" => {
                let safe = self.safe_terms();
                let shown: Vec<&str> = safe.iter().take(SAFE_TERMS_SHOWN).map(String::as_str).collect();
                let more = if safe.len() > SAFE_TERMS_SHOWN { "..." } else { "" };
                format!("Safe terms to learn: {}{}", shown.join(", "), more)
            }
            "help" => HELP_TEXT.to_string(),
            "exit" => FAREWELL.to_string(),
            _ => format!("Unknown command \"{}\". Type \"help\" for available commands.", cmd),
        }
    }
}

impl Default for SlangTranslator {
    fn default() -> Self {
        Self::new()
    }
}

fn words(terms: Vec<&SlangTerm>) -> Vec<String> {
    terms.into_iter().map(|t| t.word.clone()).collect()
}

fn error_result(input: &str, err: &TranslateError) -> TranslationResult {
    TranslationResult {
        term: None,
        formatted_response: format!(
            "Dada, something went wrong while processing \"{}\": {}",
            input, err
        ),
        safety_warning: None,
        cultural_notes: vec!["Error occurred during processing".to_string()],
        personality_elements: vec![PersonalityElement::addressing("Dada")],
        is_term_found: false,
        tone_style: None,
    }
}
