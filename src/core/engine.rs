use crate::core::{lexicon::LexiconService, regional::RegionalAdapter};
use crate::core::types::{
    FormattedResponse, PersonalityElement, Region, SafetyWarning, SlangTerm, TranslationResult,
};
use crate::error::TranslateError;
use crate::safety::SafetyValidator;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

pub const EMPTY_INPUT_PROMPT: &str = "Dada, ki bolcho? Please tell me a word to explain!";
pub const BHAIYA_CORRECTION: &str =
    "Boss, ekhane 'Dada' (দাদা) bolun, nahole lok e bhabbe apni tourist!";

static BHAIYA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)bhaiya").expect("bhaiya pattern is a valid regex"));

/// Turns a raw query into a `TranslationResult`.
///
/// Content assembly (`render_entry`) is deterministic. Randomness only enters
/// through the addressing pick and the regional tone pass, both drawn from the
/// caller's RNG.
pub struct TranslationEngine {
    pub lexicon: LexiconService,
    pub safety: SafetyValidator,
    pub regional: RegionalAdapter,
    max_input_len: Option<usize>,
}

impl TranslationEngine {
    pub fn new(lexicon: LexiconService) -> Self {
        Self {
            lexicon,
            safety: SafetyValidator::new(),
            regional: RegionalAdapter::new(),
            max_input_len: None,
        }
    }

    /// Caps query length. Unlimited unless set.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = Some(max_input_len);
        self
    }

    pub fn translate_term<R: Rng + ?Sized>(
        &self,
        input: &str,
        region: Option<Region>,
        rng: &mut R,
    ) -> Result<TranslationResult, TranslateError> {
        self.validate_input(input)?;

        // 1. Nothing to look up
        if input.trim().is_empty() {
            return Ok(self.empty_result());
        }

        // 2. Etiquette first, then whatever is left of the query
        if BHAIYA.is_match(input) {
            log::debug!("bhaiya correction triggered by {:?}", input);
            return Ok(self.bhaiya_correction_result(input, region, rng));
        }

        // 3. Lexicon miss
        let Some(term) = self.lexicon.find_term(input.trim()) else {
            return Ok(self.unknown_term_result(input, region, rng));
        };

        // 4. Full entry
        let addressing = self.addressing(region, rng);
        let formatted_response = self.build_entry(term, addressing, region, rng);
        Ok(TranslationResult {
            term: Some(term.clone()),
            formatted_response,
            safety_warning: self.warning_for(term),
            cultural_notes: self.cultural_notes(term, region),
            personality_elements: self.personality_elements(addressing, region, rng),
            is_term_found: true,
            tone_style: region.map(Region::tone_style),
        })
    }

    /// Assembles the entry block for a term. Pure: the same arguments always
    /// produce the same text.
    pub fn render_entry(&self, term: &SlangTerm, addressing: &str, region: Option<Region>) -> String {
        let mut response = format!("**{}**\n\n", term.bangla_script);

        if self.safety.requires_warning(term) {
            response.push_str(&format!("⚠️ {}\n\n", self.safety.warning_headline(term)));
        }

        response.push_str(&format!(
            "{}, \"{}\" means **{}**. {}\n\n",
            addressing, term.word, term.meaning, term.usage
        ));
        response.push_str(&format!("**Cultural Context:** {}\n\n", term.cultural_context));

        if let Some(region) = region {
            let context = self.regional.cultural_context(region, term);
            if !context.heuristics.is_empty() {
                response.push_str(&format!("**Regional Notes:** {}\n\n", context.heuristics.join(" ")));
            }
        }

        if self.safety.is_safe_for_examples(term) && !term.examples.is_empty() {
            response.push_str(&format!("**Examples:** {}\n\n", term.examples.join(", ")));
        }

        response.push_str(&format!("**Safety Level:** {}", term.safety_level));
        response
    }

    /// The text-only projection handed to callers that do not need metadata.
    pub fn format_response(&self, result: &TranslationResult) -> FormattedResponse {
        FormattedResponse::from(result)
    }

    fn build_entry<R: Rng + ?Sized>(
        &self,
        term: &SlangTerm,
        addressing: &str,
        region: Option<Region>,
        rng: &mut R,
    ) -> String {
        let rendered = self.render_entry(term, addressing, region);
        match region {
            Some(region) => self.regional.adapt_tone(region, &rendered, rng).trim().to_string(),
            None => rendered.trim().to_string(),
        }
    }

    fn validate_input(&self, input: &str) -> Result<(), TranslateError> {
        let Some(max) = self.max_input_len else {
            return Ok(());
        };
        let len = input.chars().count();
        if len > max {
            return Err(TranslateError::InputTooLong { len, max });
        }
        Ok(())
    }

    fn addressing<R: Rng + ?Sized>(&self, region: Option<Region>, rng: &mut R) -> &'static str {
        match region {
            Some(region) => self.regional.pick_addressing(region, rng),
            None => "Dada",
        }
    }

    fn warning_for(&self, term: &SlangTerm) -> Option<SafetyWarning> {
        self.safety
            .requires_warning(term)
            .then(|| self.safety.generate_warning(term))
    }

    fn cultural_notes(&self, term: &SlangTerm, region: Option<Region>) -> Vec<String> {
        let mut notes = Vec::new();
        if !term.regions.is_empty() {
            let regions: Vec<&str> = term.regions.iter().map(|r| r.label()).collect();
            notes.push(format!("Used in: {}", regions.join(", ")));
        }
        notes.push(format!("Safety level: {}", term.safety_level));
        if let Some(region) = region {
            if let Some(reference) = self.regional.cultural_context(region, term).references.first() {
                notes.push(format!("Regional context: {}", reference));
            }
        }
        notes
    }

    fn personality_elements<R: Rng + ?Sized>(
        &self,
        addressing: &str,
        region: Option<Region>,
        rng: &mut R,
    ) -> Vec<PersonalityElement> {
        let mut elements = vec![PersonalityElement::addressing(addressing)];
        if let Some(region) = region {
            if let Some(reference) = self.regional.pick_cultural_reference(region, rng) {
                elements.push(PersonalityElement::cultural_reference(reference, Some(region)));
            }
        }
        elements
    }

    fn empty_result(&self) -> TranslationResult {
        TranslationResult {
            term: None,
            formatted_response: EMPTY_INPUT_PROMPT.to_string(),
            safety_warning: None,
            cultural_notes: vec!["Empty input provided".to_string()],
            personality_elements: vec![PersonalityElement::addressing("Dada")],
            is_term_found: false,
            tone_style: None,
        }
    }

    fn unknown_term_result<R: Rng + ?Sized>(
        &self,
        input: &str,
        region: Option<Region>,
        rng: &mut R,
    ) -> TranslationResult {
        let addressing = self.addressing(region, rng);
        let mut response = format!(
            "{}, ami \"{}\" ta jani na! This word is not in my lexicon. \
             Maybe it's a very local term or I haven't learned it yet. \
             Try asking at your nearest cha-er dokan - they know all the local slang!",
            addressing, input
        );
        if let Some(region) = region {
            response = self.regional.adapt_tone(region, &response, rng);
        }

        TranslationResult {
            term: None,
            formatted_response: response,
            safety_warning: None,
            cultural_notes: vec!["Unknown term - not found in verified lexicon".to_string()],
            personality_elements: vec![
                PersonalityElement::addressing(addressing),
                PersonalityElement::cultural_reference("cha-er dokan", None),
            ],
            is_term_found: false,
            tone_style: region.map(Region::tone_style),
        }
    }

    fn bhaiya_correction_result<R: Rng + ?Sized>(
        &self,
        input: &str,
        region: Option<Region>,
        rng: &mut R,
    ) -> TranslationResult {
        let mut response = BHAIYA_CORRECTION.to_string();
        let mut cultural_notes = vec!["Bhaiya correction provided".to_string()];
        let personality_elements = vec![
            PersonalityElement::addressing("Boss"),
            PersonalityElement::cultural_reference("Dada correction", None),
        ];

        let residual = BHAIYA.replace_all(input, "");
        let residual = residual.trim();
        let term = if residual.is_empty() { None } else { self.lexicon.find_term(residual) };

        let Some(term) = term else {
            return TranslationResult {
                term: None,
                formatted_response: response,
                safety_warning: None,
                cultural_notes,
                personality_elements,
                is_term_found: false,
                tone_style: region.map(Region::tone_style),
            };
        };

        let addressing = self.addressing(region, rng);
        response.push_str(&format!("\n\nNow, about \"{}\":\n", residual));
        response.push_str(&self.build_entry(term, addressing, region, rng));
        cultural_notes.extend(self.cultural_notes(term, region));

        TranslationResult {
            term: Some(term.clone()),
            formatted_response: response,
            safety_warning: self.warning_for(term),
            cultural_notes,
            personality_elements,
            is_term_found: true,
            tone_style: region.map(Region::tone_style),
        }
    }
}
