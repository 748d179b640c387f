// File: src/safety.rs
use crate::core::types::{ExplanationTone, SafetyLevel, SafetyWarning, SlangTerm};

pub const DO_NOT_USE_HEADLINE: &str =
    "Dada/Didi, be careful! This is a heavy slang. Do not use this in public.";
pub const OFFENSIVE_HEADLINE: &str = "Dada/Didi, this word can be offensive. Use with caution.";

const DO_NOT_USE_CONSEQUENCES: &[&str] = &[
    "Can cause serious offense and social embarrassment",
    "May damage relationships and reputation",
    "Could lead to confrontation or conflict",
    "Inappropriate in all social and professional settings",
    "May be considered harassment or abuse",
];

const OFFENSIVE_CONSEQUENCES: &[&str] = &[
    "May cause discomfort or offense to others",
    "Not appropriate in formal or respectful conversations",
    "Could be misunderstood or taken negatively",
    "Better to avoid in mixed company",
];

const ROAST_CONSEQUENCES: &[&str] = &[
    "Generally harmless among friends",
    "Could be misunderstood by strangers",
    "Context and relationship matter a lot",
    "Best used in casual, friendly settings",
];

const SAFE_CONSEQUENCES: &[&str] = &[
    "No negative social consequences",
    "Appropriate in most social settings",
    "Helps you sound more local and authentic",
    "Generally well-received by Bengali speakers",
];

/// Maps a term's stored safety tag to the warnings shown alongside it.
/// Nothing is ever suppressed; dangerous terms are only annotated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyValidator;

impl SafetyValidator {
    pub fn new() -> Self {
        Self
    }

    /// Classification is baked into the data.
    pub fn classify(&self, term: &SlangTerm) -> SafetyLevel {
        term.safety_level
    }

    pub fn generate_warning(&self, term: &SlangTerm) -> SafetyWarning {
        let level = term.safety_level;
        let preamble = |verb: &str| {
            format!(
                "The term \"{}\" ({}) {} {}. {}",
                term.word,
                term.bangla_script,
                verb,
                term.meaning.to_lowercase(),
                term.usage
            )
        };

        let (warning_text, consequences, academic_explanation, recommended_action) = match level {
            SafetyLevel::DoNotUse => (
                DO_NOT_USE_HEADLINE,
                DO_NOT_USE_CONSEQUENCES,
                format!(
                    "{} This term is considered highly offensive in Bengali culture and should never be used in conversation.",
                    preamble("is")
                ),
                "Avoid using this term completely. Learn respectful alternatives for communication.",
            ),
            SafetyLevel::OffensiveAnnoying => (
                OFFENSIVE_HEADLINE,
                OFFENSIVE_CONSEQUENCES,
                format!("{} While not the most offensive, it can still cause discomfort.", preamble("means")),
                "Use only in very informal settings with close friends who understand the context.",
            ),
            SafetyLevel::FriendlyRoast => (
                "This is playful teasing language - use with friends who understand the joke!",
                ROAST_CONSEQUENCES,
                format!("{} It's typically used for friendly banter.", preamble("means")),
                "Safe to use with friends, but be mindful of your audience and their comfort level.",
            ),
            SafetyLevel::SafeFriendly => (
                "This is safe and friendly language!",
                SAFE_CONSEQUENCES,
                format!("{} This is a commonly accepted expression in Bengali culture.", preamble("means")),
                "Feel free to use this term - it will help you connect with local Bengali culture!",
            ),
        };

        SafetyWarning {
            level,
            warning_text: warning_text.to_string(),
            social_consequences: consequences.iter().map(|c| c.to_string()).collect(),
            academic_explanation,
            recommended_action: recommended_action.to_string(),
        }
    }

    pub fn requires_warning(&self, term: &SlangTerm) -> bool {
        matches!(term.safety_level, SafetyLevel::DoNotUse | SafetyLevel::OffensiveAnnoying)
    }

    /// The one-line warning printed in responses; empty for the safe tiers.
    pub fn warning_headline(&self, term: &SlangTerm) -> &'static str {
        match term.safety_level {
            SafetyLevel::DoNotUse => DO_NOT_USE_HEADLINE,
            SafetyLevel::OffensiveAnnoying => OFFENSIVE_HEADLINE,
            SafetyLevel::SafeFriendly | SafetyLevel::FriendlyRoast => "",
        }
    }

    pub fn social_consequences(&self, term: &SlangTerm) -> Vec<String> {
        self.generate_warning(term).social_consequences
    }

    pub fn is_safe_for_examples(&self, term: &SlangTerm) -> bool {
        matches!(term.safety_level, SafetyLevel::SafeFriendly | SafetyLevel::FriendlyRoast)
    }

    pub fn explanation_tone(&self, term: &SlangTerm) -> ExplanationTone {
        match term.safety_level {
            SafetyLevel::DoNotUse => ExplanationTone::Academic,
            SafetyLevel::OffensiveAnnoying => ExplanationTone::Cautious,
            SafetyLevel::FriendlyRoast | SafetyLevel::SafeFriendly => ExplanationTone::Friendly,
        }
    }

    /// Always false: content is annotated, never blocked.
    pub fn should_block(&self, _level: SafetyLevel) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::LexiconService;
    use rstest::rstest;

    fn term(word: &str) -> SlangTerm {
        LexiconService::default().find_term(word).cloned().unwrap()
    }

    #[rstest]
    #[case::do_not_use("Kelane", true, DO_NOT_USE_HEADLINE)]
    #[case::offensive("Pet hoyeche", true, OFFENSIVE_HEADLINE)]
    #[case::roast("Aantel", false, "")]
    #[case::safe("Lyadh", false, "")]
    fn headline_follows_level(#[case] word: &str, #[case] warns: bool, #[case] headline: &str) {
        let validator = SafetyValidator::new();
        let term = term(word);
        assert_eq!(validator.requires_warning(&term), warns);
        assert_eq!(validator.warning_headline(&term), headline);
    }

    #[test]
    fn headlines_are_exact() {
        assert_eq!(
            DO_NOT_USE_HEADLINE,
            "Dada/Didi, be careful! This is a heavy slang. Do not use this in public."
        );
        assert_eq!(OFFENSIVE_HEADLINE, "Dada/Didi, this word can be offensive. Use with caution.");
    }

    #[rstest]
    #[case::do_not_use("Kelane", false, ExplanationTone::Academic)]
    #[case::offensive("Pet hoyeche", false, ExplanationTone::Cautious)]
    #[case::roast("Aantel", true, ExplanationTone::Friendly)]
    #[case::safe("Fatafati", true, ExplanationTone::Friendly)]
    fn examples_and_tone_follow_level(
        #[case] word: &str,
        #[case] examples: bool,
        #[case] tone: ExplanationTone,
    ) {
        let validator = SafetyValidator::new();
        let term = term(word);
        assert_eq!(validator.is_safe_for_examples(&term), examples);
        assert_eq!(validator.explanation_tone(&term), tone);
    }

    #[test]
    fn do_not_use_warning_interpolates_the_term() {
        let warning = SafetyValidator::new().generate_warning(&term("Kelane"));
        assert_eq!(warning.level, SafetyLevel::DoNotUse);
        assert_eq!(warning.warning_text, DO_NOT_USE_HEADLINE);
        assert_eq!(warning.social_consequences.len(), 5);
        assert!(warning
            .academic_explanation
            .starts_with("The term \"Kelane\" (ক্যালানে) is silly/grinning."));
        assert!(warning.recommended_action.starts_with("Avoid using this term completely"));
    }

    #[test]
    fn safe_warning_is_friendly() {
        let validator = SafetyValidator::new();
        let lyadh = term("Lyadh");
        let warning = validator.generate_warning(&lyadh);
        assert_eq!(warning.warning_text, "This is safe and friendly language!");
        assert!(warning.academic_explanation.contains("means proactive laziness."));
        assert_eq!(validator.social_consequences(&lyadh), warning.social_consequences);
        assert_eq!(validator.classify(&lyadh), SafetyLevel::SafeFriendly);
    }

    #[test]
    fn nothing_is_ever_blocked() {
        let validator = SafetyValidator::new();
        assert!(SafetyLevel::ALL.iter().all(|&level| !validator.should_block(level)));
    }
}
