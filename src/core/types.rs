// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered severity of a term. Later variants are more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SafetyLevel {
    #[serde(rename = "Safe / Friendly")]
    SafeFriendly,
    #[serde(rename = "Friendly Roast")]
    FriendlyRoast,
    #[serde(rename = "Offensive / Annoying")]
    OffensiveAnnoying,
    #[serde(rename = "Do not use")]
    DoNotUse,
}

impl SafetyLevel {
    pub const ALL: [SafetyLevel; 4] = [
        SafetyLevel::SafeFriendly,
        SafetyLevel::FriendlyRoast,
        SafetyLevel::OffensiveAnnoying,
        SafetyLevel::DoNotUse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SafetyLevel::SafeFriendly => "Safe / Friendly",
            SafetyLevel::FriendlyRoast => "Friendly Roast",
            SafetyLevel::OffensiveAnnoying => "Offensive / Annoying",
            SafetyLevel::DoNotUse => "Do not use",
        }
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three regional personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Kolkata,
    Bardhaman,
    #[serde(rename = "Tarakeswar/Hooghly")]
    TarakeswarHooghly,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Kolkata, Region::Bardhaman, Region::TarakeswarHooghly];

    pub fn label(self) -> &'static str {
        match self {
            Region::Kolkata => "Kolkata",
            Region::Bardhaman => "Bardhaman",
            Region::TarakeswarHooghly => "Tarakeswar/Hooghly",
        }
    }

    /// Resolves a user-typed region alias. Unknown aliases yield `None`.
    pub fn from_alias(alias: &str) -> Option<Region> {
        match alias.trim().to_lowercase().as_str() {
            "kolkata" | "calcutta" => Some(Region::Kolkata),
            "bardhaman" | "burdwan" => Some(Region::Bardhaman),
            "tarakeswar" | "hooghly" | "tarakeswar-hooghly" => Some(Region::TarakeswarHooghly),
            _ => None,
        }
    }

    pub fn tone_style(self) -> ToneStyle {
        match self {
            Region::Kolkata => ToneStyle::LightWitty,
            Region::Bardhaman => ToneStyle::EarthyRespectful,
            Region::TarakeswarHooghly => ToneStyle::ExtraCautious,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneStyle {
    LightWitty,
    EarthyRespectful,
    ExtraCautious,
}

/// A single slang record. This is the "value" in the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlangTerm {
    pub word: String,
    /// The term written in Bengali script.
    pub bangla_script: String,
    pub meaning: String,
    pub usage: String,
    pub safety_level: SafetyLevel,
    pub regions: Vec<Region>,
    pub cultural_context: String,
    /// Only populated for the two safe tiers, by data convention.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyWarning {
    pub level: SafetyLevel,
    pub warning_text: String,
    pub social_consequences: Vec<String>,
    pub academic_explanation: String,
    pub recommended_action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationTone {
    Academic,
    Cautious,
    Friendly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityKind {
    Addressing,
    CulturalReference,
    ToneMarker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityElement {
    pub kind: PersonalityKind,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl PersonalityElement {
    pub fn addressing(content: impl Into<String>) -> Self {
        Self { kind: PersonalityKind::Addressing, content: content.into(), region: None }
    }

    pub fn cultural_reference(content: impl Into<String>, region: Option<Region>) -> Self {
        Self { kind: PersonalityKind::CulturalReference, content: content.into(), region }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityTraits {
    pub addressing_terms: Vec<&'static str>,
    pub cultural_references: Vec<&'static str>,
    pub tone_markers: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CulturalContext {
    pub markers: Vec<&'static str>,
    pub references: Vec<&'static str>,
    pub heuristics: Vec<&'static str>,
}

/// Everything produced for a single query. Nothing here outlives the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub term: Option<SlangTerm>,
    pub formatted_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_warning: Option<SafetyWarning>,
    pub cultural_notes: Vec<String>,
    pub personality_elements: Vec<PersonalityElement>,
    pub is_term_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_style: Option<ToneStyle>,
}

/// The text-oriented view of a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResponse {
    pub content: String,
    pub safety_warning: Option<SafetyWarning>,
    pub cultural_notes: Vec<String>,
}

impl From<&TranslationResult> for FormattedResponse {
    fn from(result: &TranslationResult) -> Self {
        Self {
            content: result.formatted_response.clone(),
            safety_warning: result.safety_warning.clone(),
            cultural_notes: result.cultural_notes.clone(),
        }
    }
}
