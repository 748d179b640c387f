//! End-to-end behaviour of the public translator facade.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::{fixture, rstest};
use slang_core::core::regional::RegionalAdapter;
use slang_core::core::types::{Region, SafetyLevel};
use slang_core::safety::DO_NOT_USE_HEADLINE;
use slang_core::SlangTranslator;

#[fixture]
fn translator() -> SlangTranslator {
    SlangTranslator::with_seed(2024)
}

#[rstest]
fn lyadh_is_explained_without_warnings(mut translator: SlangTranslator) {
    let result = translator.translate("lyadh", None);
    assert!(result.is_term_found);
    assert!(result.safety_warning.is_none());

    let text = &result.formatted_response;
    assert!(text.contains("ল্যাদ"));
    assert!(text.contains("Proactive Laziness"));
    assert!(text.contains("Cultural Context"));
    assert!(text.contains("Dada"));
    assert!(!text.contains("⚠️"));
    let last = text.lines().last().unwrap();
    assert!(last.contains("Safety Level") && last.contains("Safe / Friendly"), "{last}");
}

#[rstest]
fn kelane_warns_and_hides_examples(mut translator: SlangTranslator) {
    let result = translator.translate("kelane", None);
    assert!(result.is_term_found);
    assert!(result.safety_warning.is_some());
    assert!(result
        .formatted_response
        .lines()
        .any(|line| line == format!("⚠️ {}", DO_NOT_USE_HEADLINE)));
    assert!(!result.formatted_response.contains("Examples"));
}

#[rstest]
fn empty_input_asks_what_you_mean(mut translator: SlangTranslator) {
    let result = translator.translate("", None);
    assert!(!result.is_term_found);
    assert!(result.formatted_response.contains("Dada"));
    assert!(result.formatted_response.contains("ki bolcho"));
}

#[rstest]
fn unknown_terms_suggest_the_tea_stall(mut translator: SlangTranslator) {
    let result = translator.translate("unknownslangterm123", None);
    assert!(!result.is_term_found);
    assert!(result.term.is_none());
    assert!(result.formatted_response.contains("jani na"));
    assert!(result.formatted_response.contains("cha-er dokan"));
}

#[rstest]
#[case::plain("bhaiya lyadh", Some("ল্যাদ"))]
#[case::mixed_case("BhAiYa fatafati", Some("ফাটাফাটি"))]
#[case::only_bhaiya("bhaiya", None)]
fn bhaiya_is_corrected_first(
    mut translator: SlangTranslator,
    #[case] input: &str,
    #[case] script: Option<&str>,
) {
    let result = translator.translate(input, None);
    assert!(result
        .formatted_response
        .starts_with("Boss, ekhane 'Dada' (দাদা) bolun, nahole lok e bhabbe apni tourist!"));
    assert!(result.cultural_notes.iter().any(|n| n.to_lowercase().contains("bhaiya correction")));
    match script {
        Some(script) => {
            assert!(result.is_term_found);
            assert!(result.formatted_response.contains(script));
        }
        None => assert!(!result.is_term_found),
    }
}

#[rstest]
fn every_do_not_use_term_gets_the_exact_warning(mut translator: SlangTranslator) {
    let terms = translator.lexicon().terms_by_safety_level(SafetyLevel::DoNotUse);
    let words: Vec<String> = terms.iter().map(|t| t.word.clone()).collect();
    assert!(!words.is_empty());
    for word in words {
        let result = translator.translate(&word, None);
        let warning_line = result.formatted_response.lines().find(|l| l.starts_with("⚠️"));
        assert_eq!(warning_line, Some(format!("⚠️ {}", DO_NOT_USE_HEADLINE).as_str()), "{word}");
        assert!(!result.formatted_response.contains("Examples"), "{word}");
    }
}

#[rstest]
fn safe_tier_examples_appear_verbatim(mut translator: SlangTranslator) {
    let safe: Vec<_> = translator
        .lexicon()
        .all_terms()
        .into_iter()
        .filter(|t| t.safety_level <= SafetyLevel::FriendlyRoast && !t.examples.is_empty())
        .collect();
    assert!(!safe.is_empty());
    for term in safe {
        for region in [None, Some(Region::Kolkata), Some(Region::Bardhaman)] {
            let result = translator.translate(&term.word, region);
            for example in &term.examples {
                assert!(result.formatted_response.contains(example.as_str()), "{} missing {example}", term.word);
            }
        }
    }
}

#[rstest]
fn term_exists_matches_lookup(translator: SlangTranslator) {
    for query in ["Lyadh", "ল্যাদ", "aan", "awesome", "nothing-like-this", "", "pod"] {
        assert_eq!(
            translator.term_exists(query),
            translator.lexicon().find_term(query).is_some(),
            "{query:?}"
        );
    }
}

#[rstest]
fn regional_translation_keeps_the_core_entry(mut translator: SlangTranslator) {
    for region in Region::ALL {
        let result = translator.translate("lyadh", Some(region));
        assert!(result.is_term_found);
        assert!(result.formatted_response.starts_with("**ল্যাদ**"));
        assert!(result.formatted_response.contains("**Safety Level:** Safe / Friendly"));
        assert_eq!(result.tone_style, Some(region.tone_style()));
    }
    let temple = translator.translate_tarakeswar("jatri");
    assert!(temple.formatted_response.contains("Be extra respectful"));
    assert!(translator.translate_kolkata("aantel").formatted_response.contains("adda session"));
    assert!(translator.translate_bardhaman("situa").formatted_response.contains("Mihidana"));
}

#[rstest]
fn adapt_tone_never_removes_the_base_text() {
    let adapter = RegionalAdapter::new();
    let mut rng = StdRng::seed_from_u64(17);
    for region in Region::ALL {
        for base in ["", "Dada, eta fatafati!", "**চাপ**\n\n**Safety Level:** Safe / Friendly"] {
            for _ in 0..25 {
                assert!(adapter.adapt_tone(region, base, &mut rng).contains(base));
            }
        }
    }
}

#[rstest]
fn regional_terms_and_search(translator: SlangTranslator) {
    let bardhaman = translator.regional_terms(Region::Bardhaman);
    assert!(bardhaman.contains(&"Situa".to_string()));
    assert!(!bardhaman.contains(&"Lyadh".to_string()));
    assert_eq!(translator.search_by_meaning("lazy"), Vec::<String>::new());
    assert_eq!(translator.search_by_meaning("laziness"), vec!["Lyadh".to_string()]);
}

#[rstest]
#[case::with_alias("translate lyadh calcutta", "ল্যাদ")]
#[case::unknown_alias_is_ignored("translate chap dhaka", "**Safety Level:** Safe / Friendly")]
#[case::search("search pilgrim", "Found terms: Jatri")]
#[case::search_miss("search spaceship", "No terms found for \"spaceship\"")]
fn commands_dispatch(mut translator: SlangTranslator, #[case] line: &str, #[case] expected: &str) {
    let output = translator.run_command(line);
    assert!(output.contains(expected), "{line:?} gave {output:?}");
}

#[rstest]
fn unknown_alias_output_ends_with_the_safety_line(mut translator: SlangTranslator) {
    // No region means no tone pass, so the entry ends on the safety line.
    let output = translator.run_command("translate chap dhaka");
    assert!(output.ends_with("**Safety Level:** Safe / Friendly"));
}

#[rstest]
fn long_queries_resolve_like_term_exists(mut translator: SlangTranslator) {
    let query = format!("lyadh {}", "x".repeat(300));
    assert!(translator.term_exists(&query));
    let result = translator.translate(&query, None);
    assert!(result.is_term_found);
    assert!(result.formatted_response.starts_with("**ল্যাদ**"));
}
