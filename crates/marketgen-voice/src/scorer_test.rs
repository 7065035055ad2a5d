use super::*;

const FIFTEEN_WORDS: &str =
    "One two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen.";

fn forty_words() -> String {
    let mut words = vec!["word"; 40].join(" ");
    words.push('.');
    words
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn weights_sum_to_one() {
    assert!(approx(Weights::WITH_MODEL.total(), 1.0));
    assert!(approx(Weights::WITHOUT_MODEL.total(), 1.0));
    assert_eq!(Weights::for_model(true), Weights::WITH_MODEL);
}

#[test]
fn missing_keyword_is_reported() {
    let brand = BrandModel::new("Leaf").with_keywords(["eco", "green"]);
    let result = BrandConsistencyScorer::default().score("Our eco range ships today.", Some(&brand), None);

    assert!(approx(result.subscores.keyword, 0.5));
    assert_eq!(result.keywords.found, vec!["eco".to_string()]);
    assert_eq!(result.keywords.missing, vec!["green".to_string()]);
    let naming_green: Vec<&String> = result
        .suggestions
        .iter()
        .filter(|s| s.contains("green"))
        .collect();
    assert_eq!(naming_green.len(), 1);
}

#[test]
fn keywords_match_case_insensitively() {
    let brand = BrandModel::new("Leaf").with_keywords(["Eco"]);
    let result = BrandConsistencyScorer::default().score("ECO-friendly by default.", Some(&brand), None);
    assert!(approx(result.subscores.keyword, 1.0));
}

#[test]
fn no_brand_scores_zero() {
    let result = BrandConsistencyScorer::default().score("Anything at all.", None, Some(0.9));
    assert_eq!(result.status, ConsistencyStatus::NoBrandModel);
    assert!(approx(result.score, 0.0));
    assert_eq!(result.suggestions.len(), 1);
}

#[test]
fn empty_text_keeps_score_in_range() {
    let brand = BrandModel::new("Blank");
    let result = BrandConsistencyScorer::default().score("", Some(&brand), None);

    assert_eq!(result.status, ConsistencyStatus::EmptyText);
    assert!(approx(result.subscores.sentence_length, 0.0));
    assert!(approx(result.subscores.keyword, 1.0));
    assert!(approx(result.subscores.style, 1.0));
    assert!(approx(result.score, 0.8));
    assert!(result.suggestions.iter().any(|s| s.starts_with("Provide text")));
    assert!(!result.suggestions.iter().any(|s| s.contains("Lengthen")));
}

#[test]
fn ideal_sentence_length_follows_last_concise_or_detailed_attribute() {
    let scorer = BrandConsistencyScorer::default();
    assert!(approx(scorer.ideal_sentence_words(&BrandModel::new("Plain")), 15.0));

    let concise = BrandModel::new("Short").with_style("concise", 0.5);
    assert!(approx(scorer.ideal_sentence_words(&concise), 11.0));

    let localized = BrandModel::new("Short").with_style("簡潔", 0.5);
    assert!(approx(scorer.ideal_sentence_words(&localized), 11.0));

    let both = BrandModel::new("Mixed")
        .with_style("concise", 0.5)
        .with_style("Detailed", 1.0);
    assert!(approx(scorer.ideal_sentence_words(&both), 25.0));
}

#[test]
fn ideal_sentence_length_never_drops_below_one() {
    let scorer = BrandConsistencyScorer::new(ScorerConfig {
        sentence_length: SentenceLengthSettings {
            concise_slope: 40.0,
            ..SentenceLengthSettings::default()
        },
    });
    let brand = BrandModel::new("Terse").with_style("brief", 1.0);
    assert!(approx(scorer.ideal_sentence_words(&brand), 1.0));
}

#[test]
fn sentences_at_the_ideal_score_full_marks() {
    let brand = BrandModel::new("Plain");
    let result = BrandConsistencyScorer::default().score(FIFTEEN_WORDS, Some(&brand), None);
    assert!(approx(result.subscores.sentence_length, 1.0));
    assert!(approx(result.score, 1.0));
    assert!(result.suggestions.is_empty());
    assert_eq!(result.sentences.sentence_count, 1);
    assert_eq!(result.sentences.longest, 15);
}

#[test]
fn long_sentences_ask_to_shorten() {
    let brand = BrandModel::new("Plain");
    let result = BrandConsistencyScorer::default().score(&forty_words(), Some(&brand), None);
    assert!(approx(result.subscores.sentence_length, 0.0));
    assert!(result.suggestions.iter().any(|s| s.starts_with("Shorten")));
}

#[test]
fn model_score_changes_weights() {
    let brand = BrandModel::new("Plain");
    let scorer = BrandConsistencyScorer::default();

    let with_model = scorer.score(FIFTEEN_WORDS, Some(&brand), Some(0.0));
    assert!(approx(with_model.score, 0.6));
    assert_eq!(with_model.subscores.model, Some(0.0));

    let clamped = scorer.score(FIFTEEN_WORDS, Some(&brand), Some(1.5));
    assert_eq!(clamped.subscores.model, Some(1.0));
    assert!(approx(clamped.score, 1.0));
}

#[test]
fn non_finite_model_score_is_ignored() {
    let brand = BrandModel::new("Plain");
    let result = BrandConsistencyScorer::default().score(FIFTEEN_WORDS, Some(&brand), Some(f64::NAN));
    assert_eq!(result.subscores.model, None);
    assert!(approx(result.score, 1.0));
}

#[test]
fn unknown_attribute_measures_neutral() {
    let brand = BrandModel::new("Odd").with_style("quirky", 0.5);
    let result = BrandConsistencyScorer::default().score(FIFTEEN_WORDS, Some(&brand), None);
    let attr = &result.attributes[0];
    assert_eq!(attr.dimension, None);
    assert!(approx(attr.measured, NEUTRAL_MEASURE));
    assert!(approx(attr.score, 1.0));
}

#[test]
fn weak_attribute_gets_a_suggestion() {
    let brand = BrandModel::new("Suits").with_style("professional", 1.0);
    let result = BrandConsistencyScorer::default().score("Hey there friend.", Some(&brand), None);
    assert!(approx(result.subscores.style, 0.0));
    assert!(result.suggestions.contains(
        &"Strengthen 'professional': add domain terminology and industry vocabulary".to_string()
    ));
}

#[test]
fn overall_score_drives_rewrite_advice() {
    let scorer = BrandConsistencyScorer::default();

    let off_brand = BrandModel::new("Leaf")
        .with_keywords(["eco", "green"])
        .with_style("professional", 1.0);
    let poor = scorer.score("Hey there friend.", Some(&off_brand), None);
    assert!(poor.score < 0.4);
    assert!(poor.suggestions.last().is_some_and(|s| s.contains("rewriting")));

    let partial = BrandModel::new("Leaf").with_keywords(["eco", "green"]);
    let text = format!("eco {}", forty_words());
    let middling = scorer.score(&text, Some(&partial), None);
    assert!(approx(middling.score, 0.6));
    assert!(middling.suggestions.last().is_some_and(|s| s.contains("revise")));
}

#[test]
fn result_serializes_with_snake_case_status() {
    let brand = BrandModel::new("Plain");
    let result = BrandConsistencyScorer::default().score(FIFTEEN_WORDS, Some(&brand), None);
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["status"], "scored");
    assert!(json["subscores"].get("model").is_none());
}
