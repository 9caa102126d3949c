use fiqhrag_query::{normalize, QueryProcessor, FIQH_SYNONYMS};

#[test]
fn normalize_diacritized_greeting() {
    let processor = QueryProcessor::new();
    assert_eq!(processor.normalize("السَّلامُ عَلَيْكُمْ"), "السلام عليكم");
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "ما حُكمُ الرِّبا في الإسلام؟",
        "الزَّكاةُ واجبةٌ على المسلمِ",
        "  أركانُ   الصلاةِ  ",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn remove_stop_words_drops_function_words() {
    let processor = QueryProcessor::new();
    let filtered = processor.remove_stop_words("ما حكم الربا في الاسلام");
    assert!(!filtered.split_whitespace().any(|w| w == "في"));
    assert!(!filtered.split_whitespace().any(|w| w == "ما"));
    assert_eq!(filtered, "حكم الربا الاسلام");
}

#[test]
fn process_normalizes_and_optionally_filters() {
    let processor = QueryProcessor::new();
    let kept = processor.process("ما حُكم الربا في الإسلام", false);
    assert_eq!(kept, "ما حكم الربا في الاسلام");

    let filtered = processor.process("ما حُكم الربا في الاسلام", true);
    assert_eq!(filtered, "حكم الربا الاسلام");
}

#[test]
fn expand_query_original_first_then_mapping_order() {
    let processor = QueryProcessor::new();
    let synonyms: &[(&str, &[&str])] = &[("حكم", &["فتوى", "رأي"]), ("الربا", &["الفائدة"])];
    let expanded = processor.expand_query("حكم الربا", synonyms);
    assert_eq!(
        expanded,
        vec![
            "حكم الربا".to_string(),
            "فتوى الربا".to_string(),
            "رأي الربا".to_string(),
            "حكم الفائدة".to_string(),
        ]
    );
}

#[test]
fn expand_query_substitutes_first_occurrence_only() {
    let processor = QueryProcessor::new();
    let synonyms: &[(&str, &[&str])] = &[("حكم", &["فتوى"])];
    let expanded = processor.expand_query("حكم ثم حكم", synonyms);
    assert_eq!(expanded[1], "فتوى ثم حكم");
}

#[test]
fn expand_query_without_matches_returns_original_only() {
    let processor = QueryProcessor::new();
    let expanded = processor.expand_query("سؤال بلا مرادفات", FIQH_SYNONYMS);
    assert_eq!(expanded, vec!["سؤال بلا مرادفات".to_string()]);
}

#[test]
fn extract_keywords_caps_and_filters() {
    let processor = QueryProcessor::new();
    let keywords = processor.extract_keywords("العبادة في والمعاملات قسمي الفقه", 3);
    assert!(keywords.len() <= 3);
    assert!(!keywords.contains(&"في".to_string()));
    assert_eq!(keywords[0], "العبادة");
}

#[test]
fn extract_keywords_drops_short_tokens() {
    let processor = QueryProcessor::new();
    let keywords = processor.extract_keywords("اب الفقه له", 5);
    assert_eq!(keywords, vec!["الفقه".to_string()]);
}
