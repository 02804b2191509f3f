use relingua::domain::{
    AnnotationOperation, AnnotationSet, DetectedLanguage, Entity, KeyPhrase, Sentiment,
};

fn phrase(text: &str) -> KeyPhrase {
    KeyPhrase {
        text: text.to_string(),
        score: 0.9,
        begin_offset: 0,
        end_offset: text.len(),
    }
}

#[test]
fn given_no_gaps_when_checking_skew_then_reports_none() {
    let mut set = AnnotationSet::new();
    set.extend_key_phrases(0, vec![phrase("river")]);
    set.push_sentiment(0, Sentiment::Neutral);

    assert!(set.skew().is_empty());
    assert!(!set.is_skewed());
}

#[test]
fn given_one_operation_missing_a_chunk_when_checking_skew_then_reports_that_operation() {
    let mut set = AnnotationSet::new();
    set.push_sentiment(0, Sentiment::Positive);
    set.record_gap(AnnotationOperation::Sentiment, 1);
    set.push_sentiment(2, Sentiment::Negative);

    let skew = set.skew();

    assert_eq!(skew, vec![(AnnotationOperation::Sentiment, vec![1])]);
}

#[test]
fn given_every_operation_missing_the_same_chunk_when_checking_skew_then_lists_stay_aligned() {
    let mut set = AnnotationSet::new();
    for operation in AnnotationOperation::ALL {
        set.record_gap(operation, 2);
    }

    assert!(set.skew().is_empty());
    assert_eq!(set.gaps(AnnotationOperation::Syntax), vec![2]);
}

#[test]
fn given_tagged_entries_when_flattening_then_preserves_append_order() {
    let mut set = AnnotationSet::new();
    set.extend_key_phrases(0, vec![phrase("alpha"), phrase("beta")]);
    set.extend_key_phrases(1, vec![phrase("gamma")]);
    set.extend_languages(
        0,
        vec![DetectedLanguage {
            code: "en".to_string(),
            score: 0.99,
        }],
    );
    set.extend_entities(
        1,
        vec![Entity {
            text: "Oslo".to_string(),
            label: "LOCATION".to_string(),
        }],
    );

    assert_eq!(set.key_phrase_texts(), vec!["alpha", "beta", "gamma"]);
    assert_eq!(set.key_phrases[2].chunk_index, 1);
    assert_eq!(set.language_codes(), vec!["en"]);
    assert_eq!(set.entities[0].chunk_index, 1);
}

#[test]
fn given_sentiment_text_when_parsing_then_accepts_uppercase_labels() {
    let sentiment: Sentiment = "MIXED".parse().unwrap();

    assert_eq!(sentiment, Sentiment::Mixed);
    assert!("happy".parse::<Sentiment>().is_err());
}
