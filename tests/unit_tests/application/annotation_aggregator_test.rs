use std::sync::Arc;

use relingua::application::ports::AnnotatorError;
use relingua::application::services::AnnotationAggregator;
use relingua::domain::{AnnotationOperation, AnnotationSet, Chunk, Stage};

use crate::helpers::{Failure, ScriptedAnnotator, chunk_indices};

fn chunks() -> Vec<Chunk> {
    vec![
        Chunk::new(0, "Alice met Bob".to_string()),
        Chunk::new(1, "Carol wrote letters".to_string()),
        Chunk::new(2, "Dave sailed home".to_string()),
    ]
}

#[tokio::test]
async fn given_all_calls_succeed_when_annotating_then_every_chunk_contributes() {
    let annotator = Arc::new(ScriptedAnnotator::new());
    let aggregator = AnnotationAggregator::new(annotator.clone(), "en");
    let mut annotations = AnnotationSet::new();
    let mut skipped = Vec::new();

    aggregator
        .annotate(&chunks(), &mut annotations, &mut skipped)
        .await
        .unwrap();

    assert!(skipped.is_empty());
    assert_eq!(annotations.sentiments.len(), 3);
    assert_eq!(annotations.key_phrase_texts(), vec!["Alice", "Carol", "Dave"]);
    assert_eq!(chunk_indices(&annotations.syntax_tokens), vec![0, 1, 2]);
    assert!(!annotations.is_skewed());
}

#[tokio::test]
async fn given_chunks_when_annotating_then_issues_six_operations_per_chunk_in_order() {
    let annotator = Arc::new(ScriptedAnnotator::new());
    let aggregator = AnnotationAggregator::new(annotator.clone(), "en");
    let mut annotations = AnnotationSet::new();
    let mut skipped = Vec::new();

    aggregator
        .annotate(&chunks()[..1], &mut annotations, &mut skipped)
        .await
        .unwrap();

    let operations: Vec<AnnotationOperation> =
        annotator.calls().into_iter().map(|(op, _)| op).collect();
    assert_eq!(operations, AnnotationOperation::ALL.to_vec());
}

#[tokio::test]
async fn given_sentiment_fails_for_middle_chunk_when_annotating_then_skips_only_that_call() {
    let annotator = Arc::new(ScriptedAnnotator::new().failing(
        AnnotationOperation::Sentiment,
        1,
        Failure::Service,
    ));
    let aggregator = AnnotationAggregator::new(annotator.clone(), "en");
    let mut annotations = AnnotationSet::new();
    let mut skipped = Vec::new();

    aggregator
        .annotate(&chunks(), &mut annotations, &mut skipped)
        .await
        .unwrap();

    assert_eq!(annotations.sentiments.len(), 2);
    assert_eq!(chunk_indices(&annotations.sentiments), vec![0, 2]);
    assert_eq!(chunk_indices(&annotations.key_phrases), vec![0, 1, 2]);
    assert_eq!(annotator.call_count(AnnotationOperation::Syntax), 3);

    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].stage, Stage::Annotation);
    assert_eq!(skipped[0].operation, "detect-sentiment");
    assert_eq!(skipped[0].chunk_index, 1);

    assert_eq!(
        annotations.skew(),
        vec![(AnnotationOperation::Sentiment, vec![1])]
    );
}

#[tokio::test]
async fn given_unreachable_endpoint_on_second_chunk_when_annotating_then_stops_immediately() {
    let annotator = Arc::new(ScriptedAnnotator::new().failing(
        AnnotationOperation::DominantLanguage,
        1,
        Failure::Unreachable,
    ));
    let aggregator = AnnotationAggregator::new(annotator.clone(), "en");
    let mut annotations = AnnotationSet::new();
    let mut skipped = Vec::new();

    let result = aggregator
        .annotate(&chunks(), &mut annotations, &mut skipped)
        .await;

    assert!(matches!(result, Err(AnnotatorError::Unreachable(_))));
    assert_eq!(annotator.call_count(AnnotationOperation::KeyPhrases), 2);
    assert_eq!(annotator.call_count(AnnotationOperation::Sentiment), 1);
    assert!(
        annotator
            .calls()
            .iter()
            .all(|(_, text)| !text.starts_with("Dave"))
    );
    assert!(skipped.is_empty());
}

#[tokio::test]
async fn given_different_operations_fail_on_different_chunks_when_annotating_then_reports_skew() {
    let annotator = Arc::new(
        ScriptedAnnotator::new()
            .failing(AnnotationOperation::Entities, 0, Failure::Service)
            .failing(AnnotationOperation::KeyPhrases, 2, Failure::Service),
    );
    let aggregator = AnnotationAggregator::new(annotator, "en");
    let mut annotations = AnnotationSet::new();
    let mut skipped = Vec::new();

    aggregator
        .annotate(&chunks(), &mut annotations, &mut skipped)
        .await
        .unwrap();

    assert_eq!(skipped.len(), 2);
    assert_eq!(
        annotations.skew(),
        vec![
            (AnnotationOperation::KeyPhrases, vec![2]),
            (AnnotationOperation::Entities, vec![0]),
        ]
    );
    assert_eq!(chunk_indices(&annotations.entities), vec![1, 2]);
}
