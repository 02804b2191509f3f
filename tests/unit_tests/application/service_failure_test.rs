use relingua::application::ports::{
    AnnotatorError, CallOutcome, StagingStoreError, TranslatorError, settle,
};

#[test]
fn given_success_when_settling_then_returns_value() {
    let result: Result<u32, AnnotatorError> = Ok(7);

    let outcome = settle(result).unwrap();

    assert_eq!(outcome, CallOutcome::Success(7));
    assert!(outcome.is_success());
}

#[test]
fn given_service_error_when_settling_then_skips_with_reason() {
    let result: Result<String, TranslatorError> =
        Err(TranslatorError::UnsupportedLanguagePair("en-xx".to_string()));

    let outcome = settle(result).unwrap();

    assert_eq!(
        outcome,
        CallOutcome::Skipped {
            reason: "unsupported language pair: en-xx".to_string()
        }
    );
    assert_eq!(outcome.into_success(), None);
}

#[test]
fn given_unreachable_error_when_settling_then_propagates() {
    let result: Result<u64, StagingStoreError> =
        Err(StagingStoreError::Unreachable("connection refused".to_string()));

    let settled = settle(result);

    assert!(matches!(settled, Err(StagingStoreError::Unreachable(_))));
}

#[test]
fn given_rate_limited_error_when_settling_then_skips() {
    let result: Result<(), AnnotatorError> = Err(AnnotatorError::RateLimited);

    assert!(!settle(result).unwrap().is_success());
}
