//! End-to-end pipeline tests over a scripted driver.

mod test_utils;

use nocturne_story::prompts::{
    CONFIG_ERROR_MESSAGE, DEFAULT_RETRY_CEILING, FALLBACK_NARRATIVE, FALLBACK_SUMMARY,
    INVALID_INPUT_MESSAGE,
};
use nocturne_story::{STORY_PART_COUNT, StoryGenerator, StoryRequest, split_sentences};
use test_utils::{MockDriver, MockReply};

const RUSSIAN_NARRATIVE: &str = "Туман опустился на город. Саша стояла у окна и ждала. \
Герман наблюдал за ней из тени. Его мысли были холодны и точны. \
Она чувствовала его взгляд. Внутри неё боролись страх и восхищение. \
Он сделал шаг вперёд. Ночь поглотила их обоих. \
Где-то вдали завыла сирена. Ничто уже не будет прежним.";

const STUB_SUMMARY: &str = "A killer and his patient circle each other.";

#[tokio::test]
async fn empty_quote_fails_validation_with_zero_calls() {
    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY);
    let generator = StoryGenerator::new(driver);

    for quote in ["", "   ", "\n\t"] {
        let response = generator
            .generate(&StoryRequest::from_quote(quote), &[])
            .await;
        assert!(!response.is_success());
        assert_eq!(response.story_parts(), &vec![INVALID_INPUT_MESSAGE.to_string()]);
    }
    assert_eq!(generator.driver().total_calls(), 0);
}

#[tokio::test]
async fn missing_credentials_fail_with_zero_calls() {
    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY).unconfigured();
    let generator = StoryGenerator::new(driver);

    let response = generator
        .generate(&StoryRequest::from_quote("darkness falls"), &[])
        .await;

    assert!(!response.is_success());
    assert_eq!(response.story_parts(), &vec![CONFIG_ERROR_MESSAGE.to_string()]);
    assert_eq!(generator.driver().total_calls(), 0);
}

#[tokio::test]
async fn narrative_failure_returns_in_character_fallback() {
    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY)
        .with_narrative_reply(MockReply::Fail);
    let generator = StoryGenerator::new(driver);

    let response = generator
        .generate(&StoryRequest::from_quote("darkness falls"), &[])
        .await;

    assert!(!response.is_success());
    assert_eq!(response.story_parts(), &vec![FALLBACK_NARRATIVE.to_string()]);
    assert_eq!(generator.driver().narrative_calls(), 1);
    assert_eq!(generator.driver().summary_calls(), 0);
}

#[tokio::test]
async fn generates_ten_parts_against_empty_corpus() {
    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY);
    let generator = StoryGenerator::new(driver);

    let request = StoryRequest::new(
        "darkness falls".to_string(),
        None,
        Some("Hannibal Lecter".to_string()),
    );
    let response = generator.generate(&request, &[]).await;

    assert!(response.is_success());
    assert_eq!(response.story_parts().len(), STORY_PART_COUNT);
    assert_eq!(response.plot().as_deref(), Some(STUB_SUMMARY));

    // Ten sentences, one per part, order preserved.
    let expected = split_sentences(RUSSIAN_NARRATIVE);
    assert_eq!(response.story_parts(), &expected);

    // Empty corpus means no comparison calls at all.
    assert_eq!(generator.driver().comparison_calls(), 0);
    assert_eq!(generator.driver().narrative_calls(), 1);
    assert_eq!(generator.driver().summary_calls(), 1);
}

#[tokio::test]
async fn permanent_duplicates_terminate_at_retry_ceiling_with_success() {
    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY)
        .with_default_comparison(MockReply::text("yes"));
    let generator = StoryGenerator::new(driver);

    let existing = vec!["An identical tale.".to_string()];
    let response = generator
        .generate(&StoryRequest::from_quote("darkness falls"), &existing)
        .await;

    // Ceiling exhaustion accepts the last narrative rather than failing.
    assert!(response.is_success());
    assert_eq!(response.story_parts().len(), STORY_PART_COUNT);
    assert_eq!(response.plot().as_deref(), Some(STUB_SUMMARY));
    assert_eq!(generator.driver().narrative_calls(), DEFAULT_RETRY_CEILING);
    assert_eq!(generator.driver().comparison_calls(), DEFAULT_RETRY_CEILING);
}

#[tokio::test]
async fn duplicate_then_distinct_retries_once() {
    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY)
        .with_comparison_script(vec![MockReply::text("yes"), MockReply::text("no")]);
    let generator = StoryGenerator::new(driver);

    let existing = vec!["An identical tale.".to_string()];
    let response = generator
        .generate(&StoryRequest::from_quote("darkness falls"), &existing)
        .await;

    assert!(response.is_success());
    assert_eq!(generator.driver().narrative_calls(), 2);
    assert_eq!(generator.driver().comparison_calls(), 2);
}

#[tokio::test]
async fn summarization_failure_does_not_abort_generation() {
    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY)
        .with_summary_reply(MockReply::Fail);
    let generator = StoryGenerator::new(driver);

    let response = generator
        .generate(&StoryRequest::from_quote("darkness falls"), &[])
        .await;

    assert!(response.is_success());
    assert_eq!(response.plot().as_deref(), Some(FALLBACK_SUMMARY));
}

#[tokio::test]
async fn zero_retry_ceiling_is_rejected() {
    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY);
    assert!(StoryGenerator::with_retry_ceiling(driver, 0).is_err());

    let driver = MockDriver::new(RUSSIAN_NARRATIVE, STUB_SUMMARY);
    assert!(StoryGenerator::with_retry_ceiling(driver, 5).is_ok());
}
