//! Tests for the duplicate checker's call economy and failure
//! isolation.

mod test_utils;

use nocturne_story::DuplicateChecker;
use test_utils::{MockDriver, MockReply};

fn plots(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("Existing plot {}.", n)).collect()
}

#[tokio::test]
async fn empty_plot_set_returns_false_with_zero_calls() {
    let driver = MockDriver::new("unused", "unused");
    let checker = DuplicateChecker::new(&driver);

    assert!(!checker.is_duplicate("A new plot.", &[]).await);
    assert_eq!(driver.total_calls(), 0);
}

#[tokio::test]
async fn all_negative_answers_return_false() {
    let driver = MockDriver::new("unused", "unused");
    let checker = DuplicateChecker::new(&driver);

    assert!(!checker.is_duplicate("A new plot.", &plots(4)).await);
    assert_eq!(driver.comparison_calls(), 4);
}

#[tokio::test]
async fn short_circuits_on_first_positive() {
    let driver = MockDriver::new("unused", "unused").with_comparison_script(vec![
        MockReply::text("no"),
        MockReply::text("no"),
        MockReply::text("yes"),
    ]);
    let checker = DuplicateChecker::new(&driver);

    assert!(checker.is_duplicate("A new plot.", &plots(5)).await);
    assert_eq!(driver.comparison_calls(), 3);
}

#[tokio::test]
async fn failed_comparison_degrades_to_negative_and_scan_continues() {
    let driver = MockDriver::new("unused", "unused")
        .with_comparison_script(vec![MockReply::Fail, MockReply::text("yes")]);
    let checker = DuplicateChecker::new(&driver);

    assert!(checker.is_duplicate("A new plot.", &plots(3)).await);
    assert_eq!(driver.comparison_calls(), 2);
}

#[tokio::test]
async fn every_comparison_failing_returns_false() {
    let driver = MockDriver::new("unused", "unused")
        .with_default_comparison(MockReply::Fail);
    let checker = DuplicateChecker::new(&driver);

    assert!(!checker.is_duplicate("A new plot.", &plots(3)).await);
    assert_eq!(driver.comparison_calls(), 3);
}

#[tokio::test]
async fn sloppy_affirmatives_do_not_count() {
    let driver = MockDriver::new("unused", "unused")
        .with_default_comparison(MockReply::text("yes, quite similar"));
    let checker = DuplicateChecker::new(&driver);

    assert!(!checker.is_duplicate("A new plot.", &plots(2)).await);
}
