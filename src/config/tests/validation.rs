//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::ReviewdeskConfig;
use crate::config::ConfigError;

#[rstest]
fn defaults_are_valid() {
    assert_eq!(ReviewdeskConfig::default().validate(), Ok(()));
}

#[rstest]
#[case::page_zero(ReviewdeskConfig { page: Some(0), ..Default::default() })]
#[case::blank_search(ReviewdeskConfig { search: Some("   ".to_owned()), ..Default::default() })]
#[case::page_and_search(ReviewdeskConfig {
    page: Some(1),
    search: Some("lago".to_owned()),
    ..Default::default()
})]
#[case::zero_timeout(ReviewdeskConfig { timeout_seconds: 0, ..Default::default() })]
#[case::relative_url(ReviewdeskConfig { api_url: "reviews/api".to_owned(), ..Default::default() })]
fn rejects_inconsistent_values(#[case] config: ReviewdeskConfig) {
    let result = config.validate();

    assert!(
        matches!(result, Err(ConfigError::Invalid { .. })),
        "expected an invalid-configuration error, got {result:?}"
    );
}

#[rstest]
fn accepts_single_print_mode() {
    let config = ReviewdeskConfig {
        search: Some("serra".to_owned()),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}
