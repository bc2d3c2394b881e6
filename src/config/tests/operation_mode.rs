//! Tests for operation mode determination.

use rstest::rstest;

use crate::ReviewdeskConfig;
use crate::config::OperationMode;

#[rstest]
fn interactive_when_nothing_requested() {
    assert_eq!(
        ReviewdeskConfig::default().operation_mode(),
        OperationMode::Interactive
    );
}

#[rstest]
fn print_page_when_page_set() {
    let config = ReviewdeskConfig {
        page: Some(3),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::PrintPage(3));
}

#[rstest]
fn print_search_trims_term() {
    let config = ReviewdeskConfig {
        search: Some("  mountain ".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::PrintSearch("mountain".to_owned())
    );
}
