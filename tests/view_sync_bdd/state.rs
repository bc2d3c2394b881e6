//! Scenario state for view-sync BDD tests.

use reviewdesk::tui::state::{Effect, RequestToken, UiState};
use reviewdesk::{PageInfo, PageResult, Review};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared across steps in a view-sync scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ViewSyncState {
    /// The controller under test.
    pub(crate) controller: Slot<UiState>,
    /// The request produced by the most recent step, if any.
    pub(crate) last_effect: Slot<Option<Effect>>,
    /// Token of a list request whose response is delivered later.
    pub(crate) earlier_token: Slot<RequestToken>,
}

/// Creates a review with the given ID.
pub(crate) fn review_with_id(id: u64) -> Review {
    Review {
        id,
        title: format!("Review {id}"),
        content: format!("Conteúdo {id}"),
        date_posted: "2024-03-05T14:30:00".to_owned(),
    }
}

/// Builds a page holding `count` reviews with IDs derived from the page.
pub(crate) fn page_with(page: u32, total_pages: u32, count: usize) -> PageResult {
    let base = u64::from(page) * 100;
    PageResult {
        items: (1..=count as u64).map(|offset| review_with_id(base + offset)).collect(),
        info: PageInfo::new(page, total_pages),
    }
}

/// Returns the token of a list request.
pub(crate) fn list_token(effect: &Effect) -> Option<RequestToken> {
    match effect {
        Effect::LoadPage { token, .. } | Effect::Search { token, .. } => Some(*token),
        _ => None,
    }
}

/// Drives a fresh controller to `page`, applying every response on the way.
pub(crate) fn controller_on_page(page: u32, total_pages: u32) -> Result<UiState, String> {
    let mut controller = UiState::new();
    let first = controller.initial_load();
    let token = list_token(&first).ok_or("initial load should be a list request")?;
    if !controller.apply_page(token, &page_with(1, total_pages, 9)) {
        return Err("first page should be accepted".to_owned());
    }

    for _ in 1..page {
        let Some(Effect::LoadPage {
            page: target,
            token: next_token,
        }) = controller.navigate_next()
        else {
            return Err("next page should be requested".to_owned());
        };
        if !controller.apply_page(next_token, &page_with(target, total_pages, 9)) {
            return Err(format!("page {target} should be accepted"));
        }
    }
    Ok(controller)
}
