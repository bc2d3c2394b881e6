//! Turns controller effects into async gateway commands.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::api::{GatewayError, PAGE_SIZE, ReviewGateway};
use crate::tui::messages::AppMsg;
use crate::tui::state::{Effect, ListKind};

impl ReviewApp {
    /// Returns the command carrying out `effect`, if any.
    pub(super) fn dispatch(&self, effect: Option<Effect>) -> Option<Cmd> {
        effect.map(|requested| self.effect_cmd(requested))
    }

    /// Creates a command that performs `effect` and reports the outcome.
    pub(super) fn effect_cmd(&self, effect: Effect) -> Cmd {
        let gateway = self.gateway.clone();
        Box::pin(async move {
            let msg = match gateway {
                Some(configured) => run_effect(configured.as_ref(), effect).await,
                None => failure_msg(effect, not_configured()),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }
}

async fn run_effect(gateway: &dyn ReviewGateway, effect: Effect) -> AppMsg {
    match effect {
        Effect::LoadPage { page, token } => match gateway.list_page(page, PAGE_SIZE).await {
            Ok(result) => AppMsg::PageLoaded { token, result },
            Err(error) => AppMsg::ListFailed {
                token,
                kind: ListKind::Page,
                error,
            },
        },
        Effect::Search { term, token } => match gateway.search(&term).await {
            Ok(reviews) => AppMsg::SearchLoaded { token, reviews },
            Err(error) => AppMsg::ListFailed {
                token,
                kind: ListKind::Search,
                error,
            },
        },
        Effect::Create(draft) => gateway
            .create(&draft)
            .await
            .map_or_else(AppMsg::SaveFailed, AppMsg::Created),
        Effect::Update { id, draft } => gateway
            .update(id, &draft)
            .await
            .map_or_else(AppMsg::SaveFailed, AppMsg::Updated),
        Effect::Delete(id) => match gateway.delete_by_id(id).await {
            Ok(()) => AppMsg::Deleted(id),
            Err(error) => AppMsg::DeleteFailed { id, error },
        },
    }
}

/// Maps `effect` to the failure message its handler expects.
fn failure_msg(effect: Effect, error: GatewayError) -> AppMsg {
    match effect {
        Effect::LoadPage { token, .. } => AppMsg::ListFailed {
            token,
            kind: ListKind::Page,
            error,
        },
        Effect::Search { token, .. } => AppMsg::ListFailed {
            token,
            kind: ListKind::Search,
            error,
        },
        Effect::Create(_) | Effect::Update { .. } => AppMsg::SaveFailed(error),
        Effect::Delete(id) => AppMsg::DeleteFailed { id, error },
    }
}

fn not_configured() -> GatewayError {
    GatewayError::Configuration {
        message: "review gateway not configured".to_owned(),
    }
}
