//! Support modules for view-sync BDD tests.

pub(crate) mod state;

pub(crate) use state::ViewSyncState;
