//! Review API access.
//!
//! This module owns everything that crosses the network boundary: the review
//! record types, pagination metadata, the [`ReviewGateway`] trait with its
//! reqwest implementation, and the error type that classifies failures as
//! network or server problems.

pub mod error;
pub mod gateway;
pub mod models;
pub mod pagination;

pub use error::{FailureKind, GatewayError};
pub use gateway::{
    ApiOperation, DEFAULT_API_URL, DEFAULT_TIMEOUT, HttpReviewGateway, ReviewGateway,
};
pub use models::{PageResult, Review, ReviewDraft};
pub use pagination::{PAGE_SIZE, PageInfo};

#[cfg(test)]
pub use gateway::MockReviewGateway;
