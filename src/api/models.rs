//! Review records and request/response shapes for the review API.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::pagination::PageInfo;

/// A review record owned by the server.
///
/// The client only ever holds transient copies for display and editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Server-assigned identifier, immutable once created.
    pub id: u64,
    /// Review title.
    pub title: String,
    /// Review body text.
    pub content: String,
    /// Server-assigned timestamp in ISO-8601 form.
    pub date_posted: String,
}

impl Review {
    /// Returns the calendar date of `date_posted`, if it can be parsed.
    ///
    /// Accepts RFC 3339 timestamps with an offset, naive timestamps with or
    /// without fractional seconds, and bare dates. Offsets are not converted;
    /// the date is taken as written.
    #[must_use]
    pub fn posted_on(&self) -> Option<NaiveDate> {
        parse_posted_date(self.date_posted.trim())
    }
}

fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Title and content submitted when creating or updating a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// Review title.
    pub title: String,
    /// Review body text.
    pub content: String,
}

impl ReviewDraft {
    /// Creates a draft from title and content.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// One page of reviews together with its navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Reviews on this page, in server order.
    pub items: Vec<Review>,
    /// Page position and navigation availability.
    pub info: PageInfo,
}

/// Wire shape of the paged listing response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPage {
    pub(crate) items: Vec<Review>,
    pub(crate) page: u32,
    pub(crate) total_pages: u32,
    #[serde(default)]
    pub(crate) has_prev: Option<bool>,
    #[serde(default)]
    pub(crate) has_next: Option<bool>,
}

impl ApiPage {
    /// Converts the wire page into a [`PageResult`].
    ///
    /// Navigation flags are derived from `page` and `total_pages`; the
    /// server-reported flags are only compared so that disagreement can be
    /// logged.
    pub(crate) fn into_result(self) -> PageResult {
        let info = PageInfo::new(self.page, self.total_pages);

        let reported = (self.has_prev, self.has_next);
        let derived = (Some(info.has_prev()), Some(info.has_next()));
        if reported != derived && reported != (None, None) {
            tracing::warn!(
                page = self.page,
                total_pages = self.total_pages,
                "server navigation flags {reported:?} disagree with derived {derived:?}"
            );
        }

        PageResult {
            items: self.items,
            info,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::{ApiPage, Review};

    fn review_posted(date_posted: &str) -> Review {
        Review {
            id: 1,
            title: "Title".to_owned(),
            content: "Body".to_owned(),
            date_posted: date_posted.to_owned(),
        }
    }

    #[rstest]
    #[case::rfc3339_utc("2024-03-05T14:30:00Z")]
    #[case::rfc3339_offset("2024-03-05T23:30:00-03:00")]
    #[case::naive_with_fraction("2024-03-05T14:30:00.123456")]
    #[case::naive_seconds("2024-03-05T14:30:00")]
    #[case::space_separated("2024-03-05 14:30:00")]
    #[case::bare_date("2024-03-05")]
    fn posted_on_accepts_common_timestamp_shapes(#[case] raw: &str) {
        assert_eq!(
            review_posted(raw).posted_on(),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }

    #[test]
    fn posted_on_rejects_garbage() {
        assert_eq!(review_posted("yesterday").posted_on(), None);
    }

    #[test]
    fn review_deserialises_api_shape() {
        let review: Review = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Trilha",
            "content": "Muito boa",
            "date_posted": "2024-03-05T14:30:00"
        }))
        .expect("review JSON should decode");

        assert_eq!(review.id, 7);
        assert_eq!(review.title, "Trilha");
    }

    #[test]
    fn api_page_derives_navigation_flags() {
        let page: ApiPage = serde_json::from_value(serde_json::json!({
            "items": [],
            "page": 2,
            "total_pages": 3,
            "has_prev": false,
            "has_next": false
        }))
        .expect("page JSON should decode");

        let result = page.into_result();

        assert!(result.info.has_prev());
        assert!(result.info.has_next());
    }
}
