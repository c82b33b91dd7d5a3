//! Data models for the survey backend.
//!
//! This module contains the wire-level payloads for both endpoints and
//! the persisted survey row.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Sentinel value an HTML checkbox submits when ticked.
pub const ANONYMOUS_SENTINEL: &str = "on";

/// Display name stored in place of the real name for anonymous responses.
pub const ANONYMOUS_PLACEHOLDER: &str = "Anonymous";

/// Incoming survey submission, as posted by the frontend form.
///
/// Field names follow the frontend's camelCase convention. The eight
/// Likert answers are intended to be 1-5 but are accepted as-is; values
/// outside that range simply contribute nothing to the feedback context.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub full_name: String,
    /// Checkbox marker; `"on"` means the student opted into anonymity.
    pub anonymous: Option<String>,
    pub class_name: String,
    pub gender: String,
    pub q1: i32,
    pub q2: i32,
    pub q3: i32,
    pub q4: i32,
    pub q5: i32,
    pub q6: i32,
    pub q7: i32,
    pub q8: i32,
    #[serde(default)]
    pub open_ended: String,
}

impl SurveySubmission {
    /// Whether the student ticked the anonymity checkbox.
    pub fn is_anonymous(&self) -> bool {
        self.anonymous.as_deref() == Some(ANONYMOUS_SENTINEL)
    }

    /// The name to store and address the student by. Once anonymized the
    /// submitted name is discarded for good.
    pub fn display_name(&self) -> &str {
        if self.is_anonymous() {
            ANONYMOUS_PLACEHOLDER
        } else {
            &self.full_name
        }
    }

    /// The eight Likert answers in question order.
    pub fn answers(&self) -> [i32; 8] {
        [
            self.q1, self.q2, self.q3, self.q4, self.q5, self.q6, self.q7, self.q8,
        ]
    }
}

/// A persisted survey response. Rows are insert-only: never updated,
/// never deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SurveyRow {
    pub id: i32,
    pub full_name: String,
    pub is_anonymous: bool,
    pub class_name: String,
    pub gender: String,
    pub q1: i32,
    pub q2: i32,
    pub q3: i32,
    pub q4: i32,
    pub q5: i32,
    pub q6: i32,
    pub q7: i32,
    pub q8: i32,
    pub open_ended: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of a successful `POST /submit-survey` response.
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// Optional date range for `GET /dashboard-data`. Both bounds are
/// inclusive calendar dates interpreted in UTC.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DashboardQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// One dashboard chart entry: the four composite averages for a single
/// calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEmotion {
    pub date: String,
    pub positive_avg: f64,
    pub negative_avg: f64,
    pub social_avg: f64,
    pub self_esteem_avg: f64,
}
