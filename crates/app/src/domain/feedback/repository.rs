//! Feedback Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use showroom::feedback::{FeedbackSubmission, Rating};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::feedback::records::{FeedbackRecord, FeedbackUuid};

const CREATE_FEEDBACK_SQL: &str = include_str!("sql/create_feedback.sql");
const LIST_FEEDBACK_SQL: &str = include_str!("sql/list_feedback.sql");
const TOP_FEEDBACK_SQL: &str = include_str!("sql/top_feedback.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFeedbackRepository;

impl PgFeedbackRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_feedback(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        feedback: FeedbackUuid,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackRecord, sqlx::Error> {
        query_as::<Postgres, FeedbackRecord>(CREATE_FEEDBACK_SQL)
            .bind(feedback.into_uuid())
            .bind(&submission.name)
            .bind(&submission.email)
            .bind(&submission.role)
            .bind(&submission.location)
            .bind(i16::from(submission.rating.get()))
            .bind(&submission.purchased_items)
            .bind(&submission.product_name)
            .bind(&submission.feedback_text)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_feedback(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<FeedbackRecord>, sqlx::Error> {
        query_as::<Postgres, FeedbackRecord>(LIST_FEEDBACK_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn top_feedback(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<FeedbackRecord>, sqlx::Error> {
        query_as::<Postgres, FeedbackRecord>(TOP_FEEDBACK_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for FeedbackRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: FeedbackUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            role: row.try_get("role")?,
            location: row.try_get("location")?,
            rating: Rating::clamped(i64::from(row.try_get::<i16, _>("rating")?)),
            purchased_items: row.try_get("purchased_items")?,
            product_name: row.try_get("product_name")?,
            feedback_text: row.try_get("feedback_text")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
