//! Feedback service.

use async_trait::async_trait;
use mockall::automock;
use showroom::feedback::FeedbackSubmission;

use crate::{
    database::Db,
    domain::feedback::{
        errors::FeedbackServiceError,
        records::{FeedbackRecord, FeedbackUuid},
        repository::PgFeedbackRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgFeedbackService {
    db: Db,
    repository: PgFeedbackRepository,
}

impl PgFeedbackService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFeedbackRepository::new(),
        }
    }
}

#[async_trait]
impl FeedbackService for PgFeedbackService {
    async fn create_feedback(
        &self,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackRecord, FeedbackServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_feedback(&mut tx, FeedbackUuid::new(), &submission)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, FeedbackServiceError> {
        let mut tx = self.db.begin().await?;

        let feedback = self.repository.list_feedback(&mut tx).await?;

        tx.commit().await?;

        Ok(feedback)
    }

    async fn top_feedback(&self, limit: u32) -> Result<Vec<FeedbackRecord>, FeedbackServiceError> {
        let mut tx = self.db.begin().await?;

        let feedback = self
            .repository
            .top_feedback(&mut tx, i64::from(limit))
            .await?;

        tx.commit().await?;

        Ok(feedback)
    }
}

#[automock]
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Store a validated submission.
    async fn create_feedback(
        &self,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackRecord, FeedbackServiceError>;

    /// All feedback, newest first.
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, FeedbackServiceError>;

    /// Highest-rated feedback first, oldest first among equal ratings.
    async fn top_feedback(&self, limit: u32) -> Result<Vec<FeedbackRecord>, FeedbackServiceError>;
}
