//! Customer feedback

use std::sync::Arc;

use showroom::feedback::{FeedbackSubmission, FeedbackValidationError};
use thiserror::Error;
use tracing::{error, info};

use crate::domain::feedback::{FeedbackService, FeedbackServiceError, records::FeedbackRecord};

/// Number of testimonials shown on the home page.
pub const DEFAULT_TOP_LIMIT: u32 = 3;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    Validation(#[from] FeedbackValidationError),

    #[error("failed to load or store feedback")]
    Persistence(#[from] FeedbackServiceError),
}

#[derive(Clone)]
pub struct FeedbackFlow {
    feedback: Arc<dyn FeedbackService>,
}

impl FeedbackFlow {
    #[must_use]
    pub fn new(feedback: Arc<dyn FeedbackService>) -> Self {
        Self { feedback }
    }

    /// Validate and store a testimonial.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Validation`] without contacting storage when
    /// the submission is invalid.
    pub async fn submit(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackRecord, FeedbackError> {
        let submission = submission.validate()?;

        let stored = self
            .feedback
            .create_feedback(submission)
            .await
            .inspect_err(|source| error!(error = %source, "failed to store feedback"))?;

        info!(feedback = %stored.uuid, rating = stored.rating.get(), "feedback stored");

        Ok(stored)
    }

    /// Every testimonial, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Persistence`] when storage is unavailable.
    pub async fn recent(&self) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        Ok(self.feedback.list_feedback().await?)
    }

    /// At most `limit` testimonials, highest rating first.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Persistence`] when storage is unavailable.
    pub async fn top(&self, limit: u32) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        Ok(self.feedback.top_feedback(limit).await?)
    }
}

impl std::fmt::Debug for FeedbackFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackFlow").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::feedback::MockFeedbackService,
        test::helpers::{feedback_record, feedback_submission},
    };

    use super::*;

    #[tokio::test]
    async fn invalid_email_never_reaches_storage() {
        let mut feedback = MockFeedbackService::new();

        feedback.expect_create_feedback().never();

        let flow = FeedbackFlow::new(Arc::new(feedback));

        let submission = FeedbackSubmission {
            email: "not-an-email".to_string(),
            ..feedback_submission("Home Owner", 5)
        };

        let result = flow.submit(&submission).await;

        assert!(matches!(
            result,
            Err(FeedbackError::Validation(
                FeedbackValidationError::InvalidEmail(_)
            ))
        ));
    }

    #[tokio::test]
    async fn valid_submission_is_stored_trimmed() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_create_feedback()
            .once()
            .withf(|submission| submission.name == "Bilal Ahmed")
            .return_once(|submission| Ok(feedback_record(submission)));

        let flow = FeedbackFlow::new(Arc::new(feedback));

        let submission = FeedbackSubmission {
            name: "  Bilal Ahmed  ".to_string(),
            ..feedback_submission("Home Owner", 4)
        };

        let stored = flow.submit(&submission).await?;

        assert_eq!(stored.role, "Home Owner");

        Ok(())
    }

    #[tokio::test]
    async fn top_forwards_the_limit_to_storage() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_top_feedback()
            .once()
            .withf(|limit| *limit == DEFAULT_TOP_LIMIT)
            .return_once(|_| Ok(Vec::new()));

        let flow = FeedbackFlow::new(Arc::new(feedback));

        assert!(flow.top(DEFAULT_TOP_LIMIT).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_list_feedback()
            .once()
            .return_once(|| Err(FeedbackServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let flow = FeedbackFlow::new(Arc::new(feedback));

        assert!(matches!(
            flow.recent().await,
            Err(FeedbackError::Persistence(_))
        ));
    }
}
