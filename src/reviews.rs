//! Review submission: merge, validate, persist.
//!
//! [`submit_review`] never branches on presentation. It returns a
//! [`Submission`] and the caller decides whether a rejection is shown or
//! dropped (see [`crate::config::InvalidReviewPolicy`]).
use crate::db::Database;
use crate::models::review::{Review, ReviewCandidate, ReviewContext, ReviewParams, ValidationErrors};
use leptos::logging::log;

/// A submission that failed validation, kept so the form can be shown again.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedReview {
    pub candidate: ReviewCandidate,
    pub errors: ValidationErrors,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Stored(Review),
    Rejected(RejectedReview),
}

impl Submission {
    pub fn is_stored(&self) -> bool {
        matches!(self, Submission::Stored(_))
    }
}

/// Builds a review from the trusted `context` and the caller's `params`, then
/// stores it if every required field is present. Nothing is written for a
/// rejected submission. Only storage failures surface as `Err`.
pub async fn submit_review(
    db: &Database,
    context: ReviewContext,
    params: ReviewParams,
) -> Result<Submission, rusqlite::Error> {
    let candidate = context.merge(params);
    match candidate.validate() {
        Ok(valid) => {
            let review = db.insert_review(&valid).await?;
            Ok(Submission::Stored(review))
        }
        Err(errors) => {
            log!(
                "[REVIEWS] Rejected review for product {}: {}",
                context.product_id,
                errors.full_messages().join(", ")
            );
            Ok(Submission::Rejected(RejectedReview { candidate, errors }))
        }
    }
}
