use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campuscoffee_core::{Entity, ReviewId};

use super::{Pos, User};

/// A user's review of one point of sale.
///
/// # Invariants
/// - At most one review exists per (author, point of sale) pair.
/// - `approved` is a stored projection of `approval_count >= min_count`. It is
///   recomputed only by the review service, never lazily on read.
/// - `approval_count` only grows; there is no way to withdraw an approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Option<ReviewId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pos: Pos,
    pub author: User,
    pub review: String,
    pub approval_count: u32,
    pub approved: bool,
}

impl Review {
    /// Build an unsaved, unapproved review with no approvals.
    pub fn new(pos: Pos, author: User, review: impl Into<String>) -> Self {
        Self {
            id: None,
            created_at: None,
            updated_at: None,
            pos,
            author,
            review: review.into(),
            approval_count: 0,
            approved: false,
        }
    }
}

impl Entity for Review {
    type Id = ReviewId;
    const NAME: &'static str = "Review";

    fn id(&self) -> Option<ReviewId> {
        self.id
    }
}
