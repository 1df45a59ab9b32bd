//! Review workflow: submission rules, filtered retrieval and approvals.

use tracing::{debug, info, instrument, warn};

use campuscoffee_core::{DomainError, DomainResult, PosId, ReviewId, UserId};

use crate::config::ApprovalConfiguration;
use crate::model::Review;
use crate::ports::{PosDataService, ReviewDataService, UserDataService};
use crate::services::crud::CrudService;

/// Review service.
///
/// Composes the generic [`CrudService`] for the review entity and consults the
/// user and point-of-sale ports for identity lookups. Holds no mutable state;
/// everything lives behind the ports.
pub struct ReviewService<R, U, P> {
    reviews: CrudService<Review, R>,
    users: U,
    venues: P,
    approval: ApprovalConfiguration,
}

impl<R, U, P> ReviewService<R, U, P>
where
    R: ReviewDataService,
    U: UserDataService,
    P: PosDataService,
{
    pub fn new(reviews: R, users: U, venues: P, approval: ApprovalConfiguration) -> Self {
        Self {
            reviews: CrudService::new(reviews),
            users,
            venues,
            approval,
        }
    }

    pub fn get_all(&self) -> DomainResult<Vec<Review>> {
        self.reviews.get_all()
    }

    pub fn get_by_id(&self, id: ReviewId) -> DomainResult<Review> {
        self.reviews.get_by_id(id)
    }

    pub fn delete(&self, id: ReviewId) -> DomainResult<()> {
        self.reviews.delete(id)
    }

    pub fn clear(&self) -> DomainResult<()> {
        self.reviews.clear()
    }

    /// Submit a new review or update an existing one.
    ///
    /// Fails with `NotFound` if the reviewed point of sale does not exist and
    /// with `Validation` if the author already has a different review for it.
    /// Nothing is written unless every check passes.
    #[instrument(
        skip(self, review),
        fields(review_id = ?review.id, pos_id = ?review.pos.id, author_id = ?review.author.id),
        err
    )]
    pub fn upsert(&self, review: Review) -> DomainResult<Review> {
        let pos_id = review.pos.id.ok_or_else(|| {
            DomainError::validation("review must reference a persisted point of sale")
        })?;
        let pos = self.venues.get_by_id(pos_id)?;

        // The author's own review may be resubmitted; any other match is a second review.
        let existing = self.reviews.data().filter_by_author(&pos, &review.author)?;
        if existing
            .iter()
            .any(|found| review.id.is_none() || found.id != review.id)
        {
            warn!("rejected duplicate review for point of sale");
            return Err(DomainError::validation(
                "author already reviewed this point of sale",
            ));
        }

        self.reviews.upsert(review)
    }

    /// Reviews of one point of sale with the given approval flag.
    pub fn filter(&self, pos_id: PosId, approved: bool) -> DomainResult<Vec<Review>> {
        let pos = self.venues.get_by_id(pos_id)?;
        debug!(%pos_id, approved, "filtering reviews");
        self.reviews.data().filter_by_approval(&pos, approved)
    }

    /// Recompute the stored `approved` flag from the approval count.
    ///
    /// Pure: no IO, deterministic, idempotent.
    pub fn update_approval_status(&self, review: Review) -> Review {
        let approved = review.approval_count >= self.approval.min_count();
        Review { approved, ..review }
    }

    /// Record one approval of `review` by `approver_id`.
    ///
    /// Only the review's identity is taken from the argument; the count is
    /// incremented on the currently stored review. Authors cannot approve
    /// their own reviews.
    #[instrument(
        skip(self, review, approver_id),
        fields(review_id = ?review.id, %approver_id),
        err
    )]
    pub fn approve(&self, review: &Review, approver_id: UserId) -> DomainResult<Review> {
        let approver = self.users.get_by_id(approver_id)?;

        let review_id = review.id.ok_or_else(|| {
            DomainError::validation("review must be persisted before it can be approved")
        })?;
        let stored = self.reviews.get_by_id(review_id)?;

        if stored.author.id == approver.id {
            warn!("rejected self-approval");
            return Err(DomainError::validation("author cannot approve own review"));
        }

        let was_approved = stored.approved;
        let approval_count = stored
            .approval_count
            .checked_add(1)
            .ok_or_else(|| DomainError::validation("approval count cannot grow any further"))?;
        let updated = self.update_approval_status(Review {
            approval_count,
            ..stored
        });

        if updated.approved && !was_approved {
            info!(approval_count, "review reached approval quorum");
        } else {
            debug!(approval_count, approved = updated.approved, "review approval recorded");
        }

        self.reviews.data().upsert(updated)
    }
}
