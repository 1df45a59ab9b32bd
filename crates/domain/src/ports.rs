//! Data-access ports.
//!
//! The services only talk to storage through these traits. Implementations
//! live in the infrastructure layer (or in tests).

use std::sync::Arc;

use campuscoffee_core::{DomainResult, Entity};

use crate::model::{Pos, Review, User};

/// Storage operations shared by every entity type.
pub trait CrudDataService<T: Entity>: Send + Sync {
    /// Every stored entity, in whatever order the store keeps them.
    fn get_all(&self) -> DomainResult<Vec<T>>;

    /// The stored entity, or `NotFound` carrying the entity type and `id`.
    fn get_by_id(&self, id: T::Id) -> DomainResult<T>;

    /// Persist-or-update.
    ///
    /// An entity without an identity is inserted and returned with its newly
    /// assigned identity. An entity with an identity replaces the stored one.
    /// Uniqueness violations fail with `Duplication`.
    fn upsert(&self, entity: T) -> DomainResult<T>;

    /// Remove the entity; `NotFound` if there is none with this `id`.
    fn delete(&self, id: T::Id) -> DomainResult<()>;

    /// Remove every stored entity of this type.
    fn clear(&self) -> DomainResult<()>;
}

/// Review storage.
///
/// Concurrent approvals perform a read-increment-write through `get_by_id` and
/// `upsert`. Implementations must serialize writes to the same review (or
/// provide transactional isolation) for the approval count to stay exact under
/// concurrency; the review service cannot enforce that on its own.
pub trait ReviewDataService: CrudDataService<Review> {
    /// Reviews of `pos` whose `approved` flag equals `approved`.
    fn filter_by_approval(&self, pos: &Pos, approved: bool) -> DomainResult<Vec<Review>>;

    /// Reviews of `pos` written by `author`.
    fn filter_by_author(&self, pos: &Pos, author: &User) -> DomainResult<Vec<Review>>;
}

pub trait UserDataService: CrudDataService<User> {
    fn get_by_login_name(&self, login_name: &str) -> DomainResult<User>;
}

pub trait PosDataService: CrudDataService<Pos> {
    fn get_by_name(&self, name: &str) -> DomainResult<Pos>;
}

impl<T, S> CrudDataService<T> for Arc<S>
where
    T: Entity,
    S: CrudDataService<T> + ?Sized,
{
    fn get_all(&self) -> DomainResult<Vec<T>> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: T::Id) -> DomainResult<T> {
        (**self).get_by_id(id)
    }

    fn upsert(&self, entity: T) -> DomainResult<T> {
        (**self).upsert(entity)
    }

    fn delete(&self, id: T::Id) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn clear(&self) -> DomainResult<()> {
        (**self).clear()
    }
}

impl<S> ReviewDataService for Arc<S>
where
    S: ReviewDataService + ?Sized,
{
    fn filter_by_approval(&self, pos: &Pos, approved: bool) -> DomainResult<Vec<Review>> {
        (**self).filter_by_approval(pos, approved)
    }

    fn filter_by_author(&self, pos: &Pos, author: &User) -> DomainResult<Vec<Review>> {
        (**self).filter_by_author(pos, author)
    }
}

impl<S> UserDataService for Arc<S>
where
    S: UserDataService + ?Sized,
{
    fn get_by_login_name(&self, login_name: &str) -> DomainResult<User> {
        (**self).get_by_login_name(login_name)
    }
}

impl<S> PosDataService for Arc<S>
where
    S: PosDataService + ?Sized,
{
    fn get_by_name(&self, name: &str) -> DomainResult<Pos> {
        (**self).get_by_name(name)
    }
}
