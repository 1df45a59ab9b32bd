//! In-memory data services for tests/dev.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use campuscoffee_core::{DomainError, DomainResult, Entity, PosId, ReviewId, UserId};
use campuscoffee_domain::{
    CrudDataService, Pos, PosDataService, Review, ReviewDataService, User, UserDataService,
};

/// Entities the in-memory store knows how to persist.
pub trait StoredEntity: Entity + Clone + Send + Sync + 'static {
    /// Fresh identity for a first save.
    fn new_id() -> Self::Id;

    /// Copy of `self` carrying the persistence-managed fields.
    fn stamp(self, id: Self::Id, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self;

    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// `(field, value)` pairs that must be unique across the store.
    fn unique_keys(&self) -> Vec<(&'static str, String)>;
}

impl StoredEntity for User {
    fn new_id() -> UserId {
        UserId::new()
    }

    fn stamp(self, id: UserId, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
            ..self
        }
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![
            ("login_name", self.login_name.clone()),
            ("email_address", self.email_address.clone()),
        ]
    }
}

impl StoredEntity for Pos {
    fn new_id() -> PosId {
        PosId::new()
    }

    fn stamp(self, id: PosId, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
            ..self
        }
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.clone())]
    }
}

impl StoredEntity for Review {
    fn new_id() -> ReviewId {
        ReviewId::new()
    }

    fn stamp(self, id: ReviewId, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
            ..self
        }
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        match (self.pos.id, self.author.id) {
            (Some(pos), Some(author)) => vec![("pos_and_author", format!("{pos}/{author}"))],
            _ => vec![],
        }
    }
}

struct Inner<T: Entity> {
    entities: HashMap<T::Id, T>,
    // Insertion order, so listings are stable.
    order: Vec<T::Id>,
}

/// In-memory store for one entity type.
///
/// Each write holds the store's lock for its whole check-then-insert, so
/// writes are serialized. A caller's read followed by a later write is not
/// atomic across calls.
pub struct InMemoryStore<T: Entity> {
    inner: RwLock<Inner<T>>,
}

pub type InMemoryUserDataService = InMemoryStore<User>;
pub type InMemoryPosDataService = InMemoryStore<Pos>;
pub type InMemoryReviewDataService = InMemoryStore<Review>;

impl<T: StoredEntity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entities: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    // Stored values are plain data, so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.entities.get(id))
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }

    fn first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.filter(predicate).into_iter().next()
    }
}

impl<T: StoredEntity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> CrudDataService<T> for InMemoryStore<T> {
    fn get_all(&self) -> DomainResult<Vec<T>> {
        Ok(self.filter(|_| true))
    }

    fn get_by_id(&self, id: T::Id) -> DomainResult<T> {
        self.read()
            .entities
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found::<T>(id))
    }

    fn upsert(&self, entity: T) -> DomainResult<T> {
        let mut inner = self.write();
        let now = Utc::now();

        let (id, created_at) = match entity.id() {
            None => (T::new_id(), now),
            Some(id) => {
                let existing = inner
                    .entities
                    .get(&id)
                    .ok_or_else(|| DomainError::not_found::<T>(id))?;
                (id, existing.created_at().unwrap_or(now))
            }
        };

        for (field, value) in entity.unique_keys() {
            let taken = inner.entities.values().any(|other| {
                other.id() != Some(id)
                    && other
                        .unique_keys()
                        .iter()
                        .any(|(f, v)| *f == field && *v == value)
            });
            if taken {
                debug!(entity = T::NAME, field, value = %value, "uniqueness constraint violated");
                return Err(DomainError::duplication::<T>(field, value));
            }
        }

        let stored = entity.stamp(id, created_at, now);
        if inner.entities.insert(id, stored.clone()).is_none() {
            inner.order.push(id);
            debug!(entity = T::NAME, %id, "inserted entity");
        } else {
            debug!(entity = T::NAME, %id, "replaced entity");
        }
        Ok(stored)
    }

    fn delete(&self, id: T::Id) -> DomainResult<()> {
        let mut inner = self.write();
        if inner.entities.remove(&id).is_none() {
            return Err(DomainError::not_found::<T>(id));
        }
        inner.order.retain(|other| *other != id);
        Ok(())
    }

    fn clear(&self) -> DomainResult<()> {
        let mut inner = self.write();
        inner.entities.clear();
        inner.order.clear();
        Ok(())
    }
}

impl UserDataService for InMemoryStore<User> {
    fn get_by_login_name(&self, login_name: &str) -> DomainResult<User> {
        self.first(|u| u.login_name == login_name)
            .ok_or_else(|| DomainError::NotFound {
                entity: User::NAME,
                id: login_name.to_string(),
            })
    }
}

impl PosDataService for InMemoryStore<Pos> {
    fn get_by_name(&self, name: &str) -> DomainResult<Pos> {
        self.first(|p| p.name == name)
            .ok_or_else(|| DomainError::NotFound {
                entity: Pos::NAME,
                id: name.to_string(),
            })
    }
}

impl ReviewDataService for InMemoryStore<Review> {
    fn filter_by_approval(&self, pos: &Pos, approved: bool) -> DomainResult<Vec<Review>> {
        Ok(self.filter(|r| r.pos.id == pos.id && r.approved == approved))
    }

    fn filter_by_author(&self, pos: &Pos, author: &User) -> DomainResult<Vec<Review>> {
        Ok(self.filter(|r| r.pos.id == pos.id && r.author.id == author.id))
    }
}
