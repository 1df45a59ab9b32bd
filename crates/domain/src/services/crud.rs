//! Entity-agnostic create/read/update/delete orchestration.

use std::marker::PhantomData;

use tracing::debug;

use campuscoffee_core::{DomainResult, Entity};

use crate::model::{Pos, User};
use crate::ports::{CrudDataService, PosDataService, UserDataService};

/// CRUD service for users.
pub type UserService<D> = CrudService<User, D>;

/// CRUD service for points of sale.
pub type PosService<D> = CrudService<Pos, D>;

/// Shared CRUD logic on top of a data-access port.
///
/// Entity-specific services compose this type and call into it instead of
/// re-implementing the create-vs-update decision.
pub struct CrudService<T, D> {
    data: D,
    _entity: PhantomData<fn() -> T>,
}

impl<T, D> CrudService<T, D>
where
    T: Entity,
    D: CrudDataService<T>,
{
    pub fn new(data: D) -> Self {
        Self {
            data,
            _entity: PhantomData,
        }
    }

    /// The underlying data-access port.
    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn get_all(&self) -> DomainResult<Vec<T>> {
        debug!(entity = T::NAME, "retrieving all entities");
        self.data.get_all()
    }

    pub fn get_by_id(&self, id: T::Id) -> DomainResult<T> {
        debug!(entity = T::NAME, %id, "retrieving entity");
        self.data.get_by_id(id)
    }

    /// Create (no identity) or update (identity present).
    ///
    /// Updates first confirm that the entity exists, so a caller-supplied
    /// identity that is unknown to the store fails with `NotFound` instead of
    /// silently creating a record. Errors from the port, including
    /// `Duplication`, are returned unmodified.
    pub fn upsert(&self, entity: T) -> DomainResult<T> {
        match entity.id() {
            None => {
                debug!(entity = T::NAME, "creating entity");
                self.data.upsert(entity)
            }
            Some(id) => {
                debug!(entity = T::NAME, %id, "updating entity");
                self.get_by_id(id)?;
                self.data.upsert(entity)
            }
        }
    }

    pub fn delete(&self, id: T::Id) -> DomainResult<()> {
        debug!(entity = T::NAME, %id, "deleting entity");
        self.data.delete(id)
    }

    /// Remove every entity of this type (test/reset scenarios).
    pub fn clear(&self) -> DomainResult<()> {
        debug!(entity = T::NAME, "clearing all entities");
        self.data.clear()
    }
}

impl<D: UserDataService> CrudService<User, D> {
    pub fn get_by_login_name(&self, login_name: &str) -> DomainResult<User> {
        debug!(login_name, "retrieving user by login name");
        self.data.get_by_login_name(login_name)
    }
}

impl<D: PosDataService> CrudService<Pos, D> {
    pub fn get_by_name(&self, name: &str) -> DomainResult<Pos> {
        debug!(name, "retrieving point of sale by name");
        self.data.get_by_name(name)
    }
}
