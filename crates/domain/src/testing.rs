//! Test doubles: recording in-memory ports and fixtures.

use std::sync::Mutex;

use campuscoffee_core::{DomainError, DomainResult, Entity, PosId, ReviewId, UserId};

use crate::model::{Campus, Pos, PosType, Review, User};
use crate::ports::{CrudDataService, PosDataService, ReviewDataService, UserDataService};

/// Entities the fake store can assign identities to.
pub(crate) trait Fixture: Entity + Clone + Send + Sync {
    fn with_new_id(self) -> Self;
}

impl Fixture for User {
    fn with_new_id(self) -> Self {
        Self {
            id: Some(UserId::new()),
            ..self
        }
    }
}

impl Fixture for Pos {
    fn with_new_id(self) -> Self {
        Self {
            id: Some(PosId::new()),
            ..self
        }
    }
}

impl Fixture for Review {
    fn with_new_id(self) -> Self {
        Self {
            id: Some(ReviewId::new()),
            ..self
        }
    }
}

/// Minimal entity for exercising the generic CRUD service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Dummy {
    pub id: Option<ReviewId>,
    pub name: String,
}

impl Dummy {
    pub fn unsaved(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }

    pub fn saved(name: &str) -> Self {
        Self::unsaved(name).with_new_id()
    }
}

impl Entity for Dummy {
    type Id = ReviewId;
    const NAME: &'static str = "Dummy";

    fn id(&self) -> Option<ReviewId> {
        self.id
    }
}

impl Fixture for Dummy {
    fn with_new_id(self) -> Self {
        Self {
            id: Some(ReviewId::new()),
            ..self
        }
    }
}

/// A port call, as observed by [`FakeStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GetAll,
    GetById(String),
    Upsert,
    Delete(String),
    Clear,
    FilterByApproval(bool),
    FilterByAuthor,
    GetByName(String),
}

/// In-memory port that records every call made against it.
pub(crate) struct FakeStore<T> {
    entities: Mutex<Vec<T>>,
    calls: Mutex<Vec<Call>>,
    upsert_failure: Mutex<Option<DomainError>>,
}

impl<T: Fixture> FakeStore<T> {
    pub fn new() -> Self {
        Self {
            entities: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            upsert_failure: Mutex::new(None),
        }
    }

    pub fn seed(&self, entities: Vec<T>) {
        self.entities.lock().unwrap().extend(entities);
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.entities.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn upserts(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::Upsert).count()
    }

    pub fn fail_next_upsert(&self, err: DomainError) {
        *self.upsert_failure.lock().unwrap() = Some(err);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.entities
            .lock()
            .unwrap()
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }
}

impl<T: Fixture> CrudDataService<T> for FakeStore<T> {
    fn get_all(&self) -> DomainResult<Vec<T>> {
        self.record(Call::GetAll);
        Ok(self.snapshot())
    }

    fn get_by_id(&self, id: T::Id) -> DomainResult<T> {
        self.record(Call::GetById(id.to_string()));
        self.find(|e| e.id() == Some(id))
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found::<T>(id))
    }

    fn upsert(&self, entity: T) -> DomainResult<T> {
        self.record(Call::Upsert);
        if let Some(err) = self.upsert_failure.lock().unwrap().take() {
            return Err(err);
        }

        let mut entities = self.entities.lock().unwrap();
        match entity.id() {
            None => {
                let saved = entity.with_new_id();
                entities.push(saved.clone());
                Ok(saved)
            }
            Some(id) => {
                match entities.iter().position(|e| e.id() == Some(id)) {
                    Some(idx) => entities[idx] = entity.clone(),
                    None => entities.push(entity.clone()),
                }
                Ok(entity)
            }
        }
    }

    fn delete(&self, id: T::Id) -> DomainResult<()> {
        self.record(Call::Delete(id.to_string()));
        let mut entities = self.entities.lock().unwrap();
        let idx = entities
            .iter()
            .position(|e| e.id() == Some(id))
            .ok_or_else(|| DomainError::not_found::<T>(id))?;
        entities.remove(idx);
        Ok(())
    }

    fn clear(&self) -> DomainResult<()> {
        self.record(Call::Clear);
        self.entities.lock().unwrap().clear();
        Ok(())
    }
}

impl ReviewDataService for FakeStore<Review> {
    fn filter_by_approval(&self, pos: &Pos, approved: bool) -> DomainResult<Vec<Review>> {
        self.record(Call::FilterByApproval(approved));
        Ok(self.find(|r| r.pos.id == pos.id && r.approved == approved))
    }

    fn filter_by_author(&self, pos: &Pos, author: &User) -> DomainResult<Vec<Review>> {
        self.record(Call::FilterByAuthor);
        Ok(self.find(|r| r.pos.id == pos.id && r.author.id == author.id))
    }
}

impl UserDataService for FakeStore<User> {
    fn get_by_login_name(&self, login_name: &str) -> DomainResult<User> {
        self.record(Call::GetByName(login_name.to_string()));
        self.find(|u| u.login_name == login_name)
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound {
                entity: User::NAME,
                id: login_name.to_string(),
            })
    }
}

impl PosDataService for FakeStore<Pos> {
    fn get_by_name(&self, name: &str) -> DomainResult<Pos> {
        self.record(Call::GetByName(name.to_string()));
        self.find(|p| p.name == name)
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound {
                entity: Pos::NAME,
                id: name.to_string(),
            })
    }
}

pub(crate) fn users() -> Vec<User> {
    vec![
        User::new("jane_doe", "jane.doe@uni-heidelberg.de", "Jane", "Doe").with_new_id(),
        User::new("maxmustermann", "max@uni-heidelberg.de", "Max", "Mustermann").with_new_id(),
        User::new("erika", "erika@uni-heidelberg.de", "Erika", "Mustermann").with_new_id(),
    ]
}

pub(crate) fn venues() -> Vec<Pos> {
    vec![
        Pos {
            description: "Espresso bar near the old town campus".to_string(),
            street: "Hauptstraße".to_string(),
            house_number: "90".to_string(),
            postal_code: 69117,
            city: "Heidelberg".to_string(),
            ..Pos::new("Schmelzpunkt", PosType::Cafe, Campus::Altstadt)
        }
        .with_new_id(),
        Pos {
            street: "Berliner Straße".to_string(),
            house_number: "43".to_string(),
            postal_code: 69120,
            city: "Heidelberg".to_string(),
            ..Pos::new("Bäcker Görtz", PosType::Bakery, Campus::Inf)
        }
        .with_new_id(),
    ]
}

/// A persisted review of `venue` by `author`, with no approvals yet.
pub(crate) fn review(venue: &Pos, author: &User) -> Review {
    Review::new(venue.clone(), author.clone(), "Friendly staff and great coffee.").with_new_id()
}
