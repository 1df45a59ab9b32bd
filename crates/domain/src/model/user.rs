use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campuscoffee_core::{Entity, UserId};

/// A registered user; authors and approves reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub login_name: String,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Build a user that has not been persisted yet.
    pub fn new(
        login_name: impl Into<String>,
        email_address: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            created_at: None,
            updated_at: None,
            login_name: login_name.into(),
            email_address: email_address.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Entity for User {
    type Id = UserId;
    const NAME: &'static str = "User";

    fn id(&self) -> Option<UserId> {
        self.id
    }
}
