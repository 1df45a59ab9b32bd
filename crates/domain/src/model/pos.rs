use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campuscoffee_core::{Entity, PosId};

/// Kind of point of sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosType {
    Cafe,
    Bakery,
    Cafeteria,
    VendingMachine,
}

/// Campus a point of sale is located on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Campus {
    Altstadt,
    Bergheim,
    Inf,
}

/// A point of sale (venue) that users review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    pub id: Option<PosId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub pos_type: PosType,
    pub campus: Campus,
    pub street: String,
    pub house_number: String,
    pub postal_code: u32,
    pub city: String,
}

impl Pos {
    /// Build a point of sale that has not been persisted yet.
    ///
    /// Address fields start empty; set them with struct update syntax.
    pub fn new(name: impl Into<String>, pos_type: PosType, campus: Campus) -> Self {
        Self {
            id: None,
            created_at: None,
            updated_at: None,
            name: name.into(),
            description: String::new(),
            pos_type,
            campus,
            street: String::new(),
            house_number: String::new(),
            postal_code: 0,
            city: String::new(),
        }
    }
}

impl Entity for Pos {
    type Id = PosId;
    const NAME: &'static str = "PointOfSale";

    fn id(&self) -> Option<PosId> {
        self.id
    }
}
