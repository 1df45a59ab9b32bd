//! Entity model: immutable value records, each exposing its identity.

pub mod pos;
pub mod review;
pub mod user;

pub use pos::{Campus, Pos, PosType};
pub use review::Review;
pub use user::User;
