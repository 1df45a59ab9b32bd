//! Review domain module.
//!
//! This crate contains the business rules of the point-of-sale review
//! application: the entity model, the data-access ports the rules depend on,
//! the generic CRUD service shared by every entity and the review workflow
//! (one review per author and venue, approval quorum). No IO, no HTTP, no
//! storage: persistence lives behind the ports.

pub mod config;
pub mod model;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ApprovalConfiguration, ConfigError};
pub use model::{Campus, Pos, PosType, Review, User};
pub use ports::{CrudDataService, PosDataService, ReviewDataService, UserDataService};
pub use services::{CrudService, PosService, ReviewService, UserService};
