//! Domain services: generic CRUD orchestration and the review workflow.

pub mod crud;
pub mod review;

pub use crud::{CrudService, PosService, UserService};
pub use review::ReviewService;
