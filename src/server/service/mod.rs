//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and are
//! responsible for:
//!
//! - **Business Logic**: Existence checks and rules spanning several entities
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod activity;
pub mod camper;
pub mod signup;
