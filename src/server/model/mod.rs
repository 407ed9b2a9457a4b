//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are the validated,
//! strongly typed inputs to service and repository operations; their `try_from_dto`
//! constructors perform the field checks of each endpoint.

pub mod activity;
pub mod camper;
pub mod signup;
