//! HTTP request handlers.
//!
//! Each module holds the axum handlers of one resource. Handlers extract the request,
//! convert DTOs into validated parameters, call the matching service and convert the
//! resulting domain model back into a DTO.

pub mod activity;
pub mod camper;
pub mod signup;

#[cfg(test)]
mod test;
