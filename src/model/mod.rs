//! Request and response shapes exchanged over the HTTP API.

pub mod activity;
pub mod api;
pub mod camper;
pub mod signup;
