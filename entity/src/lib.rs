//! SeaORM entity definitions for the camp database.

pub mod prelude;

pub mod activity;
pub mod camper;
pub mod signup;
