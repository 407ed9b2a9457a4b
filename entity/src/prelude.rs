pub use super::activity::Entity as Activity;
pub use super::camper::Entity as Camper;
pub use super::signup::Entity as Signup;
