//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories that need
//! parent rows take their IDs explicitly; `helpers` creates whole hierarchies.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let camper = factory::create_camper(&db).await?;
//! let activity = factory::create_activity(&db).await?;
//! let signup = factory::create_signup(&db, camper.id, activity.id).await?;
//!
//! let (camper, activity, signup) = factory::helpers::create_signup_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let camper = factory::camper::CamperFactory::new(&db)
//!     .name("Ann")
//!     .age(10)
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod camper;
pub mod helpers;
pub mod signup;

pub use activity::create_activity;
pub use camper::create_camper;
pub use signup::create_signup;
