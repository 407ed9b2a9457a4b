use crate::server::{data::signup::SignupRepository, model::signup::CreateSignupParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
