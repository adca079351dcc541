use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role},
};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_all;
mod set_role;
