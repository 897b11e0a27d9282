use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role, UpdateUserParam},
    service::ownership::ProfileLookup,
};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod delete;

fn patient_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: Role::Patient,
        phone: Some("555-0100".to_string()),
        age: Some(30),
        gender: None,
    }
}
