use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        error::{auth::AuthError, AppError},
        model::user::Role,
        service::{admin::code::AdminCodeService, auth::AuthService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

fn registration(email: &str) -> RegisterDto {
    RegisterDto {
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        phone: Some("0123456789".to_string()),
        age: Some(30),
        gender: Some("female".to_string()),
        admin_code: None,
    }
}
