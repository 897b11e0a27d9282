use crate::server::{
    data::doctor::DoctorRepository,
    error::AppError,
    model::doctor::{CreateDoctorParam, DoctorFilter, UpdateDoctorParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
