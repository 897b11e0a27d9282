use crate::server::{
    data::dental_service::DentalServiceRepository,
    error::AppError,
    model::dental_service::{
        CreateDentalServiceParam, DentalServiceFilter, ServiceCategory, UpdateDentalServiceParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;

fn service_param(name: &str) -> CreateDentalServiceParam {
    CreateDentalServiceParam {
        name: name.to_string(),
        description: Some("Deep cleaning".to_string()),
        category: ServiceCategory::General,
        duration: 45,
        price: Some(80.0),
    }
}
