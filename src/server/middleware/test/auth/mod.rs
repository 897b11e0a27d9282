use chrono::NaiveDate;

use crate::{
    model::appointment::CreateAppointmentDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
        model::appointment::CreateAppointmentParam,
        service::appointment::AppointmentService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod current_user;
