use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Account the appointment is linked to, `None` for guest bookings.
    pub patient_id: Option<i32>,
    pub doctor_id: i32,
    pub service_id: Option<i32>,
    pub date: Date,
    pub time: String,
    pub status: String,
    pub appointment_type: String,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_age: Option<i32>,
    pub patient_gender: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub emergency_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub emergency_description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PatientId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Doctor,
    #[sea_orm(
        belongs_to = "super::dental_service::Entity",
        from = "Column::ServiceId",
        to = "super::dental_service::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DentalService,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl Related<super::dental_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DentalService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
