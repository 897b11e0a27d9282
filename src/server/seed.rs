//! Default catalog inserted on first start.
//!
//! Each table is only seeded while it is empty, so restarting with seeding enabled never
//! duplicates entries or overwrites admin edits.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{dental_service::DentalServiceRepository, doctor::DoctorRepository},
    error::AppError,
    model::{
        dental_service::{CreateDentalServiceParam, ServiceCategory},
        doctor::CreateDoctorParam,
    },
};

struct SeedDoctor {
    name: &'static str,
    specialty: &'static str,
    image: &'static str,
    available_times: &'static [&'static str],
}

struct SeedService {
    name: &'static str,
    description: &'static str,
    category: ServiceCategory,
    duration: i32,
}

const DOCTORS: &[SeedDoctor] = &[
    SeedDoctor {
        name: "Dr. Ahmed Amer",
        specialty: "Root Canal Specialist",
        image: "https://placehold.co/250x250?text=Ahmed",
        available_times: &["12:00", "13:00", "14:00", "15:00"],
    },
    SeedDoctor {
        name: "Dr. Sarah Hany",
        specialty: "Cosmetic Dentistry",
        image: "https://placehold.co/250x250?text=Sarah",
        available_times: &["12:00", "14:00", "16:00"],
    },
    SeedDoctor {
        name: "Dr. Youmna Galeb",
        specialty: "Pediatric Dentistry",
        image: "https://placehold.co/250x250?text=Youmna",
        available_times: &["13:00", "15:00"],
    },
    SeedDoctor {
        name: "Dr. Mai Mansour",
        specialty: "Orthodontics",
        image: "https://placehold.co/250x250?text=Mai",
        available_times: &["12:00", "13:00", "14:00"],
    },
    SeedDoctor {
        name: "Dr. Youssef Kamel",
        specialty: "Oral Surgery",
        image: "https://placehold.co/250x250?text=Youssef",
        available_times: &["14:00", "15:00", "16:00"],
    },
];

const SERVICES: &[SeedService] = &[
    SeedService {
        name: "General Checkups",
        description: "Routine examinations to keep your smile healthy.",
        category: ServiceCategory::General,
        duration: 30,
    },
    SeedService {
        name: "Teeth Cleaning",
        description: "Deep cleaning to remove plaque and protect gums.",
        category: ServiceCategory::General,
        duration: 45,
    },
    SeedService {
        name: "X-rays & Imaging",
        description: "Modern digital X-rays & treatment history.",
        category: ServiceCategory::General,
        duration: 20,
    },
    SeedService {
        name: "Root Canal Treatment",
        description: "Expert root canal procedures.",
        category: ServiceCategory::Specialty,
        duration: 90,
    },
    SeedService {
        name: "Cosmetic Dentistry",
        description: "Whitening, veneers & smile makeovers.",
        category: ServiceCategory::Cosmetic,
        duration: 60,
    },
    SeedService {
        name: "Emergency Dental Care",
        description: "Same-day pain relief for urgent cases.",
        category: ServiceCategory::Emergency,
        duration: 30,
    },
];

/// Inserts the default doctors and services into empty tables.
///
/// # Returns
/// - `Ok(())` - Seeding finished or was not needed
/// - `Err(AppError::DbErr)` - Database error while counting or inserting
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<(), AppError> {
    let doctor_repo = DoctorRepository::new(db);
    if doctor_repo.count().await? == 0 {
        for doctor in DOCTORS {
            doctor_repo
                .create(CreateDoctorParam {
                    name: doctor.name.to_string(),
                    specialty: doctor.specialty.to_string(),
                    image: doctor.image.to_string(),
                    available_times: doctor
                        .available_times
                        .iter()
                        .map(|t| t.to_string())
                        .collect(),
                    bio: None,
                })
                .await?;
        }
        tracing::info!("Seeded {} doctors", DOCTORS.len());
    }

    let service_repo = DentalServiceRepository::new(db);
    if service_repo.count().await? == 0 {
        for service in SERVICES {
            service_repo
                .create(CreateDentalServiceParam {
                    name: service.name.to_string(),
                    description: Some(service.description.to_string()),
                    category: service.category,
                    duration: service.duration,
                    price: None,
                })
                .await?;
        }
        tracing::info!("Seeded {} dental services", SERVICES.len());
    }

    Ok(())
}
