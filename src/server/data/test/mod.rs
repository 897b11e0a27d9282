mod dental_service;
mod doctor;
mod user;
