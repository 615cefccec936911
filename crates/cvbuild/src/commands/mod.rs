pub mod build;
pub mod doctor;
