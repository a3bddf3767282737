//! Applicant data structures and CSV loading

mod data;
pub mod loader;

pub use data::ApplicantProfile;
pub use loader::{load_applicants, load_applicants_from_reader, load_sample_applicants};
