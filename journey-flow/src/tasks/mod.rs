// Hospitalization journey step tasks
pub mod admission_details;
pub mod review;
pub mod select_hospital;

pub use admission_details::AdmissionDetailsTask;
pub use review::ReviewTask;
pub use select_hospital::SelectHospitalTask;
