pub mod infection_control;
pub mod medication_management;
pub mod patient_family_rights;
pub mod patient_safety;
pub mod quality_improvement;
