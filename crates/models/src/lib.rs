pub mod errors;
pub mod db;
pub mod habitat;
pub mod species;
pub mod zoo;
pub mod animal;
pub mod employee;
