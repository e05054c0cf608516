//! Record Service: queries and mutations over the zoo tables.
//! - Every operation takes the store handle explicitly (`&impl ConnectionTrait`).
//! - Entities and the connection helpers live in the `models` crate.
//! - Errors are reported as [`errors::ServiceError`].

pub mod errors;
pub mod de;
pub mod query;
pub mod zoo_service;
pub mod animal_service;
pub mod species_service;
pub mod employee_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
