//! Repositorios de acceso a datos
//!
//! Acceso plano a los registros persistidos, sin reglas de negocio más
//! allá de unicidad y guardas de integridad referencial.

pub mod report_repository;
pub mod service_repository;
pub mod station_repository;
pub mod transaction_repository;
pub mod user_repository;
pub mod vehicle_repository;
