//! Controllers de la API
//!
//! Orquestan requests: validación, chequeos de unicidad/pertenencia y
//! mapeo de modelos a DTOs. La lógica del ciclo de renta vive en
//! services::rental_service.

pub mod auth_controller;
pub mod rental_controller;
pub mod report_controller;
pub mod service_controller;
pub mod station_controller;
pub mod vehicle_controller;
