//! Routers por recurso
//!
//! Cada recurso arma su Router y aplica el middleware de autenticación a
//! sus rutas protegidas; el gating admin va por el extractor AdminUser.

pub mod auth_routes;
pub mod rental_routes;
pub mod service_routes;
pub mod station_routes;
pub mod vehicle_routes;
