//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL. Los estados se persisten como TEXT en minúsculas
//! y se parsean a enums tipados en esta capa.

pub mod report;
pub mod service;
pub mod station;
pub mod transaction;
pub mod user;
pub mod vehicle;
