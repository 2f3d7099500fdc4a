//! DTOs de autenticación y perfil de usuario.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;

/// Request para registrar un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub nrp: String,

    #[validate(length(min = 2, max = 100))]
    pub nama: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[validate(length(max = 20))]
    pub no_hp: Option<String>,

    /// Rol opcional; default 'user'. Se parsea con UserRole.
    pub role: Option<String>,
}

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub nrp: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response de usuario (sin password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub nrp: String,
    pub nama: String,
    pub email: String,
    pub no_hp: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            nrp: user.nrp,
            nama: user.nama,
            email: user.email,
            no_hp: user.no_hp,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Response de login con el bearer token emitido
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
}
