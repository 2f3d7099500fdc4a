use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::dto::common::ApiResponse;
use crate::models::user::{User, UserRole};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<ApiResponse<UserResponse>> {
        request.validate()?;

        let role = match request.role.as_deref() {
            Some(value) => UserRole::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown role: {}", value)))?,
            None => UserRole::User,
        };

        if self.repository.nrp_exists(&request.nrp).await? {
            return Err(AppError::Conflict("NRP already exists".to_string()));
        }

        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = User {
            nrp: request.nrp,
            nama: request.nama,
            email: request.email,
            password_hash,
            no_hp: request.no_hp,
            role: role.as_str().to_string(),
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&user).await?;

        Ok(ApiResponse::success_with_message(
            saved.into(),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let user = self
            .repository
            .find_by_nrp(&request.nrp)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = generate_token(&user.nrp, &user.role, &JwtConfig::from(&self.config))?;

        Ok(LoginResponse {
            access_token: token,
            user: user.into(),
        })
    }

    pub async fn profile(&self, nrp: &str) -> AppResult<UserResponse> {
        let user = self
            .repository
            .find_by_nrp(nrp)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }
}
