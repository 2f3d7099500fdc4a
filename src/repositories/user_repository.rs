use sqlx::PgPool;

use crate::models::user::User;
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> Result<User, AppError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (nrp, nama, email, password_hash, no_hp, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&user.nrp)
        .bind(&user.nama)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.no_hp)
        .bind(&user.role)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_nrp(&self, nrp: &str) -> Result<Option<User>, AppError> {
        let result = sqlx::query_as::<_, User>("SELECT * FROM users WHERE nrp = $1")
            .bind(nrp)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn nrp_exists(&self, nrp: &str) -> Result<bool, AppError> {
        let result: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE nrp = $1)")
                .bind(nrp)
                .fetch_one(&self.pool)
                .await?;

        Ok(result)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result)
    }
}
