use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{error, info};

use sepeda_backoffice::build_router;
use sepeda_backoffice::config::environment::EnvironmentConfig;
use sepeda_backoffice::database::connection::{create_pool, mask_database_url};
use sepeda_backoffice::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🚲 Sepeda Backoffice - Bike Sharing API");
    info!("=======================================");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgresql://localhost/sepeda".to_string());
    info!("📦 Base de datos: {}", mask_database_url(&database_url));

    let pool = match create_pool(Some(&database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let state = AppState::new(pool, config.clone());
    let app = build_router(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /auth/register - Registrar usuario");
    info!("   POST /auth/login - Login");
    info!("   GET  /auth/profile - Perfil del usuario actual");
    info!("🚲 Kendaraan:");
    info!("   GET/POST /kendaraan - Listar / crear (admin)");
    info!("   GET/PUT/DELETE /kendaraan/:id");
    info!("   GET/POST /kendaraan/:id/laporan - Reportes de incidentes");
    info!("🚉 Stasiun:");
    info!("   GET/POST /stasiun - Listar / crear (admin)");
    info!("   GET/PUT/DELETE /stasiun/:id");
    info!("   GET  /stasiun/summary - Resumen de ocupación (admin)");
    info!("🛠  Layanan:");
    info!("   GET/POST /layanan - Catálogo / crear (admin)");
    info!("🧾 Transaksi:");
    info!("   POST /transaksi/rent - Iniciar renta");
    info!("   POST /transaksi/return - Devolver kendaraan");
    info!("   POST /transaksi/add-service - Adjuntar layanan");
    info!("   GET  /transaksi/active - Renta activa del caller");
    info!("   GET  /transaksi/my-rentals - Historial del caller");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
