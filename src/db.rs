use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::models::{customer, user};

const DEMO_CUSTOMERS: &[(&str, &str)] = &[
    ("Evil Rabbit", "evil@rabbit.com"),
    ("Delba de Oliveira", "delba@oliveira.com"),
    ("Lee Robinson", "lee@robinson.com"),
    ("Michael Novotny", "michael@novotny.com"),
];

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Seed the admin account and a few customers so a fresh database is usable.
pub async fn seed(pool: &PgPool, admin_email: &str, admin_password_hash: &str) -> Result<(), sqlx::Error> {
    if user::create_if_missing(pool, "Admin", admin_email, admin_password_hash).await? {
        log::info!("Seeded admin user {admin_email}");
    }

    if customer::count(pool).await? == 0 {
        for (name, email) in DEMO_CUSTOMERS {
            customer::create(pool, name, email).await?;
        }
        log::info!("Seeded {} customers", DEMO_CUSTOMERS.len());
    }

    Ok(())
}
