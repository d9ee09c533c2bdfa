use sqlx::PgPool;

/// Option in the invoice form's customer selector.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerOption {
    pub id: String,
    pub name: String,
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<CustomerOption>, sqlx::Error> {
    sqlx::query_as::<_, CustomerOption>(
        "SELECT id::text AS id, name FROM customers ORDER BY name",
    )
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, name: &str, email: &str) -> Result<String, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING id::text")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await
}
