use sqlx::PgPool;

use super::types::*;

pub async fn insert(pool: &PgPool, new: &NewInvoice) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO invoices (customer_id, amount, status, date) \
         VALUES ($1::uuid, $2, $3, $4)",
    )
    .bind(&new.customer_id)
    .bind(new.amount)
    .bind(new.status.as_str())
    .bind(new.date)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update(pool: &PgPool, id: &str, changes: &InvoiceChanges) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE invoices \
         SET customer_id = $1::uuid, amount = $2, status = $3 \
         WHERE id = $4::uuid",
    )
    .bind(&changes.customer_id)
    .bind(changes.amount)
    .bind(changes.status.as_str())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM invoices WHERE id = $1::uuid")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Fetch an invoice for the edit form. A malformed id reads as "not found".
pub async fn find_for_edit(pool: &PgPool, id: &str) -> Result<Option<InvoiceForEdit>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceForEdit>(
        "SELECT id::text AS id, customer_id::text AS customer_id, amount, status \
         FROM invoices \
         WHERE id::text = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All invoices, newest first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<InvoiceListItem>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceListItem>(
        "SELECT i.id::text AS id, c.name AS customer_name, c.email AS customer_email, \
                i.amount, i.status, i.date \
         FROM invoices i \
         JOIN customers c ON i.customer_id = c.id \
         ORDER BY i.date DESC, i.id",
    )
    .fetch_all(pool)
    .await
}
