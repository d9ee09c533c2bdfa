//! Postgres tests for the invoice, customer and user queries.
//!
//! Run against a real database: `#[sqlx::test]` creates a fresh database per
//! test from `DATABASE_URL` and applies `migrations/`.

use askama::Template;
use chrono::NaiveDate;
use sqlx::PgPool;

use invoice_dash::actions::{
    create_invoice, delete_invoice, update_invoice, ActionOutcome, INVOICES_PATH,
};
use invoice_dash::cache::PageCache;
use invoice_dash::models::invoice::{self, InvoiceChanges, InvoiceStatus, NewInvoice};
use invoice_dash::models::{customer, user};
use invoice_dash::templates_structs::InvoiceTableTemplate;

async fn seed_customer(pool: &PgPool, name: &str) -> String {
    customer::create(pool, name, &format!("{}@example.com", name.to_lowercase()))
        .await
        .unwrap()
}

fn form(pairs: &[(&str, &str)]) -> std::collections::HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[sqlx::test]
async fn insert_then_list(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let customer_id = seed_customer(&pool, "Ada").await;
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    invoice::insert(&pool, &NewInvoice {
        customer_id: customer_id.clone(),
        amount: 1250,
        status: InvoiceStatus::Pending,
        date,
    })
    .await?;

    let rows = invoice::find_all(&pool).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].customer_name, "Ada");
    assert_eq!(rows[0].amount, 1250);
    assert_eq!(rows[0].status, "pending");
    assert_eq!(rows[0].date, date);
    assert_eq!(rows[0].amount_display(), "$12.50");
    Ok(())
}

#[sqlx::test]
async fn update_keeps_date(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let first = seed_customer(&pool, "Ada").await;
    let second = seed_customer(&pool, "Grace").await;
    let date = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();

    invoice::insert(&pool, &NewInvoice {
        customer_id: first,
        amount: 100,
        status: InvoiceStatus::Pending,
        date,
    })
    .await?;
    let id = invoice::find_all(&pool).await?[0].id.clone();

    invoice::update(&pool, &id, &InvoiceChanges {
        customer_id: second.clone(),
        amount: 999,
        status: InvoiceStatus::Paid,
    })
    .await?;

    let edited = invoice::find_for_edit(&pool, &id).await?.expect("invoice exists");
    assert_eq!(edited.customer_id, second);
    assert_eq!(edited.amount, 999);
    assert_eq!(edited.status, "paid");
    assert_eq!(edited.amount_input(), "9.99");

    let listed = invoice::find_all(&pool).await?;
    assert_eq!(listed[0].date, date);
    Ok(())
}

#[sqlx::test]
async fn delete_removes_row(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let customer_id = seed_customer(&pool, "Ada").await;
    invoice::insert(&pool, &NewInvoice {
        customer_id,
        amount: 500,
        status: InvoiceStatus::Paid,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    })
    .await?;
    let id = invoice::find_all(&pool).await?[0].id.clone();

    invoice::delete(&pool, &id).await?;

    assert!(invoice::find_all(&pool).await?.is_empty());
    assert!(invoice::find_for_edit(&pool, &id).await?.is_none());
    Ok(())
}

#[sqlx::test]
async fn malformed_ids_are_store_errors(pool: PgPool) {
    assert!(invoice::delete(&pool, "not-a-uuid").await.is_err());
    assert!(invoice::find_for_edit(&pool, "not-a-uuid").await.unwrap().is_none());
}

#[sqlx::test]
async fn actions_against_postgres(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let cache = PageCache::new();
    let customer_id = seed_customer(&pool, "Ada").await;
    assert!(cache.put_if_generation("/dashboard/invoices", cache.generation(), "stale".to_string()));

    let outcome = create_invoice(
        &pool,
        &cache,
        &form(&[("customerId", customer_id.as_str()), ("amount", "12.50"), ("status", "pending")]),
    )
    .await?;
    assert!(matches!(outcome, ActionOutcome::Redirect(_)));
    assert_eq!(cache.get("/dashboard/invoices"), None);

    let row = invoice::find_all(&pool).await?.remove(0);
    assert_eq!(row.amount, 1250);
    assert_eq!(row.date, chrono::Utc::now().date_naive());

    let outcome = update_invoice(
        &pool,
        &cache,
        &row.id,
        &form(&[("customerId", customer_id.as_str()), ("amount", "3"), ("status", "paid")]),
    )
    .await?;
    assert!(matches!(outcome, ActionOutcome::Redirect(_)));
    assert_eq!(invoice::find_all(&pool).await?[0].amount, 300);

    let msg = delete_invoice(&pool, &cache, &row.id).await;
    assert_eq!(msg, "Deleted Invoice.");

    // Unknown customer violates the foreign key
    let outcome = create_invoice(
        &pool,
        &cache,
        &form(&[
            ("customerId", "00000000-0000-0000-0000-000000000000"),
            ("amount", "1"),
            ("status", "paid"),
        ]),
    )
    .await?;
    let ActionOutcome::State(state) = outcome else {
        panic!("expected form state");
    };
    assert_eq!(state.message.as_deref(), Some("Database Error: Failed to Create Invoice."));
    Ok(())
}

/// Fills the listing the way the list handler does on a miss.
async fn render_listing(pool: &PgPool, cache: &PageCache) -> String {
    if let Some(html) = cache.get(INVOICES_PATH) {
        return html;
    }
    let generation = cache.generation();
    let invoices = invoice::find_all(pool).await.unwrap();
    let html = InvoiceTableTemplate { invoices }.render().unwrap();
    cache.put_if_generation(INVOICES_PATH, generation, html.clone());
    html
}

#[sqlx::test]
async fn listing_shows_new_invoice_after_create(
    pool: PgPool,
) -> Result<(), Box<dyn std::error::Error>> {
    let cache = PageCache::new();
    let customer_id = seed_customer(&pool, "Grace").await;

    let before = render_listing(&pool, &cache).await;
    assert!(!before.contains("Grace"));
    assert_eq!(cache.get(INVOICES_PATH).as_deref(), Some(before.as_str()));

    create_invoice(
        &pool,
        &cache,
        &form(&[("customerId", customer_id.as_str()), ("amount", "12.50"), ("status", "paid")]),
    )
    .await?;
    assert_eq!(cache.get(INVOICES_PATH), None);

    let after = render_listing(&pool, &cache).await;
    assert!(after.contains("Grace"));
    assert!(after.contains("$12.50"));

    let id = invoice::find_all(&pool).await?.remove(0).id;
    assert_eq!(delete_invoice(&pool, &cache, &id).await, "Deleted Invoice.");
    assert!(!render_listing(&pool, &cache).await.contains("Grace"));
    Ok(())
}

#[sqlx::test]
async fn user_lookup_and_seed(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let hash = invoice_dash::auth::password::hash_password("123456")?;
    invoice_dash::db::seed(&pool, "admin@example.com", &hash).await?;
    // Second run leaves existing rows alone
    invoice_dash::db::seed(&pool, "admin@example.com", &hash).await?;

    let found = user::find_by_email(&pool, "admin@example.com").await?.expect("seeded");
    assert_eq!(found.name, "Admin");
    assert!(user::find_by_email(&pool, "nobody@example.com").await?.is_none());
    assert_eq!(customer::count(&pool).await?, 4);
    assert_eq!(customer::find_all(&pool).await?.len(), 4);
    Ok(())
}
