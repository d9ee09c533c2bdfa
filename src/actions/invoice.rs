use std::collections::HashMap;

use sqlx::PgPool;

use crate::cache::Revalidate;
use crate::errors::AppError;
use crate::models::invoice::{self, InvoiceChanges, NewInvoice};
use super::schema::validate_invoice;
use super::{ActionOutcome, FormState, INVOICES_PATH};

const CREATE_INVALID: &str = "Missing Fields. Failed to Create Invoice.";
const UPDATE_INVALID: &str = "Missing Fields. Failed to Update Invoice.";
const CREATE_FAILED: &str = "Database Error: Failed to Create Invoice.";
const UPDATE_FAILED: &str = "Database Error: Failed to Update Invoice.";
const DELETE_FAILED: &str = "Database Error: Failed to Delete Invoice.";
const DELETED: &str = "Deleted Invoice.";

/// Single-statement writes against the invoice table.
#[allow(async_fn_in_trait)]
pub trait InvoiceStore {
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), sqlx::Error>;
    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), sqlx::Error>;
    async fn delete_invoice(&self, id: &str) -> Result<(), sqlx::Error>;
}

impl InvoiceStore for PgPool {
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), sqlx::Error> {
        invoice::insert(self, new).await
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), sqlx::Error> {
        invoice::update(self, id, changes).await
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), sqlx::Error> {
        invoice::delete(self, id).await
    }
}

pub async fn create_invoice<S, C>(
    store: &S,
    cache: &C,
    form: &HashMap<String, String>,
) -> Result<ActionOutcome, AppError>
where
    S: InvoiceStore,
    C: Revalidate,
{
    let valid = match validate_invoice(form) {
        Ok(v) => v,
        Err(errors) => {
            log::debug!("invoice create rejected: {}", serde_json::json!(errors));
            return Ok(ActionOutcome::State(FormState {
                errors,
                message: Some(CREATE_INVALID.to_string()),
            }));
        }
    };

    let new = NewInvoice {
        amount: valid.amount_in_cents,
        customer_id: valid.customer_id,
        status: valid.status,
        date: chrono::Utc::now().date_naive(),
    };

    if let Err(e) = store.insert_invoice(&new).await {
        let details = serde_json::json!({
            "customer_id": new.customer_id,
            "amount": new.amount,
            "status": new.status.as_str(),
        });
        log::error!("Failed to create invoice {details}: {e}");
        return Ok(ActionOutcome::State(FormState::message(CREATE_FAILED)));
    }

    cache.revalidate_path(INVOICES_PATH)?;
    Ok(ActionOutcome::Redirect(INVOICES_PATH.to_string()))
}

pub async fn update_invoice<S, C>(
    store: &S,
    cache: &C,
    id: &str,
    form: &HashMap<String, String>,
) -> Result<ActionOutcome, AppError>
where
    S: InvoiceStore,
    C: Revalidate,
{
    let valid = match validate_invoice(form) {
        Ok(v) => v,
        Err(errors) => {
            log::debug!("invoice {id} update rejected: {}", serde_json::json!(errors));
            return Ok(ActionOutcome::State(FormState {
                errors,
                message: Some(UPDATE_INVALID.to_string()),
            }));
        }
    };

    let changes = InvoiceChanges {
        amount: valid.amount_in_cents,
        customer_id: valid.customer_id,
        status: valid.status,
    };

    if let Err(e) = store.update_invoice(id, &changes).await {
        let details = serde_json::json!({
            "id": id,
            "customer_id": changes.customer_id,
            "amount": changes.amount,
            "status": changes.status.as_str(),
        });
        log::error!("Failed to update invoice {details}: {e}");
        return Ok(ActionOutcome::State(FormState::message(UPDATE_FAILED)));
    }

    cache.revalidate_path(INVOICES_PATH)?;
    Ok(ActionOutcome::Redirect(INVOICES_PATH.to_string()))
}

/// Delete by id. Always answers with a message, never a redirect. A
/// revalidation fault after the row is gone is logged and reported with the
/// delete failure message.
pub async fn delete_invoice<S, C>(store: &S, cache: &C, id: &str) -> String
where
    S: InvoiceStore,
    C: Revalidate,
{
    if let Err(e) = store.delete_invoice(id).await {
        log::error!("Failed to delete invoice {id}: {e}");
        return DELETE_FAILED.to_string();
    }

    if let Err(e) = cache.revalidate_path(INVOICES_PATH) {
        log::error!("Deleted invoice {id} but could not revalidate {INVOICES_PATH}: {e}");
        return DELETE_FAILED.to_string();
    }
    DELETED.to_string()
}
