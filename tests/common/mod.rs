//! Shared test doubles for the action-layer tests.
//!
//! - `FakeStore` records every write and can be told to fail.
//! - `FakeCache` records revalidated paths and can be told to fail.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use invoice_dash::actions::InvoiceStore;
use invoice_dash::cache::Revalidate;
use invoice_dash::errors::AppError;
use invoice_dash::models::invoice::{InvoiceChanges, NewInvoice};

// ============================================================================
// STORE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    Insert(NewInvoice),
    Update(String, InvoiceChanges),
    Delete(String),
}

#[derive(Default)]
pub struct FakeStore {
    pub writes: Mutex<Vec<Write>>,
    pub fail: bool,
}

impl FakeStore {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.lock().unwrap().clone()
    }

    fn record(&self, write: Write) -> Result<(), sqlx::Error> {
        self.writes.lock().unwrap().push(write);
        if self.fail {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

impl InvoiceStore for FakeStore {
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), sqlx::Error> {
        self.record(Write::Insert(new.clone()))
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), sqlx::Error> {
        self.record(Write::Update(id.to_string(), changes.clone()))
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), sqlx::Error> {
        self.record(Write::Delete(id.to_string()))
    }
}

// ============================================================================
// CACHE
// ============================================================================

#[derive(Default)]
pub struct FakeCache {
    pub paths: Mutex<Vec<String>>,
    pub fail: bool,
}

impl FakeCache {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Revalidate for FakeCache {
    fn revalidate_path(&self, path: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Cache(format!("cannot revalidate {path}")));
        }
        self.paths.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

// ============================================================================
// FORMS
// ============================================================================

pub fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn valid_form() -> HashMap<String, String> {
    form(&[("customerId", "c1"), ("amount", "12.50"), ("status", "pending")])
}
