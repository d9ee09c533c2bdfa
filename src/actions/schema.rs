use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::invoice::InvoiceStatus;

pub const CUSTOMER_ID: &str = "customerId";
pub const AMOUNT: &str = "amount";
pub const STATUS: &str = "status";

const CUSTOMER_MSG: &str = "Please select a customer.";
const AMOUNT_MSG: &str = "Please enter an amount greater than $0.";
const STATUS_MSG: &str = "Please select an invoice status.";

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: &str) {
        self.0.entry(field).or_default().push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for one field; empty when the field passed.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Invoice fields after validation. Used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInvoice {
    pub customer_id: String,
    /// Whole cents, at least 1.
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
}

/// Validate a submitted invoice form. Every field is checked so the caller
/// gets all failures at once.
pub fn validate_invoice(form: &HashMap<String, String>) -> Result<ValidInvoice, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = match form.get(CUSTOMER_ID).map(|s| s.trim()) {
        Some(id) if !id.is_empty() => Some(id.to_string()),
        _ => {
            errors.add(CUSTOMER_ID, CUSTOMER_MSG);
            None
        }
    };

    let amount = match form.get(AMOUNT).and_then(|s| parse_amount_cents(s)) {
        Some(a) => Some(a),
        None => {
            errors.add(AMOUNT, AMOUNT_MSG);
            None
        }
    };

    let status = match form.get(STATUS).and_then(|s| InvoiceStatus::parse(s)) {
        Some(s) => Some(s),
        None => {
            errors.add(STATUS, STATUS_MSG);
            None
        }
    };

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount_in_cents), Some(status)) => Ok(ValidInvoice {
            customer_id,
            amount_in_cents,
            status,
        }),
        _ => Err(errors),
    }
}

/// Coerce the raw dollar amount to whole cents. Rounding absorbs binary
/// floating-point error (`19.99` is `1999`); the result must be at least one
/// cent and fit in an `i64`.
fn parse_amount_cents(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let cents = (value * 100.0).round();
    (cents >= 1.0 && cents < i64::MAX as f64).then_some(cents as i64)
}
