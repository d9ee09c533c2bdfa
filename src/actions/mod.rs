//! Form actions behind the invoice dashboard.
//!
//! Each action is a short sequence: validate, write once, revalidate the
//! listing, and tell the caller where to go next. Navigation is returned as a
//! value rather than raised, so handlers decide how to turn it into a response.

pub mod authenticate;
pub mod invoice;
pub mod schema;

pub use authenticate::authenticate;
pub use invoice::{create_invoice, delete_invoice, update_invoice, InvoiceStore};
pub use schema::{validate_invoice, FieldErrors, ValidInvoice};

/// Listing view that mutations revalidate and redirect to.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Form state handed back when an action does not navigate away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub errors: FieldErrors,
    pub message: Option<String>,
}

impl FormState {
    pub fn message(message: &str) -> Self {
        Self {
            errors: FieldErrors::default(),
            message: Some(message.to_string()),
        }
    }
}

/// What the caller should do after an action completes.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Navigate to this path.
    Redirect(String),
    /// Stay on the form and show these errors.
    State(FormState),
}
