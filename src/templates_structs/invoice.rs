use askama::Template;

use crate::actions::{schema, FormState};
use crate::models::customer::CustomerOption;
use crate::models::invoice::InvoiceListItem;

use super::PageContext;

#[derive(Template)]
#[template(path = "invoices/list.html")]
pub struct InvoiceListTemplate {
    pub ctx: PageContext,
    /// Pre-rendered, session-independent table markup.
    pub table: String,
}

/// The listing table on its own, so it can be cached across sessions.
#[derive(Template)]
#[template(path = "invoices/table.html")]
pub struct InvoiceTableTemplate {
    pub invoices: Vec<InvoiceListItem>,
}

/// Values echoed back into the invoice form.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFormValues {
    pub customer_id: String,
    pub amount: String,
    pub status: String,
}

#[derive(Template)]
#[template(path = "invoices/form.html")]
pub struct InvoiceFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub submit_label: String,
    pub customers: Vec<CustomerOption>,
    pub values: InvoiceFormValues,
    pub customer_errors: Vec<String>,
    pub amount_errors: Vec<String>,
    pub status_errors: Vec<String>,
    pub message: Option<String>,
}

impl InvoiceFormTemplate {
    pub fn new(
        ctx: PageContext,
        form_action: String,
        form_title: &str,
        submit_label: &str,
        customers: Vec<CustomerOption>,
        values: InvoiceFormValues,
    ) -> Self {
        Self {
            ctx,
            form_action,
            form_title: form_title.to_string(),
            submit_label: submit_label.to_string(),
            customers,
            values,
            customer_errors: vec![],
            amount_errors: vec![],
            status_errors: vec![],
            message: None,
        }
    }

    pub fn with_state(mut self, state: FormState) -> Self {
        self.customer_errors = state.errors.get(schema::CUSTOMER_ID).to_vec();
        self.amount_errors = state.errors.get(schema::AMOUNT).to_vec();
        self.status_errors = state.errors.get(schema::STATUS).to_vec();
        self.message = state.message;
        self
    }
}
