mod create;
mod delete;
mod list;
mod update;

pub use create::{create, new_form};
pub use delete::delete;
pub use list::list;
pub use update::{edit_form, update};

use std::collections::HashMap;

use actix_web::HttpResponse;

use crate::templates_structs::InvoiceFormValues;

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

fn csrf_field(form: &HashMap<String, String>) -> Option<&str> {
    form.get("csrf_token").map(String::as_str)
}

/// Echo what the user typed so a failed submit does not clear the form.
fn submitted_values(form: &HashMap<String, String>) -> InvoiceFormValues {
    let field = |name: &str| form.get(name).cloned().unwrap_or_default();
    InvoiceFormValues {
        customer_id: field("customerId"),
        amount: field("amount"),
        status: field("status"),
    }
}
