pub mod auth_handlers;
pub mod invoice_handlers;
