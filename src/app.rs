use actix_web::{HttpResponse, middleware::from_fn, web};

use crate::actions::INVOICES_PATH;
use crate::auth::middleware::require_auth;
use crate::handlers::{auth_handlers, invoice_handlers};

/// Register every route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", INVOICES_PATH))
                .finish()
        }))
        // Protected routes
        .service(
            web::scope("")
                .wrap(from_fn(require_auth))
                .route("/logout", web::post().to(auth_handlers::logout))
                // /create BEFORE /{id} to avoid routing conflict
                .route("/dashboard/invoices", web::get().to(invoice_handlers::list))
                .route("/dashboard/invoices/create", web::get().to(invoice_handlers::new_form))
                .route("/dashboard/invoices", web::post().to(invoice_handlers::create))
                .route("/dashboard/invoices/{id}/edit", web::get().to(invoice_handlers::edit_form))
                .route("/dashboard/invoices/{id}", web::post().to(invoice_handlers::update))
                .route("/dashboard/invoices/{id}/delete", web::post().to(invoice_handlers::delete)),
        );
}
