use actix_session::Session;
use actix_web::{web, HttpResponse};
use askama::Template;
use sqlx::PgPool;

use crate::actions::INVOICES_PATH;
use crate::cache::PageCache;
use crate::errors::{AppError, render};
use crate::models::invoice;
use crate::templates_structs::{InvoiceListTemplate, InvoiceTableTemplate, PageContext};

pub async fn list(
    pool: web::Data<PgPool>,
    session: Session,
    cache: web::Data<PageCache>,
) -> Result<HttpResponse, AppError> {
    let table = match cache.get(INVOICES_PATH) {
        Some(html) => html,
        None => {
            let generation = cache.generation();
            let invoices = invoice::find_all(&pool).await?;
            let html = InvoiceTableTemplate { invoices }.render()?;
            cache.put_if_generation(INVOICES_PATH, generation, html.clone());
            html
        }
    };

    render(InvoiceListTemplate {
        ctx: PageContext::build(&session),
        table,
    })
}
