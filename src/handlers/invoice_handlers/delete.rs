use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::actions::{self, INVOICES_PATH};
use crate::auth::{csrf, session::set_flash};
use crate::cache::PageCache;
use crate::errors::AppError;
use super::{csrf_field, see_other};

/// Delete reports back through the flash message on the listing page.
pub async fn delete(
    pool: web::Data<PgPool>,
    session: Session,
    cache: web::Data<PageCache>,
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, csrf_field(&form))?;
    let id = path.into_inner();

    let msg = actions::delete_invoice(pool.get_ref(), cache.get_ref(), &id).await;
    set_flash(&session, &msg);
    Ok(see_other(INVOICES_PATH))
}
