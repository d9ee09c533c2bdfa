use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::actions::{self, ActionOutcome};
use crate::auth::csrf;
use crate::cache::PageCache;
use crate::errors::{AppError, render};
use crate::models::customer;
use crate::templates_structs::{InvoiceFormTemplate, InvoiceFormValues, PageContext};
use super::{csrf_field, see_other, submitted_values};

const ACTION: &str = "/dashboard/invoices";
const TITLE: &str = "Create Invoice";

pub async fn new_form(
    pool: web::Data<PgPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let customers = customer::find_all(&pool).await?;
    let tmpl = InvoiceFormTemplate::new(
        PageContext::build(&session),
        ACTION.to_string(),
        TITLE,
        TITLE,
        customers,
        InvoiceFormValues::default(),
    );
    render(tmpl)
}

pub async fn create(
    pool: web::Data<PgPool>,
    session: Session,
    cache: web::Data<PageCache>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, csrf_field(&form))?;

    match actions::create_invoice(pool.get_ref(), cache.get_ref(), &form).await? {
        ActionOutcome::Redirect(location) => Ok(see_other(&location)),
        ActionOutcome::State(state) => {
            let customers = customer::find_all(&pool).await?;
            let tmpl = InvoiceFormTemplate::new(
                PageContext::build(&session),
                ACTION.to_string(),
                TITLE,
                TITLE,
                customers,
                submitted_values(&form),
            )
            .with_state(state);
            render(tmpl)
        }
    }
}
