use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::actions::{self, ActionOutcome};
use crate::auth::csrf;
use crate::cache::PageCache;
use crate::errors::{AppError, render};
use crate::models::{customer, invoice};
use crate::templates_structs::{InvoiceFormTemplate, InvoiceFormValues, PageContext};
use super::{csrf_field, see_other, submitted_values};

const TITLE: &str = "Edit Invoice";
const SUBMIT: &str = "Edit Invoice";

pub async fn edit_form(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let Some(found) = invoice::find_for_edit(&pool, &id).await? else {
        return Err(AppError::NotFound);
    };

    let customers = customer::find_all(&pool).await?;
    let values = InvoiceFormValues {
        amount: found.amount_input(),
        customer_id: found.customer_id,
        status: found.status,
    };
    let tmpl = InvoiceFormTemplate::new(
        PageContext::build(&session),
        format!("/dashboard/invoices/{id}"),
        TITLE,
        SUBMIT,
        customers,
        values,
    );
    render(tmpl)
}

pub async fn update(
    pool: web::Data<PgPool>,
    session: Session,
    cache: web::Data<PageCache>,
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, csrf_field(&form))?;
    let id = path.into_inner();

    match actions::update_invoice(pool.get_ref(), cache.get_ref(), &id, &form).await? {
        ActionOutcome::Redirect(location) => Ok(see_other(&location)),
        ActionOutcome::State(state) => {
            let customers = customer::find_all(&pool).await?;
            let tmpl = InvoiceFormTemplate::new(
                PageContext::build(&session),
                format!("/dashboard/invoices/{id}"),
                TITLE,
                SUBMIT,
                customers,
                submitted_values(&form),
            )
            .with_state(state);
            render(tmpl)
        }
    }
}
