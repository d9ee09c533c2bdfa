use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};

use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::actions::{self, INVOICES_PATH};
use crate::auth::provider::CredentialsProvider;
use crate::auth::{csrf, rate_limit::RateLimiter, session::get_user_id};
use crate::errors::{AppError, render};
use crate::templates_structs::LoginTemplate;

const TOO_MANY_ATTEMPTS: &str = "Too many failed login attempts. Please try again later.";

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_form(session: &Session, error: Option<String>, email: &str) -> Result<HttpResponse, AppError> {
    render(LoginTemplate {
        error,
        email: email.to_string(),
        csrf_token: csrf::get_or_create_token(session),
    })
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    if get_user_id(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", INVOICES_PATH))
            .finish());
    }
    login_form(&session, None, "")
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<HashMap<String, String>>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, form.get("csrf_token").map(String::as_str))?;

    let email = form.get("email").map(String::as_str).unwrap_or_default();

    // Rate-limit check before any database access
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    if limiter.is_blocked(ip) {
        return login_form(&session, Some(TOO_MANY_ATTEMPTS.to_string()), email);
    }

    let provider = CredentialsProvider::new(&pool, &session);
    match actions::authenticate(&provider, &form).await? {
        None => {
            limiter.clear(ip);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", INVOICES_PATH))
                .finish())
        }
        Some(message) => {
            limiter.record_failure(ip);
            login_form(&session, Some(message), email)
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, Some(&form.csrf_token))?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
