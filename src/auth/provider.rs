//! Identity provider seam for sign-in.
//!
//! A provider either signs the caller in (and takes care of the session) or
//! fails with a [`SignInError`]. Authentication failures carry an
//! [`AuthErrorKind`] discriminator; anything else is an ordinary application
//! fault.

use std::collections::HashMap;
use std::fmt;

use actix_session::Session;
use sqlx::PgPool;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::user;

pub const CREDENTIALS: &str = "credentials";

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    CredentialsSignin,
    AccessDenied,
    Configuration,
    CallbackRouteError,
}

impl AuthErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorKind::CredentialsSignin => "CredentialsSignin",
            AuthErrorKind::AccessDenied => "AccessDenied",
            AuthErrorKind::Configuration => "Configuration",
            AuthErrorKind::CallbackRouteError => "CallbackRouteError",
        }
    }
}

#[derive(Debug)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub detail: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.detail)
    }
}

#[derive(Debug)]
pub enum SignInError {
    Auth(AuthError),
    Other(AppError),
}

impl From<AuthError> for SignInError {
    fn from(e: AuthError) -> Self {
        SignInError::Auth(e)
    }
}

impl From<AppError> for SignInError {
    fn from(e: AppError) -> Self {
        SignInError::Other(e)
    }
}

impl From<sqlx::Error> for SignInError {
    fn from(e: sqlx::Error) -> Self {
        SignInError::Other(AppError::Db(e))
    }
}

#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn sign_in(&self, strategy: &str, payload: &HashMap<String, String>) -> Result<(), SignInError>;
}

/// Email + password sign-in against the `users` table. On success the user is
/// written into the session.
pub struct CredentialsProvider<'a> {
    pool: &'a PgPool,
    session: &'a Session,
}

impl<'a> CredentialsProvider<'a> {
    pub fn new(pool: &'a PgPool, session: &'a Session) -> Self {
        Self { pool, session }
    }
}

/// Email and password pulled out of a credentials payload.
#[derive(Debug, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub fn parse_credentials(payload: &HashMap<String, String>) -> Option<Credentials> {
    let email = payload.get("email")?.trim();
    let password = payload.get("password")?;
    if !email.contains('@') || password.chars().count() < MIN_PASSWORD_LEN {
        return None;
    }
    Some(Credentials {
        email: email.to_string(),
        password: password.clone(),
    })
}

impl IdentityProvider for CredentialsProvider<'_> {
    async fn sign_in(&self, strategy: &str, payload: &HashMap<String, String>) -> Result<(), SignInError> {
        if strategy != CREDENTIALS {
            return Err(AuthError::new(
                AuthErrorKind::Configuration,
                format!("unsupported sign-in strategy '{strategy}'"),
            )
            .into());
        }

        let creds = parse_credentials(payload).ok_or_else(|| {
            AuthError::new(AuthErrorKind::CredentialsSignin, "malformed credentials")
        })?;

        let Some(found) = user::find_by_email(self.pool, &creds.email).await? else {
            return Err(AuthError::new(AuthErrorKind::CredentialsSignin, "unknown email").into());
        };

        match password::verify_password(&creds.password, &found.password) {
            Ok(true) => {}
            Ok(false) => {
                return Err(AuthError::new(AuthErrorKind::CredentialsSignin, "password mismatch").into());
            }
            Err(e) => {
                return Err(AuthError::new(
                    AuthErrorKind::Configuration,
                    format!("stored hash for {} is unreadable: {e}", found.email),
                )
                .into());
            }
        }

        self.session.renew();
        self.session
            .insert("user_id", &found.id)
            .and_then(|_| self.session.insert("user_name", &found.name))
            .map_err(|e| AppError::Session(e.to_string()))?;

        log::info!("User {} signed in", found.email);
        Ok(())
    }
}
