use std::collections::HashMap;

use crate::auth::provider::{AuthErrorKind, CREDENTIALS, IdentityProvider, SignInError};
use crate::errors::AppError;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

/// Attempt a credentials sign-in.
///
/// Returns `Ok(None)` when the provider signed the user in and `Ok(Some(msg))`
/// for an authentication failure. Faults that are not authentication failures
/// are returned unchanged as `Err`.
pub async fn authenticate<P: IdentityProvider>(
    provider: &P,
    payload: &HashMap<String, String>,
) -> Result<Option<String>, AppError> {
    match provider.sign_in(CREDENTIALS, payload).await {
        Ok(()) => Ok(None),
        Err(SignInError::Auth(e)) => {
            log::warn!("Sign-in failed: {e}");
            let message = match e.kind {
                AuthErrorKind::CredentialsSignin => INVALID_CREDENTIALS,
                _ => SOMETHING_WENT_WRONG,
            };
            Ok(Some(message.to_string()))
        }
        Err(SignInError::Other(e)) => Err(e),
    }
}
