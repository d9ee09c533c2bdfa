use actix_session::Session;

pub const USER_ID: &str = "user_id";
pub const USER_NAME: &str = "user_name";
const FLASH: &str = "flash";

pub fn get_user_id(session: &Session) -> Option<String> {
    session.get::<String>(USER_ID).unwrap_or(None)
}

/// Display name of the signed-in user, empty when absent.
pub fn get_user_name(session: &Session) -> String {
    session.get::<String>(USER_NAME).unwrap_or(None).unwrap_or_default()
}

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH, message) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH);
    }
    flash
}
