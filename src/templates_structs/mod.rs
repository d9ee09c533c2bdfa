// Template context structures for askama templates.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_user_name, take_flash};

mod common;
mod invoice;

pub use common::*;
pub use invoice::*;

/// Context shared by every signed-in page.
pub struct PageContext {
    pub user_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            user_name: get_user_name(session),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}
