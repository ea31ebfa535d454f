//! Route table for the versioned REST API.

use actix_web::{Scope, web};

use crate::inbound::http::{health, specials, users};

/// Build the `/api/v1` scope with every REST handler registered.
///
/// Handler state must be supplied by the enclosing `App` as
/// `web::Data<HttpState>`. `/specials/active` is registered ahead of
/// `/specials/{id}` so it is never captured as an identifier.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use specials_backend::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(health::api_health)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(specials::list_specials)
        .service(specials::list_active_specials)
        .service(specials::get_special)
        .service(specials::create_special)
        .service(specials::update_special)
        .service(specials::delete_special)
}
