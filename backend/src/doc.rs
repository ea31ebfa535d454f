//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST handler and the payload schemas. The
//! document is served by Swagger UI in debug builds and exported by
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Special, User};
use crate::inbound::http::schemas::{ErrorBody, HealthReport, MessageBody};
use crate::inbound::http::specials::{CreateSpecialRequest, UpdateSpecialRequest};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Specials backend API",
        description = "CRUD endpoints for users and specials, plus health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::api_health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::specials::list_specials,
        crate::inbound::http::specials::list_active_specials,
        crate::inbound::http::specials::get_special,
        crate::inbound::http::specials::create_special,
        crate::inbound::http::specials::update_special,
        crate::inbound::http::specials::delete_special,
    ),
    components(schemas(
        User,
        Special,
        CreateUserRequest,
        UpdateUserRequest,
        CreateSpecialRequest,
        UpdateSpecialRequest,
        ErrorBody,
        MessageBody,
        HealthReport
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "specials", description = "Operations related to specials"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
