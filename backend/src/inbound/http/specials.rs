//! Specials API handlers.
//!
//! ```text
//! GET    /api/v1/specials
//! GET    /api/v1/specials/active
//! GET    /api/v1/specials/{id}
//! POST   /api/v1/specials        {"title":"Taco Tuesday","price":"9.99"}
//! PUT    /api/v1/specials/{id}   {"isActive":false}
//! DELETE /api/v1/specials/{id}
//! ```
//!
//! Prices are accepted as JSON numbers or numeric strings and always returned
//! as numbers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, NewSpecial, Special, SpecialChanges, SpecialId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::service_failure;
use crate::inbound::http::schemas::{ErrorBody, MessageBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    JsonBody, PriceInput, non_empty, parse_path_id, present, price_field,
};

const SPECIAL_NOT_FOUND: &str = "Special not found";

/// Request body for `POST /api/v1/specials`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpecialRequest {
    #[serde(default)]
    #[schema(example = "Taco Tuesday")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Number or numeric string.
    #[serde(default, deserialize_with = "price_field")]
    #[schema(value_type = Option<String>, example = "9.99")]
    pub price: Option<PriceInput>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TryFrom<CreateSpecialRequest> for NewSpecial {
    type Error = Error;

    fn try_from(value: CreateSpecialRequest) -> Result<Self, Self::Error> {
        let (Some(title), Some(price)) = (non_empty(value.title), value.price) else {
            return Err(Error::invalid_request("Title and price are required"));
        };
        Ok(NewSpecial {
            title,
            description: value.description,
            price: price.parse()?,
            is_active: value.is_active,
        })
    }
}

/// Request body for `PUT /api/v1/specials/{id}`.
///
/// Omitted fields stay unchanged; `"description": null` clears the
/// description.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpecialRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "price_field")]
    #[schema(value_type = Option<String>)]
    pub price: Option<PriceInput>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TryFrom<UpdateSpecialRequest> for SpecialChanges {
    type Error = Error;

    fn try_from(value: UpdateSpecialRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: value.title,
            description: value.description,
            price: value.price.map(PriceInput::parse).transpose()?,
            is_active: value.is_active,
        })
    }
}

/// List every special, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/specials",
    responses(
        (status = 200, description = "Specials ordered by creation time, newest first", body = [Special]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["specials"],
    operation_id = "listSpecials"
)]
#[get("/specials")]
pub async fn list_specials(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Special>>> {
    let specials = state
        .specials
        .list_specials()
        .await
        .map_err(service_failure("Failed to fetch specials"))?;
    Ok(web::Json(specials))
}

/// List active specials, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/specials/active",
    responses(
        (status = 200, description = "Active specials", body = [Special]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["specials"],
    operation_id = "listActiveSpecials"
)]
#[get("/specials/active")]
pub async fn list_active_specials(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Special>>> {
    let specials = state
        .specials
        .list_active_specials()
        .await
        .map_err(service_failure("Failed to fetch active specials"))?;
    Ok(web::Json(specials))
}

/// Fetch one special.
#[utoipa::path(
    get,
    path = "/api/v1/specials/{id}",
    params(("id" = String, Path, description = "Special identifier")),
    responses(
        (status = 200, description = "Special", body = Special),
        (status = 404, description = "Special not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["specials"],
    operation_id = "getSpecial"
)]
#[get("/specials/{id}")]
pub async fn get_special(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Special>> {
    let id: SpecialId = parse_path_id(&path, SPECIAL_NOT_FOUND)?;
    state
        .specials
        .find_special(&id)
        .await
        .map_err(service_failure("Failed to fetch special"))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(SPECIAL_NOT_FOUND))
}

/// Create a special.
#[utoipa::path(
    post,
    path = "/api/v1/specials",
    request_body = CreateSpecialRequest,
    responses(
        (status = 201, description = "Special created", body = Special),
        (status = 400, description = "Title or price missing, price not numeric, or body malformed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["specials"],
    operation_id = "createSpecial"
)]
#[post("/specials")]
pub async fn create_special(
    state: web::Data<HttpState>,
    payload: JsonBody<CreateSpecialRequest>,
) -> ApiResult<HttpResponse> {
    let new_special = NewSpecial::try_from(payload.into_inner())?;
    let special = state
        .specials_command
        .create_special(new_special)
        .await
        .map_err(service_failure("Failed to create special"))?;
    Ok(HttpResponse::Created().json(special))
}

/// Apply a partial update to a special.
#[utoipa::path(
    put,
    path = "/api/v1/specials/{id}",
    params(("id" = String, Path, description = "Special identifier")),
    request_body = UpdateSpecialRequest,
    responses(
        (status = 200, description = "Updated special", body = Special),
        (status = 400, description = "Price not numeric or body malformed", body = ErrorBody),
        (status = 404, description = "Special not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["specials"],
    operation_id = "updateSpecial"
)]
#[put("/specials/{id}")]
pub async fn update_special(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonBody<UpdateSpecialRequest>,
) -> ApiResult<web::Json<Special>> {
    let id: SpecialId = parse_path_id(&path, SPECIAL_NOT_FOUND)?;
    let changes = SpecialChanges::try_from(payload.into_inner())?;
    state
        .specials_command
        .update_special(&id, changes)
        .await
        .map_err(service_failure("Failed to update special"))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(SPECIAL_NOT_FOUND))
}

/// Delete a special.
#[utoipa::path(
    delete,
    path = "/api/v1/specials/{id}",
    params(("id" = String, Path, description = "Special identifier")),
    responses(
        (status = 200, description = "Special deleted", body = MessageBody),
        (status = 404, description = "Special not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["specials"],
    operation_id = "deleteSpecial"
)]
#[delete("/specials/{id}")]
pub async fn delete_special(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageBody>> {
    let id: SpecialId = parse_path_id(&path, SPECIAL_NOT_FOUND)?;
    state
        .specials_command
        .delete_special(&id)
        .await
        .map_err(service_failure("Failed to delete special"))?
        .map(|_| web::Json(MessageBody::new("Special deleted successfully")))
        .ok_or_else(|| Error::not_found(SPECIAL_NOT_FOUND))
}
