//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! POST   /api/v1/users        {"email":"ada@example.com","name":"Ada"}
//! PUT    /api/v1/users/{id}   {"name":null}
//! DELETE /api/v1/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::service_failure;
use crate::inbound::http::schemas::{ErrorBody, MessageBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonBody, non_empty, parse_path_id, present};

const USER_NOT_FOUND: &str = "User not found";

/// Request body for `POST /api/v1/users`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let email =
            non_empty(value.email).ok_or_else(|| Error::invalid_request("Email is required"))?;
        Ok(NewUser::new(email, value.name))
    }
}

/// Request body for `PUT /api/v1/users/{id}`.
///
/// Omitted fields stay unchanged; `"name": null` clears the name.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            email: value.email,
            name: value.name,
        }
    }
}

/// List every user, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users ordered by creation time, newest first", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(service_failure("Failed to fetch users"))?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_path_id(&path, USER_NOT_FOUND)?;
    state
        .users
        .find_user(&id)
        .await
        .map_err(service_failure("Failed to fetch user"))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Email missing or body malformed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonBody<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner())?;
    let user = state
        .users_command
        .create_user(new_user)
        .await
        .map_err(service_failure("Failed to create user"))?;
    Ok(HttpResponse::Created().json(user))
}

/// Apply a partial update to a user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonBody<UpdateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_path_id(&path, USER_NOT_FOUND)?;
    state
        .users_command
        .update_user(&id, payload.into_inner().into())
        .await
        .map_err(service_failure("Failed to update user"))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageBody>> {
    let id: UserId = parse_path_id(&path, USER_NOT_FOUND)?;
    state
        .users_command
        .delete_user(&id)
        .await
        .map_err(service_failure("Failed to delete user"))?
        .map(|_| web::Json(MessageBody::new("User deleted successfully")))
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{MockPorts, sample_user};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn send(ports: MockPorts, req: actix_test::TestRequest) -> (StatusCode, Value) {
        let app = actix_test::init_service(ports.into_app()).await;
        let res = actix_test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body = actix_test::read_body(res).await;
        let value = serde_json::from_slice(&body).expect("json body");
        (status, value)
    }

    #[actix_web::test]
    async fn list_users_returns_camel_case_records() {
        let mut ports = MockPorts::default();
        ports
            .users
            .expect_list_users()
            .times(1)
            .return_once(|| Ok(vec![sample_user()]));

        let (status, body) = send(ports, actix_test::TestRequest::get().uri("/api/v1/users")).await;

        assert_eq!(status, StatusCode::OK);
        let first = &body[0];
        assert_eq!(first["id"], "11111111-1111-1111-1111-111111111111");
        assert_eq!(first["email"], "test@example.com");
        assert_eq!(first["name"], "Test User");
        assert!(first.get("createdAt").is_some());
        assert!(first.get("updatedAt").is_some());
    }

    #[actix_web::test]
    async fn list_users_hides_store_failures() {
        let mut ports = MockPorts::default();
        ports
            .users
            .expect_list_users()
            .return_once(|| Err(Error::internal("user store failure: connection refused")));

        let (status, body) = send(ports, actix_test::TestRequest::get().uri("/api/v1/users")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch users" }));
    }

    #[actix_web::test]
    async fn get_user_returns_record() {
        let user = sample_user();
        let id = user.id;
        let mut ports = MockPorts::default();
        ports
            .users
            .expect_find_user()
            .with(eq(id))
            .return_once(move |_| Ok(Some(user)));

        let (status, body) = send(
            ports,
            actix_test::TestRequest::get().uri(&format!("/api/v1/users/{id}")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "test@example.com");
    }

    #[actix_web::test]
    async fn get_user_reports_missing_user() {
        let mut ports = MockPorts::default();
        ports.users.expect_find_user().return_once(|_| Ok(None));

        let (status, body) = send(
            ports,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/3fa85f64-5717-4562-b3fc-2c963f66afa6"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found" }));
    }

    #[actix_web::test]
    async fn get_user_with_malformed_id_skips_service() {
        let (status, body) = send(
            MockPorts::default(),
            actix_test::TestRequest::get().uri("/api/v1/users/non-existent-id"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found" }));
    }

    #[actix_web::test]
    async fn create_user_returns_created_record() {
        let mut ports = MockPorts::default();
        ports
            .users_command
            .expect_create_user()
            .with(eq(NewUser::new(
                "test@example.com",
                Some("Test User".to_owned()),
            )))
            .times(1)
            .return_once(|_| Ok(sample_user()));

        let (status, body) = send(
            ports,
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "email": "test@example.com", "name": "Test User" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "test@example.com");
    }

    #[rstest]
    #[case(json!({ "name": "Test User" }))]
    #[case(json!({ "email": "", "name": "Test User" }))]
    #[case(json!({ "email": null }))]
    #[actix_web::test]
    async fn create_user_requires_email(#[case] payload: Value) {
        let (status, body) = send(
            MockPorts::default(),
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(payload),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Email is required" }));
    }

    #[actix_web::test]
    async fn create_user_rejects_malformed_json() {
        let (status, body) = send(
            MockPorts::default(),
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{\"email\":"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid request body" }));
    }

    #[rstest]
    #[case::no_content_type(None)]
    #[case::json_content_type(Some("application/json"))]
    #[actix_web::test]
    async fn bodiless_create_reports_missing_email(#[case] content_type: Option<&str>) {
        let mut req = actix_test::TestRequest::post().uri("/api/v1/users");
        if let Some(content_type) = content_type {
            req = req.insert_header(("Content-Type", content_type));
        }

        let (status, body) = send(MockPorts::default(), req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Email is required" }));
    }

    #[actix_web::test]
    async fn bodiless_update_is_an_empty_change_set() {
        let user = sample_user();
        let id = user.id;
        let mut ports = MockPorts::default();
        ports
            .users_command
            .expect_update_user()
            .with(eq(id), eq(UserChanges::default()))
            .times(1)
            .return_once(move |_, _| Ok(Some(user)));

        let (status, body) = send(
            ports,
            actix_test::TestRequest::put().uri(&format!("/api/v1/users/{id}")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "test@example.com");
    }

    #[actix_web::test]
    async fn create_user_hides_constraint_violations() {
        let mut ports = MockPorts::default();
        ports
            .users_command
            .expect_create_user()
            .return_once(|_| Err(Error::internal("user store failure: unique constraint violated")));

        let (status, body) = send(
            ports,
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "email": "dup@example.com" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to create user" }));
    }

    #[rstest]
    #[case::email_only(
        json!({ "email": "newemail@example.com" }),
        UserChanges { email: Some("newemail@example.com".to_owned()), name: None }
    )]
    #[case::clear_name(json!({ "name": null }), UserChanges { email: None, name: Some(None) })]
    #[case::empty_body(json!({}), UserChanges::default())]
    #[actix_web::test]
    async fn update_user_forwards_only_supplied_fields(
        #[case] payload: Value,
        #[case] expected: UserChanges,
    ) {
        let user = sample_user();
        let id = user.id;
        let mut ports = MockPorts::default();
        ports
            .users_command
            .expect_update_user()
            .with(eq(id), eq(expected))
            .times(1)
            .return_once(move |_, _| Ok(Some(user)));

        let (status, _) = send(
            ports,
            actix_test::TestRequest::put()
                .uri(&format!("/api/v1/users/{id}"))
                .set_json(payload),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn update_user_reports_missing_user() {
        let mut ports = MockPorts::default();
        ports
            .users_command
            .expect_update_user()
            .return_once(|_, _| Ok(None));

        let (status, body) = send(
            ports,
            actix_test::TestRequest::put()
                .uri("/api/v1/users/3fa85f64-5717-4562-b3fc-2c963f66afa6")
                .set_json(json!({ "name": "Test" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found" }));
    }

    #[actix_web::test]
    async fn delete_user_confirms_removal() {
        let user = sample_user();
        let id = user.id;
        let mut ports = MockPorts::default();
        ports
            .users_command
            .expect_delete_user()
            .with(eq(id))
            .return_once(move |_| Ok(Some(user)));

        let (status, body) = send(
            ports,
            actix_test::TestRequest::delete().uri(&format!("/api/v1/users/{id}")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "User deleted successfully" }));
    }

    #[actix_web::test]
    async fn delete_user_hides_store_failures() {
        let mut ports = MockPorts::default();
        ports
            .users_command
            .expect_delete_user()
            .return_once(|_| Err(Error::internal("user store failure: timeout")));

        let (status, body) = send(
            ports,
            actix_test::TestRequest::delete()
                .uri("/api/v1/users/3fa85f64-5717-4562-b3fc-2c963f66afa6"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to delete user" }));
    }
}
