use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::auth::{Credentials, LoginResponse, RegisterResponse, UserList},
    error::{AppResult, ErrorBody},
    routes::params::JsonBody,
    services::auth_service::{list_users, login_user, register_user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users).post(register))
        .route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = Credentials,
    responses(
        (status = 201, description = "Register user", body = RegisterResponse),
        (status = 400, description = "Missing username or password", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn register(
    JsonBody(payload): JsonBody<Credentials>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let resp = register_user(payload)?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/users/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login user", body = LoginResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn login(JsonBody(payload): JsonBody<Credentials>) -> AppResult<Json<LoginResponse>> {
    let resp = login_user(payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Known users", body = UserList)
    ),
    tag = "Users"
)]
pub async fn users() -> Json<UserList> {
    Json(list_users())
}
