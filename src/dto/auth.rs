use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// Body of both `POST /users` and `POST /users/login`. Missing fields
/// deserialize as empty strings so the services can answer with their own
/// messages.
#[derive(Deserialize, Debug, ToSchema)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: u64,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub users: Vec<User>,
}
