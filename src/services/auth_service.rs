use crate::{
    dto::auth::{Credentials, LoginResponse, RegisterResponse, UserList},
    error::{AppError, AppResult},
    middleware::auth::DEMO_USER_ID,
    models::User,
};

/// Fixed token handed to every successful login.
pub const DEMO_TOKEN: &str = "demo-jwt-token-12345";

/// Nothing is stored; the demo only checks that both fields are present.
pub fn register_user(payload: Credentials) -> AppResult<RegisterResponse> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password are required".into(),
        ));
    }

    tracing::info!(username = %payload.username, "user registered");
    Ok(RegisterResponse {
        message: "User created successfully".into(),
        user_id: DEMO_USER_ID,
    })
}

pub fn login_user(payload: Credentials) -> AppResult<LoginResponse> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AppError::Unauthorized(
            "Invalid username or password".into(),
        ));
    }

    tracing::info!(username = %payload.username, "user logged in");
    Ok(LoginResponse {
        token: DEMO_TOKEN.into(),
        user_id: DEMO_USER_ID,
        message: "Login successful".into(),
    })
}

pub fn list_users() -> UserList {
    UserList {
        users: vec![User {
            id: DEMO_USER_ID,
            username: "demo-user".into(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn login_accepts_any_non_empty_pair() {
        let resp = login_user(credentials("alice", "secret")).unwrap();
        assert_eq!(resp.token, DEMO_TOKEN);
        assert_eq!(resp.user_id, DEMO_USER_ID);
    }

    #[test]
    fn login_rejects_blank_password() {
        let err = login_user(credentials("alice", "")).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn register_requires_both_fields() {
        assert!(register_user(credentials("bob", "pw")).is_ok());
        let err = register_user(credentials("", "pw")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
