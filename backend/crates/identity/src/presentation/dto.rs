use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub user_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantCreditsRequest {
    pub credits: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub image_url: String,
    pub role: &'static str,
    pub credits: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            user_name: user.user_name,
            email: user.email.into_inner(),
            image_url: user.image_url,
            role: user.role.code(),
            credits: user.credits.amount(),
            created_at: user.created_at.timestamp_millis(),
            updated_at: user.updated_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::email::Email;

    #[test]
    fn user_response_serializes_camel_case() {
        let user = User::new(
            "Mina".to_string(),
            Email::new("mina@example.com".to_string()).unwrap(),
            String::new(),
        );
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("userName").is_some());
        assert!(json.get("imageUrl").is_some());
        assert_eq!(json["email"], "mina@example.com");
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn update_request_fields_default_to_none() {
        let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.user_name.is_none());
        assert!(req.image_url.is_none());
        assert!(req.role.is_none());
    }
}
