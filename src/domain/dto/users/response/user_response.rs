//! 사용자 응답 DTO
//!
//! 엔티티를 클라이언트에게 안전하게 노출하기 위한 변환 계층입니다.
//! 비밀번호 해시와 세션/토큰 관련 정보는 이 타입에 존재하지 않으므로
//! 어떤 직렬화 경로로도 유출될 수 없습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            full_name,
            avatar_url,
            cover_image_url,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            full_name,
            avatar_url,
            cover_image_url,
            created_at,
            updated_at,
        }
    }
}

/// 로그인 응답 DTO (사용자 정보 + JWT 토큰)
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// 토큰 갱신 응답 DTO
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_excludes_password_hash() {
        let mut user = User::new(
            "stream_fan".to_string(),
            "fan@example.com".to_string(),
            "Stream Fan".to_string(),
            "$2b$04$abcdefghijklmnopqrstuv".to_string(),
            "https://media.example.com/u/avatar.png".to_string(),
            None,
        );
        user.id = Some(ObjectId::new());

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password_hash").is_none());
        assert!(json.get("refresh_token").is_none());
        assert_eq!(json["username"], "stream_fan");
        assert_eq!(json["email"], "fan@example.com");
    }

    #[test]
    fn test_user_response_exposes_hex_id() {
        let oid = ObjectId::new();
        let mut user = User::new(
            "stream_fan".to_string(),
            "fan@example.com".to_string(),
            "Stream Fan".to_string(),
            "hash".to_string(),
            "https://media.example.com/u/avatar.png".to_string(),
            Some("https://media.example.com/u/cover.png".to_string()),
        );
        user.id = Some(oid);

        let response = UserResponse::from(user);
        assert_eq!(response.id, oid.to_hex());
        assert_eq!(
            response.cover_image_url.as_deref(),
            Some("https://media.example.com/u/cover.png")
        );
    }
}
