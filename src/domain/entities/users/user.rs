//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 기반 로컬 인증과 미디어 호스트에 업로드된
//! 프로필 이미지 참조를 포함하는 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 생성 이후 식별 필드는 불변이며, 프로필 이미지 변경 등은
/// 별도의 업데이트 경로를 통해서만 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 소문자로 정규화되어 저장)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 전체 이름
    pub full_name: String,
    /// 해시된 비밀번호 (bcrypt)
    pub password_hash: String,
    /// 아바타 이미지 URL (미디어 호스트)
    pub avatar_url: String,
    /// 커버 이미지 URL (선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 사용자명은 저장 전에 소문자로 정규화됩니다.
    /// 비밀번호는 이미 해시된 상태로 전달받습니다.
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        password_hash: String,
        avatar_url: String,
        cover_image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: username.to_lowercase(),
            email,
            full_name,
            password_hash,
            avatar_url,
            cover_image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 검증
    ///
    /// bcrypt 검증 실패(손상된 해시 등)는 불일치와 구분하기 위해
    /// 에러로 전파됩니다.
    pub fn is_password_correct(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "StreamFan_01".to_string(),
            "fan@example.com".to_string(),
            "Stream Fan".to_string(),
            bcrypt::hash("secret-password", 4).unwrap(),
            "https://media.example.com/u/avatar.png".to_string(),
            None,
        )
    }

    #[test]
    fn test_username_is_lowercased() {
        let user = sample_user();
        assert_eq!(user.username, "streamfan_01");
    }

    #[test]
    fn test_new_user_has_no_id_until_persisted() {
        let user = sample_user();
        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_password_verification() {
        let user = sample_user();
        assert!(user.is_password_correct("secret-password").unwrap());
        assert!(!user.is_password_correct("wrong-password").unwrap());
    }

    #[test]
    fn test_serialized_form_uses_mongo_id_field() {
        let mut user = sample_user();
        user.id = Some(ObjectId::new());

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("id").is_none());
    }
}
