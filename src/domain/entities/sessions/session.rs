//! Session Entity Implementation
//!
//! 로그인 세션 레코드를 표현하는 엔티티입니다.
//! 세션 하나가 리프레시 토큰 하나를 보관하므로 사용자는 기기마다
//! 독립된 세션을 가질 수 있고, 세션 단위로 무효화할 수 있습니다.
//!
//! 리프레시 토큰은 평문으로 저장하지 않고 SHA-256 해시만 보관합니다.
//! 갱신 요청 시 제시된 토큰의 해시를 저장된 해시와 비교합니다.

use chrono::{Duration, Utc};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// 로그인 세션 엔티티
///
/// 세션 ID(`_id`)는 액세스/리프레시 토큰의 `sid` 클레임으로 내장되어
/// 토큰과 세션 레코드를 연결합니다. 토큰 순환 시 `refresh_token_hash`만
/// 대상 지정 업데이트로 교체됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 세션 소유 사용자 ID
    pub user_id: ObjectId,
    /// 현재 유효한 리프레시 토큰의 SHA-256 해시 (hex)
    pub refresh_token_hash: String,
    /// 세션 생성 시간
    pub created_at: DateTime,
    /// 세션 만료 시간 (MongoDB TTL 인덱스로 자동 정리)
    pub expires_at: DateTime,
}

impl Session {
    /// 새 세션 생성
    ///
    /// 세션 ID는 토큰의 `sid` 클레임에 먼저 내장되어야 하므로
    /// 호출자가 할당하여 전달합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 미리 할당된 세션 ID (토큰 서명에 사용된 값)
    /// * `user_id` - 세션 소유 사용자
    /// * `refresh_token` - 발급된 리프레시 토큰 (평문, 해시 후 폐기)
    /// * `ttl_days` - 세션 수명 (일)
    pub fn new(id: ObjectId, user_id: ObjectId, refresh_token: &str, ttl_days: i64) -> Self {
        let now = Utc::now();
        let expires = now + Duration::days(ttl_days);

        Self {
            id,
            user_id,
            refresh_token_hash: Self::hash_token(refresh_token),
            created_at: DateTime::from_millis(now.timestamp_millis()),
            expires_at: DateTime::from_millis(expires.timestamp_millis()),
        }
    }

    /// 리프레시 토큰의 SHA-256 해시를 hex 문자열로 반환
    ///
    /// 저장소에는 이 해시만 기록됩니다.
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    /// 제시된 리프레시 토큰이 저장된 해시와 일치하는지 확인
    pub fn matches_token(&self, token: &str) -> bool {
        self.refresh_token_hash == Self::hash_token(token)
    }

    /// 세션 레코드가 만료되었는지 확인
    pub fn is_expired(&self) -> bool {
        self.expires_at.timestamp_millis() <= Utc::now().timestamp_millis()
    }

    /// 세션 ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_deterministic_hex() {
        let h1 = Session::hash_token("refresh.jwt.value");
        let h2 = Session::hash_token("refresh.jwt.value");

        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
        assert!(h1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_token_differs_per_token() {
        assert_ne!(
            Session::hash_token("token-a"),
            Session::hash_token("token-b")
        );
    }

    #[test]
    fn test_matches_token() {
        let session = Session::new(ObjectId::new(), ObjectId::new(), "issued-token", 10);

        assert!(session.matches_token("issued-token"));
        assert!(!session.matches_token("rotated-away-token"));
    }

    #[test]
    fn test_new_session_is_not_expired() {
        let session = Session::new(ObjectId::new(), ObjectId::new(), "issued-token", 10);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_plaintext_token_is_not_stored() {
        let session = Session::new(ObjectId::new(), ObjectId::new(), "issued-token", 10);
        assert_ne!(session.refresh_token_hash, "issued-token");

        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("issued-token"));
    }
}
