//! 인증 요청관련 DTO
//!
//! 로그인과 토큰 갱신을 요청하는 사용자들의 요청 정보를 매핑합니다.

use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
///
/// 사용자명과 이메일 중 최소 하나는 제공되어야 하며,
/// 이 규칙은 서비스 계층에서 검증됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자명 (이메일 대신 사용 가능)
    pub username: Option<String>,

    /// 이메일 (사용자명 대신 사용 가능)
    pub email: Option<String>,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체
///
/// 쿠키가 없는 클라이언트는 요청 본문으로 리프레시 토큰을 전달할 수 있습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_allows_username_only() {
        let request: LoginRequest = serde_json::from_str(
            r#"{"username": "stream_fan", "password": "pw"}"#,
        )
        .unwrap();

        assert_eq!(request.username.as_deref(), Some("stream_fan"));
        assert!(request.email.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_rejects_empty_password() {
        let request: LoginRequest = serde_json::from_str(
            r#"{"email": "fan@example.com", "password": ""}"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }
}
