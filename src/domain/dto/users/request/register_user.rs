//! 회원가입 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 이미지 필드는 base64로 인코딩된 페이로드를 받아 미디어 호스트로
//! 전달되며, 데이터베이스에는 호스팅된 URL만 저장됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 공백 전용 필드 거부는 서비스 계층의 trim 기반 검증이 담당합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// 사용자명 (3-30자, 영문/숫자/언더스코어만 허용, 소문자로 저장됨)
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 전체 이름 (1-50자, 유니코드 지원)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub full_name: String,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    pub password: String,

    /// 아바타 이미지 (base64 인코딩, 필수 - 누락 시 400 응답)
    pub avatar: Option<String>,

    /// 커버 이미지 (base64 인코딩, 선택사항)
    pub cover_image: Option<String>,
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterUserRequest {
        RegisterUserRequest {
            username: "stream_fan".to_string(),
            email: "fan@example.com".to_string(),
            full_name: "Stream Fan".to_string(),
            password: "password123".to_string(),
            avatar: Some("aGVsbG8=".to_string()),
            cover_image: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut request = valid_request();
        request.password = "short".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_username_with_special_characters_rejected() {
        let mut request = valid_request();
        request.username = "stream-fan!".to_string();
        assert!(request.validate().is_err());
    }
}
