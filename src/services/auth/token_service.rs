//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성과 검증을 담당하며,
//! 두 토큰은 서로 다른 시크릿으로 서명되어 교차 사용이 불가능합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::token::token::{TokenClaims, TokenPair};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 모든 토큰은 사용자 ID(`sub`)와 세션 ID(`sid`)를 클레임으로 포함합니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user_id` - 토큰 주체가 될 사용자 ID (ObjectId hex)
    /// * `session_id` - 토큰이 속한 세션 ID (ObjectId hex)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패
    pub fn generate_access_token(&self, user_id: &str, session_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::access_expiration_hours());

        let claims = TokenClaims {
            sub: user_id.to_string(),
            sid: session_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::access_secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("액세스 토큰 생성 실패: {}", e)))
    }

    /// JWT 리프레시 토큰 생성
    ///
    /// 액세스 토큰과 동일한 클레임 구조를 사용하지만
    /// 리프레시 전용 시크릿으로 서명되고 만료 기간이 깁니다.
    ///
    /// # Security
    ///
    /// 리프레시 토큰은 Secure HttpOnly Cookie에 저장하는 것을 권장합니다.
    /// 서버 측에는 SHA-256 해시만 세션 레코드에 보관됩니다.
    pub fn generate_refresh_token(&self, user_id: &str, session_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(JwtConfig::refresh_expiration_days());

        let claims = TokenClaims {
            sub: user_id.to_string(),
            sid: session_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::refresh_secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let pair = token_service.generate_token_pair(&user_id, &session_id)?;
    /// ```
    pub fn generate_token_pair(&self, user_id: &str, session_id: &str) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(user_id, session_id)?;
        let refresh_token = self.generate_refresh_token(user_id, session_id)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// 액세스 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        Self::verify_with_secret(token, &JwtConfig::access_secret())
    }

    /// 리프레시 토큰 검증 및 클레임 추출
    ///
    /// 세션 갱신 경로에서 사용됩니다. 서명 검증에 성공해도
    /// 세션 레코드의 해시 비교를 통과해야 갱신이 허용됩니다.
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        Self::verify_with_secret(token, &JwtConfig::refresh_secret())
    }

    /// 주어진 시크릿으로 토큰을 검증합니다
    fn verify_with_secret(token: &str, secret: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_ID: &str = "507f1f77bcf86cd799439011";
    const SESSION_ID: &str = "507f1f77bcf86cd799439012";

    #[test]
    fn test_access_token_roundtrip() {
        let service = TokenService::instance();
        let token = service.generate_access_token(USER_ID, SESSION_ID).unwrap();

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, USER_ID);
        assert_eq!(claims.sid, SESSION_ID);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_roundtrip() {
        let service = TokenService::instance();
        let token = service.generate_refresh_token(USER_ID, SESSION_ID).unwrap();

        let claims = service.verify_refresh_token(&token).unwrap();
        assert_eq!(claims.sub, USER_ID);
        assert_eq!(claims.sid, SESSION_ID);
    }

    #[test]
    fn test_access_token_rejected_by_refresh_verifier() {
        // 기본 시크릿은 용도별로 다르므로 교차 검증은 실패해야 한다
        let service = TokenService::instance();
        let access = service.generate_access_token(USER_ID, SESSION_ID).unwrap();

        assert!(service.verify_refresh_token(&access).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = TokenService::instance();
        let mut token = service.generate_access_token(USER_ID, SESSION_ID).unwrap();
        token.push('x');

        assert!(service.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_token_pair_contains_distinct_tokens() {
        let service = TokenService::instance();
        let pair = service.generate_token_pair(USER_ID, SESSION_ID).unwrap();

        assert_ne!(pair.access_token, pair.refresh_token);
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
