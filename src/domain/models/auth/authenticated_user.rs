//! 인증된 사용자 모델
//!
//! 인증 미들웨어가 액세스 토큰에서 추출하여 request extension에
//! 저장하는 사용자 정보입니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 사용자 정보
///
/// 로그아웃 시 `session_id`로 해당 세션 레코드를 무효화합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId hex)
    pub user_id: String,

    /// 현재 요청이 속한 세션 ID (ObjectId hex)
    pub session_id: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 선행되지 않은 라우트에서 추출을 시도하면
/// 401 Unauthorized로 거부됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extraction_fails_without_middleware() {
        let req = TestRequest::default().to_http_request();
        let mut payload = actix_web::dev::Payload::None;

        let result = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_extraction_returns_inserted_user() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            session_id: "507f1f77bcf86cd799439012".to_string(),
        });

        let mut payload = actix_web::dev::Payload::None;
        let user = AuthenticatedUser::from_request(&req, &mut payload)
            .await
            .unwrap();

        assert_eq!(user.user_id, "507f1f77bcf86cd799439011");
        assert_eq!(user.session_id, "507f1f77bcf86cd799439012");
    }
}
