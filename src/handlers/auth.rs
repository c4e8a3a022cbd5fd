//! Authentication HTTP Handlers
//!
//! 로그인, 토큰 갱신, 로그아웃, 현재 사용자 조회 엔드포인트를 처리하는
//! 핸들러 함수들입니다. 발급된 토큰은 JSON 본문과 함께
//! `HttpOnly` + `Secure` 쿠키(`accessToken`, `refreshToken`)로도 전달됩니다.
//!
//! # Endpoints
//!
//! - **로그인**: `POST /auth/login` (public)
//! - **토큰 갱신**: `POST /auth/refresh` (public, 리프레시 토큰 필요)
//! - **로그아웃**: `POST /session/logout` (인증 필요)
//! - **현재 사용자**: `GET /session/me` (인증 필요)

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::users::request::{LoginRequest, RefreshTokenRequest};
use crate::domain::dto::users::response::{LoginResponse, RefreshResponse, UserResponse};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::token::token::TokenPair;
use crate::services::auth::session_service::SessionService;
use crate::services::users::user_service::UserService;
use crate::utils::cookies::{auth_cookie, removal_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// 로그인 핸들러
///
/// 사용자명 또는 이메일과 비밀번호로 자격 증명을 검증한 뒤
/// 새 세션을 발급합니다. 토큰 쌍은 쿠키와 JSON 본문 양쪽으로 반환됩니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let session_service = SessionService::instance();

    // 자격 증명 검증
    let user = user_service
        .verify_credentials(
            payload.username.as_deref(),
            payload.email.as_deref(),
            &payload.password,
        )
        .await?;

    let user_id = user.id_string().unwrap_or_default();

    log::info!("로그인 성공 - 사용자: {}, ID: {}", user.username, user_id);

    // 세션 발급 (세션 레코드 생성 + 토큰 쌍 생성)
    let pair = session_service.issue(&user_id).await?;

    let response = ApiResponse::ok(
        LoginResponse {
            user: UserResponse::from(user),
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
        },
        "로그인에 성공했습니다",
    );

    Ok(with_token_cookies(HttpResponse::Ok(), &pair).json(response))
}

/// 토큰 갱신 핸들러
///
/// 쿠키 또는 요청 본문의 리프레시 토큰을 검증하고,
/// 저장된 세션 레코드와 대조한 뒤 새 토큰 쌍으로 순환시킵니다.
/// 검증 실패, 해시 불일치, 세션 없음은 모두 401로 거부됩니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let session_service = SessionService::instance();

    // 리프레시 토큰을 쿠키 또는 요청 본문에서 추출
    let incoming = extract_refresh_token(&req, body.as_deref())?;

    // 검증 및 토큰 순환
    let (user, pair) = session_service.renew(&incoming).await?;

    log::info!("토큰 갱신 성공 - 사용자: {}", user.username);

    let response = ApiResponse::ok(
        RefreshResponse {
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
        },
        "액세스 토큰이 갱신되었습니다",
    );

    Ok(with_token_cookies(HttpResponse::Ok(), &pair).json(response))
}

/// 로그아웃 핸들러
///
/// 액세스 토큰의 세션을 무효화하고 양쪽 인증 쿠키를 제거합니다.
/// 무효화된 세션의 리프레시 토큰으로는 더 이상 갱신할 수 없습니다.
///
/// # Endpoint
/// `POST /session/logout` (인증 필요)
#[post("/logout")]
pub async fn logout(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let session_service = SessionService::instance();

    session_service.revoke(&user.session_id).await?;

    log::info!("로그아웃 완료 - 사용자: {}", user.user_id);

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(ACCESS_TOKEN_COOKIE))
        .cookie(removal_cookie(REFRESH_TOKEN_COOKIE))
        .json(ApiResponse::ok(
            serde_json::json!({}),
            "로그아웃되었습니다",
        )))
}

/// 현재 인증된 사용자 정보 조회 핸들러
///
/// 액세스 토큰을 검증하고 데이터베이스에서 최신 사용자 정보를 조회하여 반환합니다.
///
/// # Endpoint
/// `GET /session/me` (인증 필요)
#[get("/me")]
pub async fn get_current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let user_service = UserService::instance();

    let response = user_service.get_user_by_id(&user.user_id).await
        .map_err(|_| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        response,
        "현재 사용자 정보를 조회했습니다",
    )))
}

/// 응답 빌더에 액세스/리프레시 토큰 쿠키를 부착
fn with_token_cookies(
    mut builder: actix_web::HttpResponseBuilder,
    pair: &TokenPair,
) -> actix_web::HttpResponseBuilder {
    let access_max_age = JwtConfig::access_expiration_hours() * 3600;
    let refresh_max_age = JwtConfig::refresh_expiration_days() * 24 * 3600;

    builder
        .cookie(auth_cookie(ACCESS_TOKEN_COOKIE, &pair.access_token, access_max_age))
        .cookie(auth_cookie(REFRESH_TOKEN_COOKIE, &pair.refresh_token, refresh_max_age));
    builder
}

/// HTTP 요청에서 리프레시 토큰 추출
///
/// 1. `refreshToken` 쿠키
/// 2. 요청 본문의 `refresh_token` 필드
///
/// 어느 쪽에도 없으면 401을 반환합니다.
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshTokenRequest>,
) -> Result<String, AppError> {
    // 1. 쿠키에서 리프레시 토큰 찾기
    if let Some(cookie) = req.cookie(REFRESH_TOKEN_COOKIE) {
        let token = cookie.value().trim().to_string();
        if !token.is_empty() {
            return Ok(token);
        }
    }

    // 2. 요청 본문에서 리프레시 토큰 찾기
    if let Some(body) = body {
        let token = body.refresh_token.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }

    // 3. 토큰을 찾을 수 없음
    Err(AppError::AuthenticationError(
        "리프레시 토큰이 제공되지 않았습니다".to_string()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_refresh_token_from_cookie() {
        let req = TestRequest::default()
            .cookie(actix_web::cookie::Cookie::new(REFRESH_TOKEN_COOKIE, "cookie-token"))
            .to_http_request();

        let token = extract_refresh_token(&req, None).unwrap();
        assert_eq!(token, "cookie-token");
    }

    #[test]
    fn test_extract_refresh_token_from_body() {
        let req = TestRequest::default().to_http_request();
        let body = RefreshTokenRequest {
            refresh_token: "body-token".to_string(),
        };

        let token = extract_refresh_token(&req, Some(&body)).unwrap();
        assert_eq!(token, "body-token");
    }

    #[test]
    fn test_cookie_takes_precedence_over_body() {
        let req = TestRequest::default()
            .cookie(actix_web::cookie::Cookie::new(REFRESH_TOKEN_COOKIE, "cookie-token"))
            .to_http_request();
        let body = RefreshTokenRequest {
            refresh_token: "body-token".to_string(),
        };

        let token = extract_refresh_token(&req, Some(&body)).unwrap();
        assert_eq!(token, "cookie-token");
    }

    #[test]
    fn test_missing_refresh_token_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let result = extract_refresh_token(&req, None);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
