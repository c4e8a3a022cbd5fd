//! # 인증 쿠키 헬퍼
//!
//! 액세스/리프레시 토큰을 담는 쿠키의 생성과 제거를 담당합니다.
//! 모든 인증 쿠키는 `HttpOnly` + `Secure` 플래그를 사용하여
//! 스크립트 접근과 평문 전송을 차단합니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};

/// 액세스 토큰 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// 리프레시 토큰 쿠키 이름
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// 인증 토큰을 담는 쿠키 생성
///
/// # 인자
///
/// * `name` - 쿠키 이름 ([`ACCESS_TOKEN_COOKIE`] 또는 [`REFRESH_TOKEN_COOKIE`])
/// * `value` - 토큰 문자열
/// * `max_age_seconds` - 쿠키 수명 (초)
pub fn auth_cookie(name: &'static str, value: &str, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(name, value.to_string())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// 인증 쿠키를 제거하는 만료된 쿠키 생성
///
/// 로그아웃 시 브라우저가 쿠키를 즉시 폐기하도록
/// 빈 값과 0 수명으로 덮어씁니다.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "")
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_flags() {
        let cookie = auth_cookie(ACCESS_TOKEN_COOKIE, "token-value", 3600);

        assert_eq!(cookie.name(), "accessToken");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn test_removal_cookie_is_expired() {
        let cookie = removal_cookie(REFRESH_TOKEN_COOKIE);

        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
