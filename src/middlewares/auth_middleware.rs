//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고
//! 사용자/세션 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 이 미들웨어가 적용된 스코프의 모든 요청은 유효한 Bearer 액세스 토큰을
/// 제시해야 하며, 실패 시 401 Unauthorized로 거부됩니다.
/// 검증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)가
/// request extension에 저장되어 핸들러에서 추출할 수 있습니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, web, App, HttpResponse};
    use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
    use crate::services::auth::token_service::TokenService;

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({
            "user_id": user.user_id,
            "session_id": user.session_id,
        }))
    }

    #[actix_web::test]
    async fn test_request_without_token_is_rejected() {
        let app = test::init_service(App::new().service(
            web::scope("/api").wrap(AuthMiddleware::required()).service(whoami),
        ))
        .await;

        let req = test::TestRequest::get().uri("/api/whoami").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_request_with_garbage_token_is_rejected() {
        let app = test::init_service(App::new().service(
            web::scope("/api").wrap(AuthMiddleware::required()).service(whoami),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_request_with_valid_token_passes() {
        let token_service = TokenService::instance();
        let token = token_service
            .generate_access_token("507f1f77bcf86cd799439011", "507f1f77bcf86cd799439012")
            .unwrap();

        let app = test::init_service(App::new().service(
            web::scope("/api").wrap(AuthMiddleware::required()).service(whoami),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["user_id"], "507f1f77bcf86cd799439011");
        assert_eq!(body["session_id"], "507f1f77bcf86cd799439012");
    }
}
