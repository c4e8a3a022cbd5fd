//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::services::users::user_service::UserService;

/// 회원가입 핸들러
///
/// 새로운 사용자 계정을 생성합니다. 아바타 이미지(필수)와 커버 이미지(선택)를
/// 미디어 호스트에 업로드한 뒤, 이메일과 사용자명의 고유성을 검증하고
/// 사용자 문서를 생성합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/users/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "stream_fan",
///   "email": "fan@example.com",
///   "full_name": "Stream Fan",
///   "password": "secure_password123",
///   "avatar": "<base64 image>",
///   "cover_image": "<base64 image, optional>"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "status": 201,
///   "data": {
///     "id": "507f1f77bcf86cd799439011",
///     "username": "stream_fan",
///     "email": "fan@example.com",
///     "full_name": "Stream Fan",
///     "avatar_url": "https://media.example.com/u/abc.png",
///     "cover_image_url": null,
///     "created_at": "2024-01-01T00:00:00Z",
///     "updated_at": "2024-01-01T00:00:00Z"
///   },
///   "message": "사용자가 성공적으로 등록되었습니다"
/// }
/// ```
///
/// 응답에는 비밀번호 해시와 토큰 관련 필드가 포함되지 않습니다.
///
/// ## 실패 사례
///
/// - 공백 필드 또는 아바타 누락 (400 Bad Request)
/// - 이메일/사용자명 중복 (409 Conflict)
/// - 아바타 업로드 실패 (500 Internal Server Error)
///
/// # 비즈니스 규칙
///
/// - 이메일은 시스템 전체에서 고유해야 함
/// - 사용자명은 시스템 전체에서 고유해야 하며 소문자로 저장됨
/// - 비밀번호는 bcrypt로 해시되어 저장됨
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/register \
///   -H "Content-Type: application/json" \
///   -d '{
///     "username": "newuser",
///     "email": "newuser@example.com",
///     "full_name": "New User",
///     "password": "SecurePass123",
///     "avatar": "aGVsbG8="
///   }'
/// ```
#[post("/register")]
pub async fn register_user(
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let user = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        user,
        "사용자가 성공적으로 등록되었습니다",
    )))
}
