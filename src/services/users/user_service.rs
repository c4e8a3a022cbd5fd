//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 핵심 비즈니스 로직을 구현합니다.
//! 회원가입(이미지 업로드 포함), 자격 증명 검증, 사용자 조회를 담당합니다.
//!
//! ## 보안 설계 원칙
//!
//! ### 비밀번호 보안
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **환경별 Cost**: 개발(4) vs 운영(12) 환경별 보안 강도
//! - **솔트 자동 생성**: 레인보우 테이블 공격 방지
//!
//! ### 데이터 보안
//!
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외
//! - **중복 방지**: 이메일, 사용자명 유니크 제약
//! - **데이터 최소화**: 이미지는 미디어 호스트에 두고 URL만 저장

use std::sync::Arc;
use bcrypt::hash;
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    core::errors::AppError,
    domain::{
        dto::users::request::RegisterUserRequest,
        dto::users::response::UserResponse,
        entities::users::user::User,
    },
    repositories::users::user_repo::UserRepository,
    services::media::media_service::MediaService,
    utils::string_utils::{clean_optional_string, validate_required_string},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// UserRepository가 자동으로 주입됩니다.
///
/// ## 에러 처리 전략
///
/// - **ValidationError**: 공백 필드, 아바타 누락 (400)
/// - **ConflictError**: 이메일/사용자명 중복 (409)
/// - **NotFound**: 로그인 시 사용자 없음 또는 비밀번호 불일치 (404)
/// - **ExternalServiceError**: 아바타 업로드 실패 (500)
/// - **InternalError**: 해싱 실패 등 시스템 오류 (500)
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 계정 등록
    ///
    /// # 처리 과정
    ///
    /// 1. **공백 검증**: 모든 필수 필드를 trim 후 비어있으면 400
    /// 2. **아바타 확인**: 아바타 페이로드 누락 시 400
    /// 3. **이미지 업로드**: 아바타(필수), 커버(선택)를 미디어 호스트로 전송
    /// 4. **비밀번호 해싱**: bcrypt, 환경별 cost
    /// 5. **영구 저장**: 중복 검사 후 사용자 문서 생성 (사용자명 소문자화)
    /// 6. **응답 생성**: 민감 정보가 제거된 DTO 반환
    ///
    /// 커버 이미지 업로드 실패는 치명적이지 않으며 커버 없이 진행됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자 (비밀번호/토큰 필드 없음)
    /// * `Err(AppError::ValidationError)` - 공백 필드 또는 아바타 누락
    /// * `Err(AppError::ConflictError)` - 이메일 또는 사용자명 중복
    /// * `Err(AppError::ExternalServiceError)` - 아바타 업로드 실패
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 공백 전용 입력 거부 (validator의 길이 검증은 공백도 문자로 센다)
        let username = validate_required_string(&request.username, "사용자명")?;
        let email = validate_required_string(&request.email, "이메일")?;
        let full_name = validate_required_string(&request.full_name, "이름")?;
        let password = validate_required_string(&request.password, "비밀번호")?;

        let avatar_payload = clean_optional_string(request.avatar)
            .ok_or_else(|| AppError::ValidationError("아바타는 필수입니다".to_string()))?;

        let media_service = MediaService::instance();

        // 아바타 업로드 실패는 가입 실패
        let avatar = media_service.upload_image(&avatar_payload).await?;

        // 커버 업로드 실패는 커버 없이 진행
        let cover_image_url = match clean_optional_string(request.cover_image) {
            Some(payload) => match media_service.upload_image(&payload).await {
                Ok(media) => Some(media.url),
                Err(e) => {
                    log::warn!("커버 이미지 업로드 실패, 커버 없이 진행: {}", e);
                    None
                }
            },
            None => None,
        };

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        // 비밀번호 해싱
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        // 사용자 엔티티 생성 (사용자명은 내부에서 소문자로 정규화)
        let user = User::new(
            username,
            email,
            full_name,
            password_hash,
            avatar.url,
            cover_image_url,
        );

        // 저장 (중복 시 ConflictError)
        let created_user = self.user_repo.create(user).await?;

        log::info!(
            "사용자 등록 완료 - username: {}, took: {:?}",
            created_user.username,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created_user))
    }

    /// 로그인 자격 증명 검증
    ///
    /// 사용자명 또는 이메일로 사용자를 찾아 비밀번호를 검증합니다.
    /// 성공 시 인증된 사용자 엔티티를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `username` - 사용자명 (이메일과 둘 중 하나는 필수)
    /// * `email` - 이메일
    /// * `password` - 평문 비밀번호
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 사용자 엔티티
    /// * `Err(AppError::ValidationError)` - 사용자명/이메일 모두 누락
    /// * `Err(AppError::NotFound)` - 사용자 없음 또는 비밀번호 불일치
    pub async fn verify_credentials(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        password: &str,
    ) -> Result<User, AppError> {
        if username.map_or(true, |u| u.trim().is_empty())
            && email.map_or(true, |e| e.trim().is_empty())
        {
            return Err(AppError::ValidationError("사용자명 또는 이메일이 필요합니다".to_string()));
        }

        let user = self.user_repo
            .find_by_username_or_email(username, email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자가 존재하지 않습니다".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = user.is_password_correct(password)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::NotFound("비밀번호가 올바르지 않습니다".to_string()));
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 DTO (민감 정보 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
