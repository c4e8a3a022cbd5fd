//! # 세션 발급 서비스 구현
//!
//! 인증이 완료된 사용자에게 액세스/리프레시 토큰 쌍을 발급하고,
//! 세션 레코드를 통해 리프레시 토큰을 서버 측에 보관하며,
//! 갱신 시 토큰을 안전하게 순환시키는 핵심 워크플로를 담당합니다.
//!
//! ## 세션 생명주기
//!
//! ```text
//! 로그인 ──► issue()  ──► 세션 레코드 생성 + 토큰 쌍 발급
//!                            │
//! 갱신   ──► renew()  ──► 해시 비교 → 새 쌍 발급 → 저장된 해시 교체
//!                            │
//! 로그아웃 ► revoke() ──► 세션 레코드 삭제 (이후 갱신 불가)
//! ```
//!
//! 세션은 기기마다 독립적으로 생성되므로 한 기기의 로그아웃이
//! 다른 기기의 세션에 영향을 주지 않습니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::entities::sessions::session::Session;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::token::TokenPair;
use crate::repositories::sessions::session_repo::SessionRepository;
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::token_service::TokenService;

/// 세션 발급 및 갱신 서비스
///
/// 토큰 발급 경로에서 발생하는 모든 실패(사용자 없음, 저장 실패 등)는
/// 내부 오류(500)로 변환됩니다. 갱신 경로의 실패는 모두 인증 오류(401)로
/// 변환되며, 어떤 실패 시에도 저장된 토큰 해시는 순환되지 않습니다.
#[service(name = "session")]
pub struct SessionService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,

    /// 세션 데이터 액세스 리포지토리
    session_repo: Arc<SessionRepository>,
}

impl SessionService {
    /// 사용자에게 새 세션과 토큰 쌍 발급
    ///
    /// 사용자 레코드를 조회하고, 세션 ID를 할당한 뒤 해당 ID를
    /// `sid` 클레임으로 내장한 토큰 쌍을 생성합니다. 리프레시 토큰의
    /// 해시를 담은 세션 레코드를 저장한 후 토큰 쌍을 반환합니다.
    ///
    /// # 인자
    ///
    /// * `user_id` - 인증이 완료된 사용자의 ID (ObjectId hex)
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenPair)` - 발급된 액세스/리프레시 토큰
    /// * `Err(AppError::InternalError)` - 사용자 조회 실패, 토큰 생성 실패,
    ///   세션 저장 실패 등 발급 경로의 모든 오류
    pub async fn issue(&self, user_id: &str) -> Result<TokenPair, AppError> {
        let user = self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| AppError::InternalError(format!("토큰 발급 중 오류가 발생했습니다: {}", e)))?
            .ok_or_else(|| AppError::InternalError("토큰 발급 대상 사용자를 찾을 수 없습니다".to_string()))?;

        self.issue_for(&user).await
    }

    /// 이미 로드된 사용자 엔티티에 대해 세션 발급
    ///
    /// 로그인 핸들러처럼 사용자 레코드를 이미 보유한 경로에서
    /// 중복 조회 없이 사용합니다.
    pub async fn issue_for(&self, user: &User) -> Result<TokenPair, AppError> {
        let user_oid = user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        // 세션 ID를 먼저 할당해야 토큰의 sid 클레임에 내장할 수 있다
        let session_id = ObjectId::new();

        let token_service = TokenService::instance();
        let pair = token_service.generate_token_pair(&user_oid.to_hex(), &session_id.to_hex())?;

        let session = Session::new(
            session_id,
            user_oid,
            &pair.refresh_token,
            JwtConfig::refresh_expiration_days(),
        );

        self.session_repo
            .create(session)
            .await
            .map_err(|e| AppError::InternalError(format!("세션 저장 중 오류가 발생했습니다: {}", e)))?;

        log::info!("세션 발급 완료 - user: {}, session: {}", user_oid.to_hex(), session_id.to_hex());

        Ok(pair)
    }

    /// 리프레시 토큰으로 세션 갱신 (토큰 순환)
    ///
    /// # 검증 순서
    ///
    /// 1. 리프레시 시크릿으로 서명/만료 검증
    /// 2. `sid` 클레임으로 세션 레코드 조회
    /// 3. 세션 레코드 자체의 만료 확인
    /// 4. 제시된 토큰의 해시와 저장된 해시 비교
    /// 5. `sub` 클레임으로 사용자 조회
    ///
    /// 모든 단계가 통과하면 같은 세션에 대해 새 토큰 쌍을 생성하고
    /// 저장된 해시를 교체합니다. 어느 단계에서든 실패하면 401을 반환하고
    /// 저장된 해시는 변경되지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok((User, TokenPair))` - 세션 소유 사용자와 새 토큰 쌍
    /// * `Err(AppError::AuthenticationError)` - 검증 실패, 해시 불일치,
    ///   세션/사용자 없음
    pub async fn renew(&self, incoming_token: &str) -> Result<(User, TokenPair), AppError> {
        let token_service = TokenService::instance();

        // 1. 서명/만료 검증
        let claims = token_service.verify_refresh_token(incoming_token)
            .map_err(|_| AppError::AuthenticationError("리프레시 토큰이 만료되었거나 유효하지 않습니다".to_string()))?;

        // 2. 세션 레코드 조회
        let session = self.session_repo
            .find_by_id(&claims.sid)
            .await
            .map_err(Self::reject_lookup_error)?
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 리프레시 토큰입니다".to_string()))?;

        // 3. 세션 레코드 만료 확인 (TTL 인덱스 정리 전의 경계 구간 대비)
        if session.is_expired() {
            let _ = self.session_repo.delete(&claims.sid).await;
            return Err(AppError::AuthenticationError("세션이 만료되었습니다".to_string()));
        }

        // 4. 저장된 해시와 비교 - 순환된 이전 토큰의 재사용 거부
        if !session.matches_token(incoming_token) {
            log::warn!("리프레시 토큰 불일치 - session: {}", claims.sid);
            return Err(AppError::AuthenticationError("리프레시 토큰이 만료되었거나 이미 사용되었습니다".to_string()));
        }

        // 5. 세션 소유 사용자 조회
        let user = self.user_repo
            .find_by_id(&claims.sub)
            .await
            .map_err(Self::reject_lookup_error)?
            .ok_or_else(|| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

        // 새 토큰 쌍 생성 후 저장된 해시를 대상 지정 업데이트로 교체
        let pair = token_service.generate_token_pair(&claims.sub, &claims.sid)?;

        let rotated = self.session_repo
            .update_token_hash(&claims.sid, &Session::hash_token(&pair.refresh_token))
            .await?;

        if !rotated {
            // 검증과 순환 사이에 세션이 무효화된 경우
            return Err(AppError::AuthenticationError("세션이 무효화되었습니다".to_string()));
        }

        log::info!("토큰 순환 완료 - session: {}", claims.sid);

        Ok((user, pair))
    }

    /// 세션 무효화 (로그아웃)
    ///
    /// 세션 레코드를 삭제하여 해당 세션의 리프레시 토큰을 즉시 무효화합니다.
    /// 이미 무효화된 세션에 대한 호출은 성공으로 처리됩니다 (멱등).
    pub async fn revoke(&self, session_id: &str) -> Result<(), AppError> {
        let deleted = self.session_repo.delete(session_id).await?;

        if deleted {
            log::info!("세션 무효화 완료 - session: {}", session_id);
        } else {
            log::debug!("이미 무효화된 세션 - session: {}", session_id);
        }

        Ok(())
    }

    /// 조회 경로의 에러를 갱신 문맥에 맞게 변환합니다
    ///
    /// 잘못된 ID 형식은 위조된 토큰 내용이므로 401로, 저장소 오류는
    /// 그대로 500으로 전파합니다.
    fn reject_lookup_error(error: AppError) -> AppError {
        match error {
            AppError::ValidationError(_) => {
                AppError::AuthenticationError("유효하지 않은 리프레시 토큰입니다".to_string())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_mapping() {
        let mapped = SessionService::reject_lookup_error(
            AppError::ValidationError("bad id".to_string()),
        );
        assert!(matches!(mapped, AppError::AuthenticationError(_)));

        let passthrough = SessionService::reject_lookup_error(
            AppError::DatabaseError("down".to_string()),
        );
        assert!(matches!(passthrough, AppError::DatabaseError(_)));
    }
}
