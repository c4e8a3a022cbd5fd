//! # 세션 리포지토리 구현
//!
//! 로그인 세션 레코드(리프레시 토큰 저장소)의 데이터 액세스 계층입니다.
//! 세션 조회는 토큰 갱신마다 발생하는 핫 패스이므로 Redis 캐싱을 적용하되,
//! 토큰 순환과 세션 무효화 시 해당 캐시를 즉시 제거합니다.

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::sessions::session::Session,
};

/// 세션 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **캐시 키**: `session:{id}`
/// - **TTL**: 600초 (10분)
/// - **무효화 시점**: 토큰 해시 교체, 세션 삭제
///
/// 캐시가 오래된 토큰 해시를 돌려주면 정상 갱신 요청이 거부되므로,
/// 쓰기 연산은 반드시 캐시 무효화를 동반합니다.
#[repository(name = "session", collection = "sessions")]
pub struct SessionRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl SessionRepository {
    /// 새 세션 레코드 저장
    ///
    /// 세션 ID는 엔티티 생성 시 이미 할당되어 있습니다
    /// (토큰의 `sid` 클레임에 내장되어야 하므로 삽입 전에 확정됩니다).
    pub async fn create(&self, session: Session) -> Result<Session, AppError> {
        self.collection::<Session>()
            .insert_one(&session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(session)
    }

    /// ID로 세션 조회
    ///
    /// # 인자
    ///
    /// * `id` - 세션 ObjectId의 16진수 문자열 표현 (토큰의 `sid` 클레임)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Session))` - 세션을 찾은 경우
    /// * `Ok(None)` - 세션이 없거나 이미 무효화된 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Session>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 세션 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Session>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let session = self.collection::<Session>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref session) = session {
            let _ = self.redis
                .set_with_expiry(&cache_key, session, 600)
                .await;
        }

        Ok(session)
    }

    /// 세션의 리프레시 토큰 해시 교체 (토큰 순환)
    ///
    /// 전체 문서 교체가 아닌 `$set` 대상 지정 업데이트만 수행합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 해시가 교체됨
    /// * `Ok(false)` - 해당 세션이 존재하지 않음
    pub async fn update_token_hash(&self, id: &str, token_hash: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 세션 ID 형식입니다".to_string()))?;

        let result = self.collection::<Session>()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "refresh_token_hash": token_hash } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count > 0 {
            // 오래된 해시가 캐시에 남지 않도록 즉시 무효화
            let _ = self.invalidate_cache(id).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 세션 삭제 (로그아웃, 명시적 무효화)
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 세션이 삭제됨
    /// * `Ok(false)` - 해당 세션이 존재하지 않음 (이미 무효화됨)
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 세션 ID 형식입니다".to_string()))?;

        let result = self.collection::<Session>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **사용자 ID 인덱스** - 사용자별 세션 조회 최적화
    /// 2. **만료 TTL 인덱스** - `expires_at` 도달 시 MongoDB가
    ///    세션 문서를 자동 삭제 (`expireAfterSeconds: 0`)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Session>();

        // 사용자 ID 인덱스
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id_idx".to_string())
                .build())
            .build();

        // 만료 TTL 인덱스
        let expires_at_index = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(IndexOptions::builder()
                .name("expires_at_ttl".to_string())
                .expire_after(std::time::Duration::from_secs(0))
                .build())
            .build();

        collection
            .create_indexes([user_id_index, expires_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
