//! # Core Framework Module
//!
//! 서비스 전반에서 사용하는 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! 싱글톤 기반 의존성 주입 컨테이너와 통합 에러 처리 시스템을 포함합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 전역 싱글톤 컨테이너
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **의존성 해결**: `Arc<T>` 타입 기반 자동 의존성 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 자동 구현
//! - **자동 변환**: `thiserror` 기반 에러 체인 관리
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // 리포지토리 정의 (db/redis 자동 주입)
//! #[repository(name = "user", collection = "users")]
//! struct UserRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! // 서비스 정의 (리포지토리 자동 주입)
//! #[service(name = "user")]
//! struct UserService {
//!     user_repo: Arc<UserRepository>,
//! }
//!
//! // 어디서든 동일한 싱글톤 인스턴스
//! let service = UserService::instance();
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
