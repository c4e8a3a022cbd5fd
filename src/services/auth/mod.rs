//! 인증 및 세션 서비스 모듈
//!
//! JWT 기반 토큰 발급과 세션 생명주기 관리를 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 생성 및 검증 (용도별 시크릿 분리)
//! - 세션 발급, 리프레시 토큰 순환, 세션 무효화
//! - 토큰-세션 연결 (`sid` 클레임)
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 리프레시 토큰은 SHA-256 해시로만 저장
//! - 순환 시 이전 토큰 즉시 무효화 (저장된 해시 교체)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{SessionService, TokenService};
//!
//! // 세션 발급
//! let session_service = SessionService::instance();
//! let tokens = session_service.issue(&user_id).await?;
//!
//! // 액세스 토큰 검증
//! let token_service = TokenService::instance();
//! let claims = token_service.verify_access_token(&tokens.access_token)?;
//! ```

pub mod token_service;
pub mod session_service;

pub use token_service::*;
pub use session_service::*;
