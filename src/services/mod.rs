//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 사용자 관리, 세션/토큰 발급, 미디어 업로드를 담당합니다.
//!
//! # Features
//!
//! - 사용자 등록 및 자격 증명 검증
//! - JWT 토큰 기반 세션 발급과 리프레시 토큰 순환
//! - 외부 미디어 호스트로의 이미지 업로드
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::user_service::UserService, auth::session_service::SessionService};
//!
//! let user_service = UserService::instance();
//! let session_service = SessionService::instance();
//! ```

pub mod users;
pub mod auth;
pub mod media;
