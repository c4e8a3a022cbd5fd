//! 비드스트림 인증 서비스 백엔드
//!
//! 동영상 공유 서비스를 위한 Rust 기반 인증 및 세션 관리 서비스입니다.
//! 회원가입, 로그인, 로그아웃, 리프레시 토큰 순환을 제공하며
//! 싱글톤 매크로를 활용한 의존성 주입으로 구성됩니다.
//!
//! # Features
//!
//! - **회원가입**: 아바타/커버 이미지 업로드를 포함한 계정 생성
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **세션 관리**: 기기별 세션 레코드와 안전한 리프레시 토큰 순환
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자/세션 데이터 영구 저장
//! - **Redis**: 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 쿠키 부착
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 세션 발급, 토큰 순환, 미디어 업로드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use vidstream_auth_backend::services::users::user_service::UserService;
//! use vidstream_auth_backend::services::auth::session_service::SessionService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let session_service = SessionService::instance();
//!
//! // 자격 증명 검증 후 세션 발급
//! let user = user_service.verify_credentials(Some("alice"), None, "pw").await?;
//! let tokens = session_service.issue(&user.id_string().unwrap_or_default()).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
