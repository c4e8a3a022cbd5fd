//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT 토큰 관련 설정
//! - [`media_config`] - 미디어 호스트 업로드 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서 기본 시크릿 사용 시 경고 로그 출력
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig, MediaConfig};
//!
//! // 현재 환경 확인
//! let env = Environment::current();
//!
//! // 서버 설정
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//!
//! // JWT 설정
//! let secret = JwtConfig::access_secret();
//! let expiration = JwtConfig::access_expiration_hours();
//!
//! // 미디어 업로드 설정
//! let upload_url = MediaConfig::upload_url();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export ACCESS_TOKEN_SECRET="your-access-secret"
//! export REFRESH_TOKEN_SECRET="your-refresh-secret"
//! export ACCESS_TOKEN_EXPIRY_HOURS="24"
//! export REFRESH_TOKEN_EXPIRY_DAYS="10"
//!
//! # 미디어 호스트
//! export MEDIA_UPLOAD_URL="https://media.example.com/v1/upload"
//! export MEDIA_UPLOAD_PRESET="vidstream"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;
pub mod media_config;

pub use data_config::*;
pub use auth_config::*;
pub use media_config::*;
