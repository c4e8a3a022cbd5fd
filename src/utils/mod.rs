//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리 유틸리티
//! - [`cookies`] - 인증 쿠키 생성/제거 헬퍼
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//! use crate::utils::cookies::auth_cookie;
//!
//! let clean_name = validate_required_string("  John  ", "name")?;
//! let cookie = auth_cookie("accessToken", &token, 24 * 3600);
//! ```

pub mod string_utils;
pub mod cookies;
pub mod display_terminal;
