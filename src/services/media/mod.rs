//! 미디어 업로드 서비스 모듈
//!
//! 외부 미디어 호스팅 서비스와의 통합을 담당합니다.
//! 업로드된 파일의 원본은 서버에 남지 않으며 호스팅된 URL만 사용됩니다.

pub mod media_service;

pub use media_service::*;
