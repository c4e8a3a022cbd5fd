//! 미디어 호스트 통합 모델 모듈

pub mod upload;

pub use upload::*;
