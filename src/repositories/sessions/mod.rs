//! 세션 리포지토리 모듈

pub mod session_repo;

pub use session_repo::*;
