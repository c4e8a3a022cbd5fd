//! 미디어 호스트 업로드 설정 모듈
//!
//! 아바타/커버 이미지를 업로드하는 외부 미디어 호스팅 서비스의
//! 엔드포인트와 업로드 프리셋을 관리합니다.

use std::env;

/// 외부 미디어 호스트 설정
///
/// 회원가입 시 아바타와 커버 이미지는 이 설정이 가리키는
/// 업로드 엔드포인트로 전송되고, 호스팅된 URL만 사용자 문서에 저장됩니다.
pub struct MediaConfig;

impl MediaConfig {
    /// 미디어 호스트의 업로드 엔드포인트 URL을 반환합니다.
    ///
    /// # 기본값
    ///
    /// `http://localhost:9000/v1/upload` (로컬 개발용 목 서버)
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export MEDIA_UPLOAD_URL="https://media.example.com/v1/upload"
    /// ```
    pub fn upload_url() -> String {
        env::var("MEDIA_UPLOAD_URL")
            .unwrap_or_else(|_| "http://localhost:9000/v1/upload".to_string())
    }

    /// 업로드 프리셋 이름을 반환합니다.
    ///
    /// 미디어 호스트 측에서 변환/저장 정책을 식별하는 값입니다.
    ///
    /// # 기본값
    ///
    /// `vidstream`
    pub fn upload_preset() -> String {
        env::var("MEDIA_UPLOAD_PRESET").unwrap_or_else(|_| "vidstream".to_string())
    }

    /// 업로드 대상 폴더를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `vidstream/users`
    pub fn upload_folder() -> String {
        env::var("MEDIA_UPLOAD_FOLDER").unwrap_or_else(|_| "vidstream/users".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_config_defaults() {
        if env::var("MEDIA_UPLOAD_URL").is_err() {
            assert_eq!(MediaConfig::upload_url(), "http://localhost:9000/v1/upload");
        }

        if env::var("MEDIA_UPLOAD_PRESET").is_err() {
            assert_eq!(MediaConfig::upload_preset(), "vidstream");
        }
    }
}
