//! 미디어 호스트 업로드 모델
//!
//! 외부 미디어 호스팅 서비스와의 업로드 요청/응답을 매핑합니다.

use serde::{Deserialize, Serialize};

/// 미디어 호스트 업로드 API 응답 모델
///
/// 호스트는 업로드 성공 시 접근 가능한 URL과 리소스 식별자를 반환합니다.
#[derive(Debug, Deserialize)]
pub struct UploadApiResponse {
    /// 호스팅된 리소스의 HTTPS URL
    pub secure_url: String,
    /// 호스트 측 리소스 식별자
    pub public_id: String,
}

/// 업로드 완료된 미디어 정보
///
/// 서비스 계층이 핸들러에 반환하는 결과 모델입니다.
/// 사용자 문서에는 `url`만 저장됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedMedia {
    pub url: String,
    pub public_id: String,
}

impl From<UploadApiResponse> for UploadedMedia {
    fn from(response: UploadApiResponse) -> Self {
        Self {
            url: response.secure_url,
            public_id: response.public_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{"secure_url": "https://media.example.com/u/abc.png", "public_id": "vidstream/users/abc", "bytes": 1024}"#;
        let response: UploadApiResponse = serde_json::from_str(json).unwrap();

        let media = UploadedMedia::from(response);
        assert_eq!(media.url, "https://media.example.com/u/abc.png");
        assert_eq!(media.public_id, "vidstream/users/abc");
    }
}
