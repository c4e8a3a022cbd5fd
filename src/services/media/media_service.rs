//! # 미디어 업로드 서비스 구현
//!
//! base64로 인코딩된 이미지 페이로드를 외부 미디어 호스트에 업로드하고
//! 호스팅된 URL을 반환합니다. 업로드 엔드포인트와 프리셋은
//! [`MediaConfig`](crate::config::MediaConfig)에서 읽어옵니다.

use singleton_macro::service;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use uuid::Uuid;
use crate::config::MediaConfig;
use crate::core::errors::AppError;
use crate::domain::models::media::upload::{UploadApiResponse, UploadedMedia};

/// 외부 미디어 호스트 업로드 서비스
///
/// 업로드 요청은 JSON 본문으로 전송됩니다:
///
/// ```json
/// {
///   "file": "<base64 payload>",
///   "upload_preset": "vidstream",
///   "public_id": "vidstream/users/<uuid>"
/// }
/// ```
///
/// 호스트는 `{"secure_url": "...", "public_id": "..."}` 형태로 응답합니다.
#[service(name = "media")]
pub struct MediaService {
    // 외부 의존성 없음
}

impl MediaService {
    /// base64 이미지 페이로드를 미디어 호스트에 업로드
    ///
    /// # 인자
    ///
    /// * `payload` - base64 인코딩된 이미지 데이터.
    ///   `data:image/png;base64,...` 형태의 data URI도 허용됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UploadedMedia)` - 호스팅된 URL과 리소스 식별자
    /// * `Err(AppError::ValidationError)` - base64 디코딩 불가 또는 빈 페이로드
    /// * `Err(AppError::ExternalServiceError)` - 호스트 호출 실패, 비정상 응답
    pub async fn upload_image(&self, payload: &str) -> Result<UploadedMedia, AppError> {
        let encoded = Self::strip_data_uri(payload).trim();

        // 페이로드가 올바른 base64인지 전송 전에 확인
        let bytes = Self::decode_payload(encoded)?;

        let public_id = format!("{}/{}", MediaConfig::upload_folder(), Uuid::new_v4());

        log::debug!("미디어 업로드 시작 - public_id: {}, bytes: {}", public_id, bytes.len());

        let client = reqwest::Client::new();

        let response = client
            .post(MediaConfig::upload_url())
            .json(&serde_json::json!({
                "file": encoded,
                "upload_preset": MediaConfig::upload_preset(),
                "public_id": public_id,
            }))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("미디어 호스트 호출 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "미디어 호스트 응답 오류: {}",
                response.status()
            )));
        }

        let upload: UploadApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("미디어 호스트 응답 파싱 실패: {}", e)))?;

        let media = UploadedMedia::from(upload);

        log::info!("미디어 업로드 완료 - url: {}", media.url);

        Ok(media)
    }

    /// data URI 접두사를 제거하고 base64 본문만 반환
    fn strip_data_uri(payload: &str) -> &str {
        match payload.split_once(";base64,") {
            Some((prefix, body)) if prefix.starts_with("data:") => body,
            _ => payload,
        }
    }

    /// base64 페이로드를 디코딩하여 유효성을 검증
    fn decode_payload(encoded: &str) -> Result<Vec<u8>, AppError> {
        let trimmed = encoded.trim();

        if trimmed.is_empty() {
            return Err(AppError::ValidationError("이미지 데이터가 비어있습니다".to_string()));
        }

        STANDARD
            .decode(trimmed)
            .map_err(|_| AppError::ValidationError("이미지 데이터가 유효한 base64가 아닙니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_base64() {
        let bytes = MediaService::decode_payload("aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert!(MediaService::decode_payload("not base64 !!!").is_err());
    }

    #[test]
    fn test_decode_rejects_empty_payload() {
        assert!(MediaService::decode_payload("").is_err());
        assert!(MediaService::decode_payload("   ").is_err());
    }

    #[test]
    fn test_strip_data_uri_prefix() {
        assert_eq!(
            MediaService::strip_data_uri("data:image/png;base64,aGVsbG8="),
            "aGVsbG8="
        );
        assert_eq!(MediaService::strip_data_uri("aGVsbG8="), "aGVsbG8=");
    }
}
