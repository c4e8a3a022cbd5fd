//! 공통 API 응답 봉투
//!
//! 모든 성공 응답은 `{status, data, message}` 형태의 봉투로 감싸서 반환합니다.
//! 에러 응답은 `AppError`의 `ResponseError` 구현이 담당합니다.

use serde::Serialize;

/// API 응답 래퍼
///
/// ## 직렬화 형태
///
/// ```json
/// {
///   "status": 200,
///   "data": { "...": "..." },
///   "message": "user logged in successfully"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// 응답 상태 코드 (HTTP 상태 코드와 동일한 값)
    pub status: u16,
    /// 응답 데이터
    pub data: T,
    /// 사용자에게 전달할 메시지
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// 새 응답 봉투 생성
    pub fn new(status: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status,
            data,
            message: message.into(),
        }
    }

    /// 200 OK 응답 봉투 생성
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(200, data, message)
    }

    /// 201 Created 응답 봉투 생성
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(201, data, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = ApiResponse::ok(serde_json::json!({"id": "abc"}), "done");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], 200);
        assert_eq!(json["data"]["id"], "abc");
        assert_eq!(json["message"], "done");
    }

    #[test]
    fn test_created_envelope_status() {
        let response = ApiResponse::created((), "registered");
        assert_eq!(response.status, 201);
    }
}
