// ==========================================
// SCM 납기관리 AI Agent - API 계층 에러 타입
// ==========================================
// 엔드포인트는 입력을 받지 않으므로 검증 에러는 존재하지 않는다.
// 처리 불가 상황은 500으로 귀결되며 프로세스는 계속 서비스한다.
// ==========================================

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// API 계층 에러 타입
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("직렬화 실패: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("내부 오류: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "API 처리 실패");

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_format() {
        let err = ApiError::Internal("데이터셋 없음".to_string());
        assert_eq!(err.to_string(), "내부 오류: 데이터셋 없음");
    }
}
