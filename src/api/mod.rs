// ==========================================
// SCM 납기관리 AI Agent - API 계층
// ==========================================
// 책임: 단계별 응답 객체 구성, HTTP 핸들러에 제공
// ==========================================

pub mod error;
pub mod step_api;

pub use error::{ApiError, ApiResult};
pub use step_api::StepApi;
