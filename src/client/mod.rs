// ==========================================
// SCM 납기관리 AI Agent - 대시보드 클라이언트
// ==========================================
// 뷰모델 + 렌더러 + 순차 자동 실행기.
// 서버 상태와 무관한 클라이언트 측 북키핑이다.
// ==========================================

pub mod render;
pub mod runner;
pub mod view_model;

pub use runner::{HttpStepFetcher, RunReport, SequentialRunner, StepFetcher};
pub use view_model::{DashboardViewModel, StepDefinition, ViewModelError, STEPS, STEP_COUNT};
