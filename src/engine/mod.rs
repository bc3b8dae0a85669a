// ==========================================
// SCM 납기관리 AI Agent - 엔진 계층
// ==========================================
// 상태 없는 순수 계산: 분류 + 단계별 집계
// 모든 함수는 읽기 전용 데이터셋 위에서 요청마다 재계산한다.
// ==========================================

pub mod alerts;
pub mod appropriateness;
pub mod classify;
pub mod comparison;
pub mod correspondence;
pub mod extract;
pub mod pnd;
pub mod supply;
pub mod validation;

pub use classify::{classify, expected_delivery_date, Classification, StatusTally};
