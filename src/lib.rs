// ==========================================
// 조선 SCM 납기관리 AI Agent - 코어 라이브러리
// ==========================================
// 8단계 납기 추적 워크플로우 데모 대시보드
// 기술 스택: axum + tokio + chrono
// 데이터: 인메모리 읽기 전용 (영속성/인증/실발송 없음)
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티와 타입
pub mod domain;

// 데이터셋 - 읽기 전용 데모 데이터
pub mod dataset;

// 엔진 계층 - 분류/집계 규칙
pub mod engine;

// API 계층 - 단계별 응답 구성
pub mod api;

// 애플리케이션 계층 - HTTP 와이어링
pub mod app;

// 클라이언트 - 뷰모델/렌더러/자동 실행기
pub mod client;

// 설정
pub mod config;

// 로그 시스템
pub mod logging;

// ==========================================
// 재노출 핵심 타입
// ==========================================

// 도메인 타입
pub use domain::{
    Alert, AlertKind, ChangeDirection, DeliveryStatus, MailStatus, PurchaseOrder, RiskGrade,
    StepState,
};

// 데이터셋
pub use dataset::PoDataset;

// 엔진
pub use engine::{classify, expected_delivery_date, Classification, StatusTally};

// API
pub use api::{ApiError, ApiResult, StepApi};

// 애플리케이션
pub use app::{build_router, AppState};

// 클라이언트
pub use client::{DashboardViewModel, SequentialRunner};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "조선 SCM 납기관리 AI Agent";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
