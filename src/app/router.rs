// ==========================================
// SCM 납기관리 AI Agent - 라우터 구성
// ==========================================
// /api/* 에만 CORS를 적용하고 /static 아래에서
// 클라이언트 번들을 서빙한다 (원천 서버 구성과 동일).
// ==========================================

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::handlers;
use crate::app::state::AppState;

/// 전체 라우터 구성
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    let api = Router::new()
        .route("/data", get(handlers::raw_data))
        .route("/step1/po-extract", get(handlers::step1_po_extract))
        .route(
            "/step2/delivery-validation",
            get(handlers::step2_delivery_validation),
        )
        .route("/step3/pnd-changes", get(handlers::step3_pnd_changes))
        .route(
            "/step4/supply-requests",
            get(handlers::step4_supply_requests),
        )
        .route(
            "/step5/appropriateness",
            get(handlers::step5_appropriateness),
        )
        .route("/step6/email-status", get(handlers::step6_email_status))
        .route(
            "/step7/response-collection",
            get(handlers::step7_response_collection),
        )
        .route(
            "/step8/comparison-analysis",
            get(handlers::step8_comparison_analysis),
        )
        .route("/alerts", get(handlers::alerts))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 시작 로그에 출력할 엔드포인트 목록
pub const API_ENDPOINTS: [&str; 9] = [
    "GET /api/step1/po-extract",
    "GET /api/step2/delivery-validation",
    "GET /api/step3/pnd-changes",
    "GET /api/step4/supply-requests",
    "GET /api/step5/appropriateness",
    "GET /api/step6/email-status",
    "GET /api/step7/response-collection",
    "GET /api/step8/comparison-analysis",
    "GET /api/alerts",
];
