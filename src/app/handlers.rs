// ==========================================
// SCM 납기관리 AI Agent - HTTP 핸들러
// ==========================================
// 얇은 위임 계층: StepApi 호출 결과를 JSON으로 감싼다.
// 모든 엔드포인트는 GET이며 요청 본문/쿼리를 받지 않는다.
// ==========================================

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::api::error::ApiResult;
use crate::api::step_api::{
    AppropriatenessResponse, ComparisonAnalysisResponse, DeliveryValidationResponse,
    EmailStatusResponse, PndChangesResponse, PoExtractResponse, ResponseCollectionResponse,
    SupplyRequestsResponse,
};
use crate::app::state::AppState;
use crate::domain::{Alert, PurchaseOrder};

/// `GET /` - 대시보드 셸
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /api/data`
pub async fn raw_data(State(state): State<AppState>) -> ApiResult<Json<Vec<PurchaseOrder>>> {
    Ok(Json(state.step_api.raw_data()?))
}

/// `GET /api/step1/po-extract`
pub async fn step1_po_extract(
    State(state): State<AppState>,
) -> ApiResult<Json<PoExtractResponse>> {
    Ok(Json(state.step_api.po_extract()?))
}

/// `GET /api/step2/delivery-validation`
pub async fn step2_delivery_validation(
    State(state): State<AppState>,
) -> ApiResult<Json<DeliveryValidationResponse>> {
    Ok(Json(state.step_api.delivery_validation()?))
}

/// `GET /api/step3/pnd-changes`
pub async fn step3_pnd_changes(
    State(state): State<AppState>,
) -> ApiResult<Json<PndChangesResponse>> {
    Ok(Json(state.step_api.pnd_changes()?))
}

/// `GET /api/step4/supply-requests`
pub async fn step4_supply_requests(
    State(state): State<AppState>,
) -> ApiResult<Json<SupplyRequestsResponse>> {
    Ok(Json(state.step_api.supply_requests()?))
}

/// `GET /api/step5/appropriateness`
pub async fn step5_appropriateness(
    State(state): State<AppState>,
) -> ApiResult<Json<AppropriatenessResponse>> {
    Ok(Json(state.step_api.appropriateness()?))
}

/// `GET /api/step6/email-status`
pub async fn step6_email_status(
    State(state): State<AppState>,
) -> ApiResult<Json<EmailStatusResponse>> {
    Ok(Json(state.step_api.email_status()?))
}

/// `GET /api/step7/response-collection`
pub async fn step7_response_collection(
    State(state): State<AppState>,
) -> ApiResult<Json<ResponseCollectionResponse>> {
    Ok(Json(state.step_api.response_collection()?))
}

/// `GET /api/step8/comparison-analysis`
pub async fn step8_comparison_analysis(
    State(state): State<AppState>,
) -> ApiResult<Json<ComparisonAnalysisResponse>> {
    Ok(Json(state.step_api.comparison_analysis()?))
}

/// `GET /api/alerts`
pub async fn alerts(State(state): State<AppState>) -> ApiResult<Json<Vec<Alert>>> {
    Ok(Json(state.step_api.alerts()?))
}

/// 최소 HTML 셸 (번들은 /static 경로에서 서빙)
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>조선 SCM 납기관리 AI Agent</title>
</head>
<body>
  <div id="app"></div>
  <script src="/static/app.js"></script>
</body>
</html>"#;
