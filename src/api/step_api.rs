// ==========================================
// SCM 납기관리 AI Agent - 단계 API
// ==========================================
// 책임: 8단계 워크플로우 + 원본 데이터 + 알림 피드의
// 응답 객체 구성. HTTP 핸들러가 이 계층에 위임한다.
// 모든 메서드는 읽기 전용 데이터셋 위의 순수 계산이며
// 같은 요청을 반복해도 동일한 응답을 낸다 (멱등).
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::api::error::ApiResult;
use crate::dataset::PoDataset;
use crate::domain::{Alert, PurchaseOrder};
use crate::engine::classify::StatusTally;
use crate::engine::{
    alerts, appropriateness, comparison, correspondence, extract, pnd, supply, validation,
};

// ==========================================
// 응답 DTO
// ==========================================

/// STEP 1: PO 추출 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoExtractResponse {
    pub data: Vec<PurchaseOrder>,
    pub summary: extract::ExtractSummary,
}

/// STEP 2: 계약 납기 검증 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryValidationResponse {
    pub data: Vec<validation::ValidatedOrder>,
    pub summary: StatusTally,
}

/// STEP 3: PND 변경 사항 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PndChangesResponse {
    pub data: Vec<pnd::PndChange>,
    pub summary: pnd::PndChangeSummary,
}

/// STEP 4: 보급 요청 현황 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRequestsResponse {
    pub data: Vec<PurchaseOrder>,
    pub summary: supply::SupplySummary,
    pub urgent_items: Vec<PurchaseOrder>,
}

/// STEP 5: 적정성 판단 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppropriatenessResponse {
    pub data: Vec<appropriateness::AssessedOrder>,
    pub summary: StatusTally,
}

/// STEP 6: 메일 발송 현황 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailStatusResponse {
    pub data: Vec<correspondence::SupplierMailStatus>,
    pub summary: correspondence::MailSummary,
}

/// STEP 7: 회신 수집 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCollectionResponse {
    pub data: Vec<correspondence::SupplierResponse>,
    pub summary: correspondence::ResponseSummary,
    pub pending_reminders: Vec<correspondence::SupplierResponse>,
}

/// STEP 8: 비교 분석 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonAnalysisResponse {
    pub data: Vec<comparison::ForecastItem>,
    pub risk_items: Vec<comparison::RiskItem>,
    pub summary: comparison::ComparisonSummary,
}

// ==========================================
// StepApi
// ==========================================

/// 단계 API
///
/// 데이터셋의 공유 참조만 보유하며 요청 간 가변 상태가 없다.
pub struct StepApi {
    dataset: Arc<PoDataset>,
}

impl StepApi {
    /// 새 StepApi 인스턴스 생성
    pub fn new(dataset: Arc<PoDataset>) -> Self {
        Self { dataset }
    }

    /// 원본 데이터셋 덤프 (`GET /api/data`)
    pub fn raw_data(&self) -> ApiResult<Vec<PurchaseOrder>> {
        Ok(self.dataset.records().to_vec())
    }

    /// STEP 1: PO 추출 (`GET /api/step1/po-extract`)
    #[instrument(skip(self))]
    pub fn po_extract(&self) -> ApiResult<PoExtractResponse> {
        let records = self.dataset.records();
        Ok(PoExtractResponse {
            data: records.to_vec(),
            summary: extract::summarize(records),
        })
    }

    /// STEP 2: 계약 납기일 검증 (`GET /api/step2/delivery-validation`)
    #[instrument(skip(self))]
    pub fn delivery_validation(&self) -> ApiResult<DeliveryValidationResponse> {
        let data = validation::validate(self.dataset.records());
        let summary = validation::summarize(&data);
        Ok(DeliveryValidationResponse { data, summary })
    }

    /// STEP 3: PND 변경 사항 검토 (`GET /api/step3/pnd-changes`)
    #[instrument(skip(self))]
    pub fn pnd_changes(&self) -> ApiResult<PndChangesResponse> {
        let data = pnd::collect_changes(self.dataset.records());
        let summary = pnd::summarize(&data, self.dataset.len());
        Ok(PndChangesResponse { data, summary })
    }

    /// STEP 4: 보급 요청일 검토 (`GET /api/step4/supply-requests`)
    #[instrument(skip(self))]
    pub fn supply_requests(&self) -> ApiResult<SupplyRequestsResponse> {
        let records = self.dataset.records();
        Ok(SupplyRequestsResponse {
            data: records.to_vec(),
            summary: supply::summarize(records),
            urgent_items: supply::urgent_items(records),
        })
    }

    /// STEP 5: 적정성 판단 (`GET /api/step5/appropriateness`)
    #[instrument(skip(self))]
    pub fn appropriateness(&self) -> ApiResult<AppropriatenessResponse> {
        let data = appropriateness::assess(self.dataset.records());
        let summary = appropriateness::summarize(&data);
        Ok(AppropriatenessResponse { data, summary })
    }

    /// STEP 6: 공급사 메일 발송 현황 (`GET /api/step6/email-status`)
    #[instrument(skip(self))]
    pub fn email_status(&self) -> ApiResult<EmailStatusResponse> {
        let data = correspondence::mail_statuses(&self.dataset);
        let summary = correspondence::mail_summary(&data);
        Ok(EmailStatusResponse { data, summary })
    }

    /// STEP 7: 공급사 회신 수집 (`GET /api/step7/response-collection`)
    #[instrument(skip(self))]
    pub fn response_collection(&self) -> ApiResult<ResponseCollectionResponse> {
        let data = correspondence::response_statuses(&self.dataset);
        let summary = correspondence::response_summary(&data);
        let pending_reminders = correspondence::pending_reminders(&data);
        Ok(ResponseCollectionResponse {
            data,
            summary,
            pending_reminders,
        })
    }

    /// STEP 8: 납기 비교 분석 (`GET /api/step8/comparison-analysis`)
    #[instrument(skip(self))]
    pub fn comparison_analysis(&self) -> ApiResult<ComparisonAnalysisResponse> {
        let records = self.dataset.records();
        let data = comparison::forecast_items(records);
        let risk_items = comparison::risk_items(records);
        let summary = comparison::summarize(records, &data);
        Ok(ComparisonAnalysisResponse {
            data,
            risk_items,
            summary,
        })
    }

    /// 알림 피드 (`GET /api/alerts`)
    #[instrument(skip(self))]
    pub fn alerts(&self) -> ApiResult<Vec<Alert>> {
        Ok(alerts::build_alerts(self.dataset.records()))
    }
}
