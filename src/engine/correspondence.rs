// ==========================================
// SCM 납기관리 AI Agent - STEP 6/7 메일 발송·회신 수집
// ==========================================
// 공급사 단위 그룹핑 위에 데모용 고정 발송/제출 상태를 입힌다.
// 실제 메일 발송이나 수신은 없다 (순수 시뮬레이션).
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::PoDataset;
use crate::domain::MailStatus;
use crate::engine::classify::percentage;

/// 데모 고정값: 전체 공급사 발송 완료 시각
pub const DEMO_SENT_AT: &str = "2025-01-28 09:30:00";

/// 데모 고정값: 제출 완료 공급사 수 상한 (PRD v2: 7개 중 5개 = 71%)
pub const DEMO_SUBMITTED_LIMIT: usize = 5;

/// 데모 고정값: 제출 시각 순환 배열
const DEMO_SUBMITTED_AT: [&str; 5] = [
    "2025-01-28 09:00:00",
    "2025-01-28 14:30:00",
    "2025-01-28 10:15:00",
    "2025-01-29 09:45:00",
    "2025-01-30 11:00:00",
];

// ==========================================
// STEP 6 - 메일 발송 현황
// ==========================================

/// 공급사별 메일 미리보기 행
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailPreviewItem {
    pub po_number: String,
    pub ship: String,
    pub contract_date: Option<NaiveDate>,
    /// 가장 최근 주차의 입고예정일 (2549주 → 2548주 → 2547주)
    pub current_date: Option<NaiveDate>,
    pub material_number: String,
    pub material_name: String,
}

/// 공급사별 메일 발송 상태
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierMailStatus {
    pub supplier: String,
    pub item_count: usize,
    pub status: MailStatus,
    pub sent_at: Option<String>,
    pub items: Vec<MailPreviewItem>,
}

/// STEP 6 집계
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailSummary {
    pub total_suppliers: usize,
    pub sent: usize,
    pub pending: usize,
    pub failed: usize,
}

/// 공급사별 발송 상태 구성 (데모: 전체 발송 완료)
pub fn mail_statuses(dataset: &PoDataset) -> Vec<SupplierMailStatus> {
    dataset
        .suppliers()
        .into_iter()
        .map(|supplier| {
            let items: Vec<MailPreviewItem> = dataset
                .records_of_supplier(&supplier)
                .into_iter()
                .map(|record| MailPreviewItem {
                    po_number: record.po_number.clone(),
                    ship: record.hull_no.clone(),
                    contract_date: record.contract_date,
                    current_date: record.latest_forecast(),
                    material_number: record.material_no.clone(),
                    material_name: record.material_desc.clone(),
                })
                .collect();

            SupplierMailStatus {
                supplier,
                item_count: items.len(),
                status: MailStatus::Sent,
                sent_at: Some(DEMO_SENT_AT.to_string()),
                items,
            }
        })
        .collect()
}

/// 발송 상태 집계
pub fn mail_summary(statuses: &[SupplierMailStatus]) -> MailSummary {
    MailSummary {
        total_suppliers: statuses.len(),
        sent: statuses
            .iter()
            .filter(|s| s.status == MailStatus::Sent)
            .count(),
        pending: statuses
            .iter()
            .filter(|s| s.status == MailStatus::Pending)
            .count(),
        failed: statuses
            .iter()
            .filter(|s| s.status == MailStatus::Failed)
            .count(),
    }
}

// ==========================================
// STEP 7 - 회신 수집 현황
// ==========================================

/// 공급사별 회신 상태
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub supplier: String,
    pub item_count: usize,
    pub submitted: bool,
    pub submitted_at: Option<String>,
    /// 미제출 공급사에게 리마인더 발송 여부
    pub reminder_sent: bool,
}

/// STEP 7 집계
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSummary {
    pub total_suppliers: usize,
    pub submitted: usize,
    pub not_submitted: usize,
    /// 제출률 (%, 공급사 0개면 0)
    pub submission_rate: u32,
}

/// 공급사별 회신 상태 구성 (데모: 앞의 5개 공급사만 제출 완료)
pub fn response_statuses(dataset: &PoDataset) -> Vec<SupplierResponse> {
    let suppliers = dataset.suppliers();
    let submitted_count = DEMO_SUBMITTED_LIMIT.min(suppliers.len());

    suppliers
        .into_iter()
        .enumerate()
        .map(|(index, supplier)| {
            let submitted = index < submitted_count;
            let item_count = dataset.records_of_supplier(&supplier).len();

            SupplierResponse {
                supplier,
                item_count,
                submitted,
                submitted_at: submitted
                    .then(|| DEMO_SUBMITTED_AT[index % DEMO_SUBMITTED_AT.len()].to_string()),
                reminder_sent: !submitted,
            }
        })
        .collect()
}

/// 회신 상태 집계
pub fn response_summary(responses: &[SupplierResponse]) -> ResponseSummary {
    let submitted = responses.iter().filter(|r| r.submitted).count();

    ResponseSummary {
        total_suppliers: responses.len(),
        submitted,
        not_submitted: responses.len() - submitted,
        submission_rate: percentage(submitted, responses.len()),
    }
}

/// 리마인더 대상 공급사 (미제출)
pub fn pending_reminders(responses: &[SupplierResponse]) -> Vec<SupplierResponse> {
    responses.iter().filter(|r| !r.submitted).cloned().collect()
}
