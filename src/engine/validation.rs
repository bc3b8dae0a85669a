// ==========================================
// SCM 납기관리 AI Agent - STEP 2 계약 납기 검증
// ==========================================
// 예상 완료일(발주일 + 리드타임)과 계약납기일을 비교한다.
// 기준일: 예상 완료일 / 비교일: 계약납기일
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{DeliveryStatus, PurchaseOrder};
use crate::engine::classify::{
    classify, expected_delivery_date, StatusTally, WARNING_THRESHOLD_DAYS,
};

/// STEP 2 레코드별 검증 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedOrder {
    #[serde(flatten)]
    pub order: PurchaseOrder,
    /// 예상 완료일 = 발주일 + 리드타임
    pub expected_date: NaiveDate,
    /// 계약납기일 - 예상 완료일 (일)
    pub days_diff: i64,
    /// 납기 상태
    pub status: DeliveryStatus,
}

/// 전체 레코드 검증
#[instrument(skip(records), fields(count = records.len()))]
pub fn validate(records: &[PurchaseOrder]) -> Vec<ValidatedOrder> {
    records
        .iter()
        .map(|record| {
            let expected = expected_delivery_date(record.order_date, record.lead_time_days);
            let result = classify(
                Some(expected),
                record.contract_date,
                WARNING_THRESHOLD_DAYS,
            );

            ValidatedOrder {
                order: record.clone(),
                expected_date: expected,
                days_diff: result.days_diff,
                status: result.status,
            }
        })
        .collect()
}

/// 상태별 건수 집계
pub fn summarize(results: &[ValidatedOrder]) -> StatusTally {
    let mut tally = StatusTally::default();
    for result in results {
        tally.record(result.status);
    }
    tally
}
