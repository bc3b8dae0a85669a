// ==========================================
// SCM 납기관리 AI Agent - STEP 5 적정성 판단
// ==========================================
// 계약납기일과 보급요청일의 간격으로 적정성을 판정한다.
// 기준일: 계약납기일 / 비교일: 보급요청일
// daysDiff < 0 이면 계약납기가 보급요청보다 늦다 → 위험
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{DeliveryStatus, PurchaseOrder};
use crate::engine::classify::{classify, StatusTally, WARNING_THRESHOLD_DAYS};

/// STEP 5 레코드별 판정 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessedOrder {
    #[serde(flatten)]
    pub order: PurchaseOrder,
    /// 보급요청일 - 계약납기일 (일)
    pub days_diff: i64,
    /// 적정성 상태 (4단계)
    pub status: DeliveryStatus,
}

/// 전체 레코드 판정
///
/// 두 날짜 중 하나라도 없으면 Unknown으로 분류되며
/// danger/warning/normal 집계에서 제외된다.
#[instrument(skip(records), fields(count = records.len()))]
pub fn assess(records: &[PurchaseOrder]) -> Vec<AssessedOrder> {
    records
        .iter()
        .map(|record| {
            let result = classify(
                record.contract_date,
                record.supply_request_date,
                WARNING_THRESHOLD_DAYS,
            );

            AssessedOrder {
                order: record.clone(),
                days_diff: result.days_diff,
                status: result.status,
            }
        })
        .collect()
}

/// 상태별 건수 집계 (unknown 포함)
pub fn summarize(results: &[AssessedOrder]) -> StatusTally {
    let mut tally = StatusTally::default();
    for result in results {
        tally.record(result.status);
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::demo_orders;

    #[test]
    fn test_assess_demo_dataset_partition() {
        let records = demo_orders();
        let results = assess(&records);
        let tally = summarize(&results);

        // danger + warning + normal + unknown == 전체 건수
        assert_eq!(tally.total(), records.len());
        assert_eq!(tally.danger, 2);
        assert_eq!(tally.warning, 2);
        assert_eq!(tally.normal, 9);
        assert_eq!(tally.unknown, 3);
    }

    #[test]
    fn test_assess_danger_record() {
        let records = demo_orders();
        let results = assess(&records);

        // PO-2583-0005: 계약 2025-02-01, 보급요청 2025-01-30 → -2일 위험
        let main_engine = results
            .iter()
            .find(|r| r.order.po_number == "PO-2583-0005")
            .unwrap();
        assert_eq!(main_engine.days_diff, -2);
        assert_eq!(main_engine.status, DeliveryStatus::Danger);
    }

    #[test]
    fn test_assess_unknown_records_in_listing() {
        let records = demo_orders();
        let results = assess(&records);

        // unknown 레코드도 목록에는 포함된다
        let unknowns: Vec<_> = results
            .iter()
            .filter(|r| !r.status.is_classified())
            .collect();
        assert_eq!(unknowns.len(), 3);
        assert!(unknowns
            .iter()
            .all(|r| r.status == DeliveryStatus::Unknown && r.days_diff == 0));
    }
}
