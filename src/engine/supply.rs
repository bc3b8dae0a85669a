// ==========================================
// SCM 납기관리 AI Agent - STEP 4 보급 요청 현황
// ==========================================
// 보급요청일 유무와 긴급 요청 건수를 집계한다.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::PurchaseOrder;

/// STEP 4 집계
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplySummary {
    /// 보급요청일이 있는 건수
    pub with_request: usize,
    /// 보급요청일이 없는 건수
    pub without_request: usize,
    /// 긴급 요청 건수 (비고에 "긴급" 포함)
    pub urgent: usize,
}

/// 보급 요청 집계
pub fn summarize(records: &[PurchaseOrder]) -> SupplySummary {
    let with_request = records
        .iter()
        .filter(|r| r.supply_request_date.is_some())
        .count();

    SupplySummary {
        with_request,
        without_request: records.len() - with_request,
        urgent: records.iter().filter(|r| r.is_urgent()).count(),
    }
}

/// 긴급 요청 레코드 추출
pub fn urgent_items(records: &[PurchaseOrder]) -> Vec<PurchaseOrder> {
    records.iter().filter(|r| r.is_urgent()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::demo_orders;

    #[test]
    fn test_summarize_demo_dataset() {
        let records = demo_orders();
        let summary = summarize(&records);

        assert_eq!(summary.with_request, 14);
        assert_eq!(summary.without_request, 2);
        assert_eq!(summary.urgent, 4);
        assert_eq!(
            summary.with_request + summary.without_request,
            records.len()
        );
    }

    #[test]
    fn test_urgent_items_all_flagged() {
        let records = demo_orders();
        let urgent = urgent_items(&records);
        assert_eq!(urgent.len(), 4);
        assert!(urgent.iter().all(|r| r.is_urgent()));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.with_request, 0);
        assert_eq!(summary.without_request, 0);
        assert_eq!(summary.urgent, 0);
    }
}
