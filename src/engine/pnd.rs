// ==========================================
// SCM 납기관리 AI Agent - STEP 3 PND 변경 검토
// ==========================================
// 변경된 PND가 있는 레코드만 추려 변경 방향과 일수를 계산한다.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::{ChangeDirection, PurchaseOrder};

/// STEP 3 변경 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PndChange {
    #[serde(flatten)]
    pub order: PurchaseOrder,
    /// 변경된 PND - 원래 PND (일)
    pub days_diff: i64,
    /// 변경 방향
    pub direction: ChangeDirection,
}

/// STEP 3 집계
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PndChangeSummary {
    pub total_changes: usize,
    pub earlier: usize,
    pub later: usize,
    pub no_change: usize,
}

/// 변경 레코드 수집
///
/// PND 변경 플래그와 개정값이 모두 있는 레코드만 대상이다.
pub fn collect_changes(records: &[PurchaseOrder]) -> Vec<PndChange> {
    records
        .iter()
        .filter(|record| record.has_pnd_change())
        .filter_map(|record| {
            let original = record.pnd?;
            let revised = record.revised_pnd?;
            let days_diff = (revised - original).num_days();

            Some(PndChange {
                order: record.clone(),
                days_diff,
                direction: ChangeDirection::from_days(days_diff),
            })
        })
        .collect()
}

/// 방향별 집계
pub fn summarize(changes: &[PndChange], total_records: usize) -> PndChangeSummary {
    let earlier = changes
        .iter()
        .filter(|c| c.direction == ChangeDirection::Earlier)
        .count();
    let later = changes
        .iter()
        .filter(|c| c.direction == ChangeDirection::Later)
        .count();

    PndChangeSummary {
        total_changes: changes.len(),
        earlier,
        later,
        no_change: total_records.saturating_sub(changes.len()),
    }
}
