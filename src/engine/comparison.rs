// ==========================================
// SCM 납기관리 AI Agent - STEP 8 비교 분석
// ==========================================
// 주차별 입고예정일 회신이 있는 항목의 추세와
// 지연/결품 위험 항목을 집계한다.
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{ChangeDirection, PurchaseOrder, RiskGrade};

/// 결품 항목 권장 조치
const RECOMMEND_SHORTAGE: &str = "긴급 대체 공급사 검토 필요";
/// 지연 항목 권장 조치
const RECOMMEND_DELAY: &str = "공급사 연락 및 일정 조정 협의";

/// 주차별 회신이 있는 항목 + 회신 추세
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastItem {
    #[serde(flatten)]
    pub order: PurchaseOrder,
    /// 최초 회신 대비 최종 회신의 일수 차이 (회신 2건 미만이면 None)
    pub trend_days_diff: Option<i64>,
    /// 추세 방향
    pub trend: Option<ChangeDirection>,
}

/// 위험 항목 (지연 또는 결품)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    #[serde(flatten)]
    pub order: PurchaseOrder,
    pub risk_level: RiskGrade,
    pub recommendation: String,
}

/// STEP 8 집계
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_items: usize,
    pub delayed: usize,
    pub caution: usize,
    pub shortage: usize,
    /// 결품 건수와 동일 (원천 계약 유지)
    pub critical: usize,
    /// 2548주/2549주 회신이 있는 항목 수 (일정 변동)
    pub with_schedule_changes: usize,
}

/// 주차별 회신이 있는 항목 수집
#[instrument(skip(records), fields(count = records.len()))]
pub fn forecast_items(records: &[PurchaseOrder]) -> Vec<ForecastItem> {
    records
        .iter()
        .filter(|record| record.has_forecast())
        .map(|record| {
            let trend = record.forecast_trend();
            ForecastItem {
                order: record.clone(),
                trend_days_diff: trend.map(|(days, _)| days),
                trend: trend.map(|(_, direction)| direction),
            }
        })
        .collect()
}

/// 위험 항목 수집 (지연구분=지연 또는 결품구분=결품)
pub fn risk_items(records: &[PurchaseOrder]) -> Vec<RiskItem> {
    records
        .iter()
        .filter_map(|record| {
            let risk_level = record.risk_grade()?;
            let recommendation = match risk_level {
                RiskGrade::Critical => RECOMMEND_SHORTAGE,
                RiskGrade::High => RECOMMEND_DELAY,
            };

            Some(RiskItem {
                order: record.clone(),
                risk_level,
                recommendation: recommendation.to_string(),
            })
        })
        .collect()
}

/// 비교 분석 집계
pub fn summarize(records: &[PurchaseOrder], forecasts: &[ForecastItem]) -> ComparisonSummary {
    let shortage = records.iter().filter(|r| r.is_shortage()).count();

    ComparisonSummary {
        total_items: records.len(),
        delayed: records.iter().filter(|r| r.is_delayed()).count(),
        caution: records.iter().filter(|r| r.is_caution()).count(),
        shortage,
        critical: shortage,
        with_schedule_changes: forecasts
            .iter()
            .filter(|f| f.order.has_revised_forecast())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::demo_orders;

    #[test]
    fn test_forecast_items_demo_dataset() {
        let records = demo_orders();
        let items = forecast_items(&records);
        assert_eq!(items.len(), 11);

        // 3차까지 회신한 항목은 추세가 계산된다
        let air_winch = items
            .iter()
            .find(|i| i.order.material_no == "2539AVRHAWCG4150-M")
            .unwrap();
        assert_eq!(air_winch.trend_days_diff, Some(16));
        assert_eq!(air_winch.trend, Some(ChangeDirection::Later));

        // 1차 회신만 있는 항목은 추세가 없다
        let single = items
            .iter()
            .find(|i| i.order.po_number == "PO-2579-0002")
            .unwrap();
        assert!(single.trend.is_none());
    }

    #[test]
    fn test_risk_items_grading() {
        let records = demo_orders();
        let risks = risk_items(&records);

        // 지연 6건 중 결품 2건이 Critical로 승격, 나머지 4건은 High
        assert_eq!(risks.len(), 6);
        let critical = risks
            .iter()
            .filter(|r| r.risk_level == RiskGrade::Critical)
            .count();
        assert_eq!(critical, 2);

        for risk in &risks {
            match risk.risk_level {
                RiskGrade::Critical => assert_eq!(risk.recommendation, RECOMMEND_SHORTAGE),
                RiskGrade::High => assert_eq!(risk.recommendation, RECOMMEND_DELAY),
            }
        }
    }

    #[test]
    fn test_summarize_demo_dataset() {
        let records = demo_orders();
        let forecasts = forecast_items(&records);
        let summary = summarize(&records, &forecasts);

        assert_eq!(summary.total_items, 16);
        assert_eq!(summary.delayed, 6);
        assert_eq!(summary.caution, 3);
        assert_eq!(summary.shortage, 2);
        assert_eq!(summary.critical, summary.shortage);
        assert_eq!(summary.with_schedule_changes, 8);
    }

    #[test]
    fn test_summarize_empty_dataset() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.delayed, 0);
        assert_eq!(summary.with_schedule_changes, 0);
    }
}
