// ==========================================
// SCM 납기관리 AI Agent - 발주 레코드 엔티티
// ==========================================
// 원천 데이터셋의 한 행. 프로세스 수명 동안 불변이며
// 어떤 엔드포인트도 레코드를 변경하지 않는다.
// 직렬화 키는 원천 PO 시트의 컬럼명을 그대로 유지한다.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{ChangeDirection, RiskGrade};

// ==========================================
// PurchaseOrder - 발주 레코드
// ==========================================

/// 발주(PO) 레코드
///
/// 원천 시트의 동적 문자열 키 대신 명명된 선택 필드를 갖는
/// 강타입 구조체. 날짜가 없는 컬럼은 Option으로 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// 구매오더 번호
    #[serde(rename = "구매오더")]
    pub po_number: String,

    /// 구분 (대형/일반)
    #[serde(rename = "구분")]
    pub category: String,

    /// 발주업체명 (공급사)
    #[serde(rename = "발주업체명")]
    pub supplier: String,

    /// 호선 번호
    #[serde(rename = "호선")]
    pub hull_no: String,

    /// 자재번호
    #[serde(rename = "자재번호")]
    pub material_no: String,

    /// 자재내역
    #[serde(rename = "자재내역")]
    pub material_desc: String,

    /// 자재구분 (기계/전장/배관/의장 등)
    #[serde(rename = "자재구분")]
    pub material_type: Option<String>,

    /// 공급사 제시 리드타임 (일)
    #[serde(rename = "LEAD TIME")]
    pub lead_time_days: i64,

    /// 발주일
    #[serde(rename = "발주일")]
    pub order_date: NaiveDate,

    /// 계약납기일
    #[serde(rename = "계약납기일")]
    pub contract_date: Option<NaiveDate>,

    /// PND (설계팀 지정 자재 입고 기한)
    #[serde(rename = "PND")]
    pub pnd: Option<NaiveDate>,

    /// 변경된 PND (개정본, 없으면 미변경)
    #[serde(rename = "변경된 PND")]
    pub revised_pnd: Option<NaiveDate>,

    /// PND 변경 플래그
    #[serde(rename = "PND 변경")]
    pub pnd_changed: bool,

    /// 보급요청일 (생산팀 자재 소요일)
    #[serde(rename = "보급요청일")]
    pub supply_request_date: Option<NaiveDate>,

    /// 2547주 입고예정일 (공급사 1차 회신)
    #[serde(rename = "2547주입고예정일")]
    pub week47_forecast: Option<NaiveDate>,

    /// 2548주 입고예정일 (공급사 2차 회신)
    #[serde(rename = "2548주입고예정일")]
    pub week48_forecast: Option<NaiveDate>,

    /// 2549주 입고예정일 (공급사 3차 회신)
    #[serde(rename = "2549주입고예정일")]
    pub week49_forecast: Option<NaiveDate>,

    /// 지연구분 (지연/주의)
    #[serde(rename = "지연구분")]
    pub delay_category: Option<String>,

    /// 결품구분 (결품)
    #[serde(rename = "결품구분")]
    pub shortage_category: Option<String>,

    /// 비고
    #[serde(rename = "비고")]
    pub remarks: Option<String>,
}

impl PurchaseOrder {
    /// 가장 최근 주차의 입고예정일 (2549주 → 2548주 → 2547주)
    pub fn latest_forecast(&self) -> Option<NaiveDate> {
        self.week49_forecast
            .or(self.week48_forecast)
            .or(self.week47_forecast)
    }

    /// 가장 이른 주차의 입고예정일 (2547주 → 2548주 → 2549주)
    pub fn earliest_forecast(&self) -> Option<NaiveDate> {
        self.week47_forecast
            .or(self.week48_forecast)
            .or(self.week49_forecast)
    }

    /// 주차별 입고예정일이 하나라도 있는지
    pub fn has_forecast(&self) -> bool {
        self.week47_forecast.is_some()
            || self.week48_forecast.is_some()
            || self.week49_forecast.is_some()
    }

    /// 2차 이후 회신(2548주/2549주)이 존재하는지 = 일정 변동 항목
    pub fn has_revised_forecast(&self) -> bool {
        self.week48_forecast.is_some() || self.week49_forecast.is_some()
    }

    /// 최초 회신 대비 최종 회신의 추세 (일수 차이, 방향)
    ///
    /// 회신이 2건 미만이면 None. 기준 주차 선택은 DESIGN.md의
    /// 미해결 질문 결정 사항을 따른다.
    pub fn forecast_trend(&self) -> Option<(i64, ChangeDirection)> {
        let first = self.earliest_forecast()?;
        let last = self.latest_forecast()?;
        if first == last && self.forecast_count() < 2 {
            return None;
        }
        let days = (last - first).num_days();
        Some((days, ChangeDirection::from_days(days)))
    }

    fn forecast_count(&self) -> usize {
        [
            self.week47_forecast,
            self.week48_forecast,
            self.week49_forecast,
        ]
        .iter()
        .filter(|d| d.is_some())
        .count()
    }

    /// 지연 항목 여부 (지연구분 = "지연")
    pub fn is_delayed(&self) -> bool {
        self.delay_category.as_deref() == Some("지연")
    }

    /// 주의 항목 여부 (지연구분 = "주의")
    pub fn is_caution(&self) -> bool {
        self.delay_category.as_deref() == Some("주의")
    }

    /// 결품 항목 여부 (결품구분 = "결품")
    pub fn is_shortage(&self) -> bool {
        self.shortage_category.as_deref() == Some("결품")
    }

    /// 긴급 보급 요청 여부 (비고에 "긴급" 포함)
    pub fn is_urgent(&self) -> bool {
        self.remarks
            .as_deref()
            .map(|r| r.contains("긴급"))
            .unwrap_or(false)
    }

    /// PND가 실제로 변경된 항목인지 (플래그 + 개정값 존재)
    pub fn has_pnd_change(&self) -> bool {
        self.pnd_changed && self.revised_pnd.is_some() && self.pnd.is_some()
    }

    /// STEP 8 위험 등급 (결품 우선, 그 외 지연)
    pub fn risk_grade(&self) -> Option<RiskGrade> {
        if self.is_shortage() {
            Some(RiskGrade::Critical)
        } else if self.is_delayed() {
            Some(RiskGrade::High)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base_order() -> PurchaseOrder {
        PurchaseOrder {
            po_number: "PO-2579-001".to_string(),
            category: "대형".to_string(),
            supplier: "SNRI SCHUF".to_string(),
            hull_no: "2579".to_string(),
            material_no: "2579AVGTKWCG1030".to_string(),
            material_desc: "GATE VALVE 5K-200A".to_string(),
            material_type: Some("기계".to_string()),
            lead_time_days: 90,
            order_date: date(2024, 10, 15),
            contract_date: Some(date(2025, 1, 20)),
            pnd: Some(date(2025, 2, 1)),
            revised_pnd: None,
            pnd_changed: false,
            supply_request_date: Some(date(2025, 2, 5)),
            week47_forecast: Some(date(2025, 1, 18)),
            week48_forecast: Some(date(2025, 1, 25)),
            week49_forecast: Some(date(2025, 2, 3)),
            delay_category: Some("지연".to_string()),
            shortage_category: None,
            remarks: None,
        }
    }

    #[test]
    fn test_forecast_selection_order() {
        let mut po = base_order();
        assert_eq!(po.latest_forecast(), Some(date(2025, 2, 3)));
        assert_eq!(po.earliest_forecast(), Some(date(2025, 1, 18)));

        po.week49_forecast = None;
        assert_eq!(po.latest_forecast(), Some(date(2025, 1, 25)));

        po.week48_forecast = None;
        po.week47_forecast = None;
        assert_eq!(po.latest_forecast(), None);
        assert!(!po.has_forecast());
    }

    #[test]
    fn test_forecast_trend_needs_two_replies() {
        let mut po = base_order();
        let (days, direction) = po.forecast_trend().unwrap();
        assert_eq!(days, 16);
        assert_eq!(direction, ChangeDirection::Later);

        po.week48_forecast = None;
        po.week49_forecast = None;
        assert!(po.forecast_trend().is_none());
    }

    #[test]
    fn test_risk_grade_shortage_wins() {
        let mut po = base_order();
        assert_eq!(po.risk_grade(), Some(RiskGrade::High));

        po.shortage_category = Some("결품".to_string());
        assert_eq!(po.risk_grade(), Some(RiskGrade::Critical));

        po.shortage_category = None;
        po.delay_category = None;
        assert_eq!(po.risk_grade(), None);
    }

    #[test]
    fn test_wire_field_names_preserved() {
        let po = base_order();
        let value = serde_json::to_value(&po).unwrap();
        assert_eq!(value["발주업체명"], "SNRI SCHUF");
        assert_eq!(value["LEAD TIME"], 90);
        assert_eq!(value["계약납기일"], "2025-01-20");
        assert!(value["변경된 PND"].is_null());
    }
}
