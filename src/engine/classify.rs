// ==========================================
// SCM 납기관리 AI Agent - 납기 분류 엔진
// ==========================================
// 모든 단계가 공유하는 단일 분류 함수.
// 원천 구현의 단계별 인라인 중복을 이 함수 하나로 통합한다.
// ==========================================
// 규칙: daysDiff = comparison - reference (일 단위, floor)
//   daysDiff < 0          → Danger
//   0 <= daysDiff <= 임계 → Warning (모든 호출부에서 임계 = 2)
//   daysDiff > 임계       → Normal
//   날짜 누락             → Unknown, daysDiff = 0
// ==========================================

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::DeliveryStatus;

/// 모든 호출부에서 사용하는 주의 임계값 (일)
pub const WARNING_THRESHOLD_DAYS: i64 = 2;

// ==========================================
// Classification - 분류 결과
// ==========================================

/// 분류 결과 (상태 + 일수 차이)
///
/// 요청마다 계산되는 파생 값으로, 어디에도 저장되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// 납기 상태
    pub status: DeliveryStatus,
    /// 기준일 대비 비교일의 일수 차이 (부호 있음)
    pub days_diff: i64,
}

impl Classification {
    /// 날짜 누락 시의 결과
    pub fn unknown() -> Self {
        Self {
            status: DeliveryStatus::Unknown,
            days_diff: 0,
        }
    }
}

// ==========================================
// 분류 함수
// ==========================================

/// 기준일과 비교일로부터 납기 상태를 판정한다
///
/// # 인자
/// - reference: 기준일 (예: 예상 완료일, 계약납기일)
/// - comparison: 비교일 (예: 계약납기일, 보급요청일)
/// - threshold_days: Warning 상한 일수
///
/// # 반환
/// - 두 날짜가 모두 있으면 Danger/Warning/Normal 판정
/// - 하나라도 없으면 Unknown (daysDiff = 0)
pub fn classify(
    reference: Option<NaiveDate>,
    comparison: Option<NaiveDate>,
    threshold_days: i64,
) -> Classification {
    let (reference, comparison) = match (reference, comparison) {
        (Some(r), Some(c)) => (r, c),
        _ => return Classification::unknown(),
    };

    let days_diff = (comparison - reference).num_days();
    let status = if days_diff < 0 {
        DeliveryStatus::Danger
    } else if days_diff <= threshold_days {
        DeliveryStatus::Warning
    } else {
        DeliveryStatus::Normal
    };

    Classification { status, days_diff }
}

/// 예상 완료일 = 발주일 + 리드타임
pub fn expected_delivery_date(order_date: NaiveDate, lead_time_days: i64) -> NaiveDate {
    order_date + Duration::days(lead_time_days)
}

// ==========================================
// StatusTally - 상태별 집계
// ==========================================

/// 상태별 건수 집계
///
/// Unknown은 별도 집계되며 danger/warning/normal 합계에 포함되지 않는다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTally {
    pub danger: usize,
    pub warning: usize,
    pub normal: usize,
    pub unknown: usize,
}

impl StatusTally {
    /// 상태 하나를 집계에 반영
    pub fn record(&mut self, status: DeliveryStatus) {
        match status {
            DeliveryStatus::Danger => self.danger += 1,
            DeliveryStatus::Warning => self.warning += 1,
            DeliveryStatus::Normal => self.normal += 1,
            DeliveryStatus::Unknown => self.unknown += 1,
        }
    }

    /// 전체 건수 (unknown 포함)
    pub fn total(&self) -> usize {
        self.danger + self.warning + self.normal + self.unknown
    }
}

/// 백분율 계산 (분모 0이면 0 반환, 반올림)
pub fn percentage(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    ((numerator as f64 / denominator as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_normal_case() {
        // 발주일 2025-01-01 + 리드타임 10 → 예상 2025-01-11, 계약 2025-01-15
        let expected = expected_delivery_date(date(2025, 1, 1), 10);
        assert_eq!(expected, date(2025, 1, 11));

        let result = classify(Some(expected), Some(date(2025, 1, 15)), WARNING_THRESHOLD_DAYS);
        assert_eq!(result.days_diff, 4);
        assert_eq!(result.status, DeliveryStatus::Normal);
    }

    #[test]
    fn test_classify_danger_case() {
        // 발주일 2025-01-01 + 리드타임 20 → 예상 2025-01-21, 계약 2025-01-15
        let expected = expected_delivery_date(date(2025, 1, 1), 20);
        assert_eq!(expected, date(2025, 1, 21));

        let result = classify(Some(expected), Some(date(2025, 1, 15)), WARNING_THRESHOLD_DAYS);
        assert_eq!(result.days_diff, -6);
        assert_eq!(result.status, DeliveryStatus::Danger);
    }

    #[test]
    fn test_classify_warning_boundaries() {
        let reference = date(2025, 2, 1);

        // daysDiff = 0 → Warning
        let r = classify(Some(reference), Some(date(2025, 2, 1)), 2);
        assert_eq!(r.status, DeliveryStatus::Warning);
        assert_eq!(r.days_diff, 0);

        // daysDiff = 2 (임계 경계) → Warning
        let r = classify(Some(reference), Some(date(2025, 2, 3)), 2);
        assert_eq!(r.status, DeliveryStatus::Warning);

        // daysDiff = 3 → Normal
        let r = classify(Some(reference), Some(date(2025, 2, 4)), 2);
        assert_eq!(r.status, DeliveryStatus::Normal);

        // daysDiff = -1 → Danger
        let r = classify(Some(reference), Some(date(2025, 1, 31)), 2);
        assert_eq!(r.status, DeliveryStatus::Danger);
    }

    #[test]
    fn test_classify_missing_dates() {
        let result = classify(None, Some(date(2025, 1, 15)), 2);
        assert_eq!(result, Classification::unknown());

        let result = classify(Some(date(2025, 1, 15)), None, 2);
        assert_eq!(result.status, DeliveryStatus::Unknown);
        assert_eq!(result.days_diff, 0);
    }

    #[test]
    fn test_status_tally_partition() {
        let mut tally = StatusTally::default();
        tally.record(DeliveryStatus::Danger);
        tally.record(DeliveryStatus::Warning);
        tally.record(DeliveryStatus::Warning);
        tally.record(DeliveryStatus::Normal);
        tally.record(DeliveryStatus::Unknown);

        assert_eq!(tally.danger, 1);
        assert_eq!(tally.warning, 2);
        assert_eq!(tally.normal, 1);
        assert_eq!(tally.unknown, 1);
        assert_eq!(tally.total(), 5);
    }

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(5, 0), 0);
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 7), 71);
        assert_eq!(percentage(7, 7), 100);
    }
}
