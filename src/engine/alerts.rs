// ==========================================
// SCM 납기관리 AI Agent - 알림 피드 구성
// ==========================================
// PRD v2 프로세스명과 연동된 고정 알림 6건.
// 생성 로직은 없으며 각 알림은 관련 레코드 일부를 포함한다.
// ==========================================

use crate::domain::{Alert, AlertKind, PurchaseOrder};

/// 조건에 맞는 레코드를 상한까지 추출
fn sample<F>(records: &[PurchaseOrder], predicate: F, limit: usize) -> Vec<PurchaseOrder>
where
    F: Fn(&PurchaseOrder) -> bool,
{
    records
        .iter()
        .filter(|r| predicate(r))
        .take(limit)
        .cloned()
        .collect()
}

/// 고정 알림 피드 구성
pub fn build_alerts(records: &[PurchaseOrder]) -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            kind: AlertKind::Danger,
            icon: "🔴".to_string(),
            title: "납기 지연 위험".to_string(),
            description: "2579AVGTKWCG1030 외 4건".to_string(),
            detail: "STEP ② 계약 납기일 검증 - 계약납기 초과 예상".to_string(),
            time: "방금 전".to_string(),
            is_new: true,
            items: sample(records, |r| r.is_delayed(), 5),
        },
        Alert {
            id: 2,
            kind: AlertKind::Warning,
            icon: "⚠️".to_string(),
            title: "PND 변경 감지".to_string(),
            description: "2582AVEJBUBA2310".to_string(),
            detail: "STEP ③ PND 변경 사항 검토 - 17일 앞당겨짐".to_string(),
            time: "5분 전".to_string(),
            is_new: true,
            items: sample(records, |r| r.revised_pnd.is_some(), 3),
        },
        Alert {
            id: 3,
            kind: AlertKind::Urgent,
            icon: "📦".to_string(),
            title: "긴급 보급 요청".to_string(),
            description: "호선 2583 - 생산1팀 김철수".to_string(),
            detail: "STEP ④ 보급 요청일 검토 - 즉시 처리 필요".to_string(),
            time: "10분 전".to_string(),
            is_new: true,
            items: sample(records, |r| r.is_urgent(), 3),
        },
        Alert {
            id: 4,
            kind: AlertKind::Info,
            icon: "📧".to_string(),
            title: "회신 미제출 알림".to_string(),
            description: "SNRI SCHUF, FUJI TRADING CO. 외 2개 협력사".to_string(),
            detail: "STEP ⑦ 납기 예정일 회신 수집 - 기한 D-1".to_string(),
            time: "1시간 전".to_string(),
            is_new: false,
            items: vec![],
        },
        Alert {
            id: 5,
            kind: AlertKind::Warning,
            icon: "📈".to_string(),
            title: "납기 변동 경고".to_string(),
            description: "2539AVRHAWCG4150-M".to_string(),
            detail: "STEP ⑧ 비교 분석 - 3차 연속 지연".to_string(),
            time: "2시간 전".to_string(),
            is_new: false,
            items: sample(records, |r| r.week49_forecast.is_some(), 2),
        },
        Alert {
            id: 6,
            kind: AlertKind::Danger,
            icon: "🔴".to_string(),
            title: "납기 지연 예상".to_string(),
            description: "3차 납기예정일 > 보급요청일".to_string(),
            detail: "STEP ⑧ 비교 분석 - 5.2 적정성 판단 위험".to_string(),
            time: "3시간 전".to_string(),
            is_new: false,
            items: sample(
                records,
                |r| r.week49_forecast.is_some() && r.supply_request_date.is_some(),
                2,
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::demo_orders;

    #[test]
    fn test_build_alerts_shape() {
        let records = demo_orders();
        let alerts = build_alerts(&records);

        assert_eq!(alerts.len(), 6);
        assert_eq!(alerts.iter().filter(|a| a.is_new).count(), 3);

        // 지연 위험 알림: 지연 레코드 상한 5건
        assert_eq!(alerts[0].items.len(), 5);
        assert!(alerts[0].items.iter().all(|r| r.is_delayed()));

        // PND 변경 알림: 개정 PND 레코드 3건
        assert_eq!(alerts[1].items.len(), 3);

        // 회신 미제출 알림은 레코드를 포함하지 않는다
        assert!(alerts[3].items.is_empty());
    }

    #[test]
    fn test_build_alerts_empty_dataset() {
        let alerts = build_alerts(&[]);
        assert_eq!(alerts.len(), 6);
        assert!(alerts.iter().all(|a| a.items.is_empty()));
    }
}
