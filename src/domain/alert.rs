// ==========================================
// SCM 납기관리 AI Agent - 알림 엔티티
// ==========================================
// 고정 알림 피드의 레코드. 생성 로직 없이 데모용으로
// 하드코딩되며 관련 발주 레코드 일부를 포함한다.
// ==========================================

use serde::{Deserialize, Serialize};

use super::purchase_order::PurchaseOrder;
use super::types::AlertKind;

/// 알림 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// 알림 ID
    pub id: u32,
    /// 알림 유형
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// 표시 아이콘
    pub icon: String,
    /// 제목
    pub title: String,
    /// 요약 (대상 자재/호선)
    pub description: String,
    /// 상세 (관련 STEP 설명)
    pub detail: String,
    /// 상대 시각 표시 문자열
    pub time: String,
    /// 미확인 여부
    pub is_new: bool,
    /// 관련 발주 레코드 샘플 (상한 적용)
    pub items: Vec<PurchaseOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_wire_format() {
        let alert = Alert {
            id: 1,
            kind: AlertKind::Danger,
            icon: "🔴".to_string(),
            title: "납기 지연 위험".to_string(),
            description: "2579AVGTKWCG1030 외 4건".to_string(),
            detail: "STEP ② 계약 납기일 검증".to_string(),
            time: "방금 전".to_string(),
            is_new: true,
            items: vec![],
        };

        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["type"], "danger");
        assert_eq!(value["isNew"], true);
        assert!(value["items"].as_array().unwrap().is_empty());
    }
}
