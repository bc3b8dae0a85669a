// ==========================================
// SCM 납기관리 AI Agent - 도메인 타입 정의
// ==========================================
// 모든 단계에서 공유하는 상태/등급 열거형
// 직렬화 형식: 프런트엔드 계약과 동일한 lowercase
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 납기 상태 (Delivery Status)
// ==========================================
// 판정 규칙: daysDiff < 0 → Danger, 0..=임계값 → Warning,
// 초과 → Normal, 날짜 누락 → Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Danger,  // 위험
    Warning, // 주의
    Normal,  // 정상
    Unknown, // 미정 (날짜 누락)
}

impl DeliveryStatus {
    /// 집계 대상 여부 (Unknown은 danger/warning/normal 집계에서 제외)
    pub fn is_classified(&self) -> bool {
        !matches!(self, DeliveryStatus::Unknown)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::Danger => write!(f, "danger"),
            DeliveryStatus::Warning => write!(f, "warning"),
            DeliveryStatus::Normal => write!(f, "normal"),
            DeliveryStatus::Unknown => write!(f, "unknown"),
        }
    }
}

// ==========================================
// PND 변경 방향 (Change Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Earlier, // 앞당겨짐
    Later,   // 미뤄짐
    Same,    // 변동 없음
}

impl ChangeDirection {
    /// 일수 차이로부터 방향 판정
    pub fn from_days(days_diff: i64) -> Self {
        if days_diff < 0 {
            ChangeDirection::Earlier
        } else if days_diff > 0 {
            ChangeDirection::Later
        } else {
            ChangeDirection::Same
        }
    }
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDirection::Earlier => write!(f, "earlier"),
            ChangeDirection::Later => write!(f, "later"),
            ChangeDirection::Same => write!(f, "same"),
        }
    }
}

// ==========================================
// 메일 발송 상태 (Mail Status)
// ==========================================
// 데모에서는 전체 Sent 고정 (실제 발송 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailStatus {
    Sent,    // 발송 완료
    Pending, // 대기 중
    Failed,  // 발송 실패
}

impl fmt::Display for MailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailStatus::Sent => write!(f, "sent"),
            MailStatus::Pending => write!(f, "pending"),
            MailStatus::Failed => write!(f, "failed"),
        }
    }
}

// ==========================================
// 위험 등급 (Risk Grade) - STEP 8 비교 분석
// ==========================================
// 결품 → Critical, 지연 → High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskGrade {
    High,     // 지연
    Critical, // 결품
}

impl fmt::Display for RiskGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskGrade::High => write!(f, "high"),
            RiskGrade::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 알림 유형 (Alert Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Danger,  // 위험
    Warning, // 경고
    Urgent,  // 긴급
    Info,    // 정보
}

// ==========================================
// 단계 실행 상태 (Step State) - 클라이언트 전용
// ==========================================
// 상태 전이: Pending -> Processing -> {Completed | Error}
// Pending 복귀는 명시적 reset으로만 가능
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Pending,    // 대기
    Processing, // 처리 중
    Completed,  // 완료
    Error,      // 실패
}

impl StepState {
    /// 해당 상태로의 전이가 허용되는지 검사
    pub fn can_transition_to(&self, next: StepState) -> bool {
        matches!(
            (self, next),
            (StepState::Pending, StepState::Processing)
                | (StepState::Processing, StepState::Completed)
                | (StepState::Processing, StepState::Error)
        )
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepState::Pending => write!(f, "pending"),
            StepState::Processing => write!(f, "processing"),
            StepState::Completed => write!(f, "completed"),
            StepState::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_status_serde_format() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Danger).unwrap(),
            "\"danger\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Unknown).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn test_change_direction_from_days() {
        assert_eq!(ChangeDirection::from_days(-17), ChangeDirection::Earlier);
        assert_eq!(ChangeDirection::from_days(3), ChangeDirection::Later);
        assert_eq!(ChangeDirection::from_days(0), ChangeDirection::Same);
    }

    #[test]
    fn test_step_state_transitions() {
        assert!(StepState::Pending.can_transition_to(StepState::Processing));
        assert!(StepState::Processing.can_transition_to(StepState::Completed));
        assert!(StepState::Processing.can_transition_to(StepState::Error));

        // 역방향/건너뛰기 전이는 금지
        assert!(!StepState::Pending.can_transition_to(StepState::Completed));
        assert!(!StepState::Completed.can_transition_to(StepState::Pending));
        assert!(!StepState::Error.can_transition_to(StepState::Processing));
    }
}
