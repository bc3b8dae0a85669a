// ==========================================
// SCM 납기관리 AI Agent - 대시보드 뷰모델
// ==========================================
// 전역 가변 상태 대신 명시적 뷰모델 구조체를 사용한다.
// 단계별 상태 전이는 Pending -> Processing -> {Completed | Error}
// 만 허용되며, Pending 복귀는 reset()으로만 가능하다.
// ==========================================

use serde_json::Value;
use thiserror::Error;

use crate::domain::StepState;

/// 워크플로우 단계 수
pub const STEP_COUNT: usize = 8;

/// 단계 정의 (이름 + API 경로)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: u8,
    pub name: &'static str,
    pub api_path: &'static str,
}

/// 8단계 워크플로우 정의
pub const STEPS: [StepDefinition; STEP_COUNT] = [
    StepDefinition { id: 1, name: "PO 추출", api_path: "/api/step1/po-extract" },
    StepDefinition { id: 2, name: "납기 검증", api_path: "/api/step2/delivery-validation" },
    StepDefinition { id: 3, name: "PND 변경", api_path: "/api/step3/pnd-changes" },
    StepDefinition { id: 4, name: "보급 요청", api_path: "/api/step4/supply-requests" },
    StepDefinition { id: 5, name: "적정성 판단", api_path: "/api/step5/appropriateness" },
    StepDefinition { id: 6, name: "메일 발송", api_path: "/api/step6/email-status" },
    StepDefinition { id: 7, name: "회신 수집", api_path: "/api/step7/response-collection" },
    StepDefinition { id: 8, name: "비교 분석", api_path: "/api/step8/comparison-analysis" },
];

/// 뷰모델 에러
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ViewModelError {
    #[error("허용되지 않는 상태 전이: step={step}, {from} -> {to}")]
    InvalidTransition {
        step: usize,
        from: StepState,
        to: StepState,
    },

    #[error("단계 인덱스 범위 초과: {0}")]
    StepOutOfRange(usize),
}

/// 단계 슬롯 (상태 + 캐시된 응답)
#[derive(Debug, Clone, Default)]
pub struct StepSlot {
    state: Option<StepState>,
    payload: Option<Value>,
}

// ==========================================
// DashboardViewModel
// ==========================================

/// 대시보드 뷰모델
///
/// 단계 상태 배열과 단계별 응답 캐시를 보유한다.
/// 렌더러는 이 구조체의 불변 참조만 받는다.
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    steps: [StepSlot; STEP_COUNT],
}

impl DashboardViewModel {
    /// 전 단계 Pending 상태로 생성
    pub fn new() -> Self {
        let mut vm = Self {
            steps: Default::default(),
        };
        vm.reset();
        vm
    }

    /// 명시적 리셋: 전 단계를 Pending으로 되돌리고 캐시를 비운다
    pub fn reset(&mut self) {
        for slot in &mut self.steps {
            slot.state = Some(StepState::Pending);
            slot.payload = None;
        }
    }

    /// 단계 상태 조회
    pub fn state_of(&self, index: usize) -> Option<StepState> {
        self.steps.get(index).and_then(|s| s.state)
    }

    /// 캐시된 응답 조회
    pub fn payload_of(&self, index: usize) -> Option<&Value> {
        self.steps.get(index).and_then(|s| s.payload.as_ref())
    }

    /// Pending -> Processing 전이 (페치 시작)
    pub fn begin(&mut self, index: usize) -> Result<(), ViewModelError> {
        self.transition(index, StepState::Processing)
    }

    /// Processing -> Completed 전이 + 응답 캐시
    pub fn complete(&mut self, index: usize, payload: Value) -> Result<(), ViewModelError> {
        self.transition(index, StepState::Completed)?;
        if let Some(slot) = self.steps.get_mut(index) {
            slot.payload = Some(payload);
        }
        Ok(())
    }

    /// Processing -> Error 전이 (네트워크/파싱 실패)
    pub fn fail(&mut self, index: usize) -> Result<(), ViewModelError> {
        self.transition(index, StepState::Error)
    }

    /// 실행 중인 단계가 있는지 (자동 실행 재진입 방지)
    pub fn is_running(&self) -> bool {
        self.steps
            .iter()
            .any(|s| s.state == Some(StepState::Processing))
    }

    /// 전 단계 완료 여부
    pub fn all_completed(&self) -> bool {
        self.steps
            .iter()
            .all(|s| s.state == Some(StepState::Completed))
    }

    /// 첫 번째 실패 단계 인덱스
    pub fn first_error(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.state == Some(StepState::Error))
    }

    fn transition(&mut self, index: usize, next: StepState) -> Result<(), ViewModelError> {
        let slot = self
            .steps
            .get_mut(index)
            .ok_or(ViewModelError::StepOutOfRange(index))?;
        let current = slot.state.unwrap_or(StepState::Pending);

        if !current.can_transition_to(next) {
            return Err(ViewModelError::InvalidTransition {
                step: index,
                from: current,
                to: next,
            });
        }

        slot.state = Some(next);
        Ok(())
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
