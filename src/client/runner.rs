// ==========================================
// SCM 납기관리 AI Agent - 순차 자동 실행기
// ==========================================
// 8단계를 순서대로 페치하고 첫 실패에서 중단한다.
// 단계 간 지연은 주입 가능하다 (UI 페이싱용, 정확성과 무관).
// 페치는 trait 경계 뒤에 두어 테스트에서 가짜 전송을 주입한다.
// ==========================================

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::client::view_model::{DashboardViewModel, StepDefinition, STEPS};

// ==========================================
// StepFetcher - 전송 경계
// ==========================================

/// 단계 응답 페처
#[async_trait]
pub trait StepFetcher {
    /// 단계 엔드포인트 호출 후 JSON 반환
    async fn fetch(&self, step: &StepDefinition) -> anyhow::Result<Value>;
}

/// reqwest 기반 HTTP 페처
pub struct HttpStepFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStepFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl StepFetcher for HttpStepFetcher {
    async fn fetch(&self, step: &StepDefinition) -> anyhow::Result<Value> {
        let url = format!("{}{}", self.base_url, step.api_path);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }
}

// ==========================================
// SequentialRunner
// ==========================================

/// 자동 실행 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// 완료된 단계 수
    pub completed: usize,
    /// 실패한 단계 인덱스 (없으면 None)
    pub failed_step: Option<usize>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed_step.is_none()
    }
}

/// 순차 자동 실행기
///
/// 병렬 실행과 취소는 지원하지 않는다. 실행 중 재진입은
/// 거부되고 기존 뷰모델 상태가 유지된다.
pub struct SequentialRunner<F: StepFetcher> {
    fetcher: F,
    /// 단계 간 지연 (0이면 지연 없음)
    delay: Duration,
}

impl<F: StepFetcher> SequentialRunner<F> {
    pub fn new(fetcher: F, delay: Duration) -> Self {
        Self { fetcher, delay }
    }

    /// 전체 단계 자동 실행
    ///
    /// 실행 전 뷰모델을 리셋하고 0..7 순서로 페치한다.
    /// 단계 실패 시 해당 단계를 Error로 표시하고 즉시 중단한다.
    pub async fn run(&self, vm: &mut DashboardViewModel) -> RunReport {
        if vm.is_running() {
            warn!("자동 실행이 이미 진행 중입니다");
            return RunReport {
                completed: 0,
                failed_step: None,
            };
        }

        vm.reset();
        let mut completed = 0;

        for (index, step) in STEPS.iter().enumerate() {
            // reset 직후의 Pending 단계만 만나므로 전이는 항상 성공한다
            if vm.begin(index).is_err() {
                break;
            }

            match self.fetcher.fetch(step).await {
                Ok(payload) => {
                    info!(step = step.id, name = step.name, "단계 완료");
                    let _ = vm.complete(index, payload);
                    completed += 1;
                }
                Err(error) => {
                    warn!(step = step.id, %error, "단계 실패, 자동 실행 중단");
                    let _ = vm.fail(index);
                    return RunReport {
                        completed,
                        failed_step: Some(index),
                    };
                }
            }

            if !self.delay.is_zero() && index + 1 < STEPS.len() {
                tokio::time::sleep(self.delay).await;
            }
        }

        RunReport {
            completed,
            failed_step: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StepState;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 지정 단계부터 실패하는 가짜 페처
    struct FakeFetcher {
        fail_from: Option<usize>,
        calls: AtomicUsize,
    }

    impl FakeFetcher {
        fn ok() -> Self {
            Self {
                fail_from: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing_at(index: usize) -> Self {
            Self {
                fail_from: Some(index),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl StepFetcher for FakeFetcher {
        async fn fetch(&self, step: &StepDefinition) -> anyhow::Result<Value> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if Some(call) == self.fail_from {
                anyhow::bail!("네트워크 오류 시뮬레이션");
            }
            Ok(json!({ "step": step.id }))
        }
    }

    #[tokio::test]
    async fn test_run_all_steps_success() {
        let runner = SequentialRunner::new(FakeFetcher::ok(), Duration::ZERO);
        let mut vm = DashboardViewModel::new();

        let report = runner.run(&mut vm).await;
        assert!(report.is_success());
        assert_eq!(report.completed, 8);
        assert!(vm.all_completed());

        // 각 단계의 응답이 캐시되어 있어야 한다
        for i in 0..8 {
            assert_eq!(vm.payload_of(i).unwrap()["step"], (i + 1) as u64);
        }
    }

    #[tokio::test]
    async fn test_run_halts_at_first_failure() {
        let runner = SequentialRunner::new(FakeFetcher::failing_at(3), Duration::ZERO);
        let mut vm = DashboardViewModel::new();

        let report = runner.run(&mut vm).await;
        assert!(!report.is_success());
        assert_eq!(report.completed, 3);
        assert_eq!(report.failed_step, Some(3));

        assert_eq!(vm.state_of(2), Some(StepState::Completed));
        assert_eq!(vm.state_of(3), Some(StepState::Error));
        // 실패 이후 단계는 시작되지 않는다
        assert_eq!(vm.state_of(4), Some(StepState::Pending));
        assert_eq!(vm.first_error(), Some(3));
    }

    #[tokio::test]
    async fn test_run_rejects_reentry() {
        let runner = SequentialRunner::new(FakeFetcher::ok(), Duration::ZERO);
        let mut vm = DashboardViewModel::new();

        // 실행 중 상태를 흉내낸다
        vm.begin(0).unwrap();
        let report = runner.run(&mut vm).await;
        assert_eq!(report.completed, 0);
        // 기존 상태는 건드리지 않는다
        assert_eq!(vm.state_of(0), Some(StepState::Processing));
    }

    #[tokio::test]
    async fn test_rerun_after_reset() {
        let runner = SequentialRunner::new(FakeFetcher::failing_at(0), Duration::ZERO);
        let mut vm = DashboardViewModel::new();

        let report = runner.run(&mut vm).await;
        assert_eq!(report.failed_step, Some(0));

        // 재실행은 내부에서 reset을 거치므로 허용된다
        let runner = SequentialRunner::new(FakeFetcher::ok(), Duration::ZERO);
        let report = runner.run(&mut vm).await;
        assert!(report.is_success());
        assert!(vm.all_completed());
    }
}
