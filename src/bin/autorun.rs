// ==========================================
// 조선 SCM 납기관리 AI Agent - 자동 실행 클라이언트
// ==========================================
// 서버의 8단계 엔드포인트를 순서대로 호출하고
// 단계별 요약 프래그먼트를 출력한다.
// 첫 실패에서 중단하며 종료 코드로 결과를 알린다.
// ==========================================

use std::time::Duration;

use scm_delivery_agent::client::{render, view_model::STEPS};
use scm_delivery_agent::client::{DashboardViewModel, HttpStepFetcher, SequentialRunner};
use scm_delivery_agent::logging;

/// 단계 간 지연 (원천 자동 실행의 페이싱과 동일)
const STEP_DELAY_MS: u64 = 500;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    tracing::info!("자동 실행 시작: {}", base_url);

    let fetcher = HttpStepFetcher::new(base_url);
    let runner = SequentialRunner::new(fetcher, Duration::from_millis(STEP_DELAY_MS));
    let mut vm = DashboardViewModel::new();

    let report = runner.run(&mut vm).await;

    println!("{}", render::render_stepper(&vm));
    for index in 0..STEPS.len() {
        println!("{}", render::render_step(&vm, index));
    }

    match report.failed_step {
        None => {
            tracing::info!("모든 단계 완료 ({}개)", report.completed);
            Ok(())
        }
        Some(index) => {
            tracing::error!(
                "STEP {} 실패, {}개 단계 완료 후 중단",
                STEPS[index].id,
                report.completed
            );
            std::process::exit(1);
        }
    }
}
