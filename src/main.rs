// ==========================================
// 조선 SCM 납기관리 AI Agent - 서버 진입점
// ==========================================
// 데모 데이터셋 적재 후 HTTP 서버를 띄운다.
// ==========================================

use anyhow::Context;

use scm_delivery_agent::app::{build_router, AppState, API_ENDPOINTS};
use scm_delivery_agent::config::ServerConfig;
use scm_delivery_agent::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", scm_delivery_agent::APP_NAME);
    tracing::info!("시스템 버전: {}", scm_delivery_agent::VERSION);
    tracing::info!("==================================================");

    let config = ServerConfig::from_env();
    let state = AppState::new();
    let router = build_router(state, &config.static_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("포트 바인드 실패: {addr}"))?;

    tracing::info!("서버 시작: http://localhost:{}", config.port);
    tracing::info!("API 엔드포인트:");
    for endpoint in API_ENDPOINTS {
        tracing::info!("   - {}", endpoint);
    }

    axum::serve(listener, router)
        .await
        .context("서버 실행 실패")?;

    Ok(())
}
