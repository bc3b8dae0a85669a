// ==========================================
// SCM 납기관리 AI Agent - 애플리케이션 상태
// ==========================================
// 책임: 핸들러 간 공유되는 API 인스턴스 관리.
// 데이터셋은 시작 시 1회 적재되고 이후 읽기 전용이므로
// 요청 간 잠금이 필요 없다.
// ==========================================

use std::sync::Arc;

use crate::api::StepApi;
use crate::dataset::PoDataset;

/// 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    /// 단계 API
    pub step_api: Arc<StepApi>,
}

impl AppState {
    /// 데모 데이터셋으로 상태 구성
    pub fn new() -> Self {
        Self::with_dataset(PoDataset::demo())
    }

    /// 임의 데이터셋으로 상태 구성 (테스트 포함)
    pub fn with_dataset(dataset: PoDataset) -> Self {
        let dataset = Arc::new(dataset);
        tracing::info!(records = dataset.len(), "데이터셋 적재 완료");

        Self {
            step_api: Arc::new(StepApi::new(dataset)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
